//! Linear-memory size planning for a compiled module.
//!
//! The memory-header phase calls [`compute_required_pages`] exactly once,
//! after graph traversal has settled the state-region size, and declares
//! the result in the module's memory section.

use ripple_types::Precision;
use wasm_encoder::{MemorySection, MemoryType};

/// Page granularity of the target's linear memory (bytes).
pub const PAGE_SIZE: u32 = 65536;

/// Upper bound on the audio block size accepted by generated modules, in
/// samples per channel.  Part of the module ABI: the audio buffers are
/// sized for this many frames regardless of the block size the host
/// actually uses, so changing it breaks pointer offsets in existing hosts.
pub const DEFAULT_MAX_FRAMES: u32 = 8192;

/// Round `bytes` up by doubling from one page.
///
/// Returns a power-of-two multiple of [`PAGE_SIZE`], never less than one
/// page.  This reproduces the historical growth rule, which over-allocates
/// compared with plain page rounding for sizes above two pages.
pub fn pow2_page_limit(bytes: u64) -> u64 {
    let mut n = PAGE_SIZE as u64;
    while n < bytes {
        n *= 2;
    }
    n
}

/// Number of memory pages a module needs.
///
/// `content = struct_size + channels * (pointer_width + max_frames * sample_width)`,
/// then the larger of `content` and `json_len` is rounded up with
/// [`pow2_page_limit`].  The JSON metadata string and the runtime content
/// share the region starting at offset 0 (the metadata is consumed by the
/// host before the state region is considered live), so both must fit
/// independently.
///
/// Inputs come from already-validated compilation state and are not
/// re-checked here.  Result is always ≥ 1.
pub fn compute_required_pages(
    struct_size: u32,
    channels: u32,
    json_len: u32,
    pointer_width: u32,
    sample_width: u32,
    max_frames: u32,
) -> u32 {
    let content = struct_size as u64
        + channels as u64 * (pointer_width as u64 + max_frames as u64 * sample_width as u64);
    let required = (json_len as u64).max(content);
    (pow2_page_limit(required) / PAGE_SIZE as u64) as u32
}

/// [`compute_required_pages`] with slot widths taken from the precision mode.
pub fn compute_required_pages_for(
    precision: Precision,
    struct_size: u32,
    channels: u32,
    json_len: u32,
    max_frames: u32,
) -> u32 {
    compute_required_pages(
        struct_size,
        channels,
        json_len,
        precision.pointer_width(),
        precision.sample_width(),
        max_frames,
    )
}

/// Build the memory section declaring `pages` pages of linear memory.
pub fn memory_section(pages: u32) -> MemorySection {
    let mut memory = MemorySection::new();
    memory.memory(MemoryType {
        minimum: pages as u64,
        maximum: None,
        memory64: false,
        shared: false,
        page_size_log2: None,
    });
    memory
}
