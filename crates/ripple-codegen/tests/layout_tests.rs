//! Integration tests for memory-size planning.
//!
//! Tests validate:
//! - The page floor and the doubling round-up rule
//! - Monotonicity in every input
//! - Precision-derived slot widths
//! - The metadata/content `max` sharing rule

use ripple_codegen::layout::{
    compute_required_pages, compute_required_pages_for, memory_section,
};
use ripple_codegen::metadata::{ModuleMetadata, ParamMetadata};
use ripple_codegen::{DEFAULT_MAX_FRAMES, PAGE_SIZE};
use ripple_types::Precision;

// ══════════════════════════════════════════════════════════════════════════════
// Page computation
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn empty_module_still_gets_one_page() {
    assert_eq!(compute_required_pages(0, 0, 0, 4, 4, DEFAULT_MAX_FRAMES), 1);
}

#[test]
fn single_precision_stereo_scenario() {
    // 512 + 2*(4 + 8192*4) = 512 + 2*32772 = 66056 bytes; the JSON (100
    // bytes) fits inside that, and 66056 > one page → two pages.
    assert_eq!(
        compute_required_pages(512, 2, 100, 4, 4, DEFAULT_MAX_FRAMES),
        2
    );
    assert_eq!(
        compute_required_pages_for(Precision::Single, 512, 2, 100, DEFAULT_MAX_FRAMES),
        2
    );
}

#[test]
fn double_precision_doubles_the_audio_region() {
    // 2*(8 + 8192*8) = 131088 bytes → above two pages → four (doubling rule).
    assert_eq!(
        compute_required_pages_for(Precision::Double, 0, 2, 0, DEFAULT_MAX_FRAMES),
        4
    );
}

#[test]
fn quad_precision_uses_the_placeholder_width() {
    // 2*(1 + 8192*1) = 16386 bytes → one page.
    assert_eq!(
        compute_required_pages_for(Precision::Quad, 0, 2, 0, DEFAULT_MAX_FRAMES),
        1
    );
}

#[test]
fn json_and_content_share_the_region_via_max() {
    // Content alone needs one page; a huge JSON description forces two.
    assert_eq!(compute_required_pages(1024, 0, 0, 4, 4, DEFAULT_MAX_FRAMES), 1);
    assert_eq!(
        compute_required_pages(1024, 0, PAGE_SIZE + 1, 4, 4, DEFAULT_MAX_FRAMES),
        2
    );
}

#[test]
fn page_count_is_monotonic_in_each_input() {
    let base = compute_required_pages(60_000, 1, 100, 4, 4, DEFAULT_MAX_FRAMES);
    assert!(compute_required_pages(200_000, 1, 100, 4, 4, DEFAULT_MAX_FRAMES) >= base);
    assert!(compute_required_pages(60_000, 4, 100, 4, 4, DEFAULT_MAX_FRAMES) >= base);
    assert!(
        compute_required_pages(60_000, 1, 500_000, 4, 4, DEFAULT_MAX_FRAMES) >= base
    );
}

#[test]
fn max_frames_is_overridable() {
    // Shrinking the frame bound shrinks the audio region.
    assert_eq!(compute_required_pages(0, 2, 0, 4, 4, 256), 1);
    assert!(compute_required_pages(0, 2, 0, 4, 4, 65536) > 1);
}

// ══════════════════════════════════════════════════════════════════════════════
// Metadata-driven sizing
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn metadata_json_length_feeds_page_computation() {
    let mut meta = ModuleMetadata::new("reverb", 2, 2);
    for i in 0..4 {
        meta.params.push(ParamMetadata {
            name: format!("param{i}"),
            address: i * 4,
            init: 0.5,
            min: 0.0,
            max: 1.0,
        });
    }
    let pages =
        compute_required_pages_for(Precision::Single, 64, 4, meta.json_len(), DEFAULT_MAX_FRAMES);
    // 64 + 4*(4 + 8192*4) = 131152 bytes → above two pages → four.
    assert_eq!(pages, 4);
}

// ══════════════════════════════════════════════════════════════════════════════
// Memory section
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn memory_section_declares_the_computed_pages() {
    use wasmparser::{Parser as WasmParser, Payload};

    let mut module = wasm_encoder::Module::new();
    module.section(&memory_section(2));
    let bytes = module.finish();
    assert!(wasmparser::validate(&bytes).is_ok());

    let mut minimums = Vec::new();
    for payload in WasmParser::new(0).parse_all(&bytes) {
        if let Ok(Payload::MemorySection(reader)) = payload {
            for mem in reader {
                minimums.push(mem.expect("valid memory").initial);
            }
        }
    }
    assert_eq!(minimums, [2]);
}
