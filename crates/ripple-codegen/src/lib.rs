//! Ripple WASM backend: memory layout planning and symbol resolution.
//!
//! # Architecture
//!
//! This crate is the generation-context subsystem of the Ripple compiler's
//! WASM backend.  The instruction emitters (textual and binary) thread a
//! [`GenerationContext`] through a single top-to-bottom traversal of the
//! compiled signal graph; the context answers three questions for them:
//!
//! - where does a persistent state field live? ([`fields`])
//! - what is the function index of a generated callee? ([`functions`])
//! - how is a math primitive lowered for this precision? ([`intrinsics`])
//!
//! Once the traversal is done, [`layout`] turns the accumulated state size
//! into the module's memory-section page count.
//!
//! ## Module memory ABI
//!
//! The generated module's linear memory follows a fixed convention the host
//! loader depends on:
//!
//! - offset 0: JSON metadata string ([`metadata`]), read by the host before
//!   the processor is initialised, then overwritten by runtime state
//! - state-field region: all persistent fields, contiguous, starting at
//!   offset 0 in internal-memory mode
//! - audio I/O region: per channel, one pointer slot followed by a sample
//!   buffer sized for the maximum frame count
//! - total memory is a whole number of 64 KiB pages, at least one

pub mod context;
pub mod error;
pub mod fields;
pub mod functions;
pub mod intrinsics;
pub mod layout;
pub mod manual;
pub mod metadata;
pub mod types;

pub use context::GenerationContext;
pub use error::{CodegenError, CodegenResult};
pub use intrinsics::{MathIntrinsic, MathIntrinsicDescriptor, Strategy};
pub use layout::{compute_required_pages, DEFAULT_MAX_FRAMES, PAGE_SIZE};
