//! Codegen error types.

use thiserror::Error;

/// Errors that can occur while building the generation context.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The source program referenced a math primitive with no defined
    /// lowering.  User-facing: reported as a compile failure naming the
    /// unresolved symbol.
    #[error("unsupported math primitive: {0}")]
    UnsupportedIntrinsic(String),

    /// An internal consistency check failed.  Indicates a defect in the
    /// calling compiler phase, never a user error; compilation must abort
    /// rather than produce a miscompiled module.
    #[error("internal codegen error: {0}")]
    Internal(String),
}

/// Codegen result type alias.
pub type CodegenResult<T> = Result<T, CodegenError>;
