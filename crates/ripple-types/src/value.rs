use serde::{Deserialize, Serialize};

/// Pointer/sample slot width (bytes) used by the quad-precision tier.
///
/// Quad has no hardware representation in the WASM target; this width is a
/// placeholder until a real quad ABI is settled, so it is a named constant
/// rather than something derived from the single/double formula.
pub const QUAD_SLOT_WIDTH: u32 = 1;

/// Storage type of a signal-graph value.
///
/// A compilation's [`Precision`] decides which floating width is "the"
/// float type for that module; both widths exist here because the math
/// catalog carries entries for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Int32,
    Float32,
    Float64,
}

impl ValueType {
    /// Storage size in bytes in the state region.
    pub fn size_in_bytes(self) -> u32 {
        match self {
            ValueType::Int32 | ValueType::Float32 => 4,
            ValueType::Float64 => 8,
        }
    }
}

/// Compile-time numeric precision of a module.
///
/// Selects the floating width used for every sample and state field, and
/// therefore the pointer/sample slot widths of the audio I/O region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Single,
    Double,
    /// Reserved tier with no true hardware representation in the target.
    Quad,
}

impl Precision {
    /// Width in bytes of an audio-buffer pointer slot.
    pub fn pointer_width(self) -> u32 {
        match self {
            Precision::Single => 4,
            Precision::Double => 8,
            Precision::Quad => QUAD_SLOT_WIDTH,
        }
    }

    /// Width in bytes of one audio sample.
    pub fn sample_width(self) -> u32 {
        // Pointer slots and samples share a width in this layout.
        self.pointer_width()
    }

    /// The floating [`ValueType`] of this precision.
    ///
    /// Quad lowers to f64 for now; the target has nothing wider.
    pub fn float_type(self) -> ValueType {
        match self {
            Precision::Single => ValueType::Float32,
            Precision::Double | Precision::Quad => ValueType::Float64,
        }
    }
}
