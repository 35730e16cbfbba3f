//! The math-primitive catalog.
//!
//! A closed, hand-curated table mapping every math primitive the Ripple
//! language can reference (per numeric precision) to the way a call to it
//! is generated.  Source names follow the C math-library convention: an
//! `f` suffix marks the single-precision variant, `_i` the dedicated
//! integer variant, and the double minimum/maximum pair keeps its
//! historical `min_` / `max_` spelling.
//!
//! The table is an exhaustively-matched enum rather than a map populated
//! at construction time, so a missing entry is a build error instead of a
//! first-use surprise.  Descriptors are fixed for the life of the process
//! and safe to share across generation contexts.

use ripple_types::ValueType;

use crate::error::{CodegenError, CodegenResult};
use crate::types::NativeOp;

/// How a call to a math primitive is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// A single opcode of the target instruction set implements it exactly.
    Native,
    /// Delegate to a math routine supplied by the embedding host.
    HostMath,
    /// Hand-written integer routine emitted by this backend (see
    /// [`crate::manual`]); the target has no native op for it.
    ManualInt,
    /// Hand-written floating routine emitted by this backend; absent from
    /// both the native instruction set and the host math surface.
    ManualFloat,
}

/// Resolved lowering of one math primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MathIntrinsicDescriptor {
    /// Catalog key, e.g. `"sinf"`.
    pub source_name: &'static str,
    /// Name written into generated code.
    pub emitted_name: &'static str,
    pub strategy: Strategy,
    /// Only meaningful when `strategy` is [`Strategy::Native`].
    pub native_op: Option<NativeOp>,
    pub value_type: ValueType,
    /// 1 or 2.
    pub arity: u8,
}

const fn desc(
    source_name: &'static str,
    emitted_name: &'static str,
    strategy: Strategy,
    native_op: Option<NativeOp>,
    value_type: ValueType,
    arity: u8,
) -> MathIntrinsicDescriptor {
    MathIntrinsicDescriptor {
        source_name,
        emitted_name,
        strategy,
        native_op,
        value_type,
        arity,
    }
}

/// Every math primitive with a defined lowering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathIntrinsic {
    // Integer
    AbsI,
    MinI,
    MaxI,
    // Single precision
    FabsF,
    AcosF,
    AsinF,
    AtanF,
    Atan2F,
    CeilF,
    CosF,
    ExpF,
    FloorF,
    FmodF,
    LogF,
    Log10F,
    MaxF,
    MinF,
    PowF,
    RemainderF,
    RoundF,
    SinF,
    SqrtF,
    TanF,
    // Double precision
    Fabs,
    Acos,
    Asin,
    Atan,
    Atan2,
    Ceil,
    Cos,
    Exp,
    Floor,
    Fmod,
    Log,
    Log10,
    Max,
    Min,
    Pow,
    Remainder,
    Round,
    Sin,
    Sqrt,
    Tan,
}

impl MathIntrinsic {
    /// All catalog entries, integer then single then double.
    pub const ALL: [MathIntrinsic; 43] = [
        MathIntrinsic::AbsI,
        MathIntrinsic::MinI,
        MathIntrinsic::MaxI,
        MathIntrinsic::FabsF,
        MathIntrinsic::AcosF,
        MathIntrinsic::AsinF,
        MathIntrinsic::AtanF,
        MathIntrinsic::Atan2F,
        MathIntrinsic::CeilF,
        MathIntrinsic::CosF,
        MathIntrinsic::ExpF,
        MathIntrinsic::FloorF,
        MathIntrinsic::FmodF,
        MathIntrinsic::LogF,
        MathIntrinsic::Log10F,
        MathIntrinsic::MaxF,
        MathIntrinsic::MinF,
        MathIntrinsic::PowF,
        MathIntrinsic::RemainderF,
        MathIntrinsic::RoundF,
        MathIntrinsic::SinF,
        MathIntrinsic::SqrtF,
        MathIntrinsic::TanF,
        MathIntrinsic::Fabs,
        MathIntrinsic::Acos,
        MathIntrinsic::Asin,
        MathIntrinsic::Atan,
        MathIntrinsic::Atan2,
        MathIntrinsic::Ceil,
        MathIntrinsic::Cos,
        MathIntrinsic::Exp,
        MathIntrinsic::Floor,
        MathIntrinsic::Fmod,
        MathIntrinsic::Log,
        MathIntrinsic::Log10,
        MathIntrinsic::Max,
        MathIntrinsic::Min,
        MathIntrinsic::Pow,
        MathIntrinsic::Remainder,
        MathIntrinsic::Round,
        MathIntrinsic::Sin,
        MathIntrinsic::Sqrt,
        MathIntrinsic::Tan,
    ];

    /// Look up a source-level function name in the catalog.
    pub fn from_source_name(name: &str) -> Option<Self> {
        let intrinsic = match name {
            "abs" => MathIntrinsic::AbsI,
            "min_i" => MathIntrinsic::MinI,
            "max_i" => MathIntrinsic::MaxI,
            "fabsf" => MathIntrinsic::FabsF,
            "acosf" => MathIntrinsic::AcosF,
            "asinf" => MathIntrinsic::AsinF,
            "atanf" => MathIntrinsic::AtanF,
            "atan2f" => MathIntrinsic::Atan2F,
            "ceilf" => MathIntrinsic::CeilF,
            "cosf" => MathIntrinsic::CosF,
            "expf" => MathIntrinsic::ExpF,
            "floorf" => MathIntrinsic::FloorF,
            "fmodf" => MathIntrinsic::FmodF,
            "logf" => MathIntrinsic::LogF,
            "log10f" => MathIntrinsic::Log10F,
            "max_f" => MathIntrinsic::MaxF,
            "min_f" => MathIntrinsic::MinF,
            "powf" => MathIntrinsic::PowF,
            "remainderf" => MathIntrinsic::RemainderF,
            "roundf" => MathIntrinsic::RoundF,
            "sinf" => MathIntrinsic::SinF,
            "sqrtf" => MathIntrinsic::SqrtF,
            "tanf" => MathIntrinsic::TanF,
            "fabs" => MathIntrinsic::Fabs,
            "acos" => MathIntrinsic::Acos,
            "asin" => MathIntrinsic::Asin,
            "atan" => MathIntrinsic::Atan,
            "atan2" => MathIntrinsic::Atan2,
            "ceil" => MathIntrinsic::Ceil,
            "cos" => MathIntrinsic::Cos,
            "exp" => MathIntrinsic::Exp,
            "floor" => MathIntrinsic::Floor,
            "fmod" => MathIntrinsic::Fmod,
            "log" => MathIntrinsic::Log,
            "log10" => MathIntrinsic::Log10,
            "max_" => MathIntrinsic::Max,
            "min_" => MathIntrinsic::Min,
            "pow" => MathIntrinsic::Pow,
            "remainder" => MathIntrinsic::Remainder,
            "round" => MathIntrinsic::Round,
            "sin" => MathIntrinsic::Sin,
            "sqrt" => MathIntrinsic::Sqrt,
            "tan" => MathIntrinsic::Tan,
            _ => return None,
        };
        Some(intrinsic)
    }

    /// The fixed lowering of this primitive.
    pub const fn descriptor(self) -> MathIntrinsicDescriptor {
        use MathIntrinsic as I;
        use Strategy as S;
        use ValueType::{Float32, Float64, Int32};
        match self {
            // The target has no integer abs opcode and no reason to
            // hand-roll one; min/max have no native integer form at all.
            I::AbsI => desc("abs", "abs", S::HostMath, None, Int32, 1),
            I::MinI => desc("min_i", "min_i", S::ManualInt, None, Int32, 2),
            I::MaxI => desc("max_i", "max_i", S::ManualInt, None, Int32, 2),

            I::FabsF => desc("fabsf", "abs", S::Native, Some(NativeOp::F32Abs), Float32, 1),
            I::AcosF => desc("acosf", "acos", S::HostMath, None, Float32, 1),
            I::AsinF => desc("asinf", "asin", S::HostMath, None, Float32, 1),
            I::AtanF => desc("atanf", "atan", S::HostMath, None, Float32, 1),
            I::Atan2F => desc("atan2f", "atan2", S::HostMath, None, Float32, 2),
            I::CeilF => desc("ceilf", "ceil", S::Native, Some(NativeOp::F32Ceil), Float32, 1),
            I::CosF => desc("cosf", "cos", S::HostMath, None, Float32, 1),
            I::ExpF => desc("expf", "exp", S::HostMath, None, Float32, 1),
            I::FloorF => desc("floorf", "floor", S::Native, Some(NativeOp::F32Floor), Float32, 1),
            I::FmodF => desc("fmodf", "fmod", S::ManualFloat, None, Float32, 2),
            I::LogF => desc("logf", "log", S::HostMath, None, Float32, 1),
            I::Log10F => desc("log10f", "log10", S::ManualFloat, None, Float32, 1),
            I::MaxF => desc("max_f", "max", S::Native, Some(NativeOp::F32Max), Float32, 2),
            I::MinF => desc("min_f", "min", S::Native, Some(NativeOp::F32Min), Float32, 2),
            I::PowF => desc("powf", "pow", S::HostMath, None, Float32, 2),
            I::RemainderF => desc("remainderf", "remainder", S::ManualFloat, None, Float32, 2),
            I::RoundF => desc("roundf", "round", S::HostMath, None, Float32, 1),
            I::SinF => desc("sinf", "sin", S::HostMath, None, Float32, 1),
            I::SqrtF => desc("sqrtf", "sqrt", S::Native, Some(NativeOp::F32Sqrt), Float32, 1),
            I::TanF => desc("tanf", "tan", S::HostMath, None, Float32, 1),

            I::Fabs => desc("fabs", "abs", S::Native, Some(NativeOp::F64Abs), Float64, 1),
            I::Acos => desc("acos", "acos", S::HostMath, None, Float64, 1),
            I::Asin => desc("asin", "asin", S::HostMath, None, Float64, 1),
            I::Atan => desc("atan", "atan", S::HostMath, None, Float64, 1),
            I::Atan2 => desc("atan2", "atan2", S::HostMath, None, Float64, 2),
            I::Ceil => desc("ceil", "ceil", S::Native, Some(NativeOp::F64Ceil), Float64, 1),
            I::Cos => desc("cos", "cos", S::HostMath, None, Float64, 1),
            I::Exp => desc("exp", "exp", S::HostMath, None, Float64, 1),
            I::Floor => desc("floor", "floor", S::Native, Some(NativeOp::F64Floor), Float64, 1),
            I::Fmod => desc("fmod", "fmod", S::ManualFloat, None, Float64, 2),
            I::Log => desc("log", "log", S::HostMath, None, Float64, 1),
            I::Log10 => desc("log10", "log10", S::ManualFloat, None, Float64, 1),
            I::Max => desc("max_", "max", S::Native, Some(NativeOp::F64Max), Float64, 2),
            I::Min => desc("min_", "min", S::Native, Some(NativeOp::F64Min), Float64, 2),
            I::Pow => desc("pow", "pow", S::HostMath, None, Float64, 2),
            I::Remainder => desc("remainder", "remainder", S::ManualFloat, None, Float64, 2),
            I::Round => desc("round", "round", S::HostMath, None, Float64, 1),
            I::Sin => desc("sin", "sin", S::HostMath, None, Float64, 1),
            I::Sqrt => desc("sqrt", "sqrt", S::Native, Some(NativeOp::F64Sqrt), Float64, 1),
            I::Tan => desc("tan", "tan", S::HostMath, None, Float64, 1),
        }
    }
}

/// Resolve a source-level function name to its lowering.
///
/// An unknown name means the source program used a primitive with no
/// defined lowering; that is a user-facing compile failure, never a
/// silent no-op.
pub fn resolve(name: &str) -> CodegenResult<MathIntrinsicDescriptor> {
    MathIntrinsic::from_source_name(name)
        .map(MathIntrinsic::descriptor)
        .ok_or_else(|| CodegenError::UnsupportedIntrinsic(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_round_trips_through_its_source_name() {
        for intrinsic in MathIntrinsic::ALL {
            let d = intrinsic.descriptor();
            assert_eq!(
                MathIntrinsic::from_source_name(d.source_name),
                Some(intrinsic),
                "catalog key {} does not resolve back",
                d.source_name
            );
        }
    }

    #[test]
    fn native_strategy_iff_native_op() {
        for intrinsic in MathIntrinsic::ALL {
            let d = intrinsic.descriptor();
            assert_eq!(
                d.strategy == Strategy::Native,
                d.native_op.is_some(),
                "{}",
                d.source_name
            );
        }
    }

    #[test]
    fn arity_is_one_or_two() {
        for intrinsic in MathIntrinsic::ALL {
            let d = intrinsic.descriptor();
            assert!(d.arity == 1 || d.arity == 2, "{}", d.source_name);
        }
    }

    #[test]
    fn resolve_is_pure() {
        let a = resolve("atan2f").unwrap();
        let b = resolve("atan2f").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn source_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for intrinsic in MathIntrinsic::ALL {
            assert!(seen.insert(intrinsic.descriptor().source_name));
        }
        assert_eq!(seen.len(), MathIntrinsic::ALL.len());
    }

    #[test]
    fn precision_split_matches_value_types() {
        use ripple_types::ValueType;
        let ints = MathIntrinsic::ALL
            .iter()
            .filter(|i| i.descriptor().value_type == ValueType::Int32)
            .count();
        let singles = MathIntrinsic::ALL
            .iter()
            .filter(|i| i.descriptor().value_type == ValueType::Float32)
            .count();
        let doubles = MathIntrinsic::ALL
            .iter()
            .filter(|i| i.descriptor().value_type == ValueType::Float64)
            .count();
        assert_eq!((ints, singles, doubles), (3, 20, 20));
    }
}
