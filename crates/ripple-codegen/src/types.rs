//! Native opcode identities of the target instruction set.

use wasm_encoder::Instruction;

/// Opcodes that implement a math primitive directly, with no call.
///
/// The catalog ([`crate::intrinsics`]) attaches one of these to every entry
/// whose strategy is [`crate::Strategy::Native`]; the emitters encode it as
/// a single instruction instead of a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeOp {
    F32Abs,
    F32Ceil,
    F32Floor,
    F32Max,
    F32Min,
    F32Sqrt,
    F64Abs,
    F64Ceil,
    F64Floor,
    F64Max,
    F64Min,
    F64Sqrt,
}

impl NativeOp {
    /// The wasm-encoder instruction this opcode encodes to.
    pub fn instruction(self) -> Instruction<'static> {
        match self {
            NativeOp::F32Abs => Instruction::F32Abs,
            NativeOp::F32Ceil => Instruction::F32Ceil,
            NativeOp::F32Floor => Instruction::F32Floor,
            NativeOp::F32Max => Instruction::F32Max,
            NativeOp::F32Min => Instruction::F32Min,
            NativeOp::F32Sqrt => Instruction::F32Sqrt,
            NativeOp::F64Abs => Instruction::F64Abs,
            NativeOp::F64Ceil => Instruction::F64Ceil,
            NativeOp::F64Floor => Instruction::F64Floor,
            NativeOp::F64Max => Instruction::F64Max,
            NativeOp::F64Min => Instruction::F64Min,
            NativeOp::F64Sqrt => Instruction::F64Sqrt,
        }
    }
}
