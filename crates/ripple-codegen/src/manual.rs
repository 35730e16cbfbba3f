//! Hand-emitted integer helper functions.
//!
//! The target instruction set has no integer min/max opcodes, so the
//! backend ships its own `min_i` / `max_i` bodies; the catalog's
//! [`crate::Strategy::ManualInt`] entries point at them.  Each builds a
//! `wasm_encoder::Function` with signature `(i32, i32) -> i32` that the
//! module assembler registers in the function and code sections.

use wasm_encoder::{Function, Instruction};

/// Emit `min_i(a: i32, b: i32) -> i32`.
pub fn emit_min_i() -> Function {
    let mut f = Function::new(vec![]);
    // select(a, b, a < b)
    f.instruction(&Instruction::LocalGet(0));
    f.instruction(&Instruction::LocalGet(1));
    f.instruction(&Instruction::LocalGet(0));
    f.instruction(&Instruction::LocalGet(1));
    f.instruction(&Instruction::I32LtS);
    f.instruction(&Instruction::Select);
    f.instruction(&Instruction::End);
    f
}

/// Emit `max_i(a: i32, b: i32) -> i32`.
pub fn emit_max_i() -> Function {
    let mut f = Function::new(vec![]);
    // select(a, b, a > b)
    f.instruction(&Instruction::LocalGet(0));
    f.instruction(&Instruction::LocalGet(1));
    f.instruction(&Instruction::LocalGet(0));
    f.instruction(&Instruction::LocalGet(1));
    f.instruction(&Instruction::I32GtS);
    f.instruction(&Instruction::Select);
    f.instruction(&Instruction::End);
    f
}
