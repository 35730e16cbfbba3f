//! Per-module generation context.
//!
//! One [`GenerationContext`] is built per compiled module and threaded
//! through the instruction emitters.  It is mutated only during the single
//! traversal of the signal graph that discovers state fields and generated
//! functions; the first layout read finalizes it, after which only lookups
//! remain valid.

use ripple_types::{Precision, ValueType};

use crate::error::{CodegenError, CodegenResult};
use crate::fields::{FieldDescriptor, FieldSymbolTable};
use crate::functions::FunctionSymbolTable;
use crate::intrinsics::{self, MathIntrinsicDescriptor};
use crate::layout;

/// Facade over the field table, function table, and math catalog, plus the
/// target-mode flags later emission phases consume.
#[derive(Debug)]
pub struct GenerationContext {
    fields: FieldSymbolTable,
    functions: FunctionSymbolTable,
    precision: Precision,
    /// When set, generated memory accesses may assume the processor's base
    /// address is 0 and skip the address computation.  Caller-supplied
    /// optimization hint.
    fast_memory: bool,
    /// Tag of the composite sub-block currently being laid out, if any.
    /// Disambiguates field names across nested processors sharing one
    /// memory region.
    sub_container: Option<u32>,
    /// Set on the first layout read; mutation is rejected afterwards.
    finalized: bool,
}

impl GenerationContext {
    /// `function_index_base` is the first locally-assignable function
    /// index under the target's import-section convention.
    pub fn new(precision: Precision, fast_memory: bool, function_index_base: u32) -> Self {
        Self {
            fields: FieldSymbolTable::new(),
            functions: FunctionSymbolTable::new(function_index_base),
            precision,
            fast_memory,
            sub_container: None,
            finalized: false,
        }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn fast_memory(&self) -> bool {
        self.fast_memory
    }

    pub fn sub_container(&self) -> Option<u32> {
        self.sub_container
    }

    pub fn set_sub_container(&mut self, tag: Option<u32>) {
        self.sub_container = tag;
    }

    // ── State fields ─────────────────────────────────────────────────────

    /// Allocate a persistent state field, returning its byte offset.
    pub fn allocate_field(
        &mut self,
        name: &str,
        size: u32,
        value_type: ValueType,
    ) -> CodegenResult<u32> {
        if self.finalized {
            return Err(CodegenError::Internal(format!(
                "state field `{name}` allocated after layout was finalized"
            )));
        }
        self.fields.allocate(name, size, value_type)
    }

    /// Offset of a field that may legitimately be absent.
    pub fn lookup_field_offset(&self, name: &str) -> Option<u32> {
        self.fields.offset_of(name)
    }

    /// Offset of a field that must already exist.
    ///
    /// A miss here means the traversal that feeds this context emitted a
    /// field access before allocating the field.
    pub fn field_offset(&self, name: &str) -> CodegenResult<u32> {
        self.fields.offset_of(name).ok_or_else(|| {
            CodegenError::Internal(format!("lookup of unregistered state field `{name}`"))
        })
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// Field descriptors in allocation order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        self.fields.descriptors()
    }

    // ── Generated functions ──────────────────────────────────────────────

    /// Register a generated function, returning its index.
    pub fn register_function(&mut self, name: &str) -> CodegenResult<u32> {
        if self.finalized {
            return Err(CodegenError::Internal(format!(
                "function `{name}` registered after layout was finalized"
            )));
        }
        Ok(self.functions.register(name))
    }

    pub fn lookup_function_index(&self, name: &str) -> Option<u32> {
        self.functions.index_of(name)
    }

    /// Index of a callee that must already be registered.
    pub fn function_index(&self, name: &str) -> CodegenResult<u32> {
        self.functions.index_of(name).ok_or_else(|| {
            CodegenError::Internal(format!("call to unregistered function `{name}`"))
        })
    }

    // ── Math primitives ──────────────────────────────────────────────────

    /// Resolve a math primitive to its lowering.
    pub fn resolve_math(&self, name: &str) -> CodegenResult<MathIntrinsicDescriptor> {
        intrinsics::resolve(name)
    }

    // ── Layout ───────────────────────────────────────────────────────────

    /// Final size of the state region in bytes.  Finalizes the context.
    pub fn struct_size(&mut self) -> u32 {
        self.finalized = true;
        self.fields.total_size()
    }

    /// Memory pages the module must declare.  Finalizes the context.
    pub fn required_pages(&mut self, channels: u32, json_len: u32, max_frames: u32) -> u32 {
        let struct_size = self.struct_size();
        layout::compute_required_pages_for(
            self.precision,
            struct_size,
            channels,
            json_len,
            max_frames,
        )
    }
}
