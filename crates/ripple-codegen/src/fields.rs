//! Sequential allocation of persistent state fields into the state region.

use std::collections::HashMap;

use ripple_types::ValueType;

use crate::error::{CodegenError, CodegenResult};

/// A named slot in the flat state region.
///
/// Never mutated after allocation; the offsets it carries are part of the
/// module's memory ABI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    /// Byte offset from the start of the state region.
    pub offset: u32,
    /// Storage size in bytes.
    pub size: u32,
    pub value_type: ValueType,
}

/// Allocates named fields at strictly increasing, non-overlapping offsets.
#[derive(Debug, Default)]
pub struct FieldSymbolTable {
    /// Descriptors in allocation order.
    fields: Vec<FieldDescriptor>,
    /// name → index into `fields`.
    by_name: HashMap<String, usize>,
    /// Running byte cursor; equals the total allocated size.
    struct_offset: u32,
}

impl FieldSymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate `size` bytes for `name`, returning the field's offset.
    ///
    /// Every field is allocated exactly once per graph traversal; a second
    /// allocation under the same name means the calling phase broke its
    /// traversal invariant and is rejected, never silently overwritten.
    pub fn allocate(&mut self, name: &str, size: u32, value_type: ValueType) -> CodegenResult<u32> {
        if self.by_name.contains_key(name) {
            return Err(CodegenError::Internal(format!(
                "state field `{name}` allocated twice"
            )));
        }
        let offset = self.struct_offset;
        self.by_name.insert(name.to_string(), self.fields.len());
        self.fields.push(FieldDescriptor {
            name: name.to_string(),
            offset,
            size,
            value_type,
        });
        self.struct_offset += size;
        Ok(offset)
    }

    /// Byte offset of `name`, or `None` if it was never allocated.
    ///
    /// Offset 0 is a legitimate allocation, so absence is an `Option`, not
    /// a sentinel offset.
    pub fn offset_of(&self, name: &str) -> Option<u32> {
        self.by_name.get(name).map(|&i| self.fields[i].offset)
    }

    /// Full descriptor of `name`, if allocated.
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.by_name.get(name).map(|&i| &self.fields[i])
    }

    /// Total allocated size of the state region in bytes.
    pub fn total_size(&self) -> u32 {
        self.struct_offset
    }

    /// Descriptors in allocation order.
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
