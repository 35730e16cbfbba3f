//! Module metadata written at memory offset 0.
//!
//! The host loader reads this JSON string out of linear memory before
//! initialising the processor and uses it to build its parameter UI / API.
//! The same region is then reused by the state and audio layout, which is
//! why page computation takes the larger of the JSON length and the
//! runtime content size (see [`crate::layout`]).

use serde::{Deserialize, Serialize};

/// Description of a compiled signal processor, serialized to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleMetadata {
    /// Processor name.
    pub name: String,
    /// Declared input channel count.
    pub inputs: u32,
    /// Declared output channel count.
    pub outputs: u32,
    /// User-facing parameters, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamMetadata>,
}

/// One controllable parameter of the processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamMetadata {
    pub name: String,
    /// Byte offset of the backing state field; the host writes parameter
    /// changes directly at this address.
    pub address: u32,
    pub init: f64,
    pub min: f64,
    pub max: f64,
}

impl ModuleMetadata {
    pub fn new(name: impl Into<String>, inputs: u32, outputs: u32) -> Self {
        Self {
            name: name.into(),
            inputs,
            outputs,
            params: Vec::new(),
        }
    }

    /// The JSON string written at offset 0.
    pub fn to_json(&self) -> String {
        // Serialization of this plain struct cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Byte length of the JSON string, as fed to page computation.
    pub fn json_len(&self) -> u32 {
        self.to_json().len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trips() {
        let mut meta = ModuleMetadata::new("osc", 0, 2);
        meta.params.push(ParamMetadata {
            name: "freq".to_string(),
            address: 4,
            init: 440.0,
            min: 20.0,
            max: 20000.0,
        });
        let json = meta.to_json();
        let back: ModuleMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, meta);
        assert_eq!(meta.json_len() as usize, json.len());
    }

    #[test]
    fn empty_params_are_omitted() {
        let meta = ModuleMetadata::new("gain", 1, 1);
        assert!(!meta.to_json().contains("params"));
    }
}
