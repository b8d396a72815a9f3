use super::{decode, Loadable};
use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;

/// Settings of the execution engine (OMS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ExecutionEngineConfig {
    #[serde(rename = "oms-id")]
    engine_id: u64,
}

impl ExecutionEngineConfig {
    pub fn new(engine_id: u64) -> Self {
        Self { engine_id }
    }

    pub fn engine_id(&self) -> u64 {
        self.engine_id
    }
}

impl Loadable for ExecutionEngineConfig {
    /// Decodes `{"oms-id": <uint>}`; other fields are ignored.
    fn from_value(doc: &Value) -> Result<Self> {
        decode("execution-engine", doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_execution_engine() {
        let config = ExecutionEngineConfig::from_value(&json!({"oms-id": 4, "trader-id": 1}));
        assert_eq!(config.unwrap(), ExecutionEngineConfig::new(4));
    }

    #[test]
    fn test_missing_oms_id() {
        assert!(ExecutionEngineConfig::from_value(&json!({})).is_err());
        assert!(ExecutionEngineConfig::from_value(&json!({"oms-id": "4"})).is_err());
    }
}
