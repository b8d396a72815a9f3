use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Connection parameters of a market-data or order-entry session.
///
/// The descriptor is only checked to be a JSON object. Interpreting the parameters and opening
/// the connection is the transport's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionDescriptor {
    params: Map<String, Value>,
}

impl SessionDescriptor {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    pub fn host(&self) -> Option<&str> {
        self.params.get("host").and_then(Value::as_str)
    }

    pub fn port(&self) -> Option<u16> {
        self.params
            .get("port")
            .and_then(Value::as_u64)
            .and_then(|port| u16::try_from(port).ok())
    }

    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }
}
