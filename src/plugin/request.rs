use super::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request the launcher passes to a plugin process as its first argument.
///
/// It follows JSON-RPC loosely: there is no `id` nor `jsonrpc` member, and
/// the launcher may attach its `settings` and `proxy` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginRequest {
    pub method: String,
    #[serde(default)]
    parameters: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<Value>,
}

impl PluginRequest {
    pub fn new(method: impl Into<String>, parameters: Vec<Value>) -> Self {
        PluginRequest {
            method: method.into(),
            parameters: Some(parameters),
            settings: None,
            proxy: None,
        }
    }

    pub fn parse(raw: &str) -> Result<Self, Error> {
        serde_json::from_str(raw).map_err(|cause| Error::InvalidRequest { cause })
    }

    pub fn parameters(&self) -> &[Value] {
        self.parameters.as_deref().unwrap_or_default()
    }
}
