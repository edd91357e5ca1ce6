use super::api::ApiCall;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row shown by the launcher for a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PluginResult {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sub_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ico_path: Option<String>,
    #[serde(
        rename = "JsonRPCAction",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub action: Option<ApiCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
}

impl PluginResult {
    pub fn new(title: impl Into<String>) -> Self {
        PluginResult {
            title: title.into(),
            ..PluginResult::default()
        }
    }

    pub fn sub_title(mut self, sub_title: impl Into<String>) -> Self {
        self.sub_title = sub_title.into();
        self
    }

    pub fn ico_path(mut self, ico_path: impl Into<String>) -> Self {
        self.ico_path = Some(ico_path.into());
        self
    }

    pub fn action(mut self, action: ApiCall) -> Self {
        self.action = Some(action);
        self
    }

    pub fn context_data(mut self, data: Value) -> Self {
        self.context_data = Some(data);
        self
    }

    pub fn score(mut self, score: i32) -> Self {
        self.score = Some(score);
        self
    }
}
