use super::Error;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::io::Write;

/// A method call a plugin hands back to the launcher, either printed
/// directly or attached to a result as the action to run on selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCall {
    pub method: String,
    pub parameters: Vec<Value>,
    #[serde(
        rename = "dontHideAfterAction",
        default,
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub dont_hide_after_action: bool,
}

impl ApiCall {
    pub fn new(method: impl Into<String>, parameters: Vec<Value>) -> Self {
        ApiCall {
            method: method.into(),
            parameters,
            dont_hide_after_action: false,
        }
    }

    /// Keep the launcher window open after the action runs.
    pub fn keep_open(mut self) -> Self {
        self.dont_hide_after_action = true;
        self
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(|cause| Error::Serialize { cause })
    }

    pub fn emit(&self, out: &mut impl Write) -> Result<(), Error> {
        writeln!(out, "{}", self.to_json()?).map_err(|cause| Error::Write { cause })
    }
}

/// Calls understood by the launcher itself.
pub struct LauncherApi;

impl LauncherApi {
    pub fn change_query(query: impl Into<String>, requery: bool) -> ApiCall {
        ApiCall::new("Flow.Launcher.ChangeQuery", vec![json!(query.into()), json!(requery)])
    }

    pub fn shell_run(cmd: impl Into<String>) -> ApiCall {
        ApiCall::new("Flow.Launcher.ShellRun", vec![json!(cmd.into())])
    }

    pub fn close_app() -> ApiCall {
        ApiCall::new("Flow.Launcher.CloseApp", vec![])
    }

    pub fn hide_app() -> ApiCall {
        ApiCall::new("Flow.Launcher.HideApp", vec![])
    }

    pub fn show_app() -> ApiCall {
        ApiCall::new("Flow.Launcher.ShowApp", vec![])
    }

    pub fn show_msg(
        title: impl Into<String>,
        sub_title: impl Into<String>,
        ico_path: impl Into<String>,
    ) -> ApiCall {
        ApiCall::new(
            "Flow.Launcher.ShowMsg",
            vec![
                json!(title.into()),
                json!(sub_title.into()),
                json!(ico_path.into()),
            ],
        )
    }

    pub fn open_setting_dialog() -> ApiCall {
        ApiCall::new("Flow.Launcher.OpenSettingDialog", vec![])
    }

    pub fn start_loadingbar() -> ApiCall {
        ApiCall::new("Flow.Launcher.StartLoadingBar", vec![])
    }

    pub fn stop_loadingbar() -> ApiCall {
        ApiCall::new("Flow.Launcher.StopLoadingBar", vec![])
    }

    pub fn reload_plugins() -> ApiCall {
        ApiCall::new("Flow.Launcher.ReloadPlugins", vec![])
    }
}
