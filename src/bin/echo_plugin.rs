use anyhow::Result;
use release_pr_writer::plugin::{Dispatcher, Error, LauncherApi, Plugin, PluginResult};
use serde_json::Value;

const ICON: &str = "Images/app.png";

/// Sample plugin: repeats the query and offers to put it back in the search box.
struct EchoPlugin;

impl Plugin for EchoPlugin {
    fn query(&self, query: &str) -> Result<Vec<PluginResult>, Error> {
        if query.trim().is_empty() {
            return Ok(vec![]);
        }

        Ok(vec![PluginResult::new(query)
            .sub_title("Send back to the search box")
            .ico_path(ICON)
            .context_data(Value::String(query.to_owned()))
            .action(LauncherApi::change_query(query, false))])
    }

    fn context_menu(&self, data: &Value) -> Result<Vec<PluginResult>, Error> {
        let Some(query) = data.as_str() else {
            return Ok(vec![]);
        };

        Ok(vec![PluginResult::new("Run in shell")
            .sub_title(query)
            .ico_path(ICON)
            .action(LauncherApi::shell_run(query))])
    }
}

fn main() -> Result<()> {
    let dispatcher = Dispatcher::for_plugin(EchoPlugin)
        .method("reload", |_| {
            LauncherApi::reload_plugins().emit(&mut std::io::stdout())?;
            Ok(Value::Null)
        })
        .build()?;

    dispatcher.run(std::env::args(), &mut std::io::stdout())?;

    Ok(())
}
