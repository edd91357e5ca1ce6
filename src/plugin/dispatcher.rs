use super::{request::PluginRequest, result::PluginResult, Error};
use serde_json::{json, Value};
use std::{collections::HashMap, io::Write, rc::Rc};

pub const QUERY_METHOD: &str = "query";
pub const CONTEXT_MENU_METHOD: &str = "context_menu";

/// Methods whose return value is printed back to the launcher.
const RESULT_METHODS: [&str; 2] = [QUERY_METHOD, CONTEXT_MENU_METHOD];

pub type Handler = Box<dyn Fn(&[Value]) -> Result<Value, Error>>;

/// Base behaviour every plugin gets; both methods default to no results.
pub trait Plugin {
    fn query(&self, _query: &str) -> Result<Vec<PluginResult>, Error> {
        Ok(vec![])
    }

    fn context_menu(&self, _data: &Value) -> Result<Vec<PluginResult>, Error> {
        Ok(vec![])
    }
}

#[derive(Default)]
pub struct DispatcherBuilder {
    methods: Vec<(String, Handler)>,
}

impl DispatcherBuilder {
    pub fn method<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, Error> + 'static,
    {
        self.methods.push((name.into(), Box::new(handler)));
        self
    }

    pub fn build(self) -> Result<Dispatcher, Error> {
        let mut methods = HashMap::with_capacity(self.methods.len());

        for (name, handler) in self.methods {
            if name.trim().is_empty() {
                return Err(Error::InvalidMethodName);
            }
            if methods.contains_key(&name) {
                return Err(Error::DuplicateMethod(name));
            }
            methods.insert(name, handler);
        }

        if !methods.contains_key(QUERY_METHOD) {
            return Err(Error::MissingQueryHandler);
        }

        Ok(Dispatcher { methods })
    }
}

/// Routes a decoded request to the handler registered under its method name.
pub struct Dispatcher {
    methods: HashMap<String, Handler>,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::default()
    }

    /// Registers `query` and `context_menu` for `plugin`. Further action
    /// methods can be chained on the returned builder.
    pub fn for_plugin<P>(plugin: P) -> DispatcherBuilder
    where
        P: Plugin + 'static,
    {
        let plugin = Rc::new(plugin);
        let query_plugin = Rc::clone(&plugin);

        Dispatcher::builder()
            .method(QUERY_METHOD, move |params| {
                let query = string_param(QUERY_METHOD, params, 0)?;
                to_value(query_plugin.query(query)?)
            })
            .method(CONTEXT_MENU_METHOD, move |params| {
                let data = params.first().ok_or_else(|| Error::InvalidParameters {
                    method: CONTEXT_MENU_METHOD.to_owned(),
                    message: "expected the result context data".to_owned(),
                })?;
                to_value(plugin.context_menu(data)?)
            })
    }

    pub fn call(&self, request: &PluginRequest) -> Result<Value, Error> {
        let handler = self
            .methods
            .get(&request.method)
            .ok_or_else(|| Error::UnknownMethod(request.method.to_owned()))?;

        log::debug!("dispatching {}", request.method);
        handler(request.parameters())
    }

    /// Decodes `raw`, runs the handler and returns the line to print, if any.
    pub fn dispatch(&self, raw: &str) -> Result<Option<String>, Error> {
        let request = PluginRequest::parse(raw)?;
        let result = self.call(&request)?;

        if !RESULT_METHODS.contains(&request.method.as_str()) {
            return Ok(None);
        }

        serde_json::to_string(&json!({ "result": result }))
            .map(Some)
            .map_err(|cause| Error::Serialize { cause })
    }

    /// Process entry point: the request is the first argument after the
    /// program name.
    pub fn run<I, W>(&self, args: I, out: &mut W) -> Result<(), Error>
    where
        I: IntoIterator<Item = String>,
        W: Write,
    {
        let raw = args.into_iter().nth(1).ok_or(Error::MissingRequest)?;

        let line = match self.dispatch(&raw) {
            Ok(Some(line)) => line,
            Ok(None) => return Ok(()),
            Err(Error::Debug(message)) => format!("DEBUG:{}", message),
            Err(err) => return Err(err),
        };

        writeln!(out, "{}", line).map_err(|cause| Error::Write { cause })
    }
}

fn string_param<'a>(method: &str, params: &'a [Value], index: usize) -> Result<&'a str, Error> {
    params
        .get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::InvalidParameters {
            method: method.to_owned(),
            message: format!("expected a string at position {}", index),
        })
}

fn to_value(results: Vec<PluginResult>) -> Result<Value, Error> {
    serde_json::to_value(results).map_err(|cause| Error::Serialize { cause })
}
