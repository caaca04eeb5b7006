use std::collections::HashMap;

use tinyblog_core::params::ParamError;

/// A matched route parameter. Catch-all segments yield several values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

/// Route parameters handed to a loader by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContext {
    params: HashMap<String, ParamValue>,
}

impl PageContext {
    /// A context without parameters (e.g. the index page).
    pub fn new() -> Self {
        Self::default()
    }

    /// A context carrying a single `id` parameter.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self::new().with_param("id", id)
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .insert(name.into(), ParamValue::Single(value.into()));
        self
    }

    pub fn with_segments(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.params
            .insert(name.into(), ParamValue::Multiple(values));
        self
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    /// The `id` parameter, if present. Fails when it is not a single string.
    pub fn id(&self) -> Result<Option<String>, ParamError> {
        match self.param("id") {
            None => Ok(None),
            Some(ParamValue::Single(id)) => Ok(Some(id.clone())),
            Some(ParamValue::Multiple(values)) => Err(ParamError::NotASingleValue {
                name: "id",
                count: values.len(),
            }),
        }
    }
}
