use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the hosting browser environment.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        HostError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_capability() {
        assert_eq!(HostError::NoWindow.to_string(), "no global window");
        assert_eq!(
            HostError::Js("observe failed".into()).to_string(),
            "javascript error: observe failed"
        );
    }
}
