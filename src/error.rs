use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("element not found: #{0}")]
    NotFound(String),
    #[error("element #{0} is not a form")]
    NotAForm(String),
    #[error("page global `{0}` is not defined")]
    MissingGlobal(&'static str),
    #[error("page global `{name}` is malformed: {source}")]
    Config {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode options: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("no browser window available")]
    NoWindow,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Js(message)
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type UiResult<T> = Result<T, UiError>;
