//! Collects the fields of several forms into one payload.

use std::collections::BTreeMap;

use tracing::debug;
use wasm_bindgen::JsCast;

use crate::error::{UiError, UiResult};

pub type FormFieldMap = BTreeMap<String, String>;

/// Anything that can list the current `name -> value` entries of a form.
pub trait FormSource {
    fn form_fields(&self, form_id: &str) -> UiResult<Vec<(String, String)>>;
}

/// Merges forms in order; a field of a later form overwrites an earlier one.
pub fn merge_forms<F, S>(source: &F, form_ids: &[S]) -> UiResult<FormFieldMap>
where
    F: FormSource + ?Sized,
    S: AsRef<str>,
{
    let mut merged = FormFieldMap::new();
    for form_id in form_ids {
        let fields = source.form_fields(form_id.as_ref())?;
        debug!(form = form_id.as_ref(), fields = fields.len(), "merging form");
        merged.extend(fields);
    }
    Ok(merged)
}

/// Reads live `FormData` out of the document.
pub struct DocumentForms {
    document: web_sys::Document,
}

impl DocumentForms {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl FormSource for DocumentForms {
    fn form_fields(&self, form_id: &str) -> UiResult<Vec<(String, String)>> {
        let element = self
            .document
            .get_element_by_id(form_id)
            .ok_or_else(|| UiError::NotFound(form_id.to_string()))?;
        let form: web_sys::HtmlFormElement = element
            .dyn_into()
            .map_err(|_| UiError::NotAForm(form_id.to_string()))?;

        let data = web_sys::FormData::new_with_form(&form)?;
        let mut fields = Vec::new();
        for entry in data.entries() {
            let pair = js_sys::Array::from(&entry?);
            // File inputs yield Blob values; only text fields are carried over.
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.push((name, value));
            }
        }
        Ok(fields)
    }
}

#[cfg(test)]
#[path = "forms_test.rs"]
mod tests;
