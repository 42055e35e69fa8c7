use tracing::debug;
use wasm_bindgen::JsCast;

use crate::config::{ITEM_TYPE_ATTRIBUTE, PLANNING_FORM_ID, PLANNING_REQUEST_FIELD};
use crate::drag::pairing::{PlanningRequest, RowRef, RowStyle};
use crate::error::{UiError, UiResult};

pub fn window() -> UiResult<web_sys::Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> UiResult<web_sys::Document> {
    window()?.document().ok_or(UiError::NoWindow)
}

pub fn element_by_id(document: &web_sys::Document, id: &str) -> UiResult<web_sys::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::NotFound(id.to_string()))
}

pub fn row_ref(element: &web_sys::Element) -> RowRef {
    RowRef::parse(element.id(), element.get_attribute(ITEM_TYPE_ATTRIBUTE).as_deref())
}

pub fn apply_row_style(element: &web_sys::Element, style: RowStyle) -> UiResult<()> {
    let classes = element.class_list();
    classes.remove_1(style.remove_class())?;
    let [a, b, c] = style.add_classes();
    classes.add_3(a, b, c)?;
    Ok(())
}

/// Hands a finished pairing to the page: fills the `planning_request` field
/// when the trigger carries one, then clicks the trigger.
pub fn submit_planning(document: &web_sys::Document, request: &PlanningRequest) -> UiResult<()> {
    let trigger = element_by_id(document, PLANNING_FORM_ID)?;

    let selector = format!("[name='{PLANNING_REQUEST_FIELD}']");
    if let Some(field) = trigger.query_selector(&selector)? {
        if let Some(input) = field.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_value(&request.to_json());
        }
    }

    let trigger: web_sys::HtmlElement = trigger
        .dyn_into()
        .map_err(|_| UiError::Js(format!("#{PLANNING_FORM_ID} is not clickable")))?;
    debug!(
        transport = request.transport_id.as_deref().unwrap_or_default(),
        shipment = request.shipment_id.as_deref().unwrap_or_default(),
        "submitting planning request"
    );
    trigger.click();
    Ok(())
}
