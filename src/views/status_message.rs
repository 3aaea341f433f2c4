// ============================================================================
// STATUS MESSAGE - Último error del widget, visible bajo el formulario
// ============================================================================

use web_sys::Element;
use crate::dom::{set_class, set_text_content, ElementBuilder};
use crate::error::WidgetResult;
use crate::utils::constants::class_names;

pub fn render_status_message(class: &str) -> WidgetResult<Element> {
    Ok(ElementBuilder::new("p")?
        .class(&format!("form-message {}", class))
        .attr("role", "status")?
        .attr("aria-live", "polite")?
        .build())
}

/// `None` vacía el mensaje
pub fn show_status_message(element: &Element, message: Option<&str>) -> WidgetResult<()> {
    set_text_content(element, message.unwrap_or_default());
    set_class(element, class_names::message::ERROR, message.is_some())
}
