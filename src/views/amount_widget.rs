// ============================================================================
// AMOUNT WIDGET VIEW - Selector de cantidad (- [n] +)
// ============================================================================

use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::error::WidgetResult;

/// `extra_class` distingue el widget dentro del formulario (people-amount, hours-amount)
pub fn render_amount_widget(extra_class: &str, value: u32) -> WidgetResult<Element> {
    let class = if extra_class.is_empty() {
        "widget-amount".to_string()
    } else {
        format!("widget-amount {}", extra_class)
    };

    let less = ElementBuilder::new("a")?
        .class("btn-quantity")
        .attr("href", "#less")?
        .text("-")
        .build();

    let input = ElementBuilder::new("input")?
        .class("amount")
        .attr("type", "text")?
        .attr("name", "amount")?
        .attr("value", &value.to_string())?
        .build();

    let more = ElementBuilder::new("a")?
        .class("btn-quantity")
        .attr("href", "#more")?
        .text("+")
        .build();

    Ok(ElementBuilder::new("div")?
        .class(&class)
        .children(&[&less, &input, &more])?
        .build())
}
