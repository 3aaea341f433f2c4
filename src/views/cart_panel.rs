// ============================================================================
// CART PANEL VIEW - Resumen, líneas, totales y formulario del pedido
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};
use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::error::WidgetResult;
use crate::views::status_message::render_status_message;

/// Precio para mostrar: máximo dos decimales y sin ceros sobrantes
pub fn format_price(price: Decimal) -> String {
    price
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

fn render_total_row(class: &str, label: &str) -> WidgetResult<Element> {
    let sum = ElementBuilder::new("span")?
        .class("cart__order-price-sum")
        .child(&ElementBuilder::new("span")?.text("$").build())?
        .child(&ElementBuilder::new("strong")?.text("0").build())?
        .build();

    Ok(ElementBuilder::new("li")?
        .class(class)
        .child(&ElementBuilder::new("span")?.class("cart__order-label").text(label).build())?
        .child(&sum)?
        .build())
}

/// Rellena `container` con el panel del carrito
pub fn render_cart_panel(container: &Element) -> WidgetResult<()> {
    container.set_inner_html("");

    let summary = ElementBuilder::new("div")?
        .class("cart__summary")
        .child(&ElementBuilder::new("span")?.class("cart__icon").text("🛒").build())?
        .child(&ElementBuilder::new("span")?.class("cart__total-number").text("0").build())?
        .child(
            &ElementBuilder::new("span")?
                .class("cart__total-price")
                .child(&ElementBuilder::new("strong")?.text("0").build())?
                .build(),
        )?
        .build();

    let product_list = ElementBuilder::new("ul")?.class("cart__order-summary").build();

    let totals = ElementBuilder::new("ul")?
        .class("cart__order-totals")
        .child(&render_total_row("cart__order-subtotal", "Subtotal")?)?
        .child(&render_total_row("cart__order-delivery", "Delivery")?)?
        .child(&render_total_row("cart__order-total", "Total")?)?
        .build();

    let form = ElementBuilder::new("form")?
        .class("cart__order")
        .child(
            &ElementBuilder::new("input")?
                .attr("type", "tel")?
                .attr("name", "phone")?
                .attr("placeholder", "Phone")?
                .attr("required", "")?
                .build(),
        )?
        .child(
            &ElementBuilder::new("input")?
                .attr("type", "text")?
                .attr("name", "address")?
                .attr("placeholder", "Address")?
                .attr("required", "")?
                .build(),
        )?
        .child(&render_status_message("cart__message")?)?
        .child(
            &ElementBuilder::new("button")?
                .class("btn-primary")
                .attr("type", "submit")?
                .text("Order")
                .build(),
        )?
        .build();

    let content = ElementBuilder::new("div")?
        .class("cart__content")
        .children(&[&product_list, &totals, &form])?
        .build();

    append_child(container, &summary)?;
    append_child(container, &content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_drop_trailing_zeros() {
        assert_eq!(format_price(Decimal::from(20)), "20");
        assert_eq!(format_price(Decimal::new(950, 2)), "9.5");
        assert_eq!(format_price(Decimal::new(12345, 3)), "12.35");
    }
}
