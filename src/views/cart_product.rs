// ============================================================================
// CART PRODUCT VIEW - Una línea del carrito
// ============================================================================

use web_sys::Element;
use crate::dom::{append_child, ElementBuilder};
use crate::error::WidgetResult;
use crate::models::CartLine;
use crate::viewmodels::LineId;
use crate::views::amount_widget::render_amount_widget;
use crate::views::cart_panel::format_price;

/// "Sauce: Tomato, Cheese"
pub fn describe_params(line: &CartLine) -> Vec<String> {
    line.params
        .values()
        .filter(|param| !param.options.is_empty())
        .map(|param| {
            let options: Vec<&str> = param.options.values().map(String::as_str).collect();
            format!("{}: {}", param.label, options.join(", "))
        })
        .collect()
}

pub fn render_cart_product(uid: LineId, line: &CartLine) -> WidgetResult<Element> {
    let name = ElementBuilder::new("div")?
        .class("cart__product-name")
        .child(&ElementBuilder::new("span")?.text(&line.name).build())?
        .build();

    let params = describe_params(line);
    if !params.is_empty() {
        let list = ElementBuilder::new("ul")?.class("cart__product-details").build();
        for param in &params {
            append_child(&list, &ElementBuilder::new("li")?.text(param).build())?;
        }
        append_child(&name, &list)?;
    }

    let price = ElementBuilder::new("div")?
        .class("cart__product-price")
        .text(&format_price(line.price))
        .build();

    let actions = ElementBuilder::new("div")?
        .class("cart__action-buttons")
        .child(&ElementBuilder::new("a")?.attr("href", "#edit")?.text("✎").build())?
        .child(&ElementBuilder::new("a")?.attr("href", "#remove")?.text("✕").build())?
        .build();

    Ok(ElementBuilder::new("li")?
        .class("cart__product")
        .attr("data-line", &uid.to_string())?
        .child(&render_amount_widget("", line.amount)?)?
        .children(&[&name, &price, &actions])?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use rust_decimal::Decimal;
    use crate::models::order::ProductParam;

    #[test]
    fn params_are_listed_with_labels() {
        let mut params = BTreeMap::new();
        params.insert(
            "sauce".to_string(),
            ProductParam {
                label: "Sauce".into(),
                options: BTreeMap::from([("cream".to_string(), "Cream".to_string())]),
            },
        );
        params.insert(
            "toppings".to_string(),
            ProductParam {
                label: "Toppings".into(),
                options: BTreeMap::from([
                    ("olives".to_string(), "Olives".to_string()),
                    ("peppers".to_string(), "Peppers".to_string()),
                ]),
            },
        );
        params.insert("crust".to_string(), ProductParam { label: "Crust".into(), options: BTreeMap::new() });

        let line = CartLine {
            id: "pizza".into(),
            name: "Pizza".into(),
            amount: 1,
            price_single: Decimal::from(20),
            price: Decimal::from(20),
            params,
        };
        assert_eq!(describe_params(&line), vec!["Sauce: Cream", "Toppings: Olives, Peppers"]);
    }
}
