use std::collections::BTreeMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parámetro elegido en el menú (p. ej. "sauce" → {"tomato": "Tomato"})
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductParam {
    pub label: String,
    #[serde(default)]
    pub options: BTreeMap<String, String>,
}

/// Producto tal y como lo entrega el menú al carrito
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuProduct {
    pub id: String,
    pub name: String,
    pub price_single: Decimal,
    #[serde(default = "default_amount")]
    pub amount: u32,
    #[serde(default)]
    pub params: BTreeMap<String, ProductParam>,
}

fn default_amount() -> u32 {
    1
}

/// Línea del carrito (lo que se envía en `products` del pedido)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub amount: u32,
    pub price_single: Decimal,
    pub price: Decimal,
    #[serde(default)]
    pub params: BTreeMap<String, ProductParam>,
}

impl CartLine {
    pub fn set_amount(&mut self, amount: u32) {
        self.amount = amount;
        self.price = self.price_single * Decimal::from(amount);
    }
}

impl From<MenuProduct> for CartLine {
    fn from(product: MenuProduct) -> Self {
        let price = product.price_single * Decimal::from(product.amount);
        Self {
            id: product.id,
            name: product.name,
            amount: product.amount,
            price_single: product.price_single,
            price,
            params: product.params,
        }
    }
}

/// Cuerpo de `POST /order`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub phone: String,
    pub address: String,
    pub total_number: u32,
    pub subtotal_price: Decimal,
    pub total_price: Decimal,
    pub delivery_fee: Decimal,
    pub products: Vec<CartLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_product_from_js_object() {
        let json = r#"{
            "id": "pizza",
            "name": "Nonna Alba's Pizza",
            "priceSingle": 20,
            "amount": 2,
            "params": {
                "sauce": {"label": "Sauce", "options": {"tomato": "Tomato"}}
            }
        }"#;
        let product: MenuProduct = serde_json::from_str(json).unwrap();
        assert_eq!(product.price_single, Decimal::from(20));
        assert_eq!(product.params["sauce"].options["tomato"], "Tomato");

        let line = CartLine::from(product);
        assert_eq!(line.price, Decimal::from(40));
    }

    #[test]
    fn amount_defaults_to_one() {
        let product: MenuProduct =
            serde_json::from_str(r#"{"id": "cake", "name": "Cake", "priceSingle": 9.5}"#).unwrap();
        assert_eq!(product.amount, 1);
        assert!(product.params.is_empty());
    }

    #[test]
    fn set_amount_recomputes_price() {
        let mut line = CartLine::from(MenuProduct {
            id: "salad".into(),
            name: "Salad".into(),
            price_single: Decimal::new(95, 1),
            amount: 1,
            params: BTreeMap::new(),
        });
        line.set_amount(3);
        assert_eq!(line.price, Decimal::new(285, 1));
    }

    #[test]
    fn order_payload_sends_money_as_numbers() {
        let pizza: MenuProduct =
            serde_json::from_str(r#"{"id": "pizza", "name": "Pizza", "priceSingle": 20, "amount": 2}"#).unwrap();
        let cake: MenuProduct =
            serde_json::from_str(r#"{"id": "cake", "name": "Cake", "priceSingle": 9.5}"#).unwrap();
        assert_eq!(pizza.price_single, Decimal::from(20));
        assert_eq!(cake.price_single, Decimal::new(95, 1));

        let products = vec![CartLine::from(pizza), CartLine::from(cake)];
        let payload = OrderPayload {
            phone: "600100200".into(),
            address: "Main St 1".into(),
            total_number: 3,
            subtotal_price: Decimal::new(495, 1),
            total_price: Decimal::new(695, 1),
            delivery_fee: Decimal::from(20),
            products,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert!(value["phone"].is_string());
        assert!(value["address"].is_string());
        assert!(value["totalNumber"].is_u64());
        for key in ["subtotalPrice", "totalPrice", "deliveryFee"] {
            assert!(value[key].is_number(), "{} should be a JSON number", key);
        }
        assert_eq!(value["subtotalPrice"].as_f64(), Some(49.5));
        assert_eq!(value["totalPrice"].as_f64(), Some(69.5));
        assert_eq!(value["deliveryFee"].as_f64(), Some(20.0));

        let lines = value["products"].as_array().unwrap();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(line["priceSingle"].is_number());
            assert!(line["price"].is_number());
            assert!(line["amount"].is_u64());
            assert!(line["params"].is_object());
        }
        assert_eq!(lines[0]["price"].as_f64(), Some(40.0));
        assert_eq!(lines[1]["price"].as_f64(), Some(9.5));

        // El backend devuelve números; deben volver al mismo Decimal
        let back: OrderPayload = serde_json::from_value(value).unwrap();
        assert_eq!(back, payload);
    }
}
