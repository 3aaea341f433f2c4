// ============================================================================
// CART VIEWMODEL - Líneas del carrito y totales
// ============================================================================

use rust_decimal::Decimal;
use crate::error::{WidgetError, WidgetResult};
use crate::models::{CartLine, MenuProduct, OrderPayload};

/// Identificador local de una línea (va en `data-line` y en el `detail` del evento remove)
pub type LineId = u32;

#[derive(Clone, Debug, PartialEq)]
pub struct CartEntry {
    pub uid: LineId,
    pub line: CartLine,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub total_number: u32,
    pub subtotal_price: Decimal,
    pub delivery_fee: Decimal,
    pub total_price: Decimal,
}

#[derive(Clone, Debug)]
pub struct CartViewModel {
    entries: Vec<CartEntry>,
    delivery_fee: Decimal,
    next_uid: LineId,
}

impl CartViewModel {
    pub fn new(delivery_fee: Decimal) -> Self {
        Self {
            entries: Vec::new(),
            delivery_fee,
            next_uid: 1,
        }
    }

    pub fn add(&mut self, product: MenuProduct) -> LineId {
        let uid = self.next_uid;
        self.next_uid += 1;
        log::info!("🛒 Añadiendo producto {} (x{})", product.id, product.amount);
        self.entries.push(CartEntry { uid, line: CartLine::from(product) });
        uid
    }

    pub fn remove(&mut self, uid: LineId) -> Option<CartEntry> {
        let index = self.entries.iter().position(|entry| entry.uid == uid)?;
        Some(self.entries.remove(index))
    }

    /// Devuelve el nuevo precio de la línea
    pub fn set_amount(&mut self, uid: LineId, amount: u32) -> Option<Decimal> {
        let entry = self.entries.iter_mut().find(|entry| entry.uid == uid)?;
        entry.line.set_amount(amount);
        Some(entry.line.price)
    }

    pub fn clear(&mut self) -> Vec<CartEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// La tarifa de envío sólo se cobra con el carrito no vacío
    pub fn totals(&self) -> CartTotals {
        let (total_number, subtotal_price) = self
            .entries
            .iter()
            .fold((0u32, Decimal::ZERO), |(number, subtotal), entry| {
                (number + entry.line.amount, subtotal + entry.line.price)
            });

        let delivery_fee = if self.is_empty() { Decimal::ZERO } else { self.delivery_fee };

        CartTotals {
            total_number,
            subtotal_price,
            delivery_fee,
            total_price: subtotal_price + delivery_fee,
        }
    }

    pub fn order_payload(&self, phone: &str, address: &str) -> WidgetResult<OrderPayload> {
        if self.is_empty() {
            return Err(WidgetError::Validation("cart is empty".to_string()));
        }
        let totals = self.totals();
        Ok(OrderPayload {
            phone: phone.trim().to_string(),
            address: address.trim().to_string(),
            total_number: totals.total_number,
            subtotal_price: totals.subtotal_price,
            total_price: totals.total_price,
            delivery_fee: totals.delivery_fee,
            products: self.entries.iter().map(|entry| entry.line.clone()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn product(id: &str, price: i64, amount: u32) -> MenuProduct {
        MenuProduct {
            id: id.to_string(),
            name: id.to_uppercase(),
            price_single: Decimal::from(price),
            amount,
            params: BTreeMap::new(),
        }
    }

    #[test]
    fn empty_cart_has_no_fee() {
        let cart = CartViewModel::new(Decimal::from(20));
        assert_eq!(cart.totals(), CartTotals::default());
    }

    #[test]
    fn totals_sum_lines_plus_fee() {
        let mut cart = CartViewModel::new(Decimal::from(20));
        cart.add(product("pizza", 20, 2));
        cart.add(product("cake", 9, 1));

        let totals = cart.totals();
        assert_eq!(totals.total_number, 3);
        assert_eq!(totals.subtotal_price, Decimal::from(49));
        assert_eq!(totals.delivery_fee, Decimal::from(20));
        assert_eq!(totals.total_price, Decimal::from(69));
    }

    #[test]
    fn remove_and_set_amount_update_totals() {
        let mut cart = CartViewModel::new(Decimal::from(20));
        let pizza = cart.add(product("pizza", 20, 1));
        let cake = cart.add(product("cake", 9, 1));

        assert_eq!(cart.set_amount(pizza, 3), Some(Decimal::from(60)));
        assert_eq!(cart.totals().subtotal_price, Decimal::from(69));

        assert!(cart.remove(cake).is_some());
        assert!(cart.remove(cake).is_none());
        assert_eq!(cart.totals().total_price, Decimal::from(80));

        cart.remove(pizza);
        assert_eq!(cart.totals().total_price, Decimal::ZERO);
    }

    #[test]
    fn uids_are_not_reused() {
        let mut cart = CartViewModel::new(Decimal::ZERO);
        let first = cart.add(product("a", 1, 1));
        cart.clear();
        let second = cart.add(product("a", 1, 1));
        assert_ne!(first, second);
    }

    #[test]
    fn order_payload_requires_products() {
        let mut cart = CartViewModel::new(Decimal::from(20));
        assert!(matches!(cart.order_payload("1", "a"), Err(WidgetError::Validation(_))));

        cart.add(product("pizza", 20, 2));
        let payload = cart.order_payload(" 600100200 ", "Main St 1").unwrap();
        assert_eq!(payload.phone, "600100200");
        assert_eq!(payload.total_number, 2);
        assert_eq!(payload.total_price, Decimal::from(60));
        assert_eq!(payload.products.len(), 1);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["totalNumber"], 2);
        assert_eq!(json["products"][0]["priceSingle"], 20.0);
    }
}
