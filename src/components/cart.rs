// ============================================================================
// CART WIDGET - Líneas, totales y envío del pedido
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use rust_decimal::Decimal;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, MouseEvent};
use crate::components::CartProduct;
use crate::config::Settings;
use crate::dom::{
    append_child, event_detail_u32, input_value, on_click, on_event, on_submit, query, query_all,
    query_input, set_text_content, toggle_class,
};
use crate::error::{WidgetError, WidgetResult};
use crate::models::MenuProduct;
use crate::services::OrderService;
use crate::state::CartState;
use crate::utils::constants::{class_names, events, select};
use crate::viewmodels::{CartTotals, LineId};
use crate::views::{format_price, render_cart_panel, render_cart_product, show_status_message};

/// Cada total se pinta en todos los elementos que cumplen su selector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TotalKey {
    TotalNumber,
    TotalPrice,
    SubtotalPrice,
    DeliveryFee,
}

impl TotalKey {
    pub const ALL: [TotalKey; 4] = [
        TotalKey::TotalNumber,
        TotalKey::TotalPrice,
        TotalKey::SubtotalPrice,
        TotalKey::DeliveryFee,
    ];

    pub fn selector(self) -> &'static str {
        match self {
            TotalKey::TotalNumber => select::cart::TOTAL_NUMBER,
            TotalKey::TotalPrice => select::cart::TOTAL_PRICE,
            TotalKey::SubtotalPrice => select::cart::SUBTOTAL_PRICE,
            TotalKey::DeliveryFee => select::cart::DELIVERY_FEE,
        }
    }

    pub fn text(self, totals: &CartTotals) -> String {
        match self {
            TotalKey::TotalNumber => totals.total_number.to_string(),
            TotalKey::TotalPrice => format_price(totals.total_price),
            TotalKey::SubtotalPrice => format_price(totals.subtotal_price),
            TotalKey::DeliveryFee => format_price(totals.delivery_fee),
        }
    }
}

#[derive(Clone)]
struct CartDom {
    wrapper: Element,
    toggle_trigger: Element,
    product_list: Element,
    form: Element,
    phone: HtmlInputElement,
    address: HtmlInputElement,
    message: Element,
    totals: Vec<(TotalKey, Vec<Element>)>,
}

#[derive(Clone)]
pub struct CartWidget {
    dom: CartDom,
    settings: Rc<Settings>,
    state: CartState,
    service: OrderService,
    products: Rc<RefCell<Vec<CartProduct>>>,
}

impl CartWidget {
    pub fn new(container: &Element, settings: Rc<Settings>) -> WidgetResult<Self> {
        let dom = Self::get_elements(container)?;
        let delivery_fee = Decimal::from(settings.cart.default_delivery_fee);

        let cart = Self {
            dom,
            state: CartState::new(delivery_fee),
            service: OrderService::new(&settings),
            settings,
            products: Rc::new(RefCell::new(Vec::new())),
        };
        cart.init_actions()?;
        cart.update();

        log::info!("🛒 Carrito listo");
        Ok(cart)
    }

    fn get_elements(container: &Element) -> WidgetResult<CartDom> {
        render_cart_panel(container)?;

        let totals = TotalKey::ALL
            .iter()
            .map(|key| Ok((*key, query_all(container, key.selector())?)))
            .collect::<WidgetResult<Vec<_>>>()?;

        Ok(CartDom {
            wrapper: container.clone(),
            toggle_trigger: query(container, select::cart::TOGGLE_TRIGGER)?,
            product_list: query(container, select::cart::PRODUCT_LIST)?,
            form: query(container, select::cart::FORM)?,
            phone: query_input(container, select::cart::PHONE)?,
            address: query_input(container, select::cart::ADDRESS)?,
            message: query(container, select::cart::MESSAGE)?,
            totals,
        })
    }

    fn init_actions(&self) -> WidgetResult<()> {
        {
            let wrapper = self.dom.wrapper.clone();
            on_click(&self.dom.toggle_trigger, move |_e: MouseEvent| {
                if let Err(e) = toggle_class(&wrapper, class_names::cart::WRAPPER_ACTIVE) {
                    log::warn!("⚠️ {}", e);
                }
            })?;
        }

        {
            let cart = self.clone();
            on_event(&self.dom.product_list, events::UPDATED, move |_| cart.update())?;
        }

        {
            let cart = self.clone();
            on_event(&self.dom.product_list, events::REMOVE, move |event| {
                match event_detail_u32(&event) {
                    Some(uid) => cart.remove(uid),
                    None => log::warn!("⚠️ Evento remove sin uid"),
                }
            })?;
        }

        {
            let cart = self.clone();
            on_submit(&self.dom.form, move || cart.send_order())?;
        }

        Ok(())
    }

    /// Añadir un producto configurado en el menú
    pub fn add(&self, product: MenuProduct) -> WidgetResult<LineId> {
        let uid = self.state.cart.borrow_mut().add(product);
        let line = self
            .state
            .cart
            .borrow()
            .entries()
            .iter()
            .find(|entry| entry.uid == uid)
            .map(|entry| entry.line.clone());

        if let Some(line) = line {
            let element = render_cart_product(uid, &line)?;
            append_child(&self.dom.product_list, &element)?;
            let product = CartProduct::new(&element, uid, self.state.clone(), &self.settings.amount_widget)?;
            self.products.borrow_mut().push(product);
        }

        self.update();
        Ok(uid)
    }

    /// Recalcula totales y los escribe en todos sus elementos
    pub fn update(&self) {
        let totals = self.state.cart.borrow().totals();
        for (key, elements) in &self.dom.totals {
            let text = key.text(&totals);
            for element in elements {
                set_text_content(element, &text);
            }
        }
    }

    pub fn remove(&self, uid: LineId) {
        self.state.cart.borrow_mut().remove(uid);

        let removed = {
            let mut products = self.products.borrow_mut();
            let index = products.iter().position(|product| product.uid() == uid);
            index.map(|index| products.remove(index))
        };
        if let Some(product) = removed {
            product.destroy();
        }

        self.update();
    }

    pub fn send_order(&self) {
        if let Err(e) = self.state.submission.begin() {
            log::warn!("⚠️ {}", e);
            self.report(Some(&e));
            return;
        }

        let payload = self
            .state
            .cart
            .borrow()
            .order_payload(&input_value(&self.dom.phone), &input_value(&self.dom.address));
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("⚠️ Pedido no enviado: {}", e);
                self.report(Some(&e));
                self.state.submission.finish();
                return;
            }
        };

        let cart = self.clone();
        spawn_local(async move {
            match cart.service.submit_order(&payload).await {
                Ok(_) => {
                    cart.report(None);
                    cart.remove_cart_after_order();
                }
                Err(e) => {
                    // El carrito se conserva para poder reintentar
                    log::error!("❌ Error enviando pedido: {}", e);
                    cart.report(Some(&e));
                }
            }
            cart.state.submission.finish();
        });
    }

    /// Guarda el último error y lo muestra junto al botón de pedido
    fn report(&self, error: Option<&WidgetError>) {
        self.state.set_error(error.map(WidgetError::user_message));
        self.show_error();
    }

    fn show_error(&self) {
        let error = self.state.get_error();
        if let Err(e) = show_status_message(&self.dom.message, error.as_deref()) {
            log::warn!("⚠️ {}", e);
        }
    }

    fn remove_cart_after_order(&self) {
        self.state.cart.borrow_mut().clear();
        let products = std::mem::take(&mut *self.products.borrow_mut());
        for product in products {
            product.destroy();
        }
        self.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_are_rendered_per_key() {
        let totals = CartTotals {
            total_number: 3,
            subtotal_price: Decimal::new(495, 1),
            delivery_fee: Decimal::from(20),
            total_price: Decimal::new(695, 1),
        };
        let texts: Vec<String> = TotalKey::ALL.iter().map(|key| key.text(&totals)).collect();
        assert_eq!(texts, vec!["3", "69.5", "49.5", "20"]);
    }
}
