// ============================================================================
// CART PRODUCT - Línea del carrito con su selector de cantidad
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::Element;
use crate::components::AmountWidget;
use crate::config::AmountWidgetConfig;
use crate::dom::{dispatch_custom, query, set_text_content, EventListener, ListenerGroup};
use crate::error::WidgetResult;
use crate::state::CartState;
use crate::utils::constants::{events, select};
use crate::viewmodels::LineId;
use crate::views::format_price;

#[derive(Clone)]
pub struct CartProduct {
    uid: LineId,
    element: Element,
    amount_widget: AmountWidget,
    price: Element,
    state: CartState,
    listeners: ListenerGroup,
}

impl CartProduct {
    pub fn new(element: &Element, uid: LineId, state: CartState, config: &AmountWidgetConfig) -> WidgetResult<Self> {
        let amount_wrapper = query(element, select::cart_product::AMOUNT_WIDGET)?;
        let amount_widget = AmountWidget::new(&amount_wrapper, config)?;
        let price = query(element, select::cart_product::PRICE)?;

        let product = Self {
            uid,
            element: element.clone(),
            amount_widget,
            price,
            state,
            listeners: ListenerGroup::new(),
        };

        // Una cantidad fuera de [min, max] queda recortada por el widget; la línea debe coincidir
        product.sync_amount();
        product.init_actions()?;
        Ok(product)
    }

    fn init_actions(&self) -> WidgetResult<()> {
        // Este listener corre antes de que "updated" llegue a la lista del carrito
        {
            let product = self.clone();
            self.listeners.push(EventListener::new(
                self.amount_widget.wrapper(),
                events::UPDATED,
                move |_| product.sync_amount(),
            )?);
        }

        {
            let amount_input = self.amount_widget.input().clone();
            let edit = query(&self.element, select::cart_product::EDIT)?;
            self.listeners.push(EventListener::click(&edit, move || {
                if let Err(err) = amount_input.focus() {
                    log::warn!("⚠️ No se pudo enfocar la cantidad: {:?}", err);
                }
            })?);
        }

        {
            let product = self.clone();
            let remove = query(&self.element, select::cart_product::REMOVE)?;
            self.listeners.push(EventListener::click(&remove, move || product.remove())?);
        }

        Ok(())
    }

    fn sync_amount(&self) {
        let amount = self.amount_widget.value();
        let price = self.state.cart.borrow_mut().set_amount(self.uid, amount);
        if let Some(price) = price {
            set_text_content(&self.price, &format_price(price));
        }
    }

    /// Pide al carrito que elimine esta línea (evento "remove" con el uid en `detail`)
    pub fn remove(&self) {
        let detail = JsValue::from(self.uid);
        if let Err(e) = dispatch_custom(&self.element, events::REMOVE, Some(&detail)) {
            log::error!("❌ No se pudo eliminar la línea {}: {}", self.uid, e);
        }
    }

    /// Quita la línea del DOM junto con todos sus listeners
    pub fn destroy(&self) {
        let released = self.listeners.detach();
        self.amount_widget.detach();
        self.element.remove();
        log::debug!("🧹 Línea {} eliminada ({} listeners)", self.uid, released);
    }

    pub fn uid(&self) -> LineId {
        self.uid
    }
}
