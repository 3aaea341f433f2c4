// ============================================================================
// APP - Monta los widgets presentes en la página
// ============================================================================

use std::rc::Rc;
use crate::components::{BookingWidget, CartWidget};
use crate::config::Settings;
use crate::dom::get_element_by_id;
use crate::error::{WidgetError, WidgetResult};
use crate::models::MenuProduct;
use crate::viewmodels::LineId;

/// Aplicación principal
pub struct App {
    settings: Rc<Settings>,
    booking: Option<BookingWidget>,
    cart: Option<CartWidget>,
}

impl App {
    /// Cada widget se monta sólo si su contenedor existe
    pub fn new(settings: Settings) -> WidgetResult<Self> {
        let settings = Rc::new(settings);

        let booking = match get_element_by_id(&settings.containers.booking) {
            Some(container) => Some(BookingWidget::new(&container, settings.clone())?),
            None => {
                log::debug!("ℹ️ Sin #{} en la página", settings.containers.booking);
                None
            }
        };

        let cart = match get_element_by_id(&settings.containers.cart) {
            Some(container) => Some(CartWidget::new(&container, settings.clone())?),
            None => {
                log::debug!("ℹ️ Sin #{} en la página", settings.containers.cart);
                None
            }
        };

        Ok(Self { settings, booking, cart })
    }

    pub fn add_to_cart(&self, product: MenuProduct) -> WidgetResult<LineId> {
        let cart = self
            .cart
            .as_ref()
            .ok_or_else(|| WidgetError::MissingElement(format!("#{}", self.settings.containers.cart)))?;
        cart.add(product)
    }

    pub fn refresh_booking(&self) {
        match &self.booking {
            Some(booking) => booking.get_data(),
            None => log::warn!("⚠️ No hay widget de reservas montado"),
        }
    }
}
