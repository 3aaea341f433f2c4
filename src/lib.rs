// ============================================================================
// RESTAURANT WIDGETS - RESERVAS Y CARRITO (RUST PURO + WASM)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que construyen DOM (sin lógica)
// - Components: Widgets con listeners (AmountWidget, DatePicker, Booking, Cart...)
// - ViewModels: Ocupación, disponibilidad y totales (lógica pura, testeable)
// - Services: SOLO comunicación API
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod config;
mod error;
mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod components;
mod utils;
mod app;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::Settings;
use crate::error::{WidgetError, WidgetResult};
use crate::models::MenuProduct;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚀 Restaurant Widgets - Rust Puro + MVVM");

    let app = App::new(Settings::default())?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Producto del menú como JSON (`{id, name, priceSingle, amount, params}`)
pub fn parse_menu_product(json: &str) -> WidgetResult<MenuProduct> {
    Ok(serde_json::from_str(json)?)
}

fn with_app<T>(f: impl FnOnce(&App) -> WidgetResult<T>) -> WidgetResult<T> {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => f(app),
        None => Err(WidgetError::MissingElement("app".to_string())),
    })
}

/// Llamado por el menú al añadir un producto configurado; devuelve el uid de la línea
#[wasm_bindgen]
pub fn add_to_cart(product: JsValue) -> Result<u32, JsValue> {
    let json = js_sys::JSON::stringify(&product)?
        .as_string()
        .ok_or_else(|| WidgetError::Parse("product is not serialisable".to_string()))?;
    let product = parse_menu_product(&json)?;
    Ok(with_app(|app| app.add_to_cart(product))?)
}

/// Vuelve a descargar reservas y eventos
#[wasm_bindgen]
pub fn refresh_booking() -> Result<(), JsValue> {
    Ok(with_app(|app| {
        app.refresh_booking();
        Ok(())
    })?)
}
