// ============================================================================
// EVENT HANDLING - Listeners y eventos propios de los widgets
// ============================================================================
// Los listeners se registran UNA VEZ al crear cada widget.
// - on_*: closure.forget(); el closure vive hasta que se descarga la página,
//   sólo para widgets que nunca se destruyen (reservas, carrito).
// - EventListener / ListenerGroup: el closure se guarda y se quita del nodo al
//   hacer drop (líneas del carrito, que se crean y eliminan).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, CustomEventInit, Element, Event, MouseEvent};
use crate::error::WidgetResult;

/// Listener que se desregistra al hacer drop
pub struct EventListener {
    element: Element,
    event_type: String,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(element: &Element, event_type: &str, handler: F) -> WidgetResult<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            element: element.clone(),
            event_type: event_type.to_string(),
            closure,
        })
    }

    /// Click con `preventDefault`
    pub fn click<F>(element: &Element, mut handler: F) -> WidgetResult<Self>
    where
        F: FnMut() + 'static,
    {
        Self::new(element, "click", move |event: Event| {
            event.prevent_default();
            handler();
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let removed = self
            .element
            .remove_event_listener_with_callback(&self.event_type, self.closure.as_ref().unchecked_ref());
        if let Err(e) = removed {
            log::warn!("⚠️ No se pudo quitar el listener '{}': {:?}", self.event_type, e);
        }
    }
}

/// Listeners de un componente que se elimina del DOM.
/// Los closures suelen capturar un clon del propio componente: `detach` rompe ese ciclo.
pub struct ListenerGroup<L = EventListener> {
    listeners: Rc<RefCell<Vec<L>>>,
}

impl<L> ListenerGroup<L> {
    pub fn new() -> Self {
        Self { listeners: Rc::new(RefCell::new(Vec::new())) }
    }

    pub fn push(&self, listener: L) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Suelta todos los listeners; devuelve cuántos había
    pub fn detach(&self) -> usize {
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        let count = listeners.len();
        drop(listeners);
        count
    }
}

impl<L> Clone for ListenerGroup<L> {
    fn clone(&self) -> Self {
        Self { listeners: self.listeners.clone() }
    }
}

impl<L> Default for ListenerGroup<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Listener genérico (eventos nativos o propios como "updated")
pub fn on_event<F>(element: &Element, event_type: &str, handler: F) -> WidgetResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Click; el `preventDefault` queda a cargo del handler (los links `#less`/`#more` lo necesitan)
pub fn on_click<F>(element: &Element, handler: F) -> WidgetResult<()>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub fn on_input<F>(element: &Element, handler: F) -> WidgetResult<()>
where
    F: FnMut(Event) + 'static,
{
    on_event(element, "input", handler)
}

pub fn on_change<F>(element: &Element, handler: F) -> WidgetResult<()>
where
    F: FnMut(Event) + 'static,
{
    on_event(element, "change", handler)
}

/// Submit de formulario, siempre con `preventDefault`
pub fn on_submit<F>(element: &Element, mut handler: F) -> WidgetResult<()>
where
    F: FnMut() + 'static,
{
    on_event(element, "submit", move |event: Event| {
        event.prevent_default();
        handler();
    })
}

/// Evento propio con bubbling y `detail` opcional
pub fn dispatch_custom(element: &Element, event_type: &str, detail: Option<&JsValue>) -> WidgetResult<()> {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    if let Some(detail) = detail {
        init.set_detail(detail);
    }
    let event = CustomEvent::new_with_event_init_dict(event_type, &init)?;
    element.dispatch_event(&event)?;
    Ok(())
}

/// Avisar de que el valor de un widget cambió (evento "updated" con bubbling)
pub fn dispatch_updated(element: &Element) -> WidgetResult<()> {
    dispatch_custom(element, crate::utils::constants::events::UPDATED, None)
}

/// `detail` de un CustomEvent como número
pub fn event_detail_u32(event: &Event) -> Option<u32> {
    event
        .dyn_ref::<CustomEvent>()
        .and_then(|custom| custom.detail().as_f64())
        .filter(|value| *value >= 0.0 && *value <= f64::from(u32::MAX))
        .map(|value| value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn detach_drops_every_listener_once() {
        let dropped = Rc::new(Cell::new(0));
        let group: ListenerGroup<Handle> = ListenerGroup::new();
        group.push(Handle(dropped.clone()));
        group.clone().push(Handle(dropped.clone()));
        assert_eq!(dropped.get(), 0);

        assert_eq!(group.detach(), 2);
        assert_eq!(dropped.get(), 2);

        assert_eq!(group.detach(), 0);
        assert_eq!(dropped.get(), 2);
    }
}
