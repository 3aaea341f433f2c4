// ============================================================================
// AMOUNT WIDGET - Cantidad entera acotada a [min, max]
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use web_sys::{Element, HtmlInputElement};
use crate::config::AmountWidgetConfig;
use crate::dom::{dispatch_updated, query, query_input, EventListener, ListenerGroup};
use crate::error::WidgetResult;
use crate::utils::constants::select;

/// Valor resultante de lo escrito por el usuario: si no es válido se mantiene el actual
pub fn parse_amount(raw: &str, current: u32, min: u32, max: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(value) if (min..=max).contains(&value) => value,
        _ => current,
    }
}

/// Valor inicial que trae el HTML: fuera de rango se recorta a [min, max]
pub fn initial_amount(raw: &str, default: u32, min: u32, max: u32) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(value) => value.clamp(min, max),
        Err(_) => default.clamp(min, max),
    }
}

#[derive(Clone)]
pub struct AmountWidget {
    wrapper: Element,
    input: HtmlInputElement,
    value: Rc<Cell<u32>>,
    min: u32,
    max: u32,
    listeners: ListenerGroup,
}

impl AmountWidget {
    pub fn new(wrapper: &Element, config: &AmountWidgetConfig) -> WidgetResult<Self> {
        let input = query_input(wrapper, select::widgets::AMOUNT_INPUT)?;
        let min = config.default_min;
        let max = config.default_max.max(min);
        let initial = initial_amount(&input.value(), config.default_value, min, max);

        let widget = Self {
            wrapper: wrapper.clone(),
            input,
            value: Rc::new(Cell::new(initial)),
            min,
            max,
            listeners: ListenerGroup::new(),
        };
        widget.input.set_value(&initial.to_string());
        widget.init_actions()?;
        Ok(widget)
    }

    fn init_actions(&self) -> WidgetResult<()> {
        {
            let widget = self.clone();
            self.listeners.push(EventListener::new(self.input.as_ref(), "change", move |_| {
                let raw = widget.input.value();
                widget.set_value(parse_amount(&raw, widget.value(), widget.min, widget.max));
            })?);
        }

        {
            let widget = self.clone();
            let less = query(&self.wrapper, select::widgets::LINK_DECREASE)?;
            self.listeners.push(EventListener::click(&less, move || {
                let current = widget.value();
                if current > widget.min {
                    widget.set_value(current - 1);
                }
            })?);
        }

        {
            let widget = self.clone();
            let more = query(&self.wrapper, select::widgets::LINK_INCREASE)?;
            self.listeners.push(EventListener::click(&more, move || {
                let current = widget.value();
                if current < widget.max {
                    widget.set_value(current + 1);
                }
            })?);
        }

        Ok(())
    }

    pub fn value(&self) -> u32 {
        self.value.get()
    }

    /// Actualiza el valor y avisa con "updated" sólo si cambió
    pub fn set_value(&self, value: u32) {
        let changed = value != self.value.replace(value);
        self.input.set_value(&value.to_string());
        if changed {
            if let Err(e) = dispatch_updated(&self.wrapper) {
                log::error!("❌ No se pudo notificar el cambio de cantidad: {}", e);
            }
        }
    }

    /// Quita los listeners (el widget deja de responder)
    pub fn detach(&self) {
        self.listeners.detach();
    }

    pub fn wrapper(&self) -> &Element {
        &self.wrapper
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_amounts_are_clamped_to_previous_value() {
        assert_eq!(parse_amount("3", 1, 1, 9), 3);
        assert_eq!(parse_amount(" 9 ", 1, 1, 9), 9);
        assert_eq!(parse_amount("10", 4, 1, 9), 4);
        assert_eq!(parse_amount("0", 4, 1, 9), 4);
        assert_eq!(parse_amount("-2", 4, 1, 9), 4);
        assert_eq!(parse_amount("two", 4, 1, 9), 4);
    }

    #[test]
    fn initial_amount_is_clamped_not_reset() {
        assert_eq!(initial_amount("12", 1, 1, 9), 9);
        assert_eq!(initial_amount("0", 1, 1, 9), 1);
        assert_eq!(initial_amount("4", 1, 1, 9), 4);
        assert_eq!(initial_amount("", 3, 1, 9), 3);
        assert_eq!(initial_amount("x", 12, 1, 9), 9);
    }
}
