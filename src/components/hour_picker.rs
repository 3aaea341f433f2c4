// ============================================================================
// HOUR PICKER - Range de medias horas entre apertura y cierre
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use web_sys::{Element, HtmlInputElement};
use crate::dom::{dispatch_updated, on_input, query, query_input, set_text_content};
use crate::error::{WidgetError, WidgetResult};
use crate::utils::constants::select;
use crate::utils::time::HalfHour;

/// Valor del range (en horas) acotado a la última media hora reservable
pub fn parse_slider_value(raw: &str, open: HalfHour, last: HalfHour) -> Option<HalfHour> {
    let hours: f64 = raw.trim().parse().ok()?;
    let hour = HalfHour::from_hours(hours)?;
    Some(hour.clamp(open, last))
}

#[derive(Clone)]
pub struct HourPicker {
    wrapper: Element,
    input: HtmlInputElement,
    output: Element,
    value: Rc<Cell<HalfHour>>,
    open: HalfHour,
    last: HalfHour,
}

impl HourPicker {
    /// `open`/`close` en horas; la última hora elegible es `close - 0.5`
    pub fn new(wrapper: &Element, open: f64, close: f64) -> WidgetResult<Self> {
        let invalid = || WidgetError::InvalidHour(format!("{}-{}", open, close));
        let open = HalfHour::from_hours(open).ok_or_else(invalid)?;
        let close = HalfHour::from_hours(close).ok_or_else(invalid)?;
        if close <= open {
            return Err(invalid());
        }
        let last = HalfHour::from_index(close.index() - 1);

        let input = query_input(wrapper, select::widgets::INPUT)?;
        let output = query(wrapper, select::widgets::OUTPUT)?;

        input.set_min(&open.as_hours().to_string());
        input.set_max(&last.as_hours().to_string());
        input.set_step("0.5");
        input.set_value(&open.as_hours().to_string());
        set_text_content(&output, &open.to_string());

        let picker = Self {
            wrapper: wrapper.clone(),
            input,
            output,
            value: Rc::new(Cell::new(open)),
            open,
            last,
        };
        picker.init_actions()?;
        Ok(picker)
    }

    fn init_actions(&self) -> WidgetResult<()> {
        let picker = self.clone();
        on_input(self.input.as_ref(), move |_| {
            match parse_slider_value(&picker.input.value(), picker.open, picker.last) {
                Some(hour) => picker.set_value(hour),
                None => picker.input.set_value(&picker.value().as_hours().to_string()),
            }
        })
    }

    pub fn value(&self) -> HalfHour {
        self.value.get()
    }

    pub fn set_value(&self, hour: HalfHour) {
        let changed = hour != self.value.replace(hour);
        set_text_content(&self.output, &hour.to_string());
        if changed {
            if let Err(e) = dispatch_updated(&self.wrapper) {
                log::error!("❌ No se pudo notificar el cambio de hora: {}", e);
            }
        }
    }

    pub fn wrapper(&self) -> &Element {
        &self.wrapper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(s: &str) -> HalfHour {
        HalfHour::parse(s).unwrap()
    }

    #[test]
    fn slider_values_map_to_half_hours() {
        let (open, last) = (hour("12:00"), hour("23:30"));
        assert_eq!(parse_slider_value("12", open, last), Some(hour("12:00")));
        assert_eq!(parse_slider_value("15.5", open, last), Some(hour("15:30")));
        assert_eq!(parse_slider_value("24", open, last), Some(hour("23:30")));
        assert_eq!(parse_slider_value("8", open, last), Some(hour("12:00")));
        assert_eq!(parse_slider_value("x", open, last), None);
    }
}
