// ============================================================================
// DATE PICKER - Fecha de la reserva (hoy + N días, sin días de cierre)
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use chrono::{Datelike, NaiveDate, Weekday};
use web_sys::{Element, HtmlInputElement};
use crate::config::DatePickerConfig;
use crate::dom::{dispatch_updated, on_change, query_input};
use crate::error::WidgetResult;
use crate::utils::constants::select;
use crate::utils::time::{add_days, date_range, date_to_str, parse_date};

/// Fecha aceptable si está en `[min, max]` y el restaurante abre ese día
pub fn validate_date(
    raw: &str,
    min_date: NaiveDate,
    max_date: NaiveDate,
    closed: &[Weekday],
) -> Option<NaiveDate> {
    let date = parse_date(raw).ok()?;
    let in_window = date >= min_date && date <= max_date;
    (in_window && !closed.contains(&date.weekday())).then_some(date)
}

/// Primer día abierto de la ventana (o `min_date` si todos están cerrados)
pub fn first_open_day(min_date: NaiveDate, max_date: NaiveDate, closed: &[Weekday]) -> NaiveDate {
    date_range(min_date, max_date)
        .find(|date| !closed.contains(&date.weekday()))
        .unwrap_or(min_date)
}

#[derive(Clone)]
pub struct DatePicker {
    wrapper: Element,
    input: HtmlInputElement,
    value: Rc<Cell<NaiveDate>>,
    min_date: NaiveDate,
    max_date: NaiveDate,
    closed: Rc<Vec<Weekday>>,
}

impl DatePicker {
    pub fn new(wrapper: &Element, config: &DatePickerConfig, today: NaiveDate) -> WidgetResult<Self> {
        let input = query_input(wrapper, select::widgets::INPUT)?;
        let min_date = today;
        let max_date = add_days(today, config.max_days_in_future.max(0));
        let initial = first_open_day(min_date, max_date, &config.closed_weekdays);

        input.set_min(&date_to_str(min_date));
        input.set_max(&date_to_str(max_date));
        input.set_value(&date_to_str(initial));

        let picker = Self {
            wrapper: wrapper.clone(),
            input,
            value: Rc::new(Cell::new(initial)),
            min_date,
            max_date,
            closed: Rc::new(config.closed_weekdays.clone()),
        };
        picker.init_actions()?;
        Ok(picker)
    }

    fn init_actions(&self) -> WidgetResult<()> {
        let picker = self.clone();
        on_change(self.input.as_ref(), move |_| {
            let raw = picker.input.value();
            match validate_date(&raw, picker.min_date, picker.max_date, &picker.closed) {
                Some(date) => picker.set_value(date),
                None => {
                    log::warn!("⚠️ Fecha no reservable: {}", raw);
                    picker.input.set_value(&date_to_str(picker.value()));
                }
            }
        })
    }

    pub fn value(&self) -> NaiveDate {
        self.value.get()
    }

    pub fn set_value(&self, date: NaiveDate) {
        let changed = date != self.value.replace(date);
        self.input.set_value(&date_to_str(date));
        if changed {
            if let Err(e) = dispatch_updated(&self.wrapper) {
                log::error!("❌ No se pudo notificar el cambio de fecha: {}", e);
            }
        }
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    pub fn wrapper(&self) -> &Element {
        &self.wrapper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-05-13 es lunes
    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn rejects_dates_outside_window_or_closed() {
        let closed = [Weekday::Mon];
        assert_eq!(validate_date("2024-05-14", date(12), date(26), &closed), Some(date(14)));
        assert_eq!(validate_date("2024-05-13", date(12), date(26), &closed), None);
        assert_eq!(validate_date("2024-05-11", date(12), date(26), &closed), None);
        assert_eq!(validate_date("2024-05-27", date(12), date(26), &closed), None);
        assert_eq!(validate_date("", date(12), date(26), &closed), None);
    }

    #[test]
    fn first_open_day_skips_closed_days() {
        assert_eq!(first_open_day(date(13), date(27), &[Weekday::Mon]), date(14));
        assert_eq!(first_open_day(date(14), date(27), &[Weekday::Mon]), date(14));
        assert_eq!(first_open_day(date(13), date(13), &[Weekday::Mon]), date(13));
    }
}
