// ============================================================================
// BOOKING WIDGET - Fecha, hora, mesa y disponibilidad
// ============================================================================
// Flujo: render → init_widgets → get_data (3 colecciones) → update_dom + init_tables
// Cada "updated" dentro del wrapper repinta mesas y franja de colores.
// ============================================================================

use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, MouseEvent};
use crate::components::{AmountWidget, DatePicker, HourPicker};
use crate::config::Settings;
use crate::dom::{
    add_class, append_child, get_attribute, has_class, input_value, on_click, on_event, on_submit,
    query, query_all, query_input, remove_class, set_class, set_inner_html,
};
use crate::error::{WidgetError, WidgetResult};
use crate::models::{BookingFeeds, TableId};
use crate::services::BookingService;
use crate::state::BookingState;
use crate::utils::constants::{class_names, events, select};
use crate::utils::time::{today, HalfHour};
use crate::viewmodels::{BookingForm, OccupancyMap};
use crate::views::{render_booking_widget, render_slider_segment, show_status_message};

/// Id numérico de la mesa; atributos no numéricos no se marcan nunca
pub fn parse_table_id(attribute: Option<&str>) -> Option<TableId> {
    attribute?.trim().parse().ok()
}

/// Referencias a los elementos de la plantilla
#[derive(Clone)]
struct BookingDom {
    wrapper: Element,
    people_amount: Element,
    hours_amount: Element,
    date_picker: Element,
    hour_picker: Element,
    tables: Vec<Element>,
    form: Element,
    phone: HtmlInputElement,
    address: HtmlInputElement,
    colored_range_slider: Element,
    message: Element,
}

#[derive(Clone)]
pub struct BookingWidget {
    dom: BookingDom,
    settings: Rc<Settings>,
    state: BookingState,
    service: BookingService,
    people_amount: AmountWidget,
    hours_amount: AmountWidget,
    date_picker: DatePicker,
    hour_picker: HourPicker,
}

impl BookingWidget {
    pub fn new(container: &Element, settings: Rc<Settings>) -> WidgetResult<Self> {
        let dom = Self::render(container, &settings)?;

        let people_amount = AmountWidget::new(&dom.people_amount, &settings.amount_widget)?;
        let hours_amount = AmountWidget::new(&dom.hours_amount, &settings.amount_widget)?;
        let date_picker = DatePicker::new(&dom.date_picker, &settings.date_picker, today()?)?;
        let hour_picker = HourPicker::new(&dom.hour_picker, settings.hours.open, settings.hours.close)?;

        let state = BookingState::new();

        let widget = Self {
            service: BookingService::new(&settings),
            dom,
            settings,
            state,
            people_amount,
            hours_amount,
            date_picker,
            hour_picker,
        };

        widget.init_widgets()?;
        widget.refresh();
        widget.get_data();

        log::info!("🍽️ Widget de reservas listo ({} mesas)", widget.dom.tables.len());
        Ok(widget)
    }

    fn render(container: &Element, settings: &Settings) -> WidgetResult<BookingDom> {
        set_inner_html(container, "");
        append_child(container, &render_booking_widget(settings)?)?;

        Ok(BookingDom {
            wrapper: container.clone(),
            people_amount: query(container, select::booking::PEOPLE_AMOUNT)?,
            hours_amount: query(container, select::booking::HOURS_AMOUNT)?,
            date_picker: query(container, select::widgets::DATE_PICKER)?,
            hour_picker: query(container, select::widgets::HOUR_PICKER)?,
            tables: query_all(container, select::booking::TABLES)?,
            form: query(container, select::booking::FORM)?,
            phone: query_input(container, select::booking::PHONE)?,
            address: query_input(container, select::booking::ADDRESS)?,
            colored_range_slider: query(container, select::booking::COLORED_RANGE_SLIDER)?,
            message: query(container, select::booking::MESSAGE)?,
        })
    }

    /// Listeners registrados una sola vez
    fn init_widgets(&self) -> WidgetResult<()> {
        // Cambiar fecha u hora invalida la mesa elegida (estos listeners van antes que el del wrapper)
        for picker in [self.date_picker.wrapper(), self.hour_picker.wrapper()] {
            let state = self.state.clone();
            on_event(picker, events::UPDATED, move |_| {
                state.set_selected_table(None);
            })?;
        }

        {
            let widget = self.clone();
            on_event(&self.dom.wrapper, events::UPDATED, move |_| widget.refresh())?;
        }

        for table in &self.dom.tables {
            let widget = self.clone();
            let table_el = table.clone();
            on_click(table, move |_e: MouseEvent| widget.on_table_click(&table_el))?;
        }

        {
            let widget = self.clone();
            on_submit(&self.dom.form, move || widget.send_booking())?;
        }

        Ok(())
    }

    fn on_table_click(&self, table: &Element) {
        let attribute = get_attribute(table, &self.settings.booking.table_id_attribute);
        let Some(table_id) = parse_table_id(attribute.as_deref()) else {
            return;
        };

        if has_class(table, class_names::booking::TABLE_BOOKED) {
            log::info!("🚫 Mesa {} ocupada a esa hora", table_id);
            return;
        }

        let selected = self.state.toggle_table(table_id);
        log::debug!("🪑 Mesa seleccionada: {:?}", selected);
        if let Err(e) = self.update_dom() {
            log::error!("❌ Error actualizando mesas: {}", e);
        }
    }

    /// Descarga las tres colecciones para la ventana del date picker
    pub fn get_data(&self) {
        let widget = self.clone();
        let min_date = self.date_picker.min_date();
        let max_date = self.date_picker.max_date();

        if let Err(e) = add_class(&self.dom.wrapper, class_names::booking::LOADING) {
            log::warn!("⚠️ {}", e);
        }

        spawn_local(async move {
            match widget.service.fetch_feeds(min_date, max_date).await {
                Ok(feeds) => {
                    widget.report(None);
                    widget.parse_data(&feeds);
                }
                Err(e) => {
                    // Sin datos todas las mesas se muestran libres
                    log::error!("❌ Error cargando reservas: {}", e);
                    widget.report(Some(&e));
                }
            }
            if let Err(e) = remove_class(&widget.dom.wrapper, class_names::booking::LOADING) {
                log::warn!("⚠️ {}", e);
            }
        });
    }

    pub fn parse_data(&self, feeds: &BookingFeeds) {
        let occupancy = OccupancyMap::build(feeds, self.date_picker.min_date(), self.date_picker.max_date());
        self.state.set_occupancy(occupancy);
        self.refresh();
    }

    /// clear_tables + update_dom + init_tables
    pub fn refresh(&self) {
        self.clear_tables();
        if let Err(e) = self.update_dom().and_then(|_| self.init_tables()) {
            log::error!("❌ Error repintando reservas: {}", e);
        }
    }

    /// Marca las mesas ocupadas para la fecha/hora elegidas
    pub fn update_dom(&self) -> WidgetResult<()> {
        let date = self.date_picker.value();
        let hour = self.hour_picker.value();
        let occupancy = self.state.occupancy.borrow();
        let all_available = occupancy.all_available(date, hour);

        for table in &self.dom.tables {
            let attribute = get_attribute(table, &self.settings.booking.table_id_attribute);
            let table_id = parse_table_id(attribute.as_deref());

            let booked = !all_available && table_id.is_some_and(|id| occupancy.is_booked(date, hour, id));
            if booked && table_id == self.state.get_selected_table() {
                self.state.set_selected_table(None);
            }
            let selected = table_id.is_some() && table_id == self.state.get_selected_table();

            set_class(table, class_names::booking::TABLE_BOOKED, booked)?;
            set_class(table, class_names::booking::TABLE_SELECTED, selected)?;
        }

        Ok(())
    }

    /// Franja de colores: un segmento por media hora del horario
    pub fn init_tables(&self) -> WidgetResult<()> {
        let open = HalfHour::from_hours(self.settings.hours.open)
            .ok_or_else(|| WidgetError::InvalidHour(self.settings.hours.open.to_string()))?;
        let close = HalfHour::from_hours(self.settings.hours.close)
            .ok_or_else(|| WidgetError::InvalidHour(self.settings.hours.close.to_string()))?;

        let slots = self.state.occupancy.borrow().availability(
            self.date_picker.value(),
            open,
            close,
            self.dom.tables.len(),
        );

        for slot in &slots {
            append_child(&self.dom.colored_range_slider, &render_slider_segment(slot)?)?;
        }
        Ok(())
    }

    pub fn clear_tables(&self) {
        set_inner_html(&self.dom.colored_range_slider, "");
    }

    /// Guarda el último error y lo muestra bajo el formulario
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

    fn booking_form(&self) -> BookingForm {
        BookingForm {
            date: self.date_picker.value(),
            hour: self.hour_picker.value(),
            table: self.state.get_selected_table(),
            ppl: self.people_amount.value(),
            duration: self.hours_amount.value(),
            phone: input_value(&self.dom.phone),
            address: input_value(&self.dom.address),
        }
    }

    pub fn send_booking(&self) {
        if let Err(e) = self.state.submission.begin() {
            log::warn!("⚠️ {}", e);
            self.report(Some(&e));
            return;
        }

        let payload = match self.booking_form().into_payload(&self.state.occupancy.borrow()) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("⚠️ Reserva no enviada: {}", e);
                self.report(Some(&e));
                self.state.submission.finish();
                return;
            }
        };

        let widget = self.clone();
        spawn_local(async move {
            match widget.service.submit_booking(&payload).await {
                Ok(_) => {
                    // La reserva pasa a ocupar la mesa sin volver a descargar todo
                    widget.state.occupancy.borrow_mut().make_booked(
                        payload.date,
                        payload.hour,
                        f64::from(payload.duration),
                        payload.table,
                    );
                    widget.state.set_selected_table(None);
                    widget.report(None);
                    widget.refresh();
                }
                Err(e) => {
                    log::error!("❌ Error enviando reserva: {}", e);
                    widget.report(Some(&e));
                }
            }
            widget.state.submission.finish();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_ids_must_be_numeric() {
        assert_eq!(parse_table_id(Some("3")), Some(3));
        assert_eq!(parse_table_id(Some(" 12 ")), Some(12));
        assert_eq!(parse_table_id(Some("bar")), None);
        assert_eq!(parse_table_id(None), None);
    }
}
