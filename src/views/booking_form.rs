// ============================================================================
// BOOKING FORM VIEW - Plantilla del widget de reservas
// ============================================================================

use web_sys::Element;
use crate::config::Settings;
use crate::dom::ElementBuilder;
use crate::error::WidgetResult;
use crate::views::amount_widget::render_amount_widget;
use crate::views::status_message::render_status_message;

/// Renderizar el formulario completo; el componente localiza luego cada parte por selector
pub fn render_booking_widget(settings: &Settings) -> WidgetResult<Element> {
    let default_amount = settings.amount_widget.default_value;

    // Opciones: personas y horas
    let people = ElementBuilder::new("div")?
        .class("booking-option")
        .child(&render_amount_widget("people-amount", default_amount)?)?
        .child(&ElementBuilder::new("span")?.text("people").build())?
        .build();

    let hours = ElementBuilder::new("div")?
        .class("booking-option")
        .child(&render_amount_widget("hours-amount", default_amount)?)?
        .child(&ElementBuilder::new("span")?.text("hours").build())?
        .build();

    let options = ElementBuilder::new("div")?
        .class("booking-options")
        .children(&[&people, &hours])?
        .build();

    // Fecha y hora (la franja de disponibilidad va justo encima del range)
    let date_picker = ElementBuilder::new("div")?
        .class("date-picker")
        .child(
            &ElementBuilder::new("input")?
                .attr("type", "date")?
                .attr("name", "date")?
                .build(),
        )?
        .build();

    let hour_picker = ElementBuilder::new("div")?
        .class("hour-picker range-slider")
        .child(&ElementBuilder::new("div")?.class("colored-range-slider").build())?
        .child(
            &ElementBuilder::new("input")?
                .attr("type", "range")?
                .attr("name", "hour")?
                .build(),
        )?
        .child(&ElementBuilder::new("output")?.build())?
        .build();

    let time_picker = ElementBuilder::new("div")?
        .class("time-picker")
        .children(&[&date_picker, &hour_picker])?
        .build();

    // Plano del local
    let floor_plan = ElementBuilder::new("div")?.class("floor-plan").build();
    for table_id in &settings.booking.tables {
        let table = ElementBuilder::new("div")?
            .class(&format!("table table-{}", table_id))
            .attr(&settings.booking.table_id_attribute, &table_id.to_string())?
            .text(&format!("Table {}", table_id))
            .build();
        crate::dom::append_child(&floor_plan, &table)?;
    }

    let contact = ElementBuilder::new("div")?
        .class("booking-contact")
        .child(
            &ElementBuilder::new("input")?
                .attr("type", "tel")?
                .attr("name", "phone")?
                .attr("placeholder", "Phone")?
                .attr("required", "")?
                .build(),
        )?
        .child(
            &ElementBuilder::new("input")?
                .attr("type", "text")?
                .attr("name", "address")?
                .attr("placeholder", "Address")?
                .attr("required", "")?
                .build(),
        )?
        .build();

    let submit = ElementBuilder::new("button")?
        .class("btn-secondary")
        .attr("type", "submit")?
        .text("Book table")
        .build();

    Ok(ElementBuilder::new("form")?
        .class("booking-form")
        .children(&[&options, &time_picker, &floor_plan, &contact, &render_status_message("booking-message")?, &submit])?
        .build())
}
