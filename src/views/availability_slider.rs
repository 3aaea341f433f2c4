// ============================================================================
// AVAILABILITY SLIDER VIEW - Franja de colores sobre el hour picker
// ============================================================================

use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::error::WidgetResult;
use crate::utils::constants::class_names::range_slider;
use crate::viewmodels::{Availability, SlotAvailability};

pub fn availability_class(level: Availability) -> &'static str {
    match level {
        Availability::Green => range_slider::AVAILABILITY_GREEN,
        Availability::Orange => range_slider::AVAILABILITY_ORANGE,
        Availability::Red => range_slider::AVAILABILITY_RED,
    }
}

/// Un segmento por media hora
pub fn render_slider_segment(slot: &SlotAvailability) -> WidgetResult<Element> {
    let class = format!("{} {}", range_slider::SEGMENT, availability_class(slot.level));
    Ok(ElementBuilder::new("div")?
        .class(&class)
        .attr("title", &format!("{} · {}", slot.hour, slot.booked))?
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_level_has_its_class() {
        assert_eq!(availability_class(Availability::Green), "availability-green");
        assert_eq!(availability_class(Availability::Orange), "availability-orange");
        assert_eq!(availability_class(Availability::Red), "availability-red");
    }
}
