pub mod amount_widget;
pub mod availability_slider;
pub mod booking_form;
pub mod cart_panel;
pub mod cart_product;
pub mod status_message;

pub use availability_slider::render_slider_segment;
pub use booking_form::render_booking_widget;
pub use cart_panel::{format_price, render_cart_panel};
pub use cart_product::render_cart_product;
pub use status_message::show_status_message;
