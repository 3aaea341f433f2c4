// ============================================================================
// COMPONENTS - Widgets con estado y listeners propios
// ============================================================================

pub mod amount_widget;
pub mod date_picker;
pub mod hour_picker;
pub mod booking;
pub mod cart_product;
pub mod cart;

pub use amount_widget::AmountWidget;
pub use date_picker::DatePicker;
pub use hour_picker::HourPicker;
pub use booking::BookingWidget;
pub use cart_product::CartProduct;
pub use cart::CartWidget;
