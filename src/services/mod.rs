pub mod api_client;
pub mod booking_service;
pub mod order_service;

pub use booking_service::BookingService;
pub use order_service::OrderService;
