pub mod booking_viewmodel;
pub mod cart_viewmodel;

pub use booking_viewmodel::{Availability, BookingForm, OccupancyMap, SlotAvailability};
pub use cart_viewmodel::{CartTotals, CartViewModel, LineId};
