// ============================================================================
// STATE MODULE - State Management con Rc<RefCell>
// ============================================================================

pub mod submission;
pub mod booking_state;
pub mod cart_state;

pub use booking_state::BookingState;
pub use cart_state::CartState;
