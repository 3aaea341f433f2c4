// ============================================================================
// CART STATE - Estado del widget del carrito
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use rust_decimal::Decimal;
use crate::state::submission::SubmissionFlag;
use crate::viewmodels::CartViewModel;

#[derive(Clone)]
pub struct CartState {
    pub cart: Rc<RefCell<CartViewModel>>,
    pub error: Rc<RefCell<Option<String>>>,
    pub submission: SubmissionFlag,
}

impl CartState {
    pub fn new(delivery_fee: Decimal) -> Self {
        Self {
            cart: Rc::new(RefCell::new(CartViewModel::new(delivery_fee))),
            error: Rc::new(RefCell::new(None)),
            submission: SubmissionFlag::new(),
        }
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}
