// ============================================================================
// BOOKING STATE - Estado del widget de reservas
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::TableId;
use crate::state::submission::SubmissionFlag;
use crate::viewmodels::OccupancyMap;

#[derive(Clone)]
pub struct BookingState {
    pub occupancy: Rc<RefCell<OccupancyMap>>,
    pub selected_table: Rc<RefCell<Option<TableId>>>,
    pub error: Rc<RefCell<Option<String>>>,
    pub submission: SubmissionFlag,
}

impl BookingState {
    pub fn new() -> Self {
        Self {
            occupancy: Rc::new(RefCell::new(OccupancyMap::new())),
            selected_table: Rc::new(RefCell::new(None)),
            error: Rc::new(RefCell::new(None)),
            submission: SubmissionFlag::new(),
        }
    }

    /// Sustituye el mapa completo (no hay actualización incremental)
    pub fn set_occupancy(&self, occupancy: OccupancyMap) {
        *self.occupancy.borrow_mut() = occupancy;
    }

    pub fn get_selected_table(&self) -> Option<TableId> {
        *self.selected_table.borrow()
    }

    pub fn set_selected_table(&self, table: Option<TableId>) {
        *self.selected_table.borrow_mut() = table;
    }

    /// Click sobre una mesa libre: la selecciona, o la deselecciona si ya lo estaba
    pub fn toggle_table(&self, table: TableId) -> Option<TableId> {
        let mut selected = self.selected_table.borrow_mut();
        *selected = if *selected == Some(table) { None } else { Some(table) };
        *selected
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}

impl Default for BookingState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_table_keeps_single_selection() {
        let state = BookingState::new();
        assert_eq!(state.toggle_table(2), Some(2));
        assert_eq!(state.toggle_table(3), Some(3));
        assert_eq!(state.toggle_table(3), None);
        assert_eq!(state.get_selected_table(), None);
    }

    #[test]
    fn last_error_is_replaced_and_cleared() {
        let state = BookingState::new();
        assert_eq!(state.get_error(), None);
        state.set_error(Some("no table selected".into()));
        state.clone().set_error(Some("Already sending, please wait".into()));
        assert_eq!(state.get_error().as_deref(), Some("Already sending, please wait"));
        state.set_error(None);
        assert_eq!(state.get_error(), None);
    }
}
