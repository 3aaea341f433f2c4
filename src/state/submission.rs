// ============================================================================
// SUBMISSION - Evita envíos duplicados (doble click en "enviar")
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;
use crate::error::{WidgetError, WidgetResult};

#[derive(Clone, Default)]
pub struct SubmissionFlag {
    in_flight: Rc<Cell<bool>>,
}

impl SubmissionFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marca el inicio de un envío; falla si ya hay uno en curso
    pub fn begin(&self) -> WidgetResult<()> {
        if self.in_flight.replace(true) {
            return Err(WidgetError::SubmitInFlight);
        }
        Ok(())
    }

    pub fn finish(&self) {
        self.in_flight.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submit_is_rejected_until_finished() {
        let flag = SubmissionFlag::new();
        assert!(flag.begin().is_ok());
        assert!(matches!(flag.clone().begin(), Err(WidgetError::SubmitInFlight)));

        flag.finish();
        assert!(flag.begin().is_ok());
        assert!(flag.begin().is_err());
    }
}
