pub mod booking;
pub mod order;

pub use booking::{BookingEntry, BookingFeeds, BookingPayload, EventEntry, Repeat, TableId};
pub use order::{CartLine, MenuProduct, OrderPayload};

use serde::{Deserialize, Serialize};

/// Respuesta del backend a un POST (el recurso creado, con su id)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Created {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}
