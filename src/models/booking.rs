use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use crate::utils::time::HalfHour;

pub type TableId = u32;

/// Reserva individual (`GET /booking`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingEntry {
    #[serde(default)]
    pub id: Option<u64>,
    pub date: NaiveDate,
    /// "HH:MM"; se valida al construir el mapa de ocupación
    pub hour: String,
    pub duration: f64,
    #[serde(default)]
    pub table: Option<TableId>,
    #[serde(default)]
    pub ppl: Option<u32>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Evento del restaurante (`GET /event`)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventEntry {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub hour: String,
    pub duration: f64,
    #[serde(default)]
    pub table: Option<TableId>,
    #[serde(default)]
    pub repeat: Repeat,
}

/// Campo `repeat` de un evento: `false`, `"daily"` u otro valor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawRepeat", into = "RawRepeat")]
pub enum Repeat {
    #[default]
    Never,
    Daily,
    Other(String),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawRepeat {
    Flag(bool),
    Kind(String),
    Missing(()),
}

impl From<RawRepeat> for Repeat {
    fn from(value: RawRepeat) -> Self {
        match value {
            RawRepeat::Flag(false) | RawRepeat::Missing(()) => Repeat::Never,
            RawRepeat::Flag(true) => Repeat::Other("true".to_string()),
            RawRepeat::Kind(kind) if kind == "daily" => Repeat::Daily,
            RawRepeat::Kind(kind) if kind == "false" => Repeat::Never,
            RawRepeat::Kind(kind) => Repeat::Other(kind),
        }
    }
}

impl From<Repeat> for RawRepeat {
    fn from(value: Repeat) -> Self {
        match value {
            Repeat::Never => RawRepeat::Flag(false),
            Repeat::Daily => RawRepeat::Kind("daily".to_string()),
            Repeat::Other(kind) => RawRepeat::Kind(kind),
        }
    }
}

/// Las tres colecciones que alimentan el widget de reservas
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingFeeds {
    pub bookings: Vec<BookingEntry>,
    pub events_current: Vec<EventEntry>,
    pub events_repeat: Vec<EventEntry>,
}

/// Cuerpo de `POST /booking`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingPayload {
    pub date: NaiveDate,
    pub hour: HalfHour,
    pub table: TableId,
    pub ppl: u32,
    pub duration: u32,
    pub phone: String,
    pub address: String,
}

impl From<&BookingPayload> for BookingEntry {
    fn from(payload: &BookingPayload) -> Self {
        Self {
            id: None,
            date: payload.date,
            hour: payload.hour.to_string(),
            duration: f64::from(payload.duration),
            table: Some(payload.table),
            ppl: Some(payload.ppl),
            phone: Some(payload.phone.clone()),
            address: Some(payload.address.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_booking_feed() {
        let json = r#"[
            {"id": 1, "date": "2024-05-14", "hour": "12:30", "table": 3, "duration": 4, "ppl": 3},
            {"id": 2, "date": "2024-05-14", "hour": "16:00", "table": null, "duration": 2}
        ]"#;
        let bookings: Vec<BookingEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].table, Some(3));
        assert_eq!(bookings[0].duration, 4.0);
        assert_eq!(bookings[1].table, None);
    }

    #[test]
    fn parses_repeat_variants() {
        let json = r#"[
            {"id": 1, "name": "Zumba", "date": "2024-05-14", "hour": "15:00", "table": 1, "repeat": false, "duration": 1},
            {"id": 2, "name": "Lunch", "date": "2024-05-01", "hour": "12:00", "table": 2, "repeat": "daily", "duration": 2},
            {"id": 3, "date": "2024-05-01", "hour": "18:00", "table": 2, "repeat": "weekly", "duration": 1},
            {"id": 4, "hour": "20:00", "table": 3, "duration": 1}
        ]"#;
        let events: Vec<EventEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(events[0].repeat, Repeat::Never);
        assert_eq!(events[1].repeat, Repeat::Daily);
        assert_eq!(events[2].repeat, Repeat::Other("weekly".to_string()));
        assert_eq!(events[3].repeat, Repeat::Never);
        assert_eq!(events[3].date, None);
    }

    #[test]
    fn booking_payload_serializes_clock_hour() {
        let payload = BookingPayload {
            date: NaiveDate::from_ymd_opt(2024, 5, 14).unwrap(),
            hour: HalfHour::parse("18:30").unwrap(),
            table: 2,
            ppl: 4,
            duration: 2,
            phone: "123456789".into(),
            address: "ul. Długa 1".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["date"], "2024-05-14");
        assert_eq!(value["hour"], "18:30");
        assert_eq!(value["table"], 2);

        // Fecha y hora como texto; mesa, personas y duración como enteros
        assert!(value["date"].is_string());
        assert!(value["hour"].is_string());
        for key in ["table", "ppl", "duration"] {
            assert!(value[key].is_u64(), "{} should be an integer", key);
        }
        assert!(value["phone"].is_string());
        assert!(value["address"].is_string());
        assert_eq!(value.as_object().unwrap().len(), 7);

        let entry = BookingEntry::from(&payload);
        assert_eq!(entry.hour, "18:30");
        assert_eq!(entry.duration, 2.0);
    }
}
