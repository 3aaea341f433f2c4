use chrono::Weekday;
use serde::{Deserialize, Serialize};
use crate::utils::constants::BACKEND_URL;

/// Configuración completa de los widgets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub db: DbConfig,
    pub hours: HoursConfig,
    pub amount_widget: AmountWidgetConfig,
    pub date_picker: DatePickerConfig,
    pub booking: BookingConfig,
    pub cart: CartConfig,
    pub containers: ContainersConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db: DbConfig::default(),
            hours: HoursConfig::default(),
            amount_widget: AmountWidgetConfig::default(),
            date_picker: DatePickerConfig::default(),
            booking: BookingConfig::default(),
            cart: CartConfig::default(),
            containers: ContainersConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    pub url: String,
    pub booking: String,
    pub event: String,
    pub order: String,
    pub date_start_param_key: String,
    pub date_end_param_key: String,
    pub not_repeat_param: String,
    pub repeat_param: String,
    pub timeout_ms: u32,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: BACKEND_URL.trim_end_matches('/').to_string(),
            booking: "booking".to_string(),
            event: "event".to_string(),
            order: "order".to_string(),
            date_start_param_key: "date_gte".to_string(),
            date_end_param_key: "date_lte".to_string(),
            not_repeat_param: "repeat=false".to_string(),
            repeat_param: "repeat_ne=false".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl DbConfig {
    /// `{url}/{endpoint}`
    pub fn endpoint(&self, endpoint: &str) -> String {
        format!("{}/{}", self.url, endpoint)
    }
}

/// Horario del restaurante en horas (12.0 = 12:00)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursConfig {
    pub open: f64,
    pub close: f64,
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self { open: 12.0, close: 24.0 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountWidgetConfig {
    pub default_value: u32,
    pub default_min: u32,
    pub default_max: u32,
}

impl Default for AmountWidgetConfig {
    fn default() -> Self {
        Self {
            default_value: 1,
            default_min: 1,
            default_max: 9,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatePickerConfig {
    pub max_days_in_future: i64,
    /// Días de cierre (no reservables)
    pub closed_weekdays: Vec<Weekday>,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            max_days_in_future: 14,
            closed_weekdays: vec![Weekday::Mon],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    pub table_id_attribute: String,
    pub tables: Vec<u32>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            table_id_attribute: "data-table".to_string(),
            tables: vec![1, 2, 3],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartConfig {
    pub default_delivery_fee: u32,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self { default_delivery_fee: 20 }
    }
}

/// IDs de los contenedores en la página
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainersConfig {
    pub booking: String,
    pub cart: String,
}

impl Default for ContainersConfig {
    fn default() -> Self {
        Self {
            booking: "booking-wrapper".to_string(),
            cart: "cart".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_restaurant() {
        let settings = Settings::default();
        assert_eq!(settings.hours.open, 12.0);
        assert_eq!(settings.hours.close, 24.0);
        assert_eq!(settings.booking.tables, vec![1, 2, 3]);
        assert_eq!(settings.cart.default_delivery_fee, 20);
        assert_eq!(settings.date_picker.closed_weekdays, vec![Weekday::Mon]);
        assert!(!settings.db.url.ends_with('/'));
    }

    #[test]
    fn endpoint_joins_with_slash() {
        let db = DbConfig { url: "http://api.test".into(), ..DbConfig::default() };
        assert_eq!(db.endpoint(&db.booking), "http://api.test/booking");
        assert_eq!(db.endpoint(&db.order), "http://api.test/order");
    }
}
