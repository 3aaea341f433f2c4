// ============================================================================
// BOOKING SERVICE - Reservas y eventos del restaurante
// ============================================================================

use chrono::NaiveDate;
use crate::config::{DbConfig, Settings};
use crate::error::WidgetResult;
use crate::models::{BookingEntry, BookingFeeds, BookingPayload, Created, EventEntry};
use crate::services::api_client::ApiClient;
use crate::utils::time::date_to_str;

/// URLs de las tres colecciones para `[min_date, max_date]`
#[derive(Clone, Debug, PartialEq)]
pub struct BookingUrls {
    pub booking: String,
    pub events_current: String,
    pub events_repeat: String,
}

impl BookingUrls {
    pub fn new(db: &DbConfig, min_date: NaiveDate, max_date: NaiveDate) -> Self {
        let start_date_param = format!("{}={}", db.date_start_param_key, date_to_str(min_date));
        let end_date_param = format!("{}={}", db.date_end_param_key, date_to_str(max_date));

        let booking_params = [start_date_param.as_str(), end_date_param.as_str()];
        let events_current_params = [
            db.not_repeat_param.as_str(),
            start_date_param.as_str(),
            end_date_param.as_str(),
        ];
        // Los eventos repetidos empiezan antes del rango: sólo se filtra por el final
        let events_repeat_params = [db.repeat_param.as_str(), end_date_param.as_str()];

        Self {
            booking: format!("{}?{}", db.endpoint(&db.booking), booking_params.join("&")),
            events_current: format!("{}?{}", db.endpoint(&db.event), events_current_params.join("&")),
            events_repeat: format!("{}?{}", db.endpoint(&db.event), events_repeat_params.join("&")),
        }
    }
}

#[derive(Clone)]
pub struct BookingService {
    api: ApiClient,
    db: DbConfig,
}

impl BookingService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            api: ApiClient::new(settings.db.timeout_ms),
            db: settings.db.clone(),
        }
    }

    /// Las tres peticiones van en paralelo; si una falla, falla todo
    pub async fn fetch_feeds(&self, min_date: NaiveDate, max_date: NaiveDate) -> WidgetResult<BookingFeeds> {
        let urls = BookingUrls::new(&self.db, min_date, max_date);
        log::info!("📋 Cargando reservas {} → {}", min_date, max_date);

        let (bookings, events_current, events_repeat) = futures::try_join!(
            self.api.get_json::<Vec<BookingEntry>>(&urls.booking),
            self.api.get_json::<Vec<EventEntry>>(&urls.events_current),
            self.api.get_json::<Vec<EventEntry>>(&urls.events_repeat),
        )?;

        Ok(BookingFeeds {
            bookings,
            events_current,
            events_repeat,
        })
    }

    pub async fn submit_booking(&self, payload: &BookingPayload) -> WidgetResult<Created> {
        let url = self.db.endpoint(&self.db.booking);
        log::info!("📨 Enviando reserva: mesa {} el {} a las {}", payload.table, payload.date, payload.hour);

        let created: Created = self.api.post_json(&url, payload).await?;
        log::info!("✅ Reserva creada: {:?}", created.id);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_feed_urls() {
        let db = DbConfig { url: "http://localhost:3131".into(), ..DbConfig::default() };
        let min = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        let max = NaiveDate::from_ymd_opt(2024, 5, 28).unwrap();
        let urls = BookingUrls::new(&db, min, max);

        assert_eq!(
            urls.booking,
            "http://localhost:3131/booking?date_gte=2024-05-14&date_lte=2024-05-28"
        );
        assert_eq!(
            urls.events_current,
            "http://localhost:3131/event?repeat=false&date_gte=2024-05-14&date_lte=2024-05-28"
        );
        assert_eq!(
            urls.events_repeat,
            "http://localhost:3131/event?repeat_ne=false&date_lte=2024-05-28"
        );
    }
}
