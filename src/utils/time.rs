// ============================================================================
// TIME - Horas en medias horas y fechas "YYYY-MM-DD"
// ============================================================================

use std::fmt;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use crate::error::{WidgetError, WidgetResult};

/// Media hora desde medianoche (12:30 → 25).
/// Sustituye a las claves `f64` (12.5) del mapa de ocupación.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HalfHour(u16);

impl HalfHour {
    pub const fn from_index(index: u16) -> Self {
        Self(index)
    }

    pub fn index(self) -> u16 {
        self.0
    }

    /// 12.5 → 12:30. Redondea hacia abajo a la media hora.
    pub fn from_hours(hours: f64) -> Option<Self> {
        if !hours.is_finite() || hours < 0.0 || hours > f64::from(u16::MAX / 2) {
            return None;
        }
        Some(Self((hours * 2.0).floor() as u16))
    }

    pub fn as_hours(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// "12:30" → 12:30, "9:45" → 9:30, "18" → 18:00
    pub fn parse(value: &str) -> WidgetResult<Self> {
        let invalid = || WidgetError::InvalidHour(value.to_string());
        let value_trimmed = value.trim();
        let (hours, minutes) = match value_trimmed.split_once(':') {
            Some((h, m)) => (h, m),
            None => (value_trimmed, "0"),
        };

        let hours: u16 = hours.trim().parse().map_err(|_| invalid())?;
        let minutes: u16 = minutes.trim().parse().map_err(|_| invalid())?;
        if minutes >= 60 || hours > 48 {
            return Err(invalid());
        }

        Ok(Self(hours * 2 + u16::from(minutes >= 30)))
    }

    /// Todas las medias horas de `[start, start + duration)`
    pub fn span(start: HalfHour, duration_hours: f64) -> impl Iterator<Item = HalfHour> {
        let count = if duration_hours.is_finite() && duration_hours > 0.0 {
            (duration_hours * 2.0).ceil().min(f64::from(u16::MAX)) as u16
        } else {
            0
        };
        let end = start.0.saturating_add(count);
        (start.0..end).map(HalfHour)
    }

    /// Medias horas entre `open` (incluida) y `close` (excluida)
    pub fn range(open: HalfHour, close: HalfHour) -> impl Iterator<Item = HalfHour> {
        (open.0..close.0).map(HalfHour)
    }
}

impl fmt::Display for HalfHour {
    // Igual que el reloj del restaurante: 24:00 se muestra como 00:00
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", (self.0 / 2) % 24, (self.0 % 2) * 30)
    }
}

impl TryFrom<String> for HalfHour {
    type Error = WidgetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HalfHour::parse(&value)
    }
}

impl From<HalfHour> for String {
    fn from(value: HalfHour) -> Self {
        value.to_string()
    }
}

pub fn date_to_str(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date(value: &str) -> WidgetResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| WidgetError::Parse(format!("invalid date '{}': {}", value, e)))
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Días de `[min, max]`
pub fn date_range(min: NaiveDate, max: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    min.iter_days().take_while(move |date| *date <= max)
}

/// Fecha local del navegador
pub fn today() -> WidgetResult<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .ok_or_else(|| WidgetError::Parse("browser clock returned an invalid date".to_string()))
}
