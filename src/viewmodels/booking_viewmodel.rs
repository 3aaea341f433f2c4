// ============================================================================
// BOOKING VIEWMODEL - Mapa de ocupación de mesas por media hora
// ============================================================================
// Se reconstruye entero con cada carga de datos; no hay diff incremental
// ni detección de solapes (una mesa puede aparecer dos veces en un slot).
// ============================================================================

use std::collections::BTreeMap;
use chrono::NaiveDate;
use crate::error::{WidgetError, WidgetResult};
use crate::models::{BookingFeeds, BookingPayload, Repeat, TableId};
use crate::utils::time::{date_range, HalfHour};

/// Nivel de ocupación de un slot en la barra de disponibilidad
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Availability {
    Green,
    Orange,
    Red,
}

impl Availability {
    /// Rojo = todas las mesas ocupadas, naranja = queda una sola libre
    pub fn for_count(booked: usize, table_count: usize) -> Self {
        if table_count > 0 && booked >= table_count {
            Availability::Red
        } else if table_count > 1 && booked + 1 == table_count {
            Availability::Orange
        } else {
            Availability::Green
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotAvailability {
    pub hour: HalfHour,
    pub booked: usize,
    pub level: Availability,
}

/// fecha → media hora → mesas ocupadas
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OccupancyMap {
    booked: BTreeMap<NaiveDate, BTreeMap<HalfHour, Vec<TableId>>>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construye el mapa a partir de las tres colecciones.
    /// Los eventos `daily` se repiten en cada día de `[min_date, max_date]`.
    pub fn build(feeds: &BookingFeeds, min_date: NaiveDate, max_date: NaiveDate) -> Self {
        let mut map = Self::new();

        for item in &feeds.bookings {
            map.book_raw(item.date, &item.hour, item.duration, item.table);
        }

        for item in &feeds.events_current {
            match item.date {
                Some(date) => map.book_raw(date, &item.hour, item.duration, item.table),
                None => log::warn!("⚠️ Evento {:?} sin fecha, ignorado", item.id),
            }
        }

        for item in &feeds.events_repeat {
            if item.repeat != Repeat::Daily {
                continue;
            }
            for date in date_range(min_date, max_date) {
                map.book_raw(date, &item.hour, item.duration, item.table);
            }
        }

        log::info!(
            "📅 Ocupación construida: {} reservas, {} eventos, {} eventos repetidos",
            feeds.bookings.len(),
            feeds.events_current.len(),
            feeds.events_repeat.len()
        );

        map
    }

    fn book_raw(&mut self, date: NaiveDate, hour: &str, duration: f64, table: Option<TableId>) {
        let Some(table) = table else {
            log::warn!("⚠️ Entrada del {} a las {} sin mesa, ignorada", date, hour);
            return;
        };
        match HalfHour::parse(hour) {
            Ok(start) => self.make_booked(date, start, duration, table),
            Err(e) => log::warn!("⚠️ Entrada del {} ignorada: {}", date, e),
        }
    }

    /// Marca `table` en cada media hora de `[start, start + duration)`
    pub fn make_booked(&mut self, date: NaiveDate, start: HalfHour, duration: f64, table: TableId) {
        let day = self.booked.entry(date).or_default();
        for slot in HalfHour::span(start, duration) {
            day.entry(slot).or_default().push(table);
        }
    }

    pub fn booked_tables(&self, date: NaiveDate, hour: HalfHour) -> &[TableId] {
        self.booked
            .get(&date)
            .and_then(|day| day.get(&hour))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_booked(&self, date: NaiveDate, hour: HalfHour, table: TableId) -> bool {
        self.booked_tables(date, hour).contains(&table)
    }

    pub fn all_available(&self, date: NaiveDate, hour: HalfHour) -> bool {
        self.is_empty() || self.booked_tables(date, hour).is_empty()
    }

    /// La mesa está libre en todas las medias horas de la reserva
    pub fn is_free_for(&self, date: NaiveDate, start: HalfHour, duration: f64, table: TableId) -> bool {
        HalfHour::span(start, duration).all(|slot| !self.is_booked(date, slot, table))
    }

    /// Una entrada por media hora de `[open, close)` para la barra de colores.
    /// Cuenta mesas distintas; no modifica el mapa.
    pub fn availability(
        &self,
        date: NaiveDate,
        open: HalfHour,
        close: HalfHour,
        table_count: usize,
    ) -> Vec<SlotAvailability> {
        HalfHour::range(open, close)
            .map(|hour| {
                let mut tables = self.booked_tables(date, hour).to_vec();
                tables.sort_unstable();
                tables.dedup();
                let booked = tables.len();
                SlotAvailability {
                    hour,
                    booked,
                    level: Availability::for_count(booked, table_count),
                }
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.booked.is_empty()
    }
}

/// Lo que el usuario ha rellenado en el formulario de reserva
#[derive(Clone, Debug, PartialEq)]
pub struct BookingForm {
    pub date: NaiveDate,
    pub hour: HalfHour,
    pub table: Option<TableId>,
    pub ppl: u32,
    pub duration: u32,
    pub phone: String,
    pub address: String,
}

impl BookingForm {
    /// Exige mesa elegida y libre durante toda la duración
    pub fn into_payload(self, occupancy: &OccupancyMap) -> WidgetResult<BookingPayload> {
        let table = self
            .table
            .ok_or_else(|| WidgetError::Validation("no table selected".to_string()))?;

        if !occupancy.is_free_for(self.date, self.hour, f64::from(self.duration), table) {
            return Err(WidgetError::Validation(format!(
                "table {} is not free for {} h from {} on {}",
                table, self.duration, self.hour, self.date
            )));
        }

        Ok(BookingPayload {
            date: self.date,
            hour: self.hour,
            table,
            ppl: self.ppl,
            duration: self.duration,
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingEntry, EventEntry};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn hour(s: &str) -> HalfHour {
        HalfHour::parse(s).unwrap()
    }

    fn booking(d: u32, h: &str, duration: f64, table: TableId) -> BookingEntry {
        BookingEntry {
            id: None,
            date: date(d),
            hour: h.to_string(),
            duration,
            table: Some(table),
            ppl: None,
            phone: None,
            address: None,
        }
    }

    fn event(d: Option<u32>, h: &str, duration: f64, table: TableId, repeat: Repeat) -> EventEntry {
        EventEntry {
            id: None,
            name: None,
            date: d.map(date),
            hour: h.to_string(),
            duration,
            table: Some(table),
            repeat,
        }
    }

    #[test]
    fn make_booked_fills_half_hours() {
        let mut map = OccupancyMap::new();
        map.make_booked(date(14), hour("12:00"), 1.5, 2);

        assert!(map.is_booked(date(14), hour("12:00"), 2));
        assert!(map.is_booked(date(14), hour("12:30"), 2));
        assert!(map.is_booked(date(14), hour("13:00"), 2));
        assert!(!map.is_booked(date(14), hour("13:30"), 2));
        assert!(!map.is_booked(date(15), hour("12:00"), 2));
    }

    #[test]
    fn overlapping_bookings_are_kept() {
        let mut map = OccupancyMap::new();
        map.make_booked(date(14), hour("12:00"), 1.0, 1);
        map.make_booked(date(14), hour("12:30"), 1.0, 1);
        assert_eq!(map.booked_tables(date(14), hour("12:30")), &[1, 1]);
    }

    #[test]
    fn build_combines_three_feeds() {
        let feeds = BookingFeeds {
            bookings: vec![booking(14, "12:30", 2.0, 3)],
            events_current: vec![event(Some(15), "15:00", 1.0, 1, Repeat::Never)],
            events_repeat: vec![
                event(Some(1), "12:00", 0.5, 2, Repeat::Daily),
                event(Some(1), "20:00", 1.0, 1, Repeat::Other("weekly".into())),
            ],
        };
        let map = OccupancyMap::build(&feeds, date(13), date(16));

        assert!(map.is_booked(date(14), hour("13:30"), 3));
        assert!(map.is_booked(date(15), hour("15:30"), 1));
        for d in 13..=16 {
            assert!(map.is_booked(date(d), hour("12:00"), 2));
            assert!(!map.is_booked(date(d), hour("12:30"), 2));
            assert!(map.all_available(date(d), hour("20:00")));
        }
        assert!(map.all_available(date(17), hour("12:00")));
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let mut without_table = booking(14, "12:00", 1.0, 1);
        without_table.table = None;
        let feeds = BookingFeeds {
            bookings: vec![booking(14, "lunch", 1.0, 1), without_table],
            events_current: vec![event(None, "12:00", 1.0, 2, Repeat::Never)],
            events_repeat: vec![],
        };
        let map = OccupancyMap::build(&feeds, date(13), date(16));
        assert!(map.all_available(date(14), hour("12:00")));
    }

    #[test]
    fn no_bookings_means_everything_free() {
        let map = OccupancyMap::build(&BookingFeeds::default(), date(13), date(16));
        assert!(map.is_empty());
        let slots = map.availability(date(14), hour("12:00"), hour("24:00"), 3);
        assert_eq!(slots.len(), 24);
        assert!(slots.iter().all(|s| s.level == Availability::Green && s.booked == 0));
    }

    #[test]
    fn availability_colors_follow_table_count() {
        let mut map = OccupancyMap::new();
        map.make_booked(date(14), hour("12:00"), 1.0, 1);
        map.make_booked(date(14), hour("12:00"), 1.0, 2);
        map.make_booked(date(14), hour("12:30"), 0.5, 3);

        let slots = map.availability(date(14), hour("12:00"), hour("14:00"), 3);
        let levels: Vec<_> = slots.iter().map(|s| s.level).collect();
        assert_eq!(
            levels,
            vec![Availability::Orange, Availability::Red, Availability::Green, Availability::Green]
        );
        assert_eq!(slots[1].hour, hour("12:30"));
        assert_eq!(slots[1].booked, 3);
    }

    #[test]
    fn availability_counts_distinct_tables() {
        let mut map = OccupancyMap::new();
        map.make_booked(date(14), hour("12:00"), 0.5, 1);
        map.make_booked(date(14), hour("12:00"), 0.5, 1);
        let slots = map.availability(date(14), hour("12:00"), hour("12:30"), 3);
        assert_eq!(slots[0].booked, 1);
        assert_eq!(slots[0].level, Availability::Green);
    }

    fn form(table: Option<TableId>, h: &str, duration: u32) -> BookingForm {
        BookingForm {
            date: date(14),
            hour: hour(h),
            table,
            ppl: 2,
            duration,
            phone: " 600100200 ".into(),
            address: "Main St 1".into(),
        }
    }

    #[test]
    fn booking_form_needs_a_table() {
        let map = OccupancyMap::new();
        let err = form(None, "18:00", 2).into_payload(&map).unwrap_err();
        assert!(matches!(err, WidgetError::Validation(_)));

        let payload = form(Some(1), "18:00", 2).into_payload(&map).unwrap();
        assert_eq!(payload.table, 1);
        assert_eq!(payload.phone, "600100200");
    }

    #[test]
    fn booking_form_rejects_overlap_later_in_the_stay() {
        let mut map = OccupancyMap::new();
        map.make_booked(date(14), hour("19:00"), 1.0, 1);

        assert!(form(Some(1), "18:00", 2).into_payload(&map).is_err());
        assert!(form(Some(1), "18:00", 1).into_payload(&map).is_ok());
        assert!(form(Some(2), "18:00", 2).into_payload(&map).is_ok());
    }

    #[test]
    fn availability_levels_for_small_floors() {
        assert_eq!(Availability::for_count(0, 1), Availability::Green);
        assert_eq!(Availability::for_count(1, 1), Availability::Red);
        assert_eq!(Availability::for_count(1, 2), Availability::Orange);
        assert_eq!(Availability::for_count(5, 3), Availability::Red);
        assert_eq!(Availability::for_count(0, 0), Availability::Green);
    }
}
