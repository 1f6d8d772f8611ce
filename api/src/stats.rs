//! # Client-side dashboard aggregation
//!
//! The dashboard never asks the backend to aggregate: it pulls a bounded
//! sample of formularios (see [`fetch_size`]) and counts in memory. That is
//! an explicit scalability ceiling — beyond the cap only the first records
//! in backend order are represented, and the CSV export serializes the same
//! loaded sample, never the full remote dataset.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::models::{Charla, Formulario};

/// Hard cap on how many records the dashboard will pull in one go.
pub const SAMPLE_CAP: u64 = 2000;
/// Sample size used when the dataset is larger than the cap.
pub const OVERFLOW_SAMPLE: u64 = 1000;

/// How many records to request once the total is known: everything while it
/// fits under [`SAMPLE_CAP`], a fixed slice beyond that.
pub fn fetch_size(total: u64) -> u64 {
    if total <= SAMPLE_CAP {
        total
    } else {
        OVERFLOW_SAMPLE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharlaBreakdown {
    pub virtuales: u64,
    pub presenciales: u64,
    pub ninguno: u64,
}

/// One bar of the charlas chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharlaRow {
    pub label: &'static str,
    pub count: u64,
    pub pct: u32,
}

impl CharlaBreakdown {
    pub fn total(&self) -> u64 {
        self.virtuales + self.presenciales + self.ninguno
    }

    /// Rows for the bar chart with rounded percentages. The denominator is
    /// clamped to 1 so an empty sample renders 0% bars.
    pub fn rows(&self) -> [CharlaRow; 3] {
        let total = self.total().max(1);
        let row = |label, count: u64| CharlaRow {
            label,
            count,
            pct: ((count as f64 / total as f64) * 100.0).round() as u32,
        };
        [
            row("Virtual", self.virtuales),
            row("Presencial", self.presenciales),
            row("Ninguno", self.ninguno),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: u64,
    pub this_month: u64,
    pub with_ruc: u64,
    pub with_propiedad: u64,
    pub charlas: CharlaBreakdown,
}

impl DashboardStats {
    /// Count over the loaded sample. `now` is passed in so the this-month
    /// bucket is deterministic under test.
    pub fn compute(items: &[Formulario], now: DateTime<Utc>) -> Self {
        let mut stats = DashboardStats::default();
        for item in items {
            stats.total += 1;
            if item.ruc.as_deref().is_some_and(|r| !r.is_empty()) {
                stats.with_ruc += 1;
            }
            if item.propiedad {
                stats.with_propiedad += 1;
            }
            match item.charlas {
                Charla::Virtual => stats.charlas.virtuales += 1,
                Charla::Presencial => stats.charlas.presenciales += 1,
                Charla::Ninguno => stats.charlas.ninguno += 1,
            }
            if let Some(created) = item.created_at.as_deref().and_then(parse_timestamp) {
                if created.year() == now.year() && created.month() == now.month() {
                    stats.this_month += 1;
                }
            }
        }
        stats
    }
}

/// The `n` most recent submissions, newest first. Records without a
/// parseable timestamp sort last.
pub fn latest(items: &[Formulario], n: usize) -> Vec<Formulario> {
    let mut sorted: Vec<Formulario> = items.to_vec();
    sorted.sort_by_key(|f| {
        std::cmp::Reverse(
            f.created_at
                .as_deref()
                .and_then(parse_timestamp)
                .map(|d| d.and_utc().timestamp())
                .unwrap_or(i64::MIN),
        )
    });
    sorted.truncate(n);
    sorted
}

/// Lenient timestamp parsing: the backend emits RFC 3339, older rows use
/// the plain SQL format, and seeded data is sometimes date-only.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn formulario(charlas: Charla, ruc: Option<&str>, created_at: Option<&str>) -> Formulario {
        Formulario {
            id: None,
            user_id: None,
            session_id: None,
            nombres_apellidos: "Juan Pérez".into(),
            dni: "12345678".into(),
            ruc: ruc.map(String::from),
            celular: "999888777".into(),
            direccion: "Av. Lima 123".into(),
            asociacion: None,
            propiedad: false,
            titulo: false,
            reg_publico: false,
            charlas,
            adicional: None,
            created_at: created_at.map(String::from),
            updated_at: None,
        }
    }

    #[test]
    fn test_known_distribution() {
        // 10 records, 3 virtual, 2 presencial, 5 ninguno.
        let mut items = Vec::new();
        for _ in 0..3 {
            items.push(formulario(Charla::Virtual, None, None));
        }
        for _ in 0..2 {
            items.push(formulario(Charla::Presencial, Some("20123456789"), None));
        }
        for _ in 0..5 {
            items.push(formulario(Charla::Ninguno, None, None));
        }

        let now = Utc.with_ymd_and_hms(2025, 9, 15, 12, 0, 0).unwrap();
        let stats = DashboardStats::compute(&items, now);
        assert_eq!(stats.total, 10);
        assert_eq!(stats.with_ruc, 2);
        assert_eq!(stats.charlas.virtuales, 3);

        let rows = stats.charlas.rows();
        assert_eq!(rows[0], CharlaRow { label: "Virtual", count: 3, pct: 30 });
        assert_eq!(rows[1], CharlaRow { label: "Presencial", count: 2, pct: 20 });
        assert_eq!(rows[2], CharlaRow { label: "Ninguno", count: 5, pct: 50 });
    }

    #[test]
    fn test_this_month_bucket() {
        let items = vec![
            formulario(Charla::Ninguno, None, Some("2025-09-01T08:30:00.000000Z")),
            formulario(Charla::Ninguno, None, Some("2025-09-10 14:00:00")),
            formulario(Charla::Ninguno, None, Some("2025-08-31 23:59:59")),
            formulario(Charla::Ninguno, None, None),
        ];
        let now = Utc.with_ymd_and_hms(2025, 9, 15, 12, 0, 0).unwrap();
        let stats = DashboardStats::compute(&items, now);
        assert_eq!(stats.this_month, 2);
    }

    #[test]
    fn test_empty_sample_renders_zero_bars() {
        let stats = DashboardStats::compute(&[], Utc::now());
        for row in stats.charlas.rows() {
            assert_eq!(row.count, 0);
            assert_eq!(row.pct, 0);
        }
    }

    #[test]
    fn test_latest_orders_newest_first() {
        let items = vec![
            formulario(Charla::Ninguno, None, Some("2025-09-01 08:00:00")),
            formulario(Charla::Ninguno, None, Some("2025-09-12 08:00:00")),
            formulario(Charla::Ninguno, None, None),
            formulario(Charla::Ninguno, None, Some("2025-09-05 08:00:00")),
        ];
        let top = latest(&items, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].created_at.as_deref(), Some("2025-09-12 08:00:00"));
        assert_eq!(top[1].created_at.as_deref(), Some("2025-09-05 08:00:00"));
    }

    #[test]
    fn test_fetch_size_caps_overflow() {
        assert_eq!(fetch_size(0), 0);
        assert_eq!(fetch_size(1500), 1500);
        assert_eq!(fetch_size(2000), 2000);
        assert_eq!(fetch_size(50_000), 1000);
    }
}
