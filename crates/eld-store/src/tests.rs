//! Unit tests for eld-store.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use eld_core::{GeoPoint, SegmentKind, TripId};
use eld_schedule::{ActivitySegment, TripPlan, aggregate_daily_logs};

use crate::{StoreError, TripRecord, TripStore};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 7, 0, 0).unwrap()
}

fn point() -> GeoPoint {
    GeoPoint::new(41.8781, -87.6298)
}

fn record(created_at: DateTime<Utc>) -> TripRecord {
    TripRecord {
        id: TripId::new(),
        current_location: "Chicago, IL".into(),
        current_point: point(),
        pickup_location: "Springfield, IL".into(),
        pickup_point: GeoPoint::new(39.7817, -89.6501),
        dropoff_location: "St. Louis, MO".into(),
        dropoff_point: GeoPoint::new(38.6270, -90.1994),
        cycle_used_hours: dec!(12.5),
        route_geojson: r#"{"type":"LineString","coordinates":[]}"#.into(),
        total_distance_miles: dec!(550),
        total_driving_hours: dec!(10),
        created_at,
    }
}

/// A small but representative plan: drive, pickup, drive, dropoff.
fn plan() -> TripPlan {
    let mut t = start();
    let mut order = 0;
    let mut seg = |kind: SegmentKind, hours, name: &str| {
        let s = ActivitySegment::new(kind, order, name, point(), t, hours, format!("{name} note"));
        t = s.end_time;
        order += 1;
        s
    };

    let segments = vec![
        seg(SegmentKind::Driving, dec!(50) / dec!(55), "Driving segment (50.0 miles)"),
        seg(SegmentKind::Pickup, dec!(1), "Springfield, IL"),
        seg(SegmentKind::Driving, dec!(2), "Driving segment (110.0 miles)"),
        seg(SegmentKind::Dropoff, dec!(1), "St. Louis, MO"),
    ];
    let daily_logs = aggregate_daily_logs(&segments);

    TripPlan {
        total_distance_miles: dec!(160),
        total_driving_hours: dec!(50) / dec!(55) + dec!(2),
        segments,
        daily_logs,
        path: vec![point()],
    }
}

// ── Persist / fetch round trip ────────────────────────────────────────────────

#[cfg(test)]
mod round_trip {
    use super::*;

    #[test]
    fn trip_record_survives_storage() {
        let mut store = TripStore::open_in_memory().unwrap();
        let rec = record(start());
        store.persist_plan(&rec, &plan()).unwrap();
        assert_eq!(store.fetch_trip(rec.id).unwrap(), rec);
    }

    #[test]
    fn segments_survive_storage_in_order() {
        let mut store = TripStore::open_in_memory().unwrap();
        let rec = record(start());
        let p = plan();
        store.persist_plan(&rec, &p).unwrap();
        assert_eq!(store.fetch_segments(rec.id).unwrap(), p.segments);
    }

    #[test]
    fn daily_logs_survive_storage() {
        let mut store = TripStore::open_in_memory().unwrap();
        let rec = record(start());
        let p = plan();
        store.persist_plan(&rec, &p).unwrap();
        assert_eq!(store.fetch_daily_logs(rec.id).unwrap(), p.daily_logs);
    }

    #[test]
    fn full_precision_decimals_round_trip() {
        // 50/55 is a repeating decimal carried to full precision; TEXT
        // storage must preserve every digit.
        let mut store = TripStore::open_in_memory().unwrap();
        let rec = record(start());
        let p = plan();
        store.persist_plan(&rec, &p).unwrap();
        let fetched = store.fetch_segments(rec.id).unwrap();
        assert_eq!(fetched[0].duration_hours, dec!(50) / dec!(55));
    }

    #[test]
    fn on_disk_database_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trips.db");
        let rec = record(start());
        let p = plan();

        {
            let mut store = TripStore::open(&path).unwrap();
            store.persist_plan(&rec, &p).unwrap();
        }

        // Reopen and read back.
        let store = TripStore::open(&path).unwrap();
        assert_eq!(store.fetch_trip(rec.id).unwrap(), rec);
        assert_eq!(store.fetch_segments(rec.id).unwrap(), p.segments);
    }
}

// ── Not-found and listing ─────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use super::*;

    #[test]
    fn unknown_trip_is_not_found() {
        let store = TripStore::open_in_memory().unwrap();
        assert!(matches!(
            store.fetch_trip(TripId::new()),
            Err(StoreError::TripNotFound(_))
        ));
    }

    #[test]
    fn unknown_trip_has_no_segments() {
        let store = TripStore::open_in_memory().unwrap();
        assert!(store.fetch_segments(TripId::new()).unwrap().is_empty());
    }

    #[test]
    fn list_is_newest_first() {
        let mut store = TripStore::open_in_memory().unwrap();
        let older = record(Utc.with_ymd_and_hms(2025, 3, 1, 7, 0, 0).unwrap());
        let newer = record(Utc.with_ymd_and_hms(2025, 3, 20, 7, 0, 0).unwrap());
        store.persist_plan(&older, &plan()).unwrap();
        store.persist_plan(&newer, &plan()).unwrap();

        let ids: Vec<_> = store.list_trips().unwrap().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![newer.id, older.id]);
    }
}

// ── Deletion and atomicity ────────────────────────────────────────────────────

#[cfg(test)]
mod integrity {
    use super::*;

    #[test]
    fn delete_cascades_to_segments_and_logs() {
        let mut store = TripStore::open_in_memory().unwrap();
        let rec = record(start());
        store.persist_plan(&rec, &plan()).unwrap();

        store.delete_trip(rec.id).unwrap();
        assert!(matches!(
            store.fetch_trip(rec.id),
            Err(StoreError::TripNotFound(_))
        ));
        assert!(store.fetch_segments(rec.id).unwrap().is_empty());
        assert!(store.fetch_daily_logs(rec.id).unwrap().is_empty());
    }

    #[test]
    fn delete_unknown_trip_is_not_found() {
        let mut store = TripStore::open_in_memory().unwrap();
        assert!(matches!(
            store.delete_trip(TripId::new()),
            Err(StoreError::TripNotFound(_))
        ));
    }

    #[test]
    fn failed_persist_leaves_nothing_behind() {
        // Duplicate sequence numbers violate the (trip_id, seq) primary
        // key partway through the segment insert; the whole transaction
        // must roll back, including the already-written trip row.
        let mut store = TripStore::open_in_memory().unwrap();
        let rec = record(start());
        let mut p = plan();
        p.segments[2].order = p.segments[1].order;

        assert!(store.persist_plan(&rec, &p).is_err());
        assert!(matches!(
            store.fetch_trip(rec.id),
            Err(StoreError::TripNotFound(_))
        ));
        assert!(store.fetch_segments(rec.id).unwrap().is_empty());
    }
}
