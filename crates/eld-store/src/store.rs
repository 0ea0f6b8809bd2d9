//! `TripStore`: schema management, transactional persist, and fetches.

use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Connection;
use rust_decimal::Decimal;

use eld_core::{GeoPoint, SegmentKind, TripId};
use eld_schedule::{ActivitySegment, DailyLogSummary, TripPlan};

use crate::record::TripRecord;
use crate::{StoreError, StoreResult};

const SCHEMA: &str = "
    PRAGMA foreign_keys = ON;
    CREATE TABLE IF NOT EXISTS trips (
        id                   TEXT PRIMARY KEY,
        current_location     TEXT NOT NULL,
        current_lat          REAL NOT NULL,
        current_lon          REAL NOT NULL,
        pickup_location      TEXT NOT NULL,
        pickup_lat           REAL NOT NULL,
        pickup_lon           REAL NOT NULL,
        dropoff_location     TEXT NOT NULL,
        dropoff_lat          REAL NOT NULL,
        dropoff_lon          REAL NOT NULL,
        cycle_used_hours     TEXT NOT NULL,
        route_geojson        TEXT NOT NULL,
        total_distance_miles TEXT NOT NULL,
        total_driving_hours  TEXT NOT NULL,
        created_at           TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS segments (
        trip_id        TEXT NOT NULL REFERENCES trips(id) ON DELETE CASCADE,
        seq            INTEGER NOT NULL,
        kind           TEXT NOT NULL,
        location_name  TEXT NOT NULL,
        latitude       REAL NOT NULL,
        longitude      REAL NOT NULL,
        start_time     TEXT NOT NULL,
        end_time       TEXT NOT NULL,
        duration_hours TEXT NOT NULL,
        note           TEXT NOT NULL,
        PRIMARY KEY (trip_id, seq)
    );
    CREATE TABLE IF NOT EXISTS daily_logs (
        trip_id                   TEXT NOT NULL REFERENCES trips(id) ON DELETE CASCADE,
        log_date                  TEXT NOT NULL,
        driving_hours             TEXT NOT NULL,
        sleeper_berth_hours       TEXT NOT NULL,
        off_duty_hours            TEXT NOT NULL,
        on_duty_not_driving_hours TEXT NOT NULL,
        notes                     TEXT NOT NULL,
        PRIMARY KEY (trip_id, log_date)
    );
";

/// SQLite-backed storage for trips and their planned itineraries.
pub struct TripStore {
    conn: Connection,
}

impl TripStore {
    /// Open (or create) the database at `path` and initialise the schema.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;",
        )?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// In-memory store, used by tests and previews.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    // ── Write path ────────────────────────────────────────────────────────

    /// Persist a trip record together with its full plan in one
    /// transaction: either everything becomes visible or nothing does.
    pub fn persist_plan(&mut self, record: &TripRecord, plan: &TripPlan) -> StoreResult<()> {
        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO trips (id, current_location, current_lat, current_lon, \
             pickup_location, pickup_lat, pickup_lon, \
             dropoff_location, dropoff_lat, dropoff_lon, \
             cycle_used_hours, route_geojson, total_distance_miles, \
             total_driving_hours, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            rusqlite::params![
                record.id.to_string(),
                record.current_location,
                record.current_point.lat,
                record.current_point.lon,
                record.pickup_location,
                record.pickup_point.lat,
                record.pickup_point.lon,
                record.dropoff_location,
                record.dropoff_point.lat,
                record.dropoff_point.lon,
                record.cycle_used_hours.to_string(),
                record.route_geojson,
                record.total_distance_miles.to_string(),
                record.total_driving_hours.to_string(),
                record.created_at.to_rfc3339(),
            ],
        )?;

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO segments (trip_id, seq, kind, location_name, \
                 latitude, longitude, start_time, end_time, duration_hours, note) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for segment in &plan.segments {
                stmt.execute(rusqlite::params![
                    record.id.to_string(),
                    segment.order,
                    segment.kind.code(),
                    segment.location_name,
                    segment.latitude,
                    segment.longitude,
                    segment.start_time.to_rfc3339(),
                    segment.end_time.to_rfc3339(),
                    segment.duration_hours.to_string(),
                    segment.note,
                ])?;
            }
        }

        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO daily_logs (trip_id, log_date, driving_hours, \
                 sleeper_berth_hours, off_duty_hours, on_duty_not_driving_hours, notes) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for log in &plan.daily_logs {
                stmt.execute(rusqlite::params![
                    record.id.to_string(),
                    log.log_date.to_string(),
                    log.driving_hours.to_string(),
                    log.sleeper_berth_hours.to_string(),
                    log.off_duty_hours.to_string(),
                    log.on_duty_not_driving_hours.to_string(),
                    log.notes,
                ])?;
            }
        }

        tx.commit()?;
        log::debug!(
            "persisted trip {} ({} segments, {} daily logs)",
            record.id,
            plan.segments.len(),
            plan.daily_logs.len()
        );
        Ok(())
    }

    /// Delete a trip and (via cascade) its segments and daily logs.
    pub fn delete_trip(&mut self, id: TripId) -> StoreResult<()> {
        let affected = self
            .conn
            .execute("DELETE FROM trips WHERE id = ?1", [id.to_string()])?;
        if affected == 0 {
            return Err(StoreError::TripNotFound(id));
        }
        Ok(())
    }

    // ── Read path ─────────────────────────────────────────────────────────

    /// Fetch a trip by id.
    pub fn fetch_trip(&self, id: TripId) -> StoreResult<TripRecord> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, current_location, current_lat, current_lon, \
             pickup_location, pickup_lat, pickup_lon, \
             dropoff_location, dropoff_lat, dropoff_lon, \
             cycle_used_hours, route_geojson, total_distance_miles, \
             total_driving_hours, created_at \
             FROM trips WHERE id = ?1",
        )?;
        let mut rows = stmt.query([id.to_string()])?;
        match rows.next()? {
            Some(row) => trip_from_row(row),
            None => Err(StoreError::TripNotFound(id)),
        }
    }

    /// All trips, newest first.
    pub fn list_trips(&self) -> StoreResult<Vec<TripRecord>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, current_location, current_lat, current_lon, \
             pickup_location, pickup_lat, pickup_lon, \
             dropoff_location, dropoff_lat, dropoff_lon, \
             cycle_used_hours, route_geojson, total_distance_miles, \
             total_driving_hours, created_at \
             FROM trips ORDER BY created_at DESC",
        )?;
        let mut rows = stmt.query([])?;
        let mut trips = Vec::new();
        while let Some(row) = rows.next()? {
            trips.push(trip_from_row(row)?);
        }
        Ok(trips)
    }

    /// A trip's segments, ordered by sequence index.
    ///
    /// Returns an empty vector (not an error) for an unknown trip — the
    /// caller decides whether that is a not-found condition.
    pub fn fetch_segments(&self, id: TripId) -> StoreResult<Vec<ActivitySegment>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT seq, kind, location_name, latitude, longitude, \
             start_time, end_time, duration_hours, note \
             FROM segments WHERE trip_id = ?1 ORDER BY seq",
        )?;
        let mut rows = stmt.query([id.to_string()])?;
        let mut segments = Vec::new();
        while let Some(row) = rows.next()? {
            segments.push(segment_from_row(row)?);
        }
        Ok(segments)
    }

    /// A trip's daily logs, ordered by date.
    pub fn fetch_daily_logs(&self, id: TripId) -> StoreResult<Vec<DailyLogSummary>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT log_date, driving_hours, sleeper_berth_hours, \
             off_duty_hours, on_duty_not_driving_hours, notes \
             FROM daily_logs WHERE trip_id = ?1 ORDER BY log_date",
        )?;
        let mut rows = stmt.query([id.to_string()])?;
        let mut logs = Vec::new();
        while let Some(row) = rows.next()? {
            logs.push(log_from_row(row)?);
        }
        Ok(logs)
    }
}

// ── Row decoding ──────────────────────────────────────────────────────────────

fn decimal(text: String) -> StoreResult<Decimal> {
    Decimal::from_str(&text).map_err(|e| StoreError::Corrupt(format!("decimal {text:?}: {e}")))
}

fn timestamp(text: String) -> StoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&text)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StoreError::Corrupt(format!("timestamp {text:?}: {e}")))
}

fn date(text: String) -> StoreResult<NaiveDate> {
    NaiveDate::from_str(&text).map_err(|e| StoreError::Corrupt(format!("date {text:?}: {e}")))
}

fn trip_from_row(row: &rusqlite::Row<'_>) -> StoreResult<TripRecord> {
    let id: String = row.get(0)?;
    Ok(TripRecord {
        id: TripId::parse(&id).map_err(|e| StoreError::Corrupt(e.to_string()))?,
        current_location: row.get(1)?,
        current_point: GeoPoint::new(row.get(2)?, row.get(3)?),
        pickup_location: row.get(4)?,
        pickup_point: GeoPoint::new(row.get(5)?, row.get(6)?),
        dropoff_location: row.get(7)?,
        dropoff_point: GeoPoint::new(row.get(8)?, row.get(9)?),
        cycle_used_hours: decimal(row.get(10)?)?,
        route_geojson: row.get(11)?,
        total_distance_miles: decimal(row.get(12)?)?,
        total_driving_hours: decimal(row.get(13)?)?,
        created_at: timestamp(row.get(14)?)?,
    })
}

fn segment_from_row(row: &rusqlite::Row<'_>) -> StoreResult<ActivitySegment> {
    let kind: String = row.get(1)?;
    Ok(ActivitySegment {
        order: row.get(0)?,
        kind: SegmentKind::from_code(&kind).map_err(|e| StoreError::Corrupt(e.to_string()))?,
        location_name: row.get(2)?,
        latitude: row.get(3)?,
        longitude: row.get(4)?,
        start_time: timestamp(row.get(5)?)?,
        end_time: timestamp(row.get(6)?)?,
        duration_hours: decimal(row.get(7)?)?,
        note: row.get(8)?,
    })
}

fn log_from_row(row: &rusqlite::Row<'_>) -> StoreResult<DailyLogSummary> {
    Ok(DailyLogSummary {
        log_date: date(row.get(0)?)?,
        driving_hours: decimal(row.get(1)?)?,
        sleeper_berth_hours: decimal(row.get(2)?)?,
        off_duty_hours: decimal(row.get(3)?)?,
        on_duty_not_driving_hours: decimal(row.get(4)?)?,
        notes: row.get(5)?,
    })
}
