//! GeoJSON encoding of a route path.
//!
//! The combined path of a planned trip is persisted on the trip record as a
//! GeoJSON `LineString` so map front ends can render it directly.  GeoJSON
//! coordinate order is `[lon, lat]`.

use eld_core::GeoPoint;

/// Encode a path as a GeoJSON `LineString` value.
///
/// An empty path encodes as a `LineString` with an empty coordinate array;
/// whether that is acceptable is the caller's concern.
pub fn path_geojson(path: &[GeoPoint]) -> serde_json::Value {
    let coordinates: Vec<[f64; 2]> = path.iter().map(|p| [p.lon, p.lat]).collect();
    serde_json::json!({
        "type": "LineString",
        "coordinates": coordinates,
    })
}
