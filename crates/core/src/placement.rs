//! Spatial placement validation for warehouse zones.
//!
//! A candidate zone is a rectangle on the warehouse floor plane: an
//! origin point plus a length along the width axis (`x`) and a width
//! along the depth axis (`y`). Placement is accepted only when the
//! rectangle starts inside the floor, fits within its boundary, overlaps
//! no existing zone, and its capacity fits the warehouse's remaining
//! zone budget.
//!
//! Overlap uses the symmetric axis-aligned bounding-box intersection
//! over half-open spans: zones that merely share an edge do not overlap.

use serde::{Deserialize, Serialize};

/// A point on the warehouse floor plane, as stored in the `coordinates`
/// column (JSON `{x, y}`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A zone's rectangle and capacity, parsed from its row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub origin: Point,
    /// Length along the warehouse width axis.
    pub len_x: f64,
    /// Width along the warehouse depth axis.
    pub len_y: f64,
    pub capacity: f64,
}

/// The target warehouse's floor dimensions and total zone budget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floor {
    pub x: f64,
    pub y: f64,
    pub capacity: f64,
}

/// Reasons a candidate zone is rejected, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The origin point lies outside the warehouse floor.
    #[error("zone origin lies outside the warehouse floor")]
    NotInWarehouse,

    /// The rectangle extends past the warehouse boundary.
    #[error("zone extends beyond the warehouse boundary")]
    OutOfBoundary,

    /// The rectangle intersects an existing zone.
    #[error("zone overlaps an existing zone")]
    ZoneOccupied,

    /// The candidate's capacity exceeds the unallocated zone budget.
    #[error("zone capacity exceeds the warehouse's free capacity")]
    NotFit,
}

impl PlacementError {
    /// Stable machine-readable reason code.
    pub fn code(self) -> &'static str {
        match self {
            PlacementError::NotInWarehouse => "NOT_IN_WAREHOUSE",
            PlacementError::OutOfBoundary => "OUT_OF_BOUNDARY",
            PlacementError::ZoneOccupied => "ZONE_OCCUPIED",
            PlacementError::NotFit => "NOT_FIT",
        }
    }
}

/// Parse a `coordinates` column value into a [`Point`].
pub fn parse_coordinates(raw: &str) -> Result<Point, String> {
    serde_json::from_str(raw).map_err(|err| format!("coordinates is not a {{x, y}} object: {err}"))
}

/// True when two rectangles intersect with positive area.
///
/// Half-open spans `[origin, origin + len)` on both axes, so touching
/// edges never count as overlap.
pub fn overlaps(a: &Footprint, b: &Footprint) -> bool {
    a.origin.x < b.origin.x + b.len_x
        && b.origin.x < a.origin.x + a.len_x
        && a.origin.y < b.origin.y + b.len_y
        && b.origin.y < a.origin.y + a.len_y
}

/// Sum of the capacities already committed to existing zones.
pub fn occupied_capacity(existing: &[Footprint]) -> f64 {
    existing.iter().map(|zone| zone.capacity).sum()
}

/// Decide whether `candidate` may be added to the warehouse's layout.
///
/// Checks run in order and the first failure wins: containment,
/// boundary, overlap against every existing zone, capacity budget.
pub fn validate_placement(
    candidate: &Footprint,
    floor: &Floor,
    existing: &[Footprint],
) -> Result<(), PlacementError> {
    if candidate.origin.x > floor.x || candidate.origin.y > floor.y {
        return Err(PlacementError::NotInWarehouse);
    }

    if candidate.origin.x + candidate.len_x > floor.x
        || candidate.origin.y + candidate.len_y > floor.y
    {
        return Err(PlacementError::OutOfBoundary);
    }

    if existing.iter().any(|zone| overlaps(candidate, zone)) {
        return Err(PlacementError::ZoneOccupied);
    }

    if candidate.capacity > floor.capacity - occupied_capacity(existing) {
        return Err(PlacementError::NotFit);
    }

    Ok(())
}
