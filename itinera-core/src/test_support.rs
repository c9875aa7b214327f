//! Test-only record builders used by unit and behaviour tests.

use crate::{AttractionId, AttractionRecord, RegionId, RelationRecord, TourId, TourRecord};

/// Build a tour record from raw parts.
pub fn tour_record(id: u64, region: &str, duration_days: u32, cost: f64) -> TourRecord {
    TourRecord {
        id: TourId(id),
        region_id: RegionId::from(region),
        duration_days,
        cost,
    }
}

/// Build an attraction record from raw parts.
pub fn attraction_record(id: u64, cultural_value: u64) -> AttractionRecord {
    AttractionRecord {
        id: AttractionId(id),
        cultural_value,
    }
}

/// Build a relation record from raw identifiers.
pub fn relation(tour_id: u64, attraction_id: u64) -> RelationRecord {
    RelationRecord {
        tour_id: TourId(tour_id),
        attraction_id: AttractionId(attraction_id),
    }
}
