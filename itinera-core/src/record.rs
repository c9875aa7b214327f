//! Raw records handed over by the external loading collaborator.
//!
//! The engine never reads storage itself; a loader supplies these three
//! read-only collections and [`Catalogue::from_records`](crate::Catalogue::from_records)
//! turns them into linked entities.

use crate::{AttractionId, RegionId, TourId};

/// One tour row as delivered by the loader.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourRecord {
    /// Unique tour identifier.
    pub id: TourId,
    /// Region offering the tour.
    pub region_id: RegionId,
    /// Duration in whole days.
    pub duration_days: u32,
    /// Price of the tour.
    pub cost: f64,
}

/// One attraction row as delivered by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttractionRecord {
    /// Unique attraction identifier.
    pub id: AttractionId,
    /// Cultural value score of the attraction.
    pub cultural_value: u64,
}

/// One tour-visits-attraction relation row.
///
/// Records naming unknown endpoints are tolerated and skipped during
/// linking; referential integrity is an upstream concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationRecord {
    /// Tour side of the link.
    pub tour_id: TourId,
    /// Attraction side of the link.
    pub attraction_id: AttractionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "serde")]
    fn tour_record_round_trips_through_json() {
        let record = TourRecord {
            id: TourId(1),
            region_id: RegionId::from("R1"),
            duration_days: 2,
            cost: 100.0,
        };
        let json = serde_json::to_string(&record).expect("serialise");
        let back: TourRecord = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, record);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn identifiers_serialise_transparently() {
        let relation = RelationRecord {
            tour_id: TourId(1),
            attraction_id: AttractionId(9),
        };
        let json = serde_json::to_string(&relation).expect("serialise");
        assert_eq!(json, r#"{"tour_id":1,"attraction_id":9}"#);
    }
}
