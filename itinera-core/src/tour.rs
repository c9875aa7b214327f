//! Tours and their cached aggregate cultural value.

use std::collections::BTreeSet;

use crate::{AttractionId, RegionId, TourId, TourRecord};

/// A purchasable tour covering one or more attractions.
///
/// The attraction link set and the cached aggregate cultural value are
/// written only by the catalogue's linking pass; after that pass completes
/// the tour is immutable for the lifetime of the catalogue. The cache always
/// equals the sum of the cultural values of the currently linked
/// attractions.
///
/// # Examples
/// ```
/// use itinera_core::{RegionId, Tour, TourId, TourRecord};
///
/// let tour = Tour::from(TourRecord {
///     id: TourId(1),
///     region_id: RegionId::from("R1"),
///     duration_days: 2,
///     cost: 100.0,
/// });
/// assert!(tour.attractions().is_empty());
/// assert_eq!(tour.cultural_value(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    /// Unique tour identifier.
    pub id: TourId,
    /// Region offering the tour.
    pub region: RegionId,
    /// Duration in whole days.
    pub duration_days: u32,
    /// Price of the tour.
    pub cost: f64,
    attractions: BTreeSet<AttractionId>,
    cultural_value: u64,
}

impl Tour {
    /// Attractions currently linked to this tour.
    pub fn attractions(&self) -> &BTreeSet<AttractionId> {
        &self.attractions
    }

    /// Cached sum of the cultural values of the linked attractions.
    pub fn cultural_value(&self) -> u64 {
        self.cultural_value
    }

    pub(crate) fn clear_links(&mut self) {
        self.attractions.clear();
        self.cultural_value = 0;
    }

    pub(crate) fn link(&mut self, attraction: AttractionId) {
        self.attractions.insert(attraction);
    }

    pub(crate) fn set_cultural_value(&mut self, value: u64) {
        self.cultural_value = value;
    }
}

impl From<TourRecord> for Tour {
    fn from(record: TourRecord) -> Self {
        Self {
            id: record.id,
            region: record.region_id,
            duration_days: record.duration_days,
            cost: record.cost,
            attractions: BTreeSet::new(),
            cultural_value: 0,
        }
    }
}
