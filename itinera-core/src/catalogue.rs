//! In-memory entity store and relationship builder.
//!
//! The [`Catalogue`] exclusively owns every [`Tour`] and [`Attraction`]
//! loaded for a run. Linking happens once, after all entities are present:
//! [`Catalogue::relink`] wires both sides of every relation record and then
//! recomputes each tour's aggregate cultural value from scratch. Solvers
//! read the catalogue through the [`TourStore`] seam and never mutate it.

use std::collections::HashMap;

use log::debug;

use crate::{
    Attraction, AttractionId, AttractionRecord, RegionId, RelationRecord, Tour, TourId, TourRecord,
};

/// Owning store for the loaded tour and attraction entities.
///
/// # Examples
/// ```
/// use itinera_core::{
///     AttractionId, AttractionRecord, Catalogue, RegionId, RelationRecord, TourId, TourRecord,
/// };
///
/// let catalogue = Catalogue::from_records(
///     vec![TourRecord {
///         id: TourId(1),
///         region_id: RegionId::from("R1"),
///         duration_days: 2,
///         cost: 100.0,
///     }],
///     vec![AttractionRecord { id: AttractionId(10), cultural_value: 7 }],
///     &[RelationRecord { tour_id: TourId(1), attraction_id: AttractionId(10) }],
/// );
///
/// let tour = catalogue.tour(TourId(1)).expect("tour loaded");
/// assert_eq!(tour.cultural_value(), 7);
/// ```
#[derive(Debug, Default)]
pub struct Catalogue {
    tours: HashMap<TourId, Tour>,
    attractions: HashMap<AttractionId, Attraction>,
}

impl Catalogue {
    /// Build a catalogue from loader records and run the linking pass.
    pub fn from_records(
        tours: Vec<TourRecord>,
        attractions: Vec<AttractionRecord>,
        relations: &[RelationRecord],
    ) -> Self {
        let mut catalogue = Self {
            tours: tours
                .into_iter()
                .map(|record| (record.id, Tour::from(record)))
                .collect(),
            attractions: attractions
                .into_iter()
                .map(|record| (record.id, Attraction::from(record)))
                .collect(),
        };
        catalogue.relink(relations);
        catalogue
    }

    /// Rebuild every tour/attraction link from the given relation records.
    ///
    /// All existing links and cached aggregates are discarded first; there is
    /// no incremental update. A record naming an unknown tour or attraction
    /// is skipped: referential integrity is enforced upstream and a dangling
    /// reference here is tolerated, not fatal.
    pub fn relink(&mut self, relations: &[RelationRecord]) {
        for tour in self.tours.values_mut() {
            tour.clear_links();
        }
        for attraction in self.attractions.values_mut() {
            attraction.clear_links();
        }

        for relation in relations {
            if !self.attractions.contains_key(&relation.attraction_id) {
                debug!(
                    "skipping relation {tour} -> {attraction}: unknown attraction",
                    tour = relation.tour_id,
                    attraction = relation.attraction_id
                );
                continue;
            }
            let Some(tour) = self.tours.get_mut(&relation.tour_id) else {
                debug!(
                    "skipping relation {tour} -> {attraction}: unknown tour",
                    tour = relation.tour_id,
                    attraction = relation.attraction_id
                );
                continue;
            };
            tour.link(relation.attraction_id);
            if let Some(attraction) = self.attractions.get_mut(&relation.attraction_id) {
                attraction.link(relation.tour_id);
            }
        }

        let attractions = &self.attractions;
        for tour in self.tours.values_mut() {
            let value = tour
                .attractions()
                .iter()
                .filter_map(|id| attractions.get(id))
                .map(|attraction| attraction.cultural_value)
                .sum();
            tour.set_cultural_value(value);
        }
    }

    /// Look up a tour by identifier.
    pub fn tour(&self, id: TourId) -> Option<&Tour> {
        self.tours.get(&id)
    }

    /// Look up an attraction by identifier.
    pub fn attraction(&self, id: AttractionId) -> Option<&Attraction> {
        self.attractions.get(&id)
    }

    /// Iterate over every loaded tour, in no particular order.
    pub fn tours(&self) -> impl Iterator<Item = &Tour> {
        self.tours.values()
    }

    /// Number of loaded tours.
    pub fn tour_count(&self) -> usize {
        self.tours.len()
    }
}

/// Read seam between the entity store and solver implementations.
///
/// Returned tours are owned clones; solvers never hold references into the
/// store and the store is never mutated by a query.
pub trait TourStore: Send + Sync {
    /// All tours offered in `region`, in unspecified order.
    fn tours_in_region(&self, region: &RegionId) -> Vec<Tour>;
}

impl TourStore for Catalogue {
    fn tours_in_region(&self, region: &RegionId) -> Vec<Tour> {
        self.tours
            .values()
            .filter(|tour| &tour.region == region)
            .cloned()
            .collect()
    }
}
