//! Attractions and their inverse links back to tours.

use std::collections::BTreeSet;

use crate::{AttractionId, AttractionRecord, TourId};

/// A point of interest with a cultural value score.
///
/// The tour link set mirrors [`Tour::attractions`](crate::Tour::attractions):
/// an attraction references a tour if and only if that tour references the
/// attraction. Both sides hold identifiers resolved through the catalogue,
/// never direct cross-references, so no ownership cycle exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attraction {
    /// Unique attraction identifier.
    pub id: AttractionId,
    /// Cultural value score.
    pub cultural_value: u64,
    tours: BTreeSet<TourId>,
}

impl Attraction {
    /// Tours currently linked to this attraction.
    pub fn tours(&self) -> &BTreeSet<TourId> {
        &self.tours
    }

    pub(crate) fn clear_links(&mut self) {
        self.tours.clear();
    }

    pub(crate) fn link(&mut self, tour: TourId) {
        self.tours.insert(tour);
    }
}

impl From<AttractionRecord> for Attraction {
    fn from(record: AttractionRecord) -> Self {
        Self {
            id: record.id,
            cultural_value: record.cultural_value,
            tours: BTreeSet::new(),
        }
    }
}
