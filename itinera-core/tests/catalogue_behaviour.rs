//! Behavioural coverage for loading and linking the catalogue.

use itinera_core::{
    AttractionId, AttractionRecord, Catalogue, RegionId, RelationRecord, TourId, TourRecord,
    TourStore,
};
use rstest::{fixture, rstest};

fn tour(id: u64, region: &str, duration_days: u32, cost: f64) -> TourRecord {
    TourRecord {
        id: TourId(id),
        region_id: RegionId::from(region),
        duration_days,
        cost,
    }
}

fn attraction(id: u64, cultural_value: u64) -> AttractionRecord {
    AttractionRecord {
        id: AttractionId(id),
        cultural_value,
    }
}

fn link(tour_id: u64, attraction_id: u64) -> RelationRecord {
    RelationRecord {
        tour_id: TourId(tour_id),
        attraction_id: AttractionId(attraction_id),
    }
}

/// Two regions, three tours, one attraction shared by two tours and one
/// relation record pointing at an attraction the loader never delivered.
#[fixture]
fn coastal_catalogue() -> Catalogue {
    Catalogue::from_records(
        vec![
            tour(1, "coastal", 2, 100.0),
            tour(2, "coastal", 3, 50.0),
            tour(3, "highland", 1, 30.0),
        ],
        vec![attraction(10, 4), attraction(11, 6), attraction(12, 20)],
        &[
            link(1, 10),
            link(1, 11),
            link(2, 12),
            link(3, 10),
            link(2, 999),
        ],
    )
}

#[rstest]
fn linking_is_bidirectional(coastal_catalogue: Catalogue) {
    assert_eq!(coastal_catalogue.tour_count(), 3);
    assert_eq!(coastal_catalogue.tours().count(), 3);

    let tour = coastal_catalogue.tour(TourId(3)).expect("tour 3 loaded");
    assert!(tour.attractions().contains(&AttractionId(10)));

    let shared = coastal_catalogue
        .attraction(AttractionId(10))
        .expect("attraction 10 loaded");
    assert_eq!(shared.tours().len(), 2);
    assert!(shared.tours().contains(&TourId(1)));
    assert!(shared.tours().contains(&TourId(3)));
}

#[rstest]
fn aggregates_are_cached_per_tour(coastal_catalogue: Catalogue) {
    let values: Vec<u64> = [1, 2, 3]
        .into_iter()
        .map(|id| {
            coastal_catalogue
                .tour(TourId(id))
                .expect("tour loaded")
                .cultural_value()
        })
        .collect();
    assert_eq!(values, vec![10, 20, 4]);
}

#[rstest]
fn dangling_relations_leave_entities_untouched(coastal_catalogue: Catalogue) {
    // Relation (2, 999) names an unknown attraction and must be skipped.
    let tour = coastal_catalogue.tour(TourId(2)).expect("tour 2 loaded");
    assert_eq!(tour.attractions().len(), 1);
    assert_eq!(tour.cultural_value(), 20);
}

#[rstest]
fn store_seam_filters_by_region(coastal_catalogue: Catalogue) {
    let coastal = coastal_catalogue.tours_in_region(&RegionId::from("coastal"));
    assert_eq!(coastal.len(), 2);

    let highland = coastal_catalogue.tours_in_region(&RegionId::from("highland"));
    assert_eq!(highland.len(), 1);

    assert!(
        coastal_catalogue
            .tours_in_region(&RegionId::from("offshore"))
            .is_empty()
    );
}

#[rstest]
fn relink_replaces_previous_links(mut coastal_catalogue: Catalogue) {
    coastal_catalogue.relink(&[link(1, 12)]);

    let tour = coastal_catalogue.tour(TourId(1)).expect("tour 1 loaded");
    assert_eq!(tour.cultural_value(), 20);

    let orphaned = coastal_catalogue
        .attraction(AttractionId(10))
        .expect("attraction 10 loaded");
    assert!(orphaned.tours().is_empty());
}
