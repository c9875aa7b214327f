//! Core domain types for the Itinera package engine.
//!
//! The engine selects, from the tours offered in a region, the combination
//! ("package") that maximises total cultural value under optional duration
//! and budget caps, with the hard rule that no attraction is visited by more
//! than one tour in the package.
//!
//! This crate holds the relational data model ([`Tour`], [`Attraction`]),
//! the in-memory entity store and relationship builder ([`Catalogue`]), the
//! solver seam ([`PackageSolver`], [`TourStore`]) and the result snapshot
//! ([`TourPackage`]). Solver implementations live in sibling crates.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attraction;
mod catalogue;
mod ids;
mod package;
mod record;
mod solver;
mod tour;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use attraction::Attraction;
pub use catalogue::{Catalogue, TourStore};
pub use ids::{AttractionId, RegionId, TourId};
pub use package::TourPackage;
pub use record::{AttractionRecord, RelationRecord, TourRecord};
pub use solver::{PackageRequest, PackageSolver, SolveError};
pub use tour::Tour;
