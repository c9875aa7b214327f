//! Facade crate for the Itinera package engine.
//!
//! This crate re-exports the core domain types and exposes the exhaustive
//! depth-first solver behind a feature flag.

#![forbid(unsafe_code)]

pub use itinera_core::{
    Attraction, AttractionId, AttractionRecord, Catalogue, PackageRequest, PackageSolver,
    RegionId, RelationRecord, SolveError, Tour, TourId, TourPackage, TourRecord, TourStore,
};

#[cfg(feature = "solver-dfs")]
pub use itinera_solver_dfs::{DfsSolver, DfsSolverConfig};
