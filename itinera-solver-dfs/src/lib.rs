//! Exhaustive depth-first package solver for Itinera.
//!
//! This crate provides [`DfsSolver`], the default implementation of the
//! [`PackageSolver`](itinera_core::PackageSolver) trait. It enumerates every
//! subset of a region's tours with feasibility-based pruning, maximising
//! total cultural value under optional duration and budget caps while
//! keeping the selected tours' attraction sets pairwise disjoint.
//!
//! The search is exact and exponential in the candidate count; it is meant
//! for per-region candidate counts in the tens. An optional step budget
//! bounds the work per call, trading exactness for a best-effort answer.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod solver;

pub use solver::{DfsSolver, DfsSolverConfig};
