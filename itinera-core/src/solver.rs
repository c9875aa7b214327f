//! Solver contract for package optimisation.

use thiserror::Error;

use crate::{RegionId, TourPackage};

/// Parameters for a package optimisation query.
///
/// Either cap may be absent, which means unconstrained, never zero.
///
/// # Examples
/// ```rust
/// use itinera_core::{PackageRequest, RegionId};
///
/// let request = PackageRequest::for_region(RegionId::from("R1"))
///     .with_max_days(5)
///     .with_max_budget(200.0);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PackageRequest {
    /// Region whose tours are eligible.
    pub region: RegionId,
    /// Cap on the package's total duration in days, if any.
    pub max_days: Option<u32>,
    /// Cap on the package's total cost, if any.
    pub max_budget: Option<f64>,
}

impl PackageRequest {
    /// An unconstrained request for `region`.
    pub fn for_region(region: RegionId) -> Self {
        Self {
            region,
            max_days: None,
            max_budget: None,
        }
    }

    /// Cap the package's total duration.
    pub fn with_max_days(mut self, days: u32) -> Self {
        self.max_days = Some(days);
        self
    }

    /// Cap the package's total cost.
    pub fn with_max_budget(mut self, budget: f64) -> Self {
        self.max_budget = Some(budget);
        self
    }

    /// Reject malformed bounds.
    ///
    /// A missing bound is well-formed; a NaN, infinite or negative budget is
    /// not. All other anomalies the engine meets are handled as policy, not
    /// errors.
    pub fn validate(&self) -> Result<(), SolveError> {
        match self.max_budget {
            Some(budget) if !budget.is_finite() || budget < 0.0 => Err(SolveError::InvalidRequest),
            _ => Ok(()),
        }
    }

    /// Day cap with absence normalised to the largest representable total.
    pub fn day_limit(&self) -> u64 {
        self.max_days.map_or(u64::MAX, u64::from)
    }

    /// Budget cap with absence normalised to positive infinity.
    pub fn budget_limit(&self) -> f64 {
        self.max_budget.unwrap_or(f64::INFINITY)
    }
}

/// Errors returned by [`PackageSolver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Request parameters were invalid, e.g. a NaN budget.
    #[error("invalid request")]
    InvalidRequest,
}

/// Find the feasible package with the highest total cultural value.
///
/// Implementations must return [`SolveError::InvalidRequest`] for invalid
/// parameters rather than panicking, and must return the empty package when
/// no non-empty package is feasible. Solvers must be `Send + Sync` and keep
/// all search state local to each call so independent invocations cannot
/// contaminate one another.
pub trait PackageSolver: Send + Sync {
    /// Solve a request, producing the best package found or an error.
    fn solve(&self, request: &PackageRequest) -> Result<TourPackage, SolveError>;
}
