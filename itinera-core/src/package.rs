//! Optimisation results.

use crate::Tour;

/// Immutable snapshot of the best package a solver found.
///
/// The tours are defensive copies in the order the winning search branch
/// added them; the snapshot shares no state with the solver that produced
/// it. When no non-empty package is feasible the empty package is the valid
/// answer, with zero cost and zero value, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TourPackage {
    /// Selected tours, in selection order.
    pub tours: Vec<Tour>,
    /// Sum of the selected tours' costs.
    pub total_cost: f64,
    /// Sum of the selected tours' aggregate cultural values.
    pub total_value: u64,
}

impl TourPackage {
    /// Assemble a package from its parts.
    pub fn new(tours: Vec<Tour>, total_cost: f64, total_value: u64) -> Self {
        Self {
            tours,
            total_cost,
            total_value,
        }
    }

    /// The zero-cost, zero-value package.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no tour was selected.
    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_package_has_zero_totals() {
        let package = TourPackage::empty();
        assert!(package.is_empty());
        assert_eq!(package.total_cost, 0.0);
        assert_eq!(package.total_value, 0);
    }
}
