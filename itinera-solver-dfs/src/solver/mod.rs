//! `DfsSolver` implementation: exact subset search with feasibility pruning.

use std::collections::BTreeSet;

use itinera_core::{
    AttractionId, PackageRequest, PackageSolver, SolveError, Tour, TourPackage, TourStore,
};

/// Configuration for [`DfsSolver`].
#[derive(Debug, Clone, Default)]
pub struct DfsSolverConfig {
    /// Upper bound on recursion entries per `solve` call.
    ///
    /// `None` leaves the search unbounded. When the budget runs out the
    /// search unwinds immediately and the best package found so far is
    /// returned, which may be empty.
    pub max_steps: Option<u64>,
}

/// Exact solver enumerating tour subsets depth-first.
///
/// Candidates are sorted by descending aggregate cultural value before the
/// search (ties by ascending tour id), which finds high-value packages early
/// and makes the explored order deterministic. Pruning is purely
/// feasibility-based: a branch is cut when it would exceed the day cap,
/// exceed the budget, or revisit an already-consumed attraction.
///
/// Worst-case cost is exponential in the number of candidate tours. Region
/// filtering and the three prunes are the only mitigations, so keep
/// per-region candidate counts small (tens, not thousands) or set
/// [`DfsSolverConfig::max_steps`].
///
/// All search state lives on the stack of each `solve` call; a single
/// instance can serve concurrent calls without them contaminating each
/// other's best-so-far tracking.
pub struct DfsSolver<S: TourStore> {
    store: S,
    config: DfsSolverConfig,
}

impl<S: TourStore> DfsSolver<S> {
    /// Construct a solver using default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, DfsSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    pub const fn with_config(store: S, config: DfsSolverConfig) -> Self {
        Self { store, config }
    }
}

impl<S: TourStore> PackageSolver for DfsSolver<S> {
    fn solve(&self, request: &PackageRequest) -> Result<TourPackage, SolveError> {
        request.validate()?;

        let mut candidates = self.store.tours_in_region(&request.region);
        candidates.sort_by(|a, b| {
            b.cultural_value()
                .cmp(&a.cultural_value())
                .then(a.id.cmp(&b.id))
        });

        let mut search = Search {
            candidates: &candidates,
            max_days: request.day_limit(),
            max_budget: request.budget_limit(),
            steps_left: self.config.max_steps,
            truncated: false,
            best: Best::default(),
        };
        let mut partial = Partial::default();
        search.explore(0, Totals::default(), &mut partial);

        if search.truncated {
            log::warn!(
                "package search for region {region} stopped after {steps} steps; returning best package found so far",
                region = request.region,
                steps = self.config.max_steps.unwrap_or(0)
            );
        }
        Ok(search.into_package())
    }
}

/// Running totals of the partial selection, passed by value down the tree.
#[derive(Debug, Clone, Copy, Default)]
struct Totals {
    days: u64,
    cost: f64,
    value: u64,
}

/// Best selection recorded so far within one `solve` call.
///
/// `value` starts as `None`, which compares strictly below every feasible
/// value including zero, so the empty package is recorded at the root and
/// later equal-value packages never displace an earlier optimum.
#[derive(Debug, Default)]
struct Best {
    selection: Vec<usize>,
    cost: f64,
    value: Option<u64>,
}

/// Mutate-then-undo state shared along one branch of the call tree.
#[derive(Debug, Default)]
struct Partial {
    selection: Vec<usize>,
    used: BTreeSet<AttractionId>,
}

struct Search<'a> {
    candidates: &'a [Tour],
    max_days: u64,
    max_budget: f64,
    steps_left: Option<u64>,
    truncated: bool,
    best: Best,
}

impl Search<'_> {
    fn take_step(&mut self) -> bool {
        match self.steps_left.as_mut() {
            None => true,
            Some(0) => {
                self.truncated = true;
                false
            }
            Some(remaining) => {
                *remaining -= 1;
                true
            }
        }
    }

    fn explore(&mut self, next: usize, totals: Totals, partial: &mut Partial) {
        if !self.take_step() {
            return;
        }

        if self.best.value.is_none_or(|best| totals.value > best) {
            self.best = Best {
                selection: partial.selection.clone(),
                cost: totals.cost,
                value: Some(totals.value),
            };
        }

        for (index, tour) in self.candidates.iter().enumerate().skip(next) {
            let days = totals.days + u64::from(tour.duration_days);
            if days > self.max_days {
                continue;
            }
            let cost = totals.cost + tour.cost;
            if cost > self.max_budget {
                continue;
            }
            if !partial.used.is_disjoint(tour.attractions()) {
                continue;
            }

            partial.selection.push(index);
            partial.used.extend(tour.attractions().iter().copied());
            self.explore(
                index + 1,
                Totals {
                    days,
                    cost,
                    value: totals.value + tour.cultural_value(),
                },
                partial,
            );
            partial.selection.pop();
            for attraction in tour.attractions() {
                partial.used.remove(attraction);
            }

            if self.truncated {
                break;
            }
        }
    }

    fn into_package(self) -> TourPackage {
        let Best {
            selection,
            cost,
            value,
        } = self.best;
        let tours: Vec<Tour> = selection
            .iter()
            .filter_map(|&index| self.candidates.get(index))
            .cloned()
            .collect();
        TourPackage::new(tours, cost, value.unwrap_or(0))
    }
}
