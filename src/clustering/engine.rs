//! Shared assign/update loop.
//!
//! # Algorithm
//!
//! 1. Seed representative `i` with a copy of point `i` (or with caller seeds)
//! 2. Snapshot the representatives
//! 3. Assign every point to its nearest representative (ties: lowest index)
//! 4. If no assignment changed, log the snapshot as both sides and stop
//! 5. Otherwise recompute every non-empty cluster's representative, log the
//!    before/after pair and continue until the iteration budget runs out
//!
//! The assignment vector starts unassigned, so the first pass always counts
//! as a change and the earliest convergence happens at iteration 1.

use tracing::{debug, info, info_span};

use super::distance::euclidean;
use super::mean::MeanUpdate;
use super::medoid::MedoidUpdate;
use super::result::{ClusteringResult, IterationRecord};
use super::strategy::UpdateStrategy;
use crate::core::{Algorithm, ClusteringError, Point, Result, Termination};

/// Iteration budget used when the caller does not pick one.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Outcome of a single assign/update step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    Converged,
    BudgetExhausted,
}

impl LoopState {
    fn termination(self) -> Option<Termination> {
        match self {
            Self::Running => None,
            Self::Converged => Some(Termination::Converged),
            Self::BudgetExhausted => Some(Termination::BudgetExhausted),
        }
    }
}

/// Assign/update loop parameterized by a representative-update strategy.
#[derive(Debug, Clone)]
pub struct ClusteringEngine<S> {
    strategy: S,
    max_iterations: usize,
}

impl<S: UpdateStrategy + Default> Default for ClusteringEngine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: UpdateStrategy> ClusteringEngine<S> {
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Set the iteration budget. Zero is rejected when the engine runs.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Cluster `points` into `k` groups seeded from the first `k` points.
    pub fn run(&self, points: &[Point], k: usize) -> Result<ClusteringResult> {
        validate_inputs(points, k, self.max_iterations)?;
        Ok(self.execute(points, points[..k].to_vec()))
    }

    /// Cluster `points` starting from explicit seed representatives.
    ///
    /// The cluster count is `seeds.len()`.
    pub fn run_from(&self, points: &[Point], seeds: &[Point]) -> Result<ClusteringResult> {
        validate_inputs(points, seeds.len(), self.max_iterations)?;
        validate_seeds(seeds)?;
        Ok(self.execute(points, seeds.to_vec()))
    }

    fn execute(&self, points: &[Point], representatives: Vec<Point>) -> ClusteringResult {
        let span = info_span!(
            "clustering",
            algorithm = %S::ALGORITHM,
            k = representatives.len(),
            points = points.len(),
            max_iterations = self.max_iterations,
        );
        let _guard = span.enter();

        let mut run = WorkingSet::new(points, representatives);
        let mut state = LoopState::Running;

        for iteration in 0..self.max_iterations {
            state = run.step(&self.strategy, iteration);
            if state == LoopState::Converged {
                break;
            }
        }

        if state == LoopState::Running {
            state = LoopState::BudgetExhausted;
        }

        let termination = state.termination().unwrap_or(Termination::BudgetExhausted);
        info!(
            termination = %termination,
            iterations = run.log.len(),
            "Clustering finished"
        );

        run.into_result(termination)
    }
}

/// Buffers owned by one run. The caller's points are only borrowed.
struct WorkingSet<'a> {
    points: &'a [Point],
    representatives: Vec<Point>,
    assignments: Vec<Option<usize>>,
    log: Vec<IterationRecord>,
}

impl<'a> WorkingSet<'a> {
    fn new(points: &'a [Point], representatives: Vec<Point>) -> Self {
        Self {
            points,
            representatives,
            assignments: vec![None; points.len()],
            log: Vec::new(),
        }
    }

    fn step<S: UpdateStrategy>(&mut self, strategy: &S, iteration: usize) -> LoopState {
        let initial = self.representatives.clone();
        let changed = assign_points(self.points, &self.representatives, &mut self.assignments);

        debug!(iteration, changed, "Assignment pass complete");

        if changed == 0 {
            self.log.push(IterationRecord {
                iteration,
                algorithm: S::ALGORITHM,
                updated: initial.clone(),
                initial,
            });
            return LoopState::Converged;
        }

        update_representatives(
            strategy,
            self.points,
            &self.assignments,
            &mut self.representatives,
        );

        self.log.push(IterationRecord {
            iteration,
            algorithm: S::ALGORITHM,
            initial,
            updated: self.representatives.clone(),
        });
        LoopState::Running
    }

    fn into_result(self, termination: Termination) -> ClusteringResult {
        ClusteringResult {
            // Every point is assigned after the first pass.
            assignments: self
                .assignments
                .into_iter()
                .map(|a| a.unwrap_or_default())
                .collect(),
            representatives: self.representatives,
            termination,
            log: self.log,
        }
    }
}

/// Index of the nearest representative. Strict `<` keeps the lowest index
/// on ties.
pub fn nearest_representative(point: &Point, representatives: &[Point]) -> usize {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;

    for (index, representative) in representatives.iter().enumerate() {
        let distance = euclidean(point, representative);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }

    best_index
}

/// Reassign every point in place and return how many assignments changed.
fn assign_points(
    points: &[Point],
    representatives: &[Point],
    assignments: &mut [Option<usize>],
) -> usize {
    let mut changed = 0;
    for (point, assignment) in points.iter().zip(assignments.iter_mut()) {
        let nearest = Some(nearest_representative(point, representatives));
        if *assignment != nearest {
            *assignment = nearest;
            changed += 1;
        }
    }
    changed
}

/// Recompute representatives with at least one member; empty clusters keep
/// their current value.
fn update_representatives<S: UpdateStrategy>(
    strategy: &S,
    points: &[Point],
    assignments: &[Option<usize>],
    representatives: &mut [Point],
) {
    for (cluster, representative) in representatives.iter_mut().enumerate() {
        let members = members_of(points, assignments, cluster);
        if members.is_empty() {
            debug!(cluster, "Empty cluster keeps its representative");
            continue;
        }
        *representative = strategy.recompute(&members);
    }
}

/// Points assigned to `cluster`, in input order.
fn members_of(points: &[Point], assignments: &[Option<usize>], cluster: usize) -> Vec<Point> {
    points
        .iter()
        .zip(assignments)
        .filter(|(_, assignment)| **assignment == Some(cluster))
        .map(|(point, _)| *point)
        .collect()
}

fn validate_inputs(points: &[Point], k: usize, max_iterations: usize) -> Result<()> {
    if points.is_empty() {
        return Err(ClusteringError::EmptyInput);
    }
    if k == 0 || k > points.len() {
        return Err(ClusteringError::invalid_cluster_count(k, points.len()));
    }
    if max_iterations == 0 {
        return Err(ClusteringError::InvalidIterationBudget);
    }
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(ClusteringError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}

fn validate_seeds(seeds: &[Point]) -> Result<()> {
    match seeds.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(ClusteringError::NonFiniteSeed { index }),
        None => Ok(()),
    }
}

/// Run the selected algorithm with first-`k` seeding.
pub fn run_clustering(
    points: &[Point],
    k: usize,
    algorithm: Algorithm,
    max_iterations: usize,
) -> Result<ClusteringResult> {
    match algorithm {
        Algorithm::KMeans => ClusteringEngine::new(MeanUpdate)
            .with_max_iterations(max_iterations)
            .run(points, k),
        Algorithm::KMedoids => ClusteringEngine::new(MedoidUpdate)
            .with_max_iterations(max_iterations)
            .run(points, k),
    }
}

/// Run the selected algorithm from explicit seed representatives.
pub fn run_with_seeds(
    points: &[Point],
    seeds: &[Point],
    algorithm: Algorithm,
    max_iterations: usize,
) -> Result<ClusteringResult> {
    match algorithm {
        Algorithm::KMeans => ClusteringEngine::new(MeanUpdate)
            .with_max_iterations(max_iterations)
            .run_from(points, seeds),
        Algorithm::KMedoids => ClusteringEngine::new(MedoidUpdate)
            .with_max_iterations(max_iterations)
            .run_from(points, seeds),
    }
}
