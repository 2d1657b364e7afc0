//! Property-based tests for the assign/update loop
//!
//! These tests verify invariants that should hold for all inputs:
//! - Runs are deterministic
//! - Every point is assigned to a valid representative
//! - The iteration log is chained and consistent with the termination
//! - KMeans never increases the within-cluster squared distance
//! - Medoids are always members of the input
//! - Re-running from converged representatives changes nothing

use kcluster::clustering::distance::{euclidean, euclidean_squared};
use kcluster::clustering::nearest_representative;
use kcluster::{run_clustering, run_with_seeds, Algorithm, Point, Termination};
use proptest::prelude::*;

const MAX_ITERATIONS: usize = 200;

/// Integer-valued coordinates keep distances exact enough for equality checks
fn point() -> impl Strategy<Value = Point> {
    (-100i32..=100, -100i32..=100).prop_map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
}

/// A non-empty point set together with a valid cluster count
fn points_and_k() -> impl Strategy<Value = (Vec<Point>, usize)> {
    prop::collection::vec(point(), 1..40).prop_flat_map(|points| {
        let n = points.len();
        (Just(points), 1..=n)
    })
}

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop_oneof![Just(Algorithm::KMeans), Just(Algorithm::KMedoids)]
}

/// Sum of squared distances from every point to its nearest representative
fn nearest_squared_cost(points: &[Point], representatives: &[Point]) -> f64 {
    points
        .iter()
        .map(|p| {
            representatives
                .iter()
                .map(|r| euclidean_squared(p, r))
                .fold(f64::INFINITY, f64::min)
        })
        .sum()
}

proptest! {
    #[test]
    fn prop_runs_are_deterministic(
        (points, k) in points_and_k(),
        algorithm in algorithm(),
    ) {
        let first = run_clustering(&points, k, algorithm, MAX_ITERATIONS).unwrap();
        let second = run_clustering(&points, k, algorithm, MAX_ITERATIONS).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_every_point_is_assigned(
        (points, k) in points_and_k(),
        algorithm in algorithm(),
    ) {
        let result = run_clustering(&points, k, algorithm, MAX_ITERATIONS).unwrap();

        prop_assert_eq!(result.assignments.len(), points.len());
        prop_assert_eq!(result.representatives.len(), k);
        prop_assert!(result.assignments.iter().all(|&a| a < k));
        prop_assert_eq!(result.cluster_sizes().iter().sum::<usize>(), points.len());
    }

    #[test]
    fn prop_log_is_consistent_with_termination(
        (points, k) in points_and_k(),
        algorithm in algorithm(),
        budget in 1usize..6,
    ) {
        let result = run_clustering(&points, k, algorithm, budget).unwrap();

        prop_assert!(!result.log.is_empty());
        prop_assert!(result.log.len() <= budget);
        for (index, record) in result.log.iter().enumerate() {
            prop_assert_eq!(record.iteration, index);
            prop_assert_eq!(record.algorithm, algorithm);
            prop_assert_eq!(record.initial.len(), k);
            prop_assert_eq!(record.updated.len(), k);
        }
        for pair in result.log.windows(2) {
            prop_assert_eq!(&pair[0].updated, &pair[1].initial);
        }

        let last = result.final_record().unwrap();
        prop_assert_eq!(&last.updated, &result.representatives);
        match result.termination {
            Termination::Converged => prop_assert!(last.is_stable()),
            Termination::BudgetExhausted => prop_assert_eq!(result.log.len(), budget),
        }
    }

    #[test]
    fn prop_converged_assignments_are_nearest(
        (points, k) in points_and_k(),
        algorithm in algorithm(),
    ) {
        let result = run_clustering(&points, k, algorithm, MAX_ITERATIONS).unwrap();
        prop_assume!(result.is_converged());

        for (point, &assigned) in points.iter().zip(&result.assignments) {
            prop_assert_eq!(
                assigned,
                nearest_representative(point, &result.representatives)
            );
        }
    }

    #[test]
    fn prop_kmeans_cost_never_increases((points, k) in points_and_k()) {
        let result = run_clustering(&points, k, Algorithm::KMeans, MAX_ITERATIONS).unwrap();

        let mut previous = nearest_squared_cost(&points, &result.log[0].initial);
        for record in &result.log {
            let cost = nearest_squared_cost(&points, &record.updated);
            prop_assert!(
                cost <= previous + 1e-6 * previous.max(1.0),
                "cost rose from {} to {} at iteration {}",
                previous,
                cost,
                record.iteration
            );
            previous = cost;
        }
    }

    #[test]
    fn prop_medoids_are_input_points(
        (points, k) in points_and_k(),
        budget in 1usize..10,
    ) {
        let result = run_clustering(&points, k, Algorithm::KMedoids, budget).unwrap();

        for record in &result.log {
            for medoid in &record.updated {
                prop_assert!(points.contains(medoid));
            }
        }
    }

    #[test]
    fn prop_medoid_minimizes_cluster_distance((points, k) in points_and_k()) {
        let result = run_clustering(&points, k, Algorithm::KMedoids, MAX_ITERATIONS).unwrap();
        prop_assume!(result.is_converged());

        for (cluster, members) in result.clusters().iter().enumerate() {
            if members.is_empty() {
                continue;
            }
            let medoid = result.representatives[cluster];
            let cost = |candidate: &Point| -> f64 {
                members.iter().map(|&i| euclidean(&points[i], candidate)).sum()
            };
            let medoid_cost = cost(&medoid);
            for &i in members {
                prop_assert!(medoid_cost <= cost(&points[i]) + 1e-9);
            }
        }
    }

    #[test]
    fn prop_rerun_from_converged_state_is_idempotent(
        (points, k) in points_and_k(),
        algorithm in algorithm(),
    ) {
        let first = run_clustering(&points, k, algorithm, MAX_ITERATIONS).unwrap();
        prop_assume!(first.is_converged());

        let second =
            run_with_seeds(&points, &first.representatives, algorithm, MAX_ITERATIONS).unwrap();

        prop_assert_eq!(&second.assignments, &first.assignments);
        prop_assert_eq!(&second.representatives, &first.representatives);
        prop_assert_eq!(second.termination, Termination::Converged);
        prop_assert_eq!(second.iterations(), 2);
        prop_assert!(second.log.iter().all(|record| record.is_stable()));
    }
}
