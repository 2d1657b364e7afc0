//! Representative-update strategies.
//!
//! The engine owns the assign/converge/log loop; a strategy only decides
//! where a cluster's representative moves given its current members.

use crate::core::{Algorithm, Point};

/// Rule for recomputing a representative from the points assigned to it.
///
/// `members` is never empty and lists the assigned points in input order.
/// Clusters without members are skipped by the engine and keep their
/// previous representative.
pub trait UpdateStrategy {
    /// Algorithm tag recorded in every iteration record.
    const ALGORITHM: Algorithm;

    fn recompute(&self, members: &[Point]) -> Point;
}
