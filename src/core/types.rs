use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Representative-update rule applied by the clustering engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    /// Centroids: coordinate-wise mean of the assigned points
    #[default]
    #[serde(rename = "kmeans", alias = "mean")]
    KMeans,
    /// Medoids: the assigned point with minimal total distance to the rest
    #[serde(rename = "kmedoids", alias = "medoid")]
    KMedoids,
}

impl Algorithm {
    /// Tag written into iteration records and reports.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::KMeans => "kmeans",
            Self::KMedoids => "kmedoids",
        }
    }

    /// Plural name of the representatives this algorithm produces.
    pub const fn representative_label(&self) -> &'static str {
        match self {
            Self::KMeans => "Centroids",
            Self::KMedoids => "Medoids",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::KMeans => "KMeans",
            Self::KMedoids => "KMedoids",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kmeans" | "mean" => Ok(Self::KMeans),
            "kmedoids" | "medoid" => Ok(Self::KMedoids),
            other => Err(format!(
                "Unknown algorithm '{}': expected kmeans or kmedoids",
                other
            )),
        }
    }
}

/// Terminal state of a clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// An assignment pass produced no change
    Converged,
    /// The iteration budget ran out while assignments were still moving
    BudgetExhausted,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converged => write!(f, "converged"),
            Self::BudgetExhausted => write!(f, "budget exhausted"),
        }
    }
}
