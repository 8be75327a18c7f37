//! Static benchmark registry
//!
//! Explicit name → configuration table. The registry is declared as a const
//! array keyed by `BenchmarkId`; there is no directory scanning and no
//! runtime registration.

use serde::{Deserialize, Serialize};

/// Identifier for a registered benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenchmarkId {
    /// CRC-16-CCITT checksum over a byte buffer
    Crc16,
    /// Lomuto quicksort over a byte buffer
    Quicksort,
    /// Dense n×n matrix multiply
    Matmul,
    /// 1-D softmax over a float vector
    Softmax,
}

impl BenchmarkId {
    /// Canonical string name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crc16 => "crc16",
            Self::Quicksort => "quicksort",
            Self::Matmul => "matmul",
            Self::Softmax => "softmax",
        }
    }

    /// Parse from a string name
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "crc16" | "crc-16" => Some(Self::Crc16),
            "quicksort" | "qsort" => Some(Self::Quicksort),
            "matmul" => Some(Self::Matmul),
            "softmax" => Some(Self::Softmax),
            _ => None,
        }
    }

    /// All registered benchmark ids, in registry order
    #[must_use]
    pub fn all() -> Vec<Self> {
        REGISTRY.iter().map(|spec| spec.id).collect()
    }
}

impl std::fmt::Display for BenchmarkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static configuration for one benchmark
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BenchmarkSpec {
    /// Which benchmark this entry configures
    pub id: BenchmarkId,
    /// Default input size: element count, or matrix dimension for matmul
    pub default_size: usize,
    /// Timed trials per run
    pub trials: usize,
}

/// The full registry, in declaration order
///
/// Default sizes are fixed configuration: a 100k-byte CRC buffer, 10k
/// elements for quicksort and softmax, and 128×128 matmul operands. Trial
/// counts scale inversely with per-trial cost.
pub const REGISTRY: [BenchmarkSpec; 4] = [
    BenchmarkSpec {
        id: BenchmarkId::Crc16,
        default_size: 100_000,
        trials: 100,
    },
    BenchmarkSpec {
        id: BenchmarkId::Quicksort,
        default_size: 10_000,
        trials: 100,
    },
    BenchmarkSpec {
        id: BenchmarkId::Matmul,
        default_size: 128,
        trials: 20,
    },
    BenchmarkSpec {
        id: BenchmarkId::Softmax,
        default_size: 10_000,
        trials: 1_000,
    },
];

/// Look up the registry entry for a benchmark id
#[must_use]
pub fn spec_for(id: BenchmarkId) -> BenchmarkSpec {
    // REGISTRY covers every BenchmarkId variant
    REGISTRY
        .iter()
        .copied()
        .find(|spec| spec.id == id)
        .unwrap_or(REGISTRY[0])
}

/// Look up a registry entry by name
#[must_use]
pub fn find(name: &str) -> Option<BenchmarkSpec> {
    BenchmarkId::parse(name).map(spec_for)
}
