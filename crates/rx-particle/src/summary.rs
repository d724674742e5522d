//! Population counts per semantic bucket.

use std::fmt;

use crate::ParticleKind;

const BUCKETS: usize = ParticleKind::MAX_METHYL as usize + 1;

/// Counts of each species, with amines split by methyl count.
///
/// Produced by [`Population::summary`](crate::Population::summary).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationSummary {
    /// `amines[m]` = amines carrying `m` methyl groups.
    pub amines:            [usize; BUCKETS],
    pub methyl_halides:    usize,
    pub hydrogen_chloride: usize,
}

impl PopulationSummary {
    /// Chemical labels for the amine buckets, in methyl-count order.
    pub const AMINE_LABELS: [&'static str; BUCKETS] =
        ["NH₃", "CH₃NH₂", "(CH₃)₂NH", "(CH₃)₃N", "(CH₃)₄N⁺"];

    pub fn amine_total(&self) -> usize {
        self.amines.iter().sum()
    }

    /// Quaternary cations, the end of the methylation chain.
    pub fn quaternary(&self) -> usize {
        self.amines[BUCKETS - 1]
    }

    /// Methyl groups currently attached to amines.
    pub fn methyl_groups(&self) -> usize {
        self.amines.iter().enumerate().map(|(m, n)| m * n).sum()
    }

    /// Methyl groups anywhere in the flask: attached plus still on a halide.
    /// Constant over a run, since each reaction moves exactly one.
    pub fn methyl_inventory(&self) -> usize {
        self.methyl_groups() + self.methyl_halides
    }

    pub fn total(&self) -> usize {
        self.amine_total() + self.methyl_halides + self.hydrogen_chloride
    }
}

impl fmt::Display for PopulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, n) in Self::AMINE_LABELS.iter().zip(self.amines) {
            write!(f, "{label}: {n}  ")?;
        }
        write!(f, "CH₃Cl: {}  HCl: {}", self.methyl_halides, self.hydrogen_chloride)
    }
}
