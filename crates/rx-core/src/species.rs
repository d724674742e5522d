//! Chemical species tag shared by particle storage, summaries, and output.
//!
//! `Species` is the payload-free discriminant of a particle kind.  The
//! per-kind state (methyl count, remaining lifetime) lives on
//! `rx_particle::ParticleKind`; this enum is what gets written to CSV columns
//! and log lines.

/// Which of the three particle families a particle belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    /// Ammonia and its methylated derivatives, up to the quaternary cation.
    Amine,
    /// The methylating agent (CH₃Cl).
    MethylHalide,
    /// Short-lived reaction byproduct (HCl).
    HydrogenChloride,
}

impl Species {
    /// Machine-readable label, used for CSV/SQLite column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Amine            => "amine",
            Species::MethylHalide     => "methyl_halide",
            Species::HydrogenChloride => "hydrogen_chloride",
        }
    }

    /// Molecular formula as shown in the flask legend.
    pub fn formula(self) -> &'static str {
        match self {
            Species::Amine            => "NH₃",
            Species::MethylHalide     => "CH₃Cl",
            Species::HydrogenChloride => "HCl",
        }
    }

    /// `true` for species that are only ever created as a byproduct.
    #[inline]
    pub fn is_transient(self) -> bool {
        matches!(self, Species::HydrogenChloride)
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
