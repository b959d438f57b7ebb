//! Soft warnings raised while assembling a system.
//!
//! Generation never fails; anything surprising is handed to a [`Diagnostics`]
//! sink and the pipeline carries on with its fallback.

use std::fmt;

use sampling::Seed;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The star-count roll fell outside the count table; the system has no stars
    StarCountFallback { roll: i64 },
    /// A star's habitable region is too narrow for any planet slot
    NoOrbitSlots { star: Seed },
    /// A planet or belt strayed past its star's stability limit and was removed
    BodyEjected {
        seed: Seed,
        parent: Seed,
        apoapsis_au: f64,
        limit_au: f64,
    },
    /// A planet or belt strayed past its star's stability limit but orbits both stars
    BodyMadeCircumbinary { seed: Seed, parent: Seed },
    /// A parent seed that no longer resolves to an entity
    UnresolvedParent { seed: Seed, parent: Seed },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::StarCountFallback { roll } => {
                write!(f, "star count roll {roll} outside table, generating no stars")
            }
            Diagnostic::NoOrbitSlots { star } => {
                write!(f, "star {star} has no room for planet orbits")
            }
            Diagnostic::BodyEjected {
                seed,
                parent,
                apoapsis_au,
                limit_au,
            } => write!(
                f,
                "body {seed} ejected from star {parent}: apoapsis {apoapsis_au:.3} AU \
                 beyond stability limit {limit_au:.3} AU"
            ),
            Diagnostic::BodyMadeCircumbinary { seed, parent } => {
                write!(f, "body {seed} left star {parent} for a circumbinary orbit")
            }
            Diagnostic::UnresolvedParent { seed, parent } => {
                write!(f, "entity {seed} refers to missing parent {parent}")
            }
        }
    }
}

/// Receiver for [`Diagnostic`]s.
pub trait Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Logs every diagnostic as a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!(%diagnostic, "system generation");
    }
}

/// Keeps every diagnostic for later inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectingDiagnostics {
    pub entries: Vec<Diagnostic>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}
