//! Generation seeds.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Key driving every pseudo-random draw for one entity's generation.
///
/// A seed is also the entity's identity inside a generated system. The value 0 is
/// reserved for "no seed provided" and is never stored: [`Seed::new`] replaces it
/// with a fresh non-deterministic seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seed(u64);

impl Seed {
    /// Wraps a raw seed value.
    ///
    /// A value of 0 means the caller has no seed; a random one is drawn instead,
    /// so anything generated from it is not reproducible.
    pub fn new(value: u64) -> Self {
        if value == 0 { Self::random() } else { Self(value) }
    }

    /// Draws a fresh seed from the process-wide non-deterministic generator.
    pub fn random() -> Self {
        Self(rand::rng().random_range(1..=u64::MAX))
    }

    /// Derives a seed from an arbitrary name.
    ///
    /// The name is hashed into a v5 UUID so the same name always yields the same
    /// seed.
    pub fn from_name(name: &str) -> Self {
        Self::from_uuid(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()))
    }

    /// Uses the first 8 bytes of a UUID as the seed.
    pub fn from_uuid(id: Uuid) -> Self {
        Self::new(id.as_u64_pair().0)
    }

    /// Interprets user input as a seed.
    ///
    /// Decimal integers are used as-is; anything else is treated as a name.
    ///
    /// ```
    /// use sampling::Seed;
    ///
    /// assert_eq!(Seed::parse("12345").value(), 12345);
    /// assert_eq!(Seed::parse("Kepler"), Seed::parse("Kepler"));
    /// ```
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<u64>() {
            Ok(value) => Self::new(value),
            Err(_) => Self::from_name(trimmed),
        }
    }

    /// Raw seed value (never 0)
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Sibling draw key: `seed + n`, skipping the reserved 0.
    pub fn offset(&self, n: u64) -> Self {
        match self.0.wrapping_add(n) {
            0 => Self(1),
            value => Self(value),
        }
    }

    /// Seed of the `index`th child generation; see [`crate::draw::child_seed`].
    pub fn child(&self, index: u64) -> Self {
        crate::draw::child_seed(*self, index)
    }

    /// Child seed derived from this one; see [`crate::draw::tweak_seed`].
    pub fn tweak(&self) -> Self {
        crate::draw::tweak_seed(*self)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}
