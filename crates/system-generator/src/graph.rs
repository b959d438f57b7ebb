use nalgebra::Vector3;
use orbits::{DistanceScale, Orbit};
use sampling::Seed;
use serde::{Deserialize, Serialize};
use units::{Length, Mass, Time};

use crate::config::OrbitsConfig;
use crate::entity::{BeltEntity, BodyEntity, EntityRef, StarEntity};

/// Parent chains longer than this are treated as broken
const MAX_HIERARCHY_DEPTH: usize = 8;

/// Layout of a multi-star system.
///
/// The primary and secondary orbit their shared barycenter. A third star is
/// placed on a circular orbit at its recorded separation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryConfiguration {
    pub primary: Seed,
    pub secondary: Seed,
    /// Distance between primary and secondary (semi-major axis of the relative orbit)
    pub separation: Length,
    pub eccentricity: f64,
    /// Widest stable planet orbit around the primary
    pub primary_limit: Length,
    /// Widest stable planet orbit around the secondary
    pub secondary_limit: Length,
    /// Tightest stable orbit around both stars
    pub circumbinary_limit: Length,
    pub tertiary: Option<Seed>,
    pub tertiary_separation: Option<Length>,
}

impl BinaryConfiguration {
    /// Widest stable planet orbit around `star`, if it is one of the pair
    pub fn limit_for(&self, star: Seed) -> Option<Length> {
        if star == self.primary {
            Some(self.primary_limit)
        } else if star == self.secondary {
            Some(self.secondary_limit)
        } else {
            None
        }
    }
}

/// A finished (or partially built) star system.
///
/// Entities live in flat lists and refer to each other through parent seeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemGraph {
    pub seed: Seed,
    pub name: String,
    pub age: Time,
    /// Ordered by descending mass once generated
    pub stars: Vec<StarEntity>,
    pub bodies: Vec<BodyEntity>,
    pub belts: Vec<BeltEntity>,
    pub binary: Option<BinaryConfiguration>,
}

impl SystemGraph {
    pub fn new(seed: Seed, name: impl Into<String>) -> Self {
        Self {
            seed,
            name: name.into(),
            age: Time::zero(),
            stars: Vec::new(),
            bodies: Vec::new(),
            belts: Vec::new(),
            binary: None,
        }
    }

    pub fn lookup(&self, seed: Seed) -> Option<EntityRef<'_>> {
        if let Some(star) = self.stars.iter().find(|s| s.base.seed == seed) {
            return Some(EntityRef::Star(star));
        }
        if let Some(body) = self.bodies.iter().find(|b| b.base.seed == seed) {
            return Some(EntityRef::Body(body));
        }
        self.belts
            .iter()
            .find(|b| b.base.seed == seed)
            .map(EntityRef::Belt)
    }

    pub fn contains(&self, seed: Seed) -> bool {
        self.lookup(seed).is_some()
    }

    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        self.stars
            .iter()
            .map(EntityRef::Star)
            .chain(self.bodies.iter().map(EntityRef::Body))
            .chain(self.belts.iter().map(EntityRef::Belt))
    }

    pub fn star(&self, seed: Seed) -> Option<&StarEntity> {
        self.stars.iter().find(|s| s.base.seed == seed)
    }

    pub fn body(&self, seed: Seed) -> Option<&BodyEntity> {
        self.bodies.iter().find(|b| b.base.seed == seed)
    }

    pub fn planets(&self) -> impl Iterator<Item = &BodyEntity> {
        self.bodies.iter().filter(|b| b.is_planet())
    }

    pub fn moons(&self) -> impl Iterator<Item = &BodyEntity> {
        self.bodies.iter().filter(|b| b.is_moon())
    }

    /// Planets whose parent is `star`
    pub fn planets_of(&self, star: Seed) -> impl Iterator<Item = &BodyEntity> {
        self.planets()
            .filter(move |b| b.base.parent_seed == Some(star))
    }

    /// Planets orbiting the barycenter
    pub fn circumbinary_planets(&self) -> impl Iterator<Item = &BodyEntity> {
        self.planets().filter(|b| b.base.parent_seed.is_none())
    }

    pub fn moons_of(&self, planet: Seed) -> impl Iterator<Item = &BodyEntity> {
        self.moons()
            .filter(move |b| b.base.parent_seed == Some(planet))
    }

    pub fn belts_of(&self, star: Seed) -> impl Iterator<Item = &BeltEntity> {
        self.belts
            .iter()
            .filter(move |b| b.base.parent_seed == Some(star))
    }

    pub fn total_stellar_mass(&self) -> Mass {
        self.stars.iter().map(|s| s.base.mass).sum()
    }

    /// The star at the top of `seed`'s parent chain, if there is one.
    pub fn host_star(&self, seed: Seed) -> Option<&StarEntity> {
        let mut current = seed;
        for _ in 0..MAX_HIERARCHY_DEPTH {
            match self.lookup(current)? {
                EntityRef::Star(star) => return Some(star),
                entity => current = entity.base().parent_seed?,
            }
        }
        None
    }

    /// Returns `candidate`, or the next free seed after it.
    pub fn unique_seed(&self, candidate: Seed) -> Seed {
        let mut seed = candidate;
        while self.contains(seed) {
            seed = seed.offset(1);
        }
        seed
    }

    /// Mass that `seed` effectively orbits.
    ///
    /// Barycentric orbits see the whole stellar mass, except the stars of a
    /// binary pair, which each see `m_other³ / (m_a + m_b)²` so that both
    /// share the pair's period.
    pub fn parent_mass(&self, seed: Seed) -> Option<Mass> {
        let entity = self.lookup(seed)?;
        match entity.base().parent_seed {
            Some(parent) => Some(
                self.lookup(parent)
                    .map_or_else(|| self.total_stellar_mass(), |p| p.mass()),
            ),
            None => Some(self.barycentric_mass(seed)),
        }
    }

    fn barycentric_mass(&self, seed: Seed) -> Mass {
        let pair = self.binary.as_ref().and_then(|binary| {
            let other = if seed == binary.primary {
                binary.secondary
            } else if seed == binary.secondary {
                binary.primary
            } else {
                return None;
            };
            Some((self.star(seed)?.base.mass, self.star(other)?.base.mass))
        });

        match pair {
            Some((own, other)) => {
                let total = (own + other).to_solar_masses();
                Mass::from_solar_masses(other.to_solar_masses().powi(3) / total.powi(2))
            }
            None => self.total_stellar_mass(),
        }
    }

    /// Orbit of `seed` bound to its effective parent mass
    pub fn orbit_of(&self, seed: Seed) -> Option<Orbit> {
        let entity = self.lookup(seed)?;
        Some(Orbit::new(entity.base().orbit, self.parent_mass(seed)?))
    }

    /// Position of `seed` relative to its parent at `time` since epoch 0
    pub fn position_of(
        &self,
        seed: Seed,
        time: Time,
        scale: DistanceScale,
    ) -> Option<Vector3<f64>> {
        Some(self.orbit_of(seed)?.position_at(time, scale))
    }

    /// `samples` points around the orbit of `seed`, relative to its parent
    pub fn orbit_path(
        &self,
        seed: Seed,
        samples: usize,
        scale: DistanceScale,
    ) -> Option<Vec<Vector3<f64>>> {
        Some(self.orbit_of(seed)?.path(samples, scale))
    }

    /// Sampled orbit path of every entity, using the configured sample count
    /// and distance scale
    pub fn orbit_paths(&self, config: &OrbitsConfig) -> Vec<(Seed, Vec<Vector3<f64>>)> {
        self.entities()
            .filter_map(|entity| {
                let seed = entity.seed();
                Some((seed, self.orbit_path(seed, config.path_samples, config.scale)?))
            })
            .collect()
    }
}
