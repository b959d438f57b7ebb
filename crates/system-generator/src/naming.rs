//! System, star, planet, moon and belt names.
//!
//! Stars are lettered by descending mass (`KV-4729 A`, `KV-4729 B`). Planets
//! take lowercase suffixes under their star (`KV-4729 A a`), or under the pair
//! letters when they orbit both stars (`KV-4729 AB a`). Moons are numbered
//! under their planet and belts under their star. Custom names are left alone
//! and do not use up a suffix.

use std::collections::HashMap;

use sampling::Seed;

use crate::entity::BaseEntity;
use crate::graph::SystemGraph;

/// Catalog designation derived from a seed, e.g. `"KV-4729"`.
///
/// Two letters from the first two bytes and a four-digit number from the
/// next two, reading the seed big-endian.
pub fn catalog_name(seed: Seed) -> String {
    let bytes = seed.value().to_be_bytes();

    let prefix1 = (b'A' + (bytes[0] % 26)) as char;
    let prefix2 = (b'A' + (bytes[1] % 26)) as char;
    let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;

    format!("{}{}-{:04}", prefix1, prefix2, number)
}

/// Uppercase letters for star rank `index`: A, B, …, Z, AA, AB, …
pub fn star_letter(index: usize) -> String {
    bijective_base26(index, b'A')
}

/// Lowercase suffix for planet rank `index`: a, b, …, z, aa, ab, …
pub fn planet_suffix(index: usize) -> String {
    bijective_base26(index, b'a')
}

fn bijective_base26(index: usize, first: u8) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push((first + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.iter().rev().collect()
}

/// Names every entity in `graph` that does not carry a custom name.
pub fn assign_names(graph: &mut SystemGraph) {
    let system_name = graph.name.clone();
    let mut names: HashMap<Seed, String> = HashMap::new();

    // Stars
    let mut order: Vec<usize> = (0..graph.stars.len()).collect();
    order.sort_by(|&a, &b| descending_mass(&graph.stars[a].base, &graph.stars[b].base));
    let mut rank = 0;
    for &i in &order {
        let base = &mut graph.stars[i].base;
        if !base.custom_name {
            base.name = format!("{} {}", system_name, star_letter(rank));
            rank += 1;
        }
        names.insert(base.seed, base.name.clone());
    }
    let pair_prefix = match order.as_slice() {
        [first, second, ..] => format!(
            "{} {}{}",
            system_name,
            letter_of(&graph.stars[*first].base.name),
            letter_of(&graph.stars[*second].base.name)
        ),
        _ => system_name.clone(),
    };

    // Planets, grouped by parent star
    let star_seeds: Vec<Seed> = order.iter().map(|&i| graph.stars[i].base.seed).collect();
    let planet_indices: Vec<usize> = (0..graph.bodies.len())
        .filter(|&i| graph.bodies[i].is_planet())
        .collect();

    let mut groups: Vec<(String, Vec<usize>)> = star_seeds
        .iter()
        .map(|seed| {
            let members = planet_indices
                .iter()
                .copied()
                .filter(|&i| graph.bodies[i].base.parent_seed == Some(*seed))
                .collect();
            (names.get(seed).cloned().unwrap_or_default(), members)
        })
        .collect();
    let barycentric = planet_indices
        .iter()
        .copied()
        .filter(|&i| {
            graph.bodies[i]
                .base
                .parent_seed
                .is_none_or(|parent| !star_seeds.contains(&parent))
        })
        .collect();
    groups.push((pair_prefix, barycentric));

    for (prefix, mut members) in groups {
        members.sort_by(|&a, &b| descending_mass(&graph.bodies[a].base, &graph.bodies[b].base));
        let mut rank = 0;
        for i in members {
            let base = &mut graph.bodies[i].base;
            if !base.custom_name {
                base.name = format!("{} {}", prefix, planet_suffix(rank));
                rank += 1;
            }
            names.insert(base.seed, base.name.clone());
        }
    }

    // Moons, grouped by parent planet
    let mut moons: Vec<usize> = (0..graph.bodies.len())
        .filter(|&i| graph.bodies[i].is_moon())
        .collect();
    moons.sort_by(|&a, &b| descending_mass(&graph.bodies[a].base, &graph.bodies[b].base));
    let mut moon_ranks: HashMap<Seed, usize> = HashMap::new();
    for i in moons {
        let base = &mut graph.bodies[i].base;
        if base.custom_name {
            continue;
        }
        let Some((parent, parent_name)) = base
            .parent_seed
            .and_then(|p| names.get(&p).map(|name| (p, name)))
        else {
            continue;
        };
        let rank = moon_ranks.entry(parent).or_insert(0);
        *rank += 1;
        base.name = format!("{} {}", parent_name, rank);
    }

    // Belts, numbered per star
    let mut belt_ranks: HashMap<Option<Seed>, usize> = HashMap::new();
    for belt in &mut graph.belts {
        let base = &mut belt.base;
        if base.custom_name {
            continue;
        }
        let prefix = base
            .parent_seed
            .and_then(|p| names.get(&p))
            .cloned()
            .unwrap_or_else(|| system_name.clone());
        let rank = belt_ranks.entry(base.parent_seed).or_insert(0);
        *rank += 1;
        base.name = format!("{} Belt {}", prefix, rank);
    }
}

fn descending_mass(a: &BaseEntity, b: &BaseEntity) -> std::cmp::Ordering {
    b.mass.partial_cmp(&a.mass).unwrap_or(std::cmp::Ordering::Equal)
}

/// Trailing designation of a star name (`"KV-4729 B"` → `"B"`)
fn letter_of(name: &str) -> &str {
    name.rsplit(' ').next().unwrap_or(name)
}
