//! Planet census across many systems, as CSV
//!
//! Usage: cargo run -p system-generator --example planet_census > planets.csv
//!
//! Output: one row per planet

use sampling::Seed;
use system_generator::{CollectingDiagnostics, GeneratorConfig, SystemAssembler};

fn main() {
    let config = GeneratorConfig::default();
    let n_systems = 1000;

    // CSV header
    println!(
        "system,planet,stars,mass_earth,radius_earth,sma_au,ecc,inc_deg,eq_temp_k,class,atmosphere,moons"
    );

    for system_id in 1..=n_systems {
        let mut diagnostics = CollectingDiagnostics::new();
        let system =
            SystemAssembler::new(Seed::new(system_id), config.clone()).run(&mut diagnostics);

        for planet in system.planets() {
            let dominant = planet
                .body
                .atmosphere
                .dominant()
                .map(|element| element.to_string())
                .unwrap_or_else(|| "none".to_string());
            println!(
                "{},{},{},{:.4},{:.4},{:.4},{:.4},{:.2},{:.0},{},{},{}",
                system.name,
                planet.base.name,
                system.stars.len(),
                planet.base.mass.to_earth_masses(),
                planet.body.radius.to_earth_radii(),
                planet.base.orbit.semi_major_axis_au(),
                planet.base.orbit.eccentricity(),
                planet.base.orbit.inclination(),
                planet.body.equilibrium_temperature.to_kelvin(),
                planet.body.class,
                dominant,
                system.moons_of(planet.base.seed).count(),
            );
        }
    }

    eprintln!("Generated planets from {} systems", n_systems);
}
