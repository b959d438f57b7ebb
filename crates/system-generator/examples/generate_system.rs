//! Generates one system and prints it as JSON.
//!
//! ```text
//! cargo run -p system-generator --example generate_system -- [SEED] [CONFIG.toml]
//! ```
//!
//! The seed may be an integer or any name. Logs go to stderr; set `RUST_LOG`
//! to adjust the filter and `LOG_FORMAT=json` for structured output.

use sampling::Seed;
use system_generator::{GeneratorConfig, SystemAssembler, TracingDiagnostics};
use tracing::info;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let seed = args.next().map_or_else(Seed::random, |input| Seed::parse(&input));
    let config = match args.next() {
        Some(path) => GeneratorConfig::load_or_default(path),
        None => GeneratorConfig::default(),
    };

    let system = SystemAssembler::new(seed, config).run(&mut TracingDiagnostics);
    info!(
        %seed,
        name = %system.name,
        stars = system.stars.len(),
        planets = system.planets().count(),
        moons = system.moons().count(),
        belts = system.belts.len(),
        age_gyr = system.age.to_gyr(),
        "generated system"
    );

    println!("{}", serde_json::to_string_pretty(&system)?);
    Ok(())
}
