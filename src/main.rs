//! impulse3d - headless host loop
//!
//! Loads configuration, drives the simulation at a fixed time step and
//! reports body state through the log.

use impulse3d::config::AppConfig;
use impulse3d::systems::{LogCollector, RenderList, Simulation};

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging; RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting impulse3d");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut simulation = Simulation::from_config(&config);
    if let Err(e) = simulation.init() {
        log::error!("Failed to initialize simulation: {}", e);
        std::process::exit(1);
    }

    let dt = config.simulation.timestep;
    let report_interval = config.debug.report_interval;
    let mut collector = LogCollector::new();

    for frame in 1..=config.simulation.frames {
        simulation.update(dt);

        if report_interval > 0 && frame % report_interval == 0 {
            log::debug!("Frame {}", frame);
            simulation.render(&mut collector);
        }
    }

    let mut final_state = RenderList::new();
    simulation.render(&mut final_state);
    for item in final_state.items() {
        log::info!(
            "{:?} {:?} at ({:.3}, {:.3}, {:.3})",
            item.key, item.kind, item.position.x, item.position.y, item.position.z
        );
    }
    log::info!(
        "Ran {} frames at dt={:.4}s, {} render items submitted",
        simulation.frame(),
        dt,
        collector.submitted()
    );

    simulation.cleanup();
}
