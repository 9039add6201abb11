//=========================================================================
// Harvest: Binary Entry Point
//
// Usage:
//   harvest [courier|stalker]
//
// `courier` (default) runs the timed delivery game, `stalker` the walking
// figure in the furnished room. Set RUST_LOG to change verbosity; HUD
// lines are logged under the `hud` target.
//
//=========================================================================

use std::process::ExitCode;

use harvest_engine::prelude::*;
use log::{error, info};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let demo = std::env::args().nth(1).unwrap_or_else(|| String::from("courier"));

    let engine = match demo.as_str() {
        "courier" => CourierScene::new(CourierConfig::default())
            .map(|scene| build("Harvest - Courier").init(|systems| systems.set_scene(scene))),
        "stalker" => StalkerScene::new(StalkerConfig::default())
            .map(|scene| build("Harvest - Stalker").init(|systems| systems.set_scene(scene))),
        other => {
            error!("Unknown demo '{}', expected 'courier' or 'stalker'", other);
            return ExitCode::from(2);
        }
    };

    let engine = match engine {
        Ok(engine) => engine,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return ExitCode::from(2);
        }
    };

    info!("Controls: WASD/arrows move, Space interacts, R restarts");

    match engine.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn build(title: &str) -> Engine {
    EngineBuilder::new().with_title(title).build()
}
