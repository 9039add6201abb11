//=========================================================================
// Harvest Engine: Library Root
//
// Timed pickup-and-delivery game core plus a walking-figure controller,
// driven by a fixed-tick logic thread behind a winit window.
//
// Responsibilities:
// - Expose the engine facade (`EngineBuilder`, `Engine`)
// - Expose the game core (`core`) for scenes and tests
// - Keep the winit layer (`platform`) hidden from users
//
// Typical usage:
// ```no_run
// use harvest_engine::prelude::*;
//
// let scene = CourierScene::new(CourierConfig::default()).unwrap();
// EngineBuilder::new()
//     .build()
//     .init(|systems| systems.set_scene(scene))
//     .run()
//     .unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the game state machines, input, scheduling and scenes.
// `prelude` re-exports the commonly used types.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit integration and is kept private.
// `engine` defines the entry point and runtime wiring.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
