//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for all game subsystems running on the logic
// (non-platform) thread.
//
// Responsibilities:
// - Own GlobalSystems (input, scene, HUD) and the shared GameContext
// - Receive platform events via a crossbeam channel
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Freeze the game while the window is hidden
//
// Notes:
// The orchestrator runs independently from the platform layer. All game
// state lives on the logic thread; communication with the platform occurs
// only through message passing.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::Receiver;
use log::{info, trace};

//=== Submodules ==========================================================
pub mod carry;
pub mod error;
pub mod events;
pub mod globals;
pub mod hud;
pub mod input;
pub mod movement;
pub mod patrol;
pub mod platform_bridge;
pub mod scene;
pub mod scheduler;
pub mod session;

//=== Internal Modules ====================================================
use globals::{GameContext, GlobalSystems};
use platform_bridge::{EventCollector, PlatformEvent, TickControl};

//=== CoreSystemsOrchestrator =============================================
//
// Manages the lifetime and update scheduling of all core systems.
//
pub(crate) struct CoreSystemsOrchestrator {
    systems: GlobalSystems,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Initializes all core systems but does not yet start the logic thread.
    //
    pub fn new() -> Self {
        Self {
            systems: GlobalSystems::new(),
        }
    }

    //--- init_systems() --------------------------------------------------
    //
    // Gives the application one chance to configure systems (bindings,
    // scene) before the logic thread takes ownership.
    //
    pub fn init_systems<F>(&mut self, init_fn: F)
    where
        F: FnOnce(&mut GlobalSystems),
    {
        init_fn(&mut self.systems);
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the main logic thread responsible for ticking all core systems
    // at a fixed update frequency (TPS - ticks per second).
    //
    // Each tick:
    //  1. Collects platform events
    //  2. Applies visibility changes
    //  3. Updates systems (skipped while hidden)
    //  4. Sleeps to maintain fixed pacing
    //  5. Exits cleanly when a shutdown signal is received
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let frame_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut systems = self.systems;
            let mut context = GameContext::new(frame_duration);
            let mut collector = EventCollector::new(receiver);

            loop {
                let frame_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting.");
                    break;
                }

                //--- Step 2: Visibility ------------------------------------
                if let Some(visible) = collector.visibility() {
                    systems.set_visible(visible, &mut context);
                }

                //--- Step 3: Update systems --------------------------------
                if context.is_visible() {
                    context.frame_events = collector.take_batches();
                    systems.update(&mut context);
                }

                //--- Step 4: Maintain deterministic pacing ----------------
                let elapsed = frame_start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                } else {
                    trace!("Tick overran by {:?}", elapsed - frame_duration);
                }
            }
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputEvent, KeyCode};
    use crate::core::scene::{CourierConfig, CourierScene};
    use crossbeam_channel::unbounded;

    #[test]
    fn init_systems_configures_before_spawn() {
        let mut orchestrator = CoreSystemsOrchestrator::new();
        orchestrator.init_systems(|systems| {
            systems.input.unbind_key(KeyCode::KeyR);
            systems.set_scene(CourierScene::new(CourierConfig::default()).unwrap());
        });

        assert_eq!(orchestrator.systems.scene_name(), Some("courier"));
        assert_eq!(orchestrator.systems.input.binding(KeyCode::KeyR), None);
    }

    #[test]
    fn core_thread_exits_on_window_closed() {
        let (tx, rx) = unbounded();
        let mut orchestrator = CoreSystemsOrchestrator::new();
        orchestrator.init_systems(|systems| {
            systems.set_scene(CourierScene::new(CourierConfig::default()).unwrap());
        });

        let handle = orchestrator.spawn_core_thread(rx, 240.0);
        tx.send(PlatformEvent::Inputs(vec![InputEvent::KeyDown(KeyCode::KeyW)])).unwrap();
        tx.send(PlatformEvent::VisibilityChanged(false)).unwrap();
        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert!(handle.join().is_ok());
    }

    #[test]
    fn core_thread_exits_on_disconnect() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let handle = CoreSystemsOrchestrator::new().spawn_core_thread(rx, 240.0);
        drop(tx);

        assert!(handle.join().is_ok());
    }
}
