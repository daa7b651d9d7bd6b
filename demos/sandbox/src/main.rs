//! Sandbox driver — composes a small entity population and runs the cycle.
//!
//! The runtime core owns no loop and no clock; this binary plays the role of
//! the surrounding application:
//!
//! 1. Own one [`Manager`].
//! 2. Create entities and compose them by attaching components.
//! 3. Call `update()` then `render()` once per cycle.
//! 4. Call `clean()` whenever it decides to reap.
//!
//! Usage: `sandbox [cycles]` (defaults to 5 cycles). Set `RUST_LOG=trace`
//! to see per-component render output.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use components::{Label, Position};
use tessera_scene::Manager;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sandbox=info".parse()?))
        .init();

    let cycles: u32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(5);

    let mut manager = Manager::new();

    // A player that drifts up-right, with a name tag.
    let player = manager.add_entity();
    player.attach(Position::with_velocity(1.0, 0.5))?;
    player.attach(Label::new("player"))?;
    let player_id = player.id();

    // A drone that drifts left and gets retired halfway through.
    let drone = manager.add_entity();
    drone.attach(Position::with_velocity(-0.25, 0.0))?;
    drone.attach(Label::new("drone"))?;
    let drone_id = drone.id();

    info!(entities = manager.entity_count(), cycles, "scene composed");

    for cycle in 0..cycles {
        manager.update();
        manager.render();

        if cycle == cycles / 2 {
            if let Some(drone) = manager.get_mut(drone_id) {
                drone.destroy();
            }
            manager.clean();
            info!(cycle, entities = manager.entity_count(), "drone reaped");
        }
    }

    if let Some(player) = manager.get(player_id) {
        let position = player.get::<Position>()?;
        info!(
            name = player.get::<Label>()?.name(),
            x = position.x(),
            y = position.y(),
            "final position"
        );
    }

    info!("sandbox shut down");
    Ok(())
}
