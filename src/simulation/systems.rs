use bevy::prelude::*;

use crate::plugins::seeded_rng::GlobalRng;
use crate::simulation::clock::SimulationClock;
use crate::simulation::config::SimulationConfig;

/// Hands a changed configuration to the clock. Rejected configurations are
/// logged and the clock keeps running with the previous one.
pub fn apply_config(
    config: Res<SimulationConfig>,
    mut clock: ResMut<SimulationClock>,
    mut rng: ResMut<GlobalRng>,
) {
    match clock.configure(&config, &mut rng.0) {
        Ok(()) => info!(
            "Applied config: mode {}, size {}, interval {:.1}s, hide dead cells {}",
            config.mode.label(),
            config.size,
            config.interval,
            config.hide_dead_cells
        ),
        Err(err) => warn!("Rejected config: {err}"),
    }
}

/// Per-frame driver. The clock is only marked changed when a generation was
/// actually produced, so rendering runs once per generation.
pub fn advance_simulation(time: Res<Time>, mut clock: ResMut<SimulationClock>) {
    let elapsed = time.elapsed_secs_f64();

    let Some(population) = clock
        .bypass_change_detection()
        .tick(elapsed)
        .map(|snapshot| snapshot.population())
    else {
        return;
    };

    clock.set_changed();
    debug!(
        "Generation {}: {} live cells",
        clock.generation(),
        population
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::clock::Snapshot;
    use crate::simulation::config::DimensionMode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app(config: SimulationConfig) -> App {
        let mut app = App::new();
        app.insert_resource(config)
            .insert_resource(GlobalRng(StdRng::seed_from_u64(1)))
            .init_resource::<SimulationClock>()
            .add_systems(
                Update,
                apply_config.run_if(resource_changed::<SimulationConfig>),
            );
        app
    }

    #[test]
    fn test_config_reaches_clock() {
        let mut app = app(SimulationConfig::default());
        app.update();

        let clock = app.world().resource::<SimulationClock>();
        assert!(clock.is_running());
        assert!(matches!(clock.snapshot(), Some(Snapshot::History(h)) if h.len() == 1));
    }

    #[test]
    fn test_mode_switch_reaches_clock() {
        let mut app = app(SimulationConfig::default());
        app.update();

        {
            let mut config = app.world_mut().resource_mut::<SimulationConfig>();
            config.mode = DimensionMode::ThreeD;
            config.size = 4;
        }
        app.update();

        let clock = app.world().resource::<SimulationClock>();
        let Some(Snapshot::Volume(grid)) = clock.snapshot() else {
            panic!("expected a volume");
        };
        assert_eq!(grid.cells().len(), 64);
    }

    #[test]
    fn test_rejected_config_keeps_previous() {
        let mut app = app(SimulationConfig::default());
        app.update();

        app.world_mut()
            .resource_mut::<SimulationConfig>()
            .initial_pattern = "0x0".to_string();
        app.update();

        let clock = app.world().resource::<SimulationClock>();
        assert_eq!(clock.config(), Some(&SimulationConfig::default()));
    }
}
