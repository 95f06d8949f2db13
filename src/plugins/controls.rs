use bevy::prelude::*;

use crate::plugins::seeded_rng::GlobalRng;
use crate::simulation::clock::SimulationClock;
use crate::simulation::config::{DimensionMode, INTERVAL_RANGE, SIZE_RANGE, SimulationConfig};

const INTERVAL_STEP: f64 = 0.1;

/// Keyboard controls for the simulation parameters.
///
/// `1`-`4` mode, Up/Down size, Left/Right interval, `H` hide dead cells,
/// `R` randomize the grid.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (edit_config, randomize_grid));
    }
}

/// Returns the edited configuration, or `None` when `key` changes nothing.
pub fn apply_key(config: &SimulationConfig, key: KeyCode) -> Option<SimulationConfig> {
    let mut next = config.clone();
    match key {
        KeyCode::Digit1 => next.mode = DimensionMode::OneD,
        KeyCode::Digit2 => next.mode = DimensionMode::OneDStacked,
        KeyCode::Digit3 => next.mode = DimensionMode::TwoD,
        KeyCode::Digit4 => next.mode = DimensionMode::ThreeD,
        KeyCode::ArrowUp => next.size = (config.size + 1).min(*SIZE_RANGE.end()),
        KeyCode::ArrowDown => next.size = config.size.saturating_sub(1).max(*SIZE_RANGE.start()),
        KeyCode::ArrowLeft => next.interval = step_interval(config.interval, -INTERVAL_STEP),
        KeyCode::ArrowRight => next.interval = step_interval(config.interval, INTERVAL_STEP),
        KeyCode::KeyH => next.hide_dead_cells = !config.hide_dead_cells,
        _ => return None,
    }
    (next != *config).then_some(next)
}

/// Steps in tenths of a second so repeated presses don't drift.
fn step_interval(interval: f64, delta: f64) -> f64 {
    let stepped = ((interval + delta) * 10.0).round() / 10.0;
    stepped.clamp(*INTERVAL_RANGE.start(), *INTERVAL_RANGE.end())
}

fn edit_config(keys: Res<ButtonInput<KeyCode>>, mut config: ResMut<SimulationConfig>) {
    for key in keys.get_just_pressed() {
        if let Some(next) = apply_key(&config, *key) {
            *config = next;
        }
    }
}

fn randomize_grid(
    keys: Res<ButtonInput<KeyCode>>,
    mut clock: ResMut<SimulationClock>,
    mut rng: ResMut<GlobalRng>,
) {
    if keys.just_pressed(KeyCode::KeyR) && clock.randomize(&mut rng.0) {
        info!("Randomized grid");
    }
}
