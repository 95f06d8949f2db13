use bevy::prelude::*;

use super::{
    clock::SimulationClock,
    config::SimulationConfig,
    engine::Ruleset,
    render::{SimulationRenderPlugin, render_cells},
    systems::{advance_simulation, apply_config},
};

pub struct SimulationPlugin {
    pub config: SimulationConfig,
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone());
        app.insert_resource(SimulationClock::new(Ruleset::RULE_90));

        app.add_plugins(SimulationRenderPlugin);

        app.add_systems(
            Update,
            (
                apply_config.run_if(resource_changed::<SimulationConfig>),
                advance_simulation,
                render_cells.run_if(
                    resource_changed::<SimulationClock>
                        .or(resource_changed::<SimulationConfig>),
                ),
            )
                .chain(),
        );
    }
}
