mod plugins;
mod simulation;

use std::{env::args, process::exit};

use bevy::{dev_tools::fps_overlay::FpsOverlayPlugin, prelude::*};

use crate::plugins::controls::ControlsPlugin;
use crate::plugins::seeded_rng::SeededRngPlugin;
use crate::simulation::SimulationPlugin;
use crate::simulation::config::{SimulationConfig, parse_pattern};

/// Usage: `cellular_automata [PATTERN] [SEED]`
fn main() {
    let mut config = SimulationConfig::default();
    if let Some(pattern) = args().nth(1) {
        if let Err(err) = parse_pattern(&pattern) {
            eprintln!("[error] {err}");
            exit(1);
        }
        config.initial_pattern = pattern;
    }

    let seed = args().nth(2).map(|seed| {
        seed.parse::<u64>().unwrap_or_else(|_| {
            eprintln!("[error] seed must be an unsigned integer, got {seed:?}");
            exit(1);
        })
    });

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Cellular Automata".into(),
            present_mode: bevy::window::PresentMode::AutoNoVsync,
            ..default()
        }),
        ..default()
    }));

    app.add_plugins(FpsOverlayPlugin::default());

    app.add_plugins(SeededRngPlugin::new(seed));
    app.add_plugins(SimulationPlugin { config });
    app.add_plugins(ControlsPlugin);

    app.add_systems(Startup, spawn_scene);

    app.run();
}

fn spawn_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 5.0, 40.0).looking_at(Vec3::new(0.0, 5.0, 0.0), Vec3::Y),
    ));
    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));
}
