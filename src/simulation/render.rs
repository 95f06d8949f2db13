use bevy::prelude::*;

use crate::simulation::cell::Cell;
use crate::simulation::clock::{SimulationClock, Snapshot};
use crate::simulation::config::SimulationConfig;
use crate::simulation::coords::{
    CELL_WIDTH, plane_cell_to_world, row_cell_to_world, volume_cell_to_world,
};
use crate::simulation::engine::Grid;

pub struct SimulationRenderPlugin;

impl Plugin for SimulationRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_cell_assets);
    }
}

/// Marks every entity spawned for a cell of the current snapshot.
#[derive(Component)]
pub struct CellCube;

/// Mesh and materials shared by every cube, created once.
#[derive(Resource)]
pub struct CellAssets {
    mesh: Handle<Mesh>,
    alive: Handle<StandardMaterial>,
    dead: Handle<StandardMaterial>,
}

fn setup_cell_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(CellAssets {
        mesh: meshes.add(Cuboid::from_length(CELL_WIDTH)),
        alive: materials.add(StandardMaterial {
            base_color: Color::WHITE,
            emissive: LinearRgba::rgb(4.0, 4.0, 4.0),
            ..default()
        }),
        dead: materials.add(StandardMaterial {
            base_color: Color::BLACK,
            ..default()
        }),
    });
}

/// Collects the cubes to draw for a snapshot.
///
/// Dead cells are skipped in the 2D and 3D grids when `hide_dead_cells` is
/// set. The 1D views always draw every cell.
pub fn visible_cells(snapshot: &Snapshot, hide_dead_cells: bool) -> Vec<(Vec3, Cell)> {
    match snapshot {
        Snapshot::Row(row) => row
            .iter()
            .enumerate()
            .map(|(i, &cell)| (row_cell_to_world(i, row.len(), 0), cell))
            .collect(),
        Snapshot::History(history) => history
            .iter()
            .enumerate()
            .flat_map(|(generation, row)| {
                row.iter().enumerate().map(move |(i, &cell)| {
                    (row_cell_to_world(i, row.len(), generation), cell)
                })
            })
            .collect(),
        Snapshot::Plane(grid) => grid_cells(grid, hide_dead_cells, plane_cell_to_world),
        Snapshot::Volume(grid) => grid_cells(grid, hide_dead_cells, volume_cell_to_world),
    }
}

fn grid_cells(
    grid: &Grid,
    hide_dead_cells: bool,
    to_world: fn(UVec3, usize) -> Vec3,
) -> Vec<(Vec3, Cell)> {
    grid.cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| !hide_dead_cells || cell.is_alive())
        .map(|(i, &cell)| (to_world(grid.position(i), grid.size()), cell))
        .collect()
}

/// Rebuilds the cube entities from the clock's current snapshot.
pub fn render_cells(
    mut commands: Commands,
    clock: Res<SimulationClock>,
    config: Res<SimulationConfig>,
    assets: Option<Res<CellAssets>>,
    q_cubes: Query<Entity, With<CellCube>>,
) {
    let Some(assets) = assets else { return };

    for cube in q_cubes.iter() {
        commands.entity(cube).despawn();
    }

    let Some(snapshot) = clock.snapshot() else {
        return;
    };

    for (position, cell) in visible_cells(&snapshot, config.hide_dead_cells) {
        let material = match cell {
            Cell::Alive => assets.alive.clone(),
            Cell::Dead => assets.dead.clone(),
        };
        commands.spawn((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(position),
            CellCube,
        ));
    }
}
