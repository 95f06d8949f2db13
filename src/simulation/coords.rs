use bevy::prelude::*;

/// Edge length of a rendered cell cube in world units.
pub const CELL_WIDTH: f32 = 1.0;

/// Spacing between cell centres in the 2D and 3D grids.
pub const GRID_SPACING: f32 = 2.0;

/// World position of cell `index` in a row of `len` cells, centred on x = 0.
/// `generation` lifts stacked rows along y.
#[inline(always)]
pub fn row_cell_to_world(index: usize, len: usize, generation: usize) -> Vec3 {
    Vec3::new(
        index as f32 - len as f32 / 2.0,
        generation as f32,
        0.0,
    )
}

/// World position of a cell in a square grid. The plane sits at z = 0.
#[inline(always)]
pub fn plane_cell_to_world(pos: UVec3, size: usize) -> Vec3 {
    let axis = |i: u32| i as f32 * GRID_SPACING - size as f32 + 0.5;
    Vec3::new(axis(pos.x), axis(pos.y), 0.0)
}

/// World position of a cell in a cubic grid.
#[inline(always)]
pub fn volume_cell_to_world(pos: UVec3, size: usize) -> Vec3 {
    let axis = |i: u32| i as f32 * GRID_SPACING - size as f32 + 1.0;
    Vec3::new(axis(pos.x), axis(pos.y), axis(pos.z))
}
