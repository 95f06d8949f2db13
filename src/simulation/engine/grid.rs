use bevy::math::{IVec3, UVec3};
use rand::Rng;
use rayon::prelude::*;

use crate::simulation::cell::Cell;

/// A square (2 axes) or cubic (3 axes) Game of Life grid.
///
/// Cells are stored flat, x-major: `index = (x * size + y) * depth + z`
/// where `depth` is 1 for a square grid. Cells outside `[0, size)` on any
/// axis do not exist and never count as neighbours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    axes: usize,
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-dead grid. `axes` other than 3 is treated as 2.
    pub fn new(axes: usize, size: usize) -> Self {
        let axes = if axes == 3 { 3 } else { 2 };
        Self {
            axes,
            size,
            cells: vec![Cell::Dead; size.pow(axes as u32)],
        }
    }

    /// Every cell alive independently with probability 0.5.
    pub fn random(axes: usize, size: usize, rng: &mut impl Rng) -> Self {
        let mut grid = Self::new(axes, size);
        grid.randomize(rng);
        grid
    }

    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for cell in &mut self.cells {
            *cell = Cell::from_alive(rng.random_bool(0.5));
        }
    }

    pub fn axes(&self) -> usize {
        self.axes
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Axis lengths, with z = 1 for a square grid.
    pub fn extent(&self) -> UVec3 {
        let size = self.size as u32;
        UVec3::new(size, size, if self.axes == 3 { size } else { 1 })
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn index(&self, pos: IVec3) -> Option<usize> {
        let extent = self.extent().as_ivec3();
        if pos.cmplt(IVec3::ZERO).any() || pos.cmpge(extent).any() {
            return None;
        }
        Some(((pos.x * extent.y + pos.y) * extent.z + pos.z) as usize)
    }

    pub fn position(&self, index: usize) -> UVec3 {
        let extent = self.extent();
        let index = index as u32;
        UVec3::new(
            index / (extent.y * extent.z),
            (index / extent.z) % extent.y,
            index % extent.z,
        )
    }

    /// `None` outside the grid. For a square grid only z = 0 exists.
    pub fn get(&self, pos: IVec3) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Out-of-range positions are ignored.
    pub fn set(&mut self, pos: IVec3, cell: Cell) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    /// Moore neighbourhood offsets: 8 on a square grid, 26 on a cube.
    fn neighbor_offsets(&self) -> Vec<IVec3> {
        let dz = if self.axes == 3 { -1..=1 } else { 0..=0 };
        let mut offsets = Vec::with_capacity(26);
        for x in -1..=1 {
            for y in -1..=1 {
                for z in dz.clone() {
                    let offset = IVec3::new(x, y, z);
                    if offset != IVec3::ZERO {
                        offsets.push(offset);
                    }
                }
            }
        }
        offsets
    }

    fn alive_neighbors(&self, pos: IVec3, offsets: &[IVec3]) -> usize {
        offsets
            .iter()
            .filter_map(|offset| self.get(pos + *offset))
            .filter(|cell| cell.is_alive())
            .count()
    }

    pub fn alive_neighbors_at(&self, pos: IVec3) -> usize {
        self.alive_neighbors(pos, &self.neighbor_offsets())
    }

    /// Computes the next generation into a fresh buffer. The current grid is
    /// only read, so cells can be evaluated in any order.
    pub fn next_generation(&self) -> Grid {
        let offsets = self.neighbor_offsets();

        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|i| {
                let pos = self.position(i).as_ivec3();
                life_rule(self.cells[i], self.alive_neighbors(pos, &offsets))
            })
            .collect();

        Grid {
            axes: self.axes,
            size: self.size,
            cells,
        }
    }
}

/// B3/S23, applied unchanged to both neighbour-count ranges.
#[inline(always)]
pub fn life_rule(cell: Cell, alive_neighbors: usize) -> Cell {
    match (cell, alive_neighbors) {
        (Cell::Alive, 2 | 3) => Cell::Alive,
        (Cell::Dead, 3) => Cell::Alive,
        _ => Cell::Dead,
    }
}
