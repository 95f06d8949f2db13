use bevy::prelude::*;
use rand::Rng;

use crate::simulation::cell::{Cell, Generation};
use crate::simulation::config::{ConfigError, DimensionMode, SimulationConfig};
use crate::simulation::engine::{Grid, Ruleset};

/// Read-only view of the current automaton state, shaped by the mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Snapshot<'a> {
    Row(&'a [Cell]),
    History(&'a [Generation]),
    Plane(&'a Grid),
    Volume(&'a Grid),
}

impl Snapshot<'_> {
    /// Live cells of the newest generation.
    pub fn population(&self) -> usize {
        fn count(row: &[Cell]) -> usize {
            row.iter().filter(|c| c.is_alive()).count()
        }

        match self {
            Snapshot::Row(row) => count(row),
            Snapshot::History(history) => history.last().map_or(0, |row| count(row)),
            Snapshot::Plane(grid) | Snapshot::Volume(grid) => grid.population(),
        }
    }
}

#[derive(Debug)]
enum Population {
    /// 1D generations, oldest first. Holds exactly one entry unless stacking.
    Elementary(Vec<Generation>),
    Life(Grid),
}

#[derive(Debug, Default)]
enum ClockState {
    #[default]
    Idle,
    Running(Population),
}

/// Throttled stepping driver. Owns the automaton state and advances it when
/// the configured interval has elapsed since the previous generation.
#[derive(Resource, Debug, Default)]
pub struct SimulationClock {
    ruleset: Ruleset,
    config: Option<SimulationConfig>,
    state: ClockState,
    last_update: f64,
    generation: u64,
}

impl SimulationClock {
    pub fn new(ruleset: Ruleset) -> Self {
        Self {
            ruleset,
            ..default()
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running(_))
    }

    /// Generations advanced since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The last successfully applied configuration.
    pub fn config(&self) -> Option<&SimulationConfig> {
        self.config.as_ref()
    }

    /// Applies a new configuration.
    ///
    /// The automaton is reset when the mode changes, when the pattern changes
    /// in a 1D mode or when the size changes in a 2D/3D mode. On error the
    /// clock is left untouched.
    pub fn configure(
        &mut self,
        config: &SimulationConfig,
        rng: &mut impl Rng,
    ) -> Result<(), ConfigError> {
        let pattern = config.validate()?;

        let reset = match (&self.state, &self.config) {
            (ClockState::Running(_), Some(previous)) => needs_reset(previous, config),
            _ => true,
        };
        self.config = Some(config.clone());

        if reset {
            let population = match config.mode.grid_axes() {
                None => Population::Elementary(vec![pattern]),
                Some(axes) => Population::Life(Grid::random(axes, config.size, rng)),
            };
            self.state = ClockState::Running(population);
            self.generation = 0;
            if config.mode.is_elementary() {
                info!(
                    "Reset {} automaton: rule {}, pattern {}",
                    config.mode.label(),
                    self.ruleset.code(),
                    config.initial_pattern
                );
            } else {
                info!("Reset {} automaton: size {}", config.mode.label(), config.size);
            }
        }
        Ok(())
    }

    /// Fills the current 2D/3D grid with fresh random cells. Returns `false`
    /// in the 1D modes, which have nothing to randomize.
    pub fn randomize(&mut self, rng: &mut impl Rng) -> bool {
        let ClockState::Running(Population::Life(grid)) = &mut self.state else {
            return false;
        };
        grid.randomize(rng);
        self.generation = 0;
        true
    }

    /// Advances one generation if at least the configured interval has passed
    /// since the previous one. Returns the new snapshot, or `None` when the
    /// tick was throttled or there is nothing to advance.
    pub fn tick(&mut self, elapsed: f64) -> Option<Snapshot<'_>> {
        let config = self.config.as_ref()?;
        if elapsed - self.last_update < config.interval {
            return None;
        }
        let stacked = config.mode == DimensionMode::OneDStacked;

        let ClockState::Running(population) = &mut self.state else {
            return None;
        };
        match population {
            Population::Elementary(history) => {
                let next = self.ruleset.next_row(history.last()?);
                if stacked {
                    history.push(next);
                } else {
                    *history = vec![next];
                }
            }
            Population::Life(grid) => {
                if grid.is_empty() {
                    return None;
                }
                *grid = grid.next_generation();
            }
        }

        self.last_update = elapsed;
        self.generation += 1;
        self.snapshot()
    }

    /// The current state without advancing it.
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        let mode = self.config.as_ref()?.mode;
        let ClockState::Running(population) = &self.state else {
            return None;
        };

        match population {
            Population::Elementary(history) if mode == DimensionMode::OneDStacked => {
                Some(Snapshot::History(history.as_slice()))
            }
            Population::Elementary(history) => {
                history.last().map(|row| Snapshot::Row(row.as_slice()))
            }
            Population::Life(grid) if grid.axes() == 3 => Some(Snapshot::Volume(grid)),
            Population::Life(grid) => Some(Snapshot::Plane(grid)),
        }
    }
}

fn needs_reset(previous: &SimulationConfig, next: &SimulationConfig) -> bool {
    if previous.mode != next.mode {
        return true;
    }
    if next.mode.is_elementary() {
        previous.initial_pattern != next.initial_pattern
    } else {
        previous.size != next.size
    }
}
