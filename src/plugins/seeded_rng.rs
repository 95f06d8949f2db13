use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Randomness source for every random grid the simulation creates.
#[derive(Resource)]
pub struct GlobalRng(pub StdRng);

/// Installs [`GlobalRng`]. Without a seed the generator is seeded from the
/// OS, so every run starts from a different grid.
#[derive(Default)]
pub struct SeededRngPlugin {
    pub seed: Option<u64>,
}

impl SeededRngPlugin {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }
}

impl Plugin for SeededRngPlugin {
    fn build(&self, app: &mut App) {
        let rng = match self.seed {
            Some(seed) => {
                info!("Seeding RNG with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        app.insert_resource(GlobalRng(rng));
    }
}
