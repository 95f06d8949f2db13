pub mod controls;
pub mod seeded_rng;
