//! Shared test fixtures for SearchForge crates.
//!
//! This crate provides problem builders and reference oracles for testing.
//! It depends only on `searchforge-core` so every higher crate can pull it in
//! as a dev-dependency without cycles.
//!
//! - [`graphs`] - the reference graph scenario, random graphs and oracles
//! - [`nqueens`] - conflict recount from scratch for N-Queens assignments
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! searchforge-test = { workspace = true }
//! ```

pub mod graphs;
pub mod nqueens;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub use graphs::{
    bfs_distance, dijkstra_distance, random_graph, random_weighted_graph, scenario_a_graph,
};
pub use nqueens::{count_attacking_pairs, is_valid_n_queens};

/// Deterministic RNG for reproducible tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
