//! # Random Number Generation Infrastructure
//!
//! This module provides the random source consumed by every sampling
//! routine in the workspace: a seeded PRNG wrapper and the normalisation
//! of caller-supplied random states into a ready-to-use generator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: Seeded generators produce bit-identical streams
//! - **Explicit state**: Every operation receives its random source as a
//!   parameter; there is no hidden module-level generator
//! - **Efficiency**: Zero-allocation batch fills via `&mut [f64]` slices
//!
//! ## Module Structure
//!
//! - [`prng`]: Pseudo-random number generator wrapper with seed management
//! - [`state`]: `RandomState` argument and `check_random_state`
//!
//! ## Usage Example
//!
//! ```rust
//! use qe_core::rng::{check_random_state, QeRng, RandomState};
//!
//! // Integer seed: a fresh generator owned by the call
//! let mut owned = check_random_state(RandomState::Seed(42)).unwrap();
//! let mut buffer = vec![0.0; 8];
//! owned.fill_uniform(&mut buffer);
//!
//! // Existing generator: passed through, its stream advances
//! let mut rng = QeRng::from_seed(42);
//! {
//!     let mut borrowed = check_random_state(RandomState::from(&mut rng)).unwrap();
//!     let _ = borrowed.gen_uniform();
//! }
//! ```
//!
//! ## Thread Safety
//!
//! Generator state is mutated by every draw. `QeRng` is `Send` but callers
//! sharing work across threads should give each thread its own instance.

mod prng;
mod state;

// Public re-exports
pub use prng::QeRng;
pub use state::{check_random_state, RandomState, RngHandle};
