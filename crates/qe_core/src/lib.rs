//! # qe_core: Foundation for QuantEcon Numerical Routines
//!
//! ## Layer 1 (Foundation) Role
//!
//! qe_core is the bottom layer of the workspace, providing:
//! - Seeded random source and random-state normalisation (`rng`)
//! - Ordered search over non-decreasing sequences (`search`)
//! - Error taxonomy shared by every layer (`error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other qe_* crates, with minimal external dependencies:
//! - rand: ChaCha-based `StdRng` and seeding
//! - thiserror: Error derivation
//! - tracing: Structured diagnostics
//!
//! ## Usage Examples
//!
//! ```rust
//! use qe_core::rng::{check_random_state, RandomState};
//! use qe_core::search::searchsorted;
//!
//! let mut rng = check_random_state(RandomState::Seed(1234)).unwrap();
//! let u = rng.gen_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let cdf = [0.4, 1.0];
//! assert_eq!(searchsorted(&cdf, 0.3), 0);
//! assert_eq!(searchsorted(&cdf, 0.4), 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod rng;
pub mod search;

pub use error::{QeError, QeResult};
