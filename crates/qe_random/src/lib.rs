//! # qe_random: Random Vectors and Sampling (Layer 2)
//!
//! ## Layer 2 Role
//!
//! qe_random provides the sampling routines built on the Layer 1 random source:
//! - Random probability vectors drawn uniformly from the simplex (`probvec`)
//! - Integer sampling without replacement via partial Fisher-Yates (`sample`)
//! - Categorical draws from a cumulative distribution (`draw`)
//!
//! All three are independent leaf operations. Each takes a
//! [`RandomState`](qe_core::rng::RandomState) argument and consumes nothing
//! else but its inputs.
//!
//! ## Usage Example
//!
//! ```rust
//! use qe_core::rng::RandomState;
//! use qe_random::{draw_n, probvec, sample_without_replacement};
//!
//! let x = probvec(2, 3, RandomState::Seed(1234)).unwrap();
//! assert_eq!(x.dim(), (2, 3));
//!
//! let s = sample_without_replacement(5, 3, RandomState::Seed(1234)).unwrap();
//! assert_eq!(s.len(), 3);
//!
//! let cdf = [0.4, 1.0];
//! let d = draw_n(&cdf, 10, RandomState::Seed(0)).unwrap();
//! assert!(d.iter().all(|&i| i < 2));
//! ```
//!
//! ## Reproducibility
//!
//! Uniforms are always drawn sequentially in row-major (trial-major) order
//! before any row transform runs, so results are identical whether or not
//! rows are processed in parallel.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`SamplerConfig`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod draw;
pub mod probvec;
pub mod sample;
pub mod sampler;

pub use config::{ConfigError, SamplerConfig, SamplerConfigBuilder};
pub use draw::{draw, draw_n};
pub use probvec::probvec;
pub use sample::{sample_without_replacement, sample_without_replacement_trials};
pub use sampler::Sampler;
