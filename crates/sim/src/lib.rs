//! # codondrift-sim
//!
//! Stochastic drift of an RNA sequence back toward a target.
//!
//! A random target is generated, a copy is diverged from it by point
//! substitutions, and many independent trials then mutate that copy one base
//! at a time, stopping on an exact match or once a generation cap is passed.
//! Abandoned trials are scored by amino-acid identity after translation
//! through the standard genetic code, and the results are aggregated.
//!
//! ```
//! use codondrift_sim::prelude::*;
//!
//! let mut sim = SimulationBuilder::new()
//!     .sequence_length(30)
//!     .percent_divergence(10.0)
//!     .trials(50)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! let summary = sim.run(&NoProgress).unwrap();
//! assert_eq!(summary.matches + summary.abandoned, 50);
//! ```

pub mod analysis;
pub mod base;
pub mod errors;
pub mod evolution;
pub mod prelude;
pub mod simulation;
pub mod translation;

pub use base::{AminoAcid, Nucleotide, ProteinSequence, Sequence};
