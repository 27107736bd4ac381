//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use codondrift_sim::prelude::*;
//! use std::str::FromStr;
//!
//! let seq = Sequence::from_str("AUGGCU").unwrap();
//! assert_eq!(translate(&seq).to_string(), "MA");
//! ```

pub use crate::analysis::{amino_acid_similarity, nucleotide_similarity, percent_identity};
pub use crate::base::{AminoAcid, Nucleotide, ProteinSequence, Sequence};
pub use crate::errors::{self, BuilderError, DriftError};
pub use crate::evolution::{diverge, mutate};
pub use crate::simulation::{
    Configuration, NoProgress, ProgressObserver, Simulation, SimulationBuilder, Summary,
};
pub use crate::translation::{translate, CodonTable};
