//! Tripos MOL2 output.
//!
//! A document is the MOLECULE, ATOM and BOND blocks of a
//! [`Molecule`](crate::Molecule) followed by a single SUBSTRUCTURE record that
//! matches the substructure count declared in the MOLECULE block.

mod writer;

pub use writer::{render, write};
