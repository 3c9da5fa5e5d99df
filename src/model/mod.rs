//! Core data structures describing a molecule as it flows through `malt`.
//!
//! - [`atom`] – Minimal atom representation with element and Cartesian coordinates.
//! - [`types`] – Periodic table elements, bond orders and hybridization states.
//! - [`system`] – An atom list plus the bonds perceived between them.

pub mod atom;
pub mod system;
pub mod types;
