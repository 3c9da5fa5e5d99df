//! Bond and aromaticity perception from bare coordinates.
//!
//! PDB and XYZ inputs carry atoms only. Before atoms can be typed or charged,
//! [`perceive`] infers the bond graph in three passes:
//!
//! 1. connectivity from covalent radii and a distance tolerance,
//! 2. localized bond orders from standard valences,
//! 3. ring aromaticity by π-electron counting (Hückel `4n + 2`).

mod aromatic;
mod connect;
mod orders;

use crate::model::system::System;

/// Default slack, in Ångströms, added to the sum of covalent radii.
pub const DEFAULT_TOLERANCE: f64 = 0.45;

/// Settings for bond perception.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceptionConfig {
    /// Extra distance allowed beyond `r_i + r_j` when detecting a bond.
    pub tolerance: f64,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Replaces `system.bonds` with perceived bonds and returns per-atom
/// aromatic flags in native atom order.
pub fn perceive(system: &mut System, config: &PerceptionConfig) -> Vec<bool> {
    system.bonds = connect::connect(&system.atoms, config.tolerance);
    orders::assign_orders(system);
    let aromatic = aromatic::mark_aromatic(system);

    log::debug!(
        "perceived {} bonds between {} atoms",
        system.bond_count(),
        system.atom_count()
    );

    aromatic
}
