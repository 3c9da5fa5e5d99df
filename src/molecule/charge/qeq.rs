//! QEq (charge equilibration) charge assignment.
//!
//! Uses the `cheq` library to compute electronegativity-equalized partial
//! charges from atomic positions alone.

use crate::model::atom::Atom;
use crate::model::system::System;
use crate::molecule::config::QeqConfig;
use crate::molecule::error::Error;
use cheq::{AtomView, QEqSolver, get_default_parameters};

impl AtomView for Atom {
    #[inline]
    fn atomic_number(&self) -> u8 {
        self.element.atomic_number()
    }

    #[inline]
    fn position(&self) -> [f64; 3] {
        self.position
    }
}

/// Computes QEq charges in native atom order.
///
/// # Errors
///
/// Returns [`Error::ChargeCalculation`] if the QEq solver fails to converge.
pub fn assign_qeq_charges(system: &System, config: &QeqConfig) -> Result<Vec<f64>, Error> {
    let params = get_default_parameters();
    let solver = QEqSolver::new(params).with_options(config.solver_options);

    let result = solver.solve(system.atoms.as_slice(), config.total_charge)?;

    Ok(result.charges)
}
