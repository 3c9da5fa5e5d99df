//! Partial charge calculation for molecules.
//!
//! Charges come from one of three sources: the Gasteiger–Marsili scheme
//! computed over the perceived bond graph, global QEq, or a precomputed row
//! of an external CSV file.

mod external;
mod gasteiger;
pub(crate) mod params;
mod qeq;

pub(crate) use external::load_external_charges;

use super::config::{ChargeMethod, ConvertConfig};
use super::error::Error;
use crate::io::Identity;
use crate::model::system::System;
use crate::model::types::Hybridization;

/// Computes or loads one partial charge per atom, in native atom order.
///
/// # Errors
///
/// Returns [`Error`] if:
/// - Gasteiger parameters are malformed or missing ([`Error::ParameterParse`],
///   [`Error::MissingParameter`])
/// - the QEq solver fails to converge ([`Error::ChargeCalculation`])
/// - the external charges row cannot be found or does not match the atom
///   count ([`Error::MissingIndex`], [`Error::ChargeRowMissing`],
///   [`Error::ChargeCountMismatch`])
pub fn assign_charges(
    system: &System,
    hybridization: &[Hybridization],
    identity: &Identity,
    config: &ConvertConfig,
) -> Result<Vec<f64>, Error> {
    match &config.charge_method {
        ChargeMethod::Gasteiger => {
            let params = params::load_parameters(config.gasteiger_params.as_deref())?;
            gasteiger::assign_gasteiger_charges(system, hybridization, &params)
        }
        ChargeMethod::Qeq(qeq) => qeq::assign_qeq_charges(system, qeq),
        ChargeMethod::External(path) => {
            load_external_charges(path, identity, system.atom_count())
        }
    }
}
