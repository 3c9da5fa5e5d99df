//! Gasteiger–Marsili partial equalization of orbital electronegativity.
//!
//! Each iteration evaluates every atom's electronegativity at its current
//! charge, then moves charge along every bond toward the more electronegative
//! end. The transfer is normalized by the cationic electronegativity of the
//! donating atom and damped by a factor that halves every iteration, so the
//! total charge is conserved and the charges converge geometrically.

use super::params::GasteigerParams;
use crate::model::system::System;
use crate::model::types::Hybridization;
use crate::molecule::error::Error;

/// Computes Gasteiger charges in native atom order.
///
/// # Errors
///
/// Returns [`Error::MissingParameter`] if any atom's element and
/// hybridization have no parameters.
pub fn assign_gasteiger_charges(
    system: &System,
    hybridization: &[Hybridization],
    params: &GasteigerParams,
) -> Result<Vec<f64>, Error> {
    let coefficients = system
        .atoms
        .iter()
        .zip(hybridization)
        .map(|(atom, &hyb)| params.lookup(atom.element, hyb))
        .collect::<Result<Vec<_>, _>>()?;
    let cationic: Vec<f64> = coefficients.iter().map(|c| c.cationic()).collect();
    let neighbors = system.neighbors();

    let mut charges = vec![0.0; system.atom_count()];
    let mut chi = vec![0.0; system.atom_count()];
    let mut damping = params.global.damping;

    for _ in 0..params.global.iterations {
        for (x, (coeff, &q)) in chi.iter_mut().zip(coefficients.iter().zip(&charges)) {
            *x = coeff.electronegativity(q);
        }

        for (i, nbrs) in neighbors.iter().enumerate() {
            let dq: f64 = nbrs
                .iter()
                .map(|&j| {
                    let dx = chi[j] - chi[i];
                    let donor = if dx >= 0.0 { cationic[i] } else { cationic[j] };
                    dx / donor
                })
                .sum();
            charges[i] += damping * dq;
        }

        damping *= params.global.damping;
    }

    log::debug!(
        "Gasteiger charges converged over {} iterations, total {:.4}",
        params.global.iterations,
        charges.iter().sum::<f64>()
    );

    Ok(charges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Element;
    use crate::molecule::charge::params::{get_default_parameters, load_parameters};
    use crate::molecule::typer::assign_hybridization;
    use crate::perceive::{PerceptionConfig, fixtures, perceive};

    fn charged(mut system: System) -> (System, Vec<f64>) {
        perceive(&mut system, &PerceptionConfig::default());
        let hyb = assign_hybridization(&system).unwrap();
        let charges = assign_gasteiger_charges(&system, &hyb, get_default_parameters()).unwrap();
        (system, charges)
    }

    #[test]
    fn water_charges_are_polarized_and_neutral() {
        let (_, q) = charged(fixtures::water());
        assert!(q[0] < -0.3 && q[0] > -0.5, "oxygen charge {}", q[0]);
        assert!(q[1] > 0.15);
        assert!((q[1] - q[2]).abs() < 1e-12);
        assert!(q.iter().sum::<f64>().abs() < 1e-10);
    }

    #[test]
    fn methanol_charges_follow_electronegativity() {
        let (system, q) = charged(fixtures::methanol());
        assert_eq!(system.atoms[1].element, Element::O);
        assert!(q[1] < 0.0);
        assert!(q[2] > q[3], "hydroxyl H should be more positive than methyl H");
        assert!((q[3] - q[4]).abs() < 0.01);
        assert!(q.iter().sum::<f64>().abs() < 1e-10);
    }

    #[test]
    fn benzene_carbons_are_equivalent() {
        let (_, q) = charged(fixtures::benzene());
        for i in 1..6 {
            assert!((q[i] - q[0]).abs() < 1e-6);
        }
        assert!(q[0] < 0.0);
        assert!(q[6] > 0.0);
    }

    #[test]
    fn isolated_atom_stays_neutral() {
        let mut system = System::new();
        system
            .atoms
            .push(crate::model::atom::Atom::new(Element::Cl, [0.0; 3]));
        let q =
            assign_gasteiger_charges(&system, &[Hybridization::Unknown], get_default_parameters())
                .unwrap();
        assert_eq!(q, vec![0.0]);
    }

    #[test]
    fn errors_on_missing_parameters() {
        let params = load_parameters(Some("[elements.H]\ndefault = { a = 7.17, b = 6.24, c = -0.56 }\n"))
            .unwrap();
        let (system, _) = charged(fixtures::water());
        let hyb = vec![Hybridization::SP3, Hybridization::Unknown, Hybridization::Unknown];
        let err = assign_gasteiger_charges(&system, &hyb, &params).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingParameter {
                element: Element::O,
                ..
            }
        ));
    }
}
