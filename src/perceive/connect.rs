use crate::model::atom::Atom;
use crate::model::system::Bond;
use crate::model::types::{BondOrder, Element};

/// Atoms closer than this are treated as overlapping, not bonded.
const MIN_BOND_DISTANCE: f64 = 0.4;

/// Infers single bonds from interatomic distances and covalent radii.
///
/// Two atoms bond when their separation lies in
/// `(0.4, r_i + r_j + tolerance]`. Hydrogens never bond to each other and
/// each hydrogen keeps only its nearest candidate partner.
pub fn connect(atoms: &[Atom], tolerance: f64) -> Vec<Bond> {
    let n = atoms.len();
    let mut candidates: Vec<(usize, usize, f64)> = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = (&atoms[i], &atoms[j]);
            if a.element == Element::H && b.element == Element::H {
                continue;
            }
            let d = a.distance(b);
            let cutoff = a.element.covalent_radius() + b.element.covalent_radius() + tolerance;
            if d > MIN_BOND_DISTANCE && d <= cutoff {
                candidates.push((i, j, d));
            }
        }
    }

    let mut nearest: Vec<Option<(usize, f64)>> = vec![None; n];
    for &(i, j, d) in &candidates {
        for (h, other) in [(i, j), (j, i)] {
            if atoms[h].element != Element::H {
                continue;
            }
            match nearest[h] {
                Some((_, best)) if best <= d => {}
                _ => nearest[h] = Some((other, d)),
            }
        }
    }

    let keeps = |h: usize, other: usize| {
        atoms[h].element != Element::H || nearest[h].map(|(p, _)| p) == Some(other)
    };

    candidates
        .into_iter()
        .filter(|&(i, j, _)| keeps(i, j) && keeps(j, i))
        .map(|(i, j, _)| Bond::new(i, j, BondOrder::Single))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perceive::fixtures;

    fn pairs(bonds: &[Bond]) -> Vec<(usize, usize)> {
        bonds.iter().map(|b| (b.i, b.j)).collect()
    }

    #[test]
    fn connects_water() {
        let water = fixtures::water();
        let bonds = connect(&water.atoms, 0.45);
        assert_eq!(pairs(&bonds), vec![(0, 1), (0, 2)]);
        assert!(bonds.iter().all(|b| b.order == BondOrder::Single));
    }

    #[test]
    fn connects_benzene_ring_without_cross_ring_bonds() {
        let benzene = fixtures::benzene();
        let bonds = connect(&benzene.atoms, 0.45);
        assert_eq!(bonds.len(), 12);
        for i in 0..6 {
            let j = (i + 1) % 6;
            assert!(pairs(&bonds).contains(&(i.min(j), i.max(j))));
            assert!(pairs(&bonds).contains(&(i, i + 6)));
        }
    }

    #[test]
    fn never_bonds_two_hydrogens() {
        let atoms = vec![
            Atom::new(Element::H, [0.0, 0.0, 0.0]),
            Atom::new(Element::H, [0.74, 0.0, 0.0]),
        ];
        assert!(connect(&atoms, 0.45).is_empty());
    }

    #[test]
    fn hydrogen_keeps_only_nearest_partner() {
        let atoms = vec![
            Atom::new(Element::O, [0.0, 0.0, 0.0]),
            Atom::new(Element::H, [0.98, 0.0, 0.0]),
            Atom::new(Element::O, [2.30, 0.0, 0.0]),
        ];
        let bonds = connect(&atoms, 0.45);
        assert_eq!(pairs(&bonds), vec![(0, 1)]);
    }

    #[test]
    fn ignores_overlapping_atoms() {
        let atoms = vec![
            Atom::new(Element::C, [0.0, 0.0, 0.0]),
            Atom::new(Element::C, [0.1, 0.0, 0.0]),
        ];
        assert!(connect(&atoms, 0.45).is_empty());
    }

    #[test]
    fn tolerance_widens_cutoff() {
        let atoms = vec![
            Atom::new(Element::C, [0.0, 0.0, 0.0]),
            Atom::new(Element::C, [1.80, 0.0, 0.0]),
        ];
        assert!(connect(&atoms, 0.1).is_empty());
        assert_eq!(connect(&atoms, 0.45).len(), 1);
    }
}
