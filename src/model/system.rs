use super::atom::Atom;
use super::types::BondOrder;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(idx1: usize, idx2: usize, order: BondOrder) -> Self {
        if idx1 <= idx2 {
            Self { i: idx1, j: idx2, order }
        } else {
            Self { i: idx2, j: idx1, order }
        }
    }

    #[inline]
    pub fn contains(&self, idx: usize) -> bool {
        self.i == idx || self.j == idx
    }

    /// The atom on the other end of the bond, if `idx` is one of its ends.
    #[inline]
    pub fn partner(&self, idx: usize) -> Option<usize> {
        if self.i == idx {
            Some(self.j)
        } else if self.j == idx {
            Some(self.i)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    /// Neighbor lists in native atom order.
    pub fn neighbors(&self) -> Vec<Vec<usize>> {
        let mut neighbors = vec![Vec::new(); self.atoms.len()];
        for bond in &self.bonds {
            neighbors[bond.i].push(bond.j);
            neighbors[bond.j].push(bond.i);
        }
        neighbors
    }

    pub fn find_bond(&self, a: usize, b: usize) -> Option<usize> {
        let (i, j) = (a.min(b), a.max(b));
        self.bonds.iter().position(|bond| bond.i == i && bond.j == j)
    }
}
