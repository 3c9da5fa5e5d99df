use crate::model::system::System;
use crate::model::types::{BondOrder, Element};
use std::collections::{BTreeSet, VecDeque};

const MAX_RING_SIZE: usize = 8;

/// Smallest ring through each bond, up to [`MAX_RING_SIZE`] atoms.
///
/// Rings are returned as cycles of atom indices, deduplicated by atom set.
fn smallest_rings(system: &System, neighbors: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut seen: BTreeSet<Vec<usize>> = BTreeSet::new();
    let mut rings = Vec::new();

    for bond in &system.bonds {
        let Some(path) = shortest_path_avoiding(neighbors, bond.i, bond.j) else {
            continue;
        };
        let mut key = path.clone();
        key.sort_unstable();
        if seen.insert(key) {
            rings.push(path);
        }
    }

    rings
}

/// Shortest path from `start` to `goal` that does not use the direct edge
/// between them, limited to rings of [`MAX_RING_SIZE`] atoms.
fn shortest_path_avoiding(neighbors: &[Vec<usize>], start: usize, goal: usize) -> Option<Vec<usize>> {
    let mut parent: Vec<Option<usize>> = vec![None; neighbors.len()];
    let mut depth = vec![usize::MAX; neighbors.len()];
    let mut queue = VecDeque::new();

    depth[start] = 0;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if depth[current] + 1 >= MAX_RING_SIZE {
            continue;
        }
        for &next in &neighbors[current] {
            if current == start && next == goal {
                continue;
            }
            if depth[next] != usize::MAX {
                continue;
            }
            depth[next] = depth[current] + 1;
            parent[next] = Some(current);
            if next == goal {
                let mut path = vec![goal];
                let mut node = goal;
                while let Some(p) = parent[node] {
                    path.push(p);
                    node = p;
                }
                path.reverse();
                return Some(path);
            }
            queue.push_back(next);
        }
    }

    None
}

/// π electrons contributed by ring atom `atom`, or `None` if the atom rules
/// the ring out.
fn pi_electrons(
    system: &System,
    neighbors: &[Vec<usize>],
    ring: &[usize],
    atom: usize,
    aromatic_atoms: &[bool],
) -> Option<u32> {
    let in_ring = |n: usize| ring.contains(&n);
    let mut exocyclic_double = None;

    for &n in &neighbors[atom] {
        let idx = system.find_bond(atom, n)?;
        match system.bonds[idx].order {
            BondOrder::Double | BondOrder::Aromatic if in_ring(n) => return Some(1),
            BondOrder::Double => exocyclic_double = Some(n),
            BondOrder::Triple => return None,
            _ => {}
        }
    }

    let element = system.atoms[atom].element;
    let degree = neighbors[atom].len();

    if let Some(partner) = exocyclic_double {
        if aromatic_atoms[partner] {
            return Some(1);
        }
        return match system.atoms[partner].element {
            Element::N | Element::O | Element::S => Some(0),
            _ => None,
        };
    }

    match element {
        Element::N | Element::P if degree == 3 => Some(2),
        Element::O | Element::S | Element::Se if degree == 2 => Some(2),
        _ => None,
    }
}

/// Marks aromatic rings and converts their bonds to [`BondOrder::Aromatic`].
///
/// Rings are re-examined until nothing changes, so a ring fused to an
/// already aromatic ring can count the shared double bond's π electron.
/// Returns per-atom aromatic flags.
pub fn mark_aromatic(system: &mut System) -> Vec<bool> {
    let neighbors = system.neighbors();
    let rings = smallest_rings(system, &neighbors);
    let mut aromatic_atoms = vec![false; system.atoms.len()];
    let mut aromatic_rings = vec![false; rings.len()];

    loop {
        let mut changed = false;
        for (r, ring) in rings.iter().enumerate() {
            if aromatic_rings[r] {
                continue;
            }
            let electrons: Option<u32> = ring
                .iter()
                .map(|&a| pi_electrons(system, &neighbors, ring, a, &aromatic_atoms))
                .sum();
            if matches!(electrons, Some(e) if e % 4 == 2) {
                aromatic_rings[r] = true;
                for &a in ring {
                    aromatic_atoms[a] = true;
                }
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    for (ring, _) in rings.iter().zip(&aromatic_rings).filter(|(_, a)| **a) {
        for (k, &a) in ring.iter().enumerate() {
            let b = ring[(k + 1) % ring.len()];
            if let Some(idx) = system.find_bond(a, b) {
                system.bonds[idx].order = BondOrder::Aromatic;
            }
        }
    }

    let count = aromatic_rings.iter().filter(|&&a| a).count();
    if count > 0 {
        log::debug!("perceived {} aromatic ring(s) out of {}", count, rings.len());
    }

    aromatic_atoms
}
