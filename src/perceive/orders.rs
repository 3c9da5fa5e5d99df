use crate::model::system::System;
use crate::model::types::{BondOrder, Element};
use std::cmp::Ordering;

/// Standard valence of an element given its number of explicit neighbours.
///
/// Elements without an entry never take part in multiple bonds.
fn valence(element: Element, degree: usize) -> Option<usize> {
    use Element::*;
    let v = match element {
        H | F | Cl | Br | I => 1,
        B => 3,
        C | Si => 4,
        N => 3,
        O | Se => 2,
        S => match degree {
            0..=2 => 2,
            3 => 4,
            _ => 6,
        },
        P => {
            if degree <= 3 {
                3
            } else {
                5
            }
        }
        _ => return None,
    };
    Some(v)
}

/// Raises single bonds to double or triple until every atom's valence is
/// satisfied or no further pairing is possible.
///
/// Each step saturates the atom with the fewest unsaturated neighbours first,
/// pairing it with its own least-connected unsaturated neighbour (shorter bond
/// wins ties). Returns the number of atoms left unsaturated.
pub fn assign_orders(system: &mut System) -> usize {
    let neighbors = system.neighbors();
    let mut unsat: Vec<usize> = system
        .atoms
        .iter()
        .zip(&neighbors)
        .map(|(atom, nbrs)| {
            valence(atom.element, nbrs.len())
                .map(|v| v.saturating_sub(nbrs.len()))
                .unwrap_or(0)
        })
        .collect();

    let open_neighbors =
        |unsat: &[usize], i: usize| neighbors[i].iter().filter(|&&n| unsat[n] > 0).count();

    loop {
        let Some(a) = (0..system.atoms.len())
            .filter(|&i| unsat[i] > 0 && open_neighbors(&unsat, i) > 0)
            .min_by_key(|&i| (open_neighbors(&unsat, i), i))
        else {
            break;
        };

        let Some(b) = neighbors[a]
            .iter()
            .copied()
            .filter(|&n| unsat[n] > 0)
            .min_by(|&x, &y| {
                open_neighbors(&unsat, x)
                    .cmp(&open_neighbors(&unsat, y))
                    .then_with(|| {
                        let (ax, ay) = (&system.atoms[x], &system.atoms[y]);
                        let atom = &system.atoms[a];
                        atom.distance(ax)
                            .partial_cmp(&atom.distance(ay))
                            .unwrap_or(Ordering::Equal)
                    })
                    .then(x.cmp(&y))
            })
        else {
            break;
        };

        if let Some(idx) = system.find_bond(a, b) {
            let bond = &mut system.bonds[idx];
            bond.order = bond.order.raised();
        }
        unsat[a] -= 1;
        unsat[b] -= 1;
    }

    settle_charge_separated(system, &neighbors, &mut unsat);

    let leftover = unsat.iter().filter(|&&u| u > 0).count();
    if leftover > 0 {
        log::warn!("{} atom(s) remain below their standard valence", leftover);
    }
    leftover
}

/// Resolves terminal O/S atoms on an all-single nitrogen as `N(+)=O` / `N-O(-)`.
///
/// A three-coordinate nitrogen (nitro, nitrate) takes one double bond to its
/// nearest such atom; the remaining ones, and those on four-coordinate or
/// ring-conjugated nitrogens (N-oxides), carry the formal negative charge.
fn settle_charge_separated(system: &mut System, neighbors: &[Vec<usize>], unsat: &mut [usize]) {
    for n in 0..system.atoms.len() {
        if system.atoms[n].element != Element::N || neighbors[n].len() < 3 {
            continue;
        }

        let mut terminals: Vec<usize> = neighbors[n]
            .iter()
            .copied()
            .filter(|&m| {
                unsat[m] == 1
                    && neighbors[m].len() == 1
                    && matches!(system.atoms[m].element, Element::O | Element::S)
            })
            .collect();
        if terminals.is_empty() {
            continue;
        }

        let all_single = neighbors[n].iter().all(|&m| {
            system
                .find_bond(n, m)
                .is_some_and(|idx| system.bonds[idx].order == BondOrder::Single)
        });

        if all_single && neighbors[n].len() == 3 {
            let nitrogen = &system.atoms[n];
            terminals.sort_by(|&x, &y| {
                nitrogen
                    .distance(&system.atoms[x])
                    .partial_cmp(&nitrogen.distance(&system.atoms[y]))
                    .unwrap_or(Ordering::Equal)
                    .then(x.cmp(&y))
            });
            if let Some(idx) = system.find_bond(n, terminals[0]) {
                system.bonds[idx].order = BondOrder::Double;
            }
        }

        for m in terminals {
            unsat[m] = 0;
        }
    }
}
