use super::config::SybylPolicy;
use super::error::Error;
use crate::model::system::System;
use crate::model::types::{BondOrder, Element, Hybridization};
use dreid_typer::{
    Element as TyperElement, GraphBondOrder, Hybridization as TyperHybridization, MolecularGraph,
    assign_topology,
};

/// Perceives the hybridization of every atom from the bond graph.
pub fn assign_hybridization(system: &System) -> Result<Vec<Hybridization>, Error> {
    if system.atoms.is_empty() {
        return Ok(Vec::new());
    }

    let graph = build_molecular_graph(system)?;
    let topology = assign_topology(&graph)?;

    Ok(topology
        .atoms
        .iter()
        .map(|atom| convert_hybridization(atom.hybridization))
        .collect())
}

/// SYBYL atom type for one atom.
///
/// Aromatic carbon and nitrogen become `C.ar`/`N.ar` and hydrogen is `H`.
/// Other elements take their hybridization code (`O.3`, `S.2`, ...). The `ar`
/// code is only written for atoms flagged aromatic; a conjugated but
/// non-aromatic atom (a nitro oxygen) is typed `.2`. Non-aromatic carbon and
/// nitrogen are typed according to `policy`.
///
/// An atom without a hybridization code is written as the bare symbol (`Cl`)
/// rather than the `<symbol>.<code>` form, which would end in a dangling dot.
pub fn sybyl_type(
    atom: usize,
    element: Element,
    hybridization: Hybridization,
    aromatic: bool,
    policy: SybylPolicy,
) -> Result<String, Error> {
    let symbol = element.symbol();

    match element {
        Element::C | Element::N if aromatic => Ok(format!("{}.ar", symbol)),
        Element::C | Element::N => {
            let code = match (policy, element, hybridization) {
                (SybylPolicy::Strict, _, _) | (_, _, Hybridization::Unknown) => None,
                (_, Element::N, Hybridization::Resonant) => Some("pl3"),
                (_, Element::C, Hybridization::Resonant) => Some("2"),
                (_, _, hyb) => Some(hyb.sybyl_code()),
            };
            code.map(|code| format!("{}.{}", symbol, code))
                .ok_or(Error::UnassignedSybylType {
                    atom,
                    element,
                    hybridization,
                })
        }
        Element::H => Ok(symbol.to_string()),
        _ => match (hybridization, aromatic) {
            (Hybridization::Unknown, _) => Ok(symbol.to_string()),
            (Hybridization::Resonant, false) => Ok(format!("{}.2", symbol)),
            (hyb, _) => Ok(format!("{}.{}", symbol, hyb.sybyl_code())),
        },
    }
}

fn build_molecular_graph(system: &System) -> Result<MolecularGraph, Error> {
    let mut graph = MolecularGraph::new();

    for atom in &system.atoms {
        graph.add_atom(convert_element(atom.element)?);
    }

    for bond in &system.bonds {
        graph
            .add_bond(bond.i, bond.j, bond_order_to_graph_order(bond.order))
            .map_err(|e| Error::Typing(e.to_string()))?;
    }

    Ok(graph)
}

fn convert_element(elem: Element) -> Result<TyperElement, Error> {
    let symbol = elem.symbol();
    symbol
        .parse::<TyperElement>()
        .map_err(|_| Error::Typing(format!("element {} not supported by dreid-typer", symbol)))
}

fn bond_order_to_graph_order(order: BondOrder) -> GraphBondOrder {
    match order {
        BondOrder::Single => GraphBondOrder::Single,
        BondOrder::Double => GraphBondOrder::Double,
        BondOrder::Triple => GraphBondOrder::Triple,
        BondOrder::Aromatic => GraphBondOrder::Aromatic,
    }
}

#[allow(unreachable_patterns)]
fn convert_hybridization(hyb: TyperHybridization) -> Hybridization {
    match hyb {
        TyperHybridization::SP => Hybridization::SP,
        TyperHybridization::SP2 => Hybridization::SP2,
        TyperHybridization::SP3 => Hybridization::SP3,
        TyperHybridization::Resonant => Hybridization::Resonant,
        _ => Hybridization::Unknown,
    }
}
