//! Conversion of a single molecule into Tripos MOL2 blocks.
//!
//! A [`Molecule`] is built once from its structure inputs. Construction reads
//! the structure, perceives bonds and aromaticity, assigns hybridization and
//! computes (or loads) partial charges. Afterwards the molecule renders the
//! three MOL2 blocks:
//!
//! 1. [`Molecule::molecule_block`] — name, counts and charge type
//! 2. [`Molecule::atom_block`] — one line per atom, grouped by element
//! 3. [`Molecule::bond_block`] — one line per bond, using ATOM row numbers
//!
//! The ATOM block reorders atoms, so the bond block depends on the
//! [`AtomOrder`] built by a successful `atom_block` call. Calling `bond_block`
//! first is an [`Error::AtomOrderNotBuilt`].
//!
//! # Examples
//!
//! ```no_run
//! use malt::Molecule;
//!
//! let molecule = Molecule::from_paths(&["data/m1.pdb"], true)?;
//! let mol2 = format!(
//!     "{}{}{}",
//!     molecule.molecule_block(),
//!     molecule.atom_block()?,
//!     molecule.bond_block()?
//! );
//! # Ok::<(), malt::Error>(())
//! ```

mod builder;
pub(crate) mod charge;
mod config;
mod error;
mod order;
mod source;
mod typer;

pub use builder::MoleculeBuilder;
pub use config::{
    BasisType, ChargeMethod, ChargeType, ConvertConfig, DampingStrategy, QeqConfig, SolverOptions,
    SybylPolicy,
};
pub use error::{Error, ErrorKind};
pub use order::AtomOrder;
pub use source::StructureSource;

use crate::io::{Error as IoError, Format, Identity};
use crate::model::system::System;
use crate::model::types::{Element, Hybridization};
use crate::perceive;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::OnceLock;

/// A molecule with perceived bonds, atom types and partial charges.
#[derive(Debug, Clone)]
pub struct Molecule {
    name: String,
    index: Option<usize>,
    system: System,
    hybridization: Vec<Hybridization>,
    aromatic: Vec<bool>,
    charges: Vec<f64>,
    charge_type: ChargeType,
    sybyl_policy: SybylPolicy,
    atom_order: OnceLock<AtomOrder>,
}

impl Molecule {
    /// Builds a molecule from a set of input paths.
    ///
    /// Paths ending in `.pdb` or `.xyz` are structures and `.mol2` paths are
    /// rejected; any other path is taken as the external charges file. With `calculate_charges` the
    /// Gasteiger scheme is used and a charges path is ignored; otherwise
    /// charges are read from the charges file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStructure`] without a PDB or XYZ path and
    /// [`Error::MissingChargeSource`] if external charges are needed but no
    /// charges path is given, plus any error from [`MoleculeBuilder::build`].
    pub fn from_paths<P: AsRef<Path>>(paths: &[P], calculate_charges: bool) -> Result<Self, Error> {
        let mut builder = MoleculeBuilder::new();
        let mut charges = None;
        let mut has_structure = false;

        for path in paths {
            let path = path.as_ref();
            match Format::from_path(path) {
                Some(Format::Pdb) => {
                    builder = builder.pdb(path);
                    has_structure = true;
                }
                Some(Format::Xyz) => {
                    builder = builder.xyz(path);
                    has_structure = true;
                }
                Some(Format::Mol2) => {
                    return Err(IoError::UnsupportedReadFormat(Format::Mol2).into());
                }
                _ => charges = Some(path.to_path_buf()),
            }
        }

        if !has_structure {
            return Err(Error::MissingStructure);
        }

        let charge_method = if calculate_charges {
            ChargeMethod::Gasteiger
        } else {
            ChargeMethod::External(charges.ok_or(Error::MissingChargeSource)?)
        };

        builder
            .config(ConvertConfig {
                charge_method,
                ..Default::default()
            })
            .build()
    }

    /// Builds a molecule from an already parsed structure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyStructure`] if the structure has no atoms, or
    /// [`Error`] if hybridization perception or charge assignment fails.
    pub fn new(
        identity: Identity,
        source: StructureSource,
        config: &ConvertConfig,
    ) -> Result<Self, Error> {
        let mut system = source.resolve();
        if system.atoms.is_empty() {
            return Err(Error::EmptyStructure);
        }
        let aromatic = perceive::perceive(&mut system, &config.perception);
        let hybridization = typer::assign_hybridization(&system)?;
        let charges = charge::assign_charges(&system, &hybridization, &identity, config)?;

        log::debug!(
            "built molecule '{}' with {} atoms and {} bonds",
            identity.name,
            system.atom_count(),
            system.bond_count()
        );

        Ok(Self {
            name: identity.name,
            index: identity.index,
            system,
            hybridization,
            aromatic,
            charges,
            charge_type: config.charge_method.charge_type(),
            sybyl_policy: config.sybyl_policy,
            atom_order: OnceLock::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Row of this molecule in an external charges file.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn atom_count(&self) -> usize {
        self.system.atom_count()
    }

    pub fn bond_count(&self) -> usize {
        self.system.bond_count()
    }

    /// Partial charges in native atom order.
    pub fn charges(&self) -> &[f64] {
        &self.charges
    }

    pub fn charge_type(&self) -> ChargeType {
        self.charge_type
    }

    pub fn hybridization(&self) -> &[Hybridization] {
        &self.hybridization
    }

    pub fn aromatic(&self) -> &[bool] {
        &self.aromatic
    }

    /// Distinct elements by ascending atomic number, with hydrogen last.
    pub fn elements(&self) -> Vec<Element> {
        let present: BTreeSet<Element> = self.system.atoms.iter().map(|a| a.element).collect();
        let (hydrogen, mut elements): (Vec<Element>, Vec<Element>) =
            present.into_iter().partition(|&e| e == Element::H);
        elements.extend(hydrogen);
        elements
    }

    /// Native indices of the atoms of each element, in native order.
    pub fn elements_by_index(&self) -> BTreeMap<Element, Vec<usize>> {
        let mut groups: BTreeMap<Element, Vec<usize>> = BTreeMap::new();
        for (i, atom) in self.system.atoms.iter().enumerate() {
            groups.entry(atom.element).or_default().push(i);
        }
        groups
    }

    /// Cartesian coordinates in native atom order.
    pub fn coords(&self) -> Vec<[f64; 3]> {
        self.system.atoms.iter().map(|a| a.position).collect()
    }

    /// Replaces the charges with the row for this molecule from a charges file.
    ///
    /// The charge type becomes [`ChargeType::External`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingIndex`] if the molecule has no index,
    /// [`Error::ChargeRowMissing`] if the file is too short and
    /// [`Error::ChargeCountMismatch`] if the row length differs from the atom
    /// count. On error the current charges are kept.
    pub fn get_external_charges(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let identity = Identity {
            name: self.name.clone(),
            index: self.index,
        };
        self.charges = charge::load_external_charges(path.as_ref(), &identity, self.atom_count())?;
        self.charge_type = ChargeType::External;
        Ok(())
    }

    /// The `@<TRIPOS>MOLECULE` block.
    pub fn molecule_block(&self) -> String {
        format!(
            "@<TRIPOS>MOLECULE\n{}\n{} {} 1 0 0\nSMALL\n{}\n",
            self.name,
            self.atom_count(),
            self.bond_count(),
            self.charge_type
        )
    }

    /// The `@<TRIPOS>ATOM` block.
    ///
    /// Atoms are grouped by [`elements`](Self::elements) and numbered within
    /// each element in native order, so the third carbon is named `C3`.
    /// Charges are written with three decimals. The row order is stored as
    /// this molecule's [`AtomOrder`] once the whole block succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnassignedSybylType`] for a non-aromatic carbon or
    /// nitrogen under [`SybylPolicy::Strict`].
    pub fn atom_block(&self) -> Result<String, Error> {
        let groups = self.elements_by_index();
        let mut rows = Vec::with_capacity(self.atom_count());
        let mut block = String::from("@<TRIPOS>ATOM\n");

        for element in self.elements() {
            let Some(members) = groups.get(&element) else {
                continue;
            };
            for (rank, &native) in members.iter().enumerate() {
                let sybyl = typer::sybyl_type(
                    native,
                    element,
                    self.hybridization[native],
                    self.aromatic[native],
                    self.sybyl_policy,
                )?;
                let [x, y, z] = self.system.atoms[native].position;
                let name = format!("{}{}", element.symbol(), rank + 1);

                rows.push(native);
                block.push_str(&format!(
                    "{:>7} {:<8} {:>10.4} {:>10.4} {:>10.4} {:<6} {:>8.3}\n",
                    rows.len(),
                    name,
                    x,
                    y,
                    z,
                    sybyl,
                    self.charges[native]
                ));
            }
        }

        // Identical on every call, so a repeated set is safely ignored.
        let _ = self.atom_order.set(AtomOrder::from_rows(rows));

        Ok(block)
    }

    /// The `@<TRIPOS>BOND` block.
    ///
    /// Bonds are sorted by type in the order `ar, 1, 2, 3` and then by
    /// begin row; endpoints are ATOM rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AtomOrderNotBuilt`] if no `atom_block` call has
    /// succeeded on this molecule.
    pub fn bond_block(&self) -> Result<String, Error> {
        let order = self.atom_order.get().ok_or(Error::AtomOrderNotBuilt)?;

        let mut bonds = self
            .system
            .bonds
            .iter()
            .map(|bond| {
                let begin = order.row_of(bond.i).ok_or(Error::AtomOrderNotBuilt)?;
                let end = order.row_of(bond.j).ok_or(Error::AtomOrderNotBuilt)?;
                Ok((bond.order, begin, end))
            })
            .collect::<Result<Vec<_>, Error>>()?;
        bonds.sort_by_key(|&(bond_order, begin, _)| (bond_order.mol2_rank(), begin));

        let mut block = String::from("@<TRIPOS>BOND\n");
        for (n, (bond_order, begin, end)) in bonds.iter().enumerate() {
            block.push_str(&format!(
                "{:>6} {:>5} {:>5} {}\n",
                n + 1,
                begin,
                end,
                bond_order.mol2_code()
            ));
        }

        Ok(block)
    }

    /// The ATOM row table, once [`atom_block`](Self::atom_block) has succeeded.
    pub fn atom_order(&self) -> Option<&AtomOrder> {
        self.atom_order.get()
    }

    /// The complete MOL2 document.
    pub fn to_mol2(&self) -> Result<String, Error> {
        crate::io::mol2::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::system::Bond;
    use crate::model::types::BondOrder;
    use crate::perceive::fixtures;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const WATER_XYZ: &str = "3\nwater\nO 0.0 0.0 0.0\nH 0.9572 0.0 0.0\nH -0.2400 0.9266 0.0\n";
    const CHARGES: &str = "0.1,0.2,0.3\n0.4,0.5,0.6\n";

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn from_system(name: &str, system: System, policy: SybylPolicy) -> Molecule {
        let config = ConvertConfig {
            sybyl_policy: policy,
            ..Default::default()
        };
        Molecule::new(Identity::new(name), StructureSource::Xyz(system), &config).unwrap()
    }

    fn rows_of(block: &str) -> Vec<Vec<&str>> {
        block
            .lines()
            .skip(1)
            .map(|line| line.split_whitespace().collect())
            .collect()
    }

    #[test]
    fn elements_sorted_by_atomic_number_with_hydrogen_last() {
        let methanol = from_system("m1", fixtures::methanol(), SybylPolicy::Extended);
        assert_eq!(
            methanol.elements(),
            vec![Element::C, Element::O, Element::H]
        );

        let water = from_system("m1", fixtures::water(), SybylPolicy::Strict);
        assert_eq!(water.elements(), vec![Element::O, Element::H]);
    }

    #[test]
    fn elements_order_for_carbon_hydrogen_nitrogen() {
        let mut system = System::new();
        for (element, x) in [(Element::C, 0.0), (Element::H, 1.0), (Element::H, 2.0), (Element::N, 3.0)] {
            system.atoms.push(crate::model::atom::Atom::new(element, [x, 0.0, 0.0]));
        }
        let molecule = Molecule {
            name: "m1".to_string(),
            index: Some(1),
            hybridization: vec![Hybridization::Unknown; 4],
            aromatic: vec![false; 4],
            charges: vec![0.0; 4],
            charge_type: ChargeType::Gasteiger,
            sybyl_policy: SybylPolicy::Strict,
            atom_order: OnceLock::new(),
            system,
        };

        let symbols: Vec<&str> = molecule.elements().iter().map(Element::symbol).collect();
        assert_eq!(symbols, vec!["C", "N", "H"]);
    }

    #[test]
    fn elements_by_index_groups_in_native_order() {
        let methanol = from_system("m1", fixtures::methanol(), SybylPolicy::Extended);
        let groups = methanol.elements_by_index();
        assert_eq!(groups[&Element::C], vec![0]);
        assert_eq!(groups[&Element::O], vec![1]);
        assert_eq!(groups[&Element::H], vec![2, 3, 4, 5]);
    }

    #[test]
    fn molecule_block_has_five_lines() {
        let water = from_system("m7", fixtures::water(), SybylPolicy::Strict);
        assert_eq!(
            water.molecule_block(),
            "@<TRIPOS>MOLECULE\nm7\n3 2 1 0 0\nSMALL\nGASTEIGER\n"
        );
        assert_eq!(water.index(), Some(7));
    }

    #[test]
    fn atom_block_groups_by_element_and_names_by_rank() {
        let methanol = from_system("m1", fixtures::methanol(), SybylPolicy::Extended);
        let block = methanol.atom_block().unwrap();
        assert!(block.starts_with("@<TRIPOS>ATOM\n"));

        let rows = rows_of(&block);
        let names: Vec<&str> = rows.iter().map(|r| r[1]).collect();
        assert_eq!(names, vec!["C1", "O1", "H1", "H2", "H3", "H4"]);
        let types: Vec<&str> = rows.iter().map(|r| r[5]).collect();
        assert_eq!(types, vec!["C.3", "O.3", "H", "H", "H", "H"]);
        assert_eq!(rows[1][2], "1.4300");
    }

    #[test]
    fn atom_block_line_layout() {
        let water = from_system("m1", fixtures::water(), SybylPolicy::Strict);
        let block = water.atom_block().unwrap();
        let first = block.lines().nth(1).unwrap();
        let expected_prefix = format!(
            "{:>7} {:<8} {:>10} {:>10} {:>10} {:<6} ",
            1, "O1", "0.0000", "0.0000", "0.0000", "O.3"
        );
        assert!(first.starts_with(&expected_prefix), "got {:?}", first);
    }

    #[test]
    fn charges_have_three_decimals() {
        let dir = TempDir::new().unwrap();
        let xyz = write(&dir, "m1.xyz", WATER_XYZ);
        let csv = write(&dir, "charges.csv", "0,-0.1234,0.5\n");

        let water = Molecule::from_paths(&[xyz, csv], false).unwrap();
        let block = water.atom_block().unwrap();
        let charges: Vec<&str> = rows_of(&block).iter().map(|r| r[6]).collect();
        assert_eq!(charges, vec!["0.000", "-0.123", "0.500"]);

        let gasteiger = from_system("m1", fixtures::water(), SybylPolicy::Strict);
        for row in rows_of(&gasteiger.atom_block().unwrap()) {
            let decimals = row[6].split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 3);
        }
    }

    #[test]
    fn atom_order_is_a_bijection() {
        let methanol = from_system("m1", fixtures::methanol(), SybylPolicy::Extended);
        assert!(methanol.atom_order().is_none());
        methanol.atom_block().unwrap();

        let order = methanol.atom_order().unwrap();
        let mut rows: Vec<usize> = (0..methanol.atom_count())
            .map(|i| order.row_of(i).unwrap())
            .collect();
        rows.sort_unstable();
        assert_eq!(rows, (1..=methanol.atom_count()).collect::<Vec<_>>());
        assert_eq!(order.row_of(1), Some(2));
        assert_eq!(order.native_at(3), Some(2));
    }

    #[test]
    fn bond_endpoints_are_atom_rows() {
        let benzene = from_system("m1", fixtures::benzene(), SybylPolicy::Strict);
        let atoms = benzene.atom_block().unwrap();
        let bonds = benzene.bond_block().unwrap();
        let atom_rows = rows_of(&atoms).len();

        let bond_rows = rows_of(&bonds);
        assert_eq!(bond_rows.len(), 12);
        for row in &bond_rows {
            for endpoint in [row[1], row[2]] {
                let n: usize = endpoint.parse().unwrap();
                assert!((1..=atom_rows).contains(&n));
            }
        }
        let types: Vec<&str> = bond_rows.iter().map(|r| r[3]).collect();
        assert_eq!(&types[..6], &["ar"; 6]);
        assert_eq!(&types[6..], &["1"; 6]);
    }

    #[test]
    fn bonds_sorted_by_type_then_begin_row() {
        let mut system = fixtures::carbon_dioxide();
        system.atoms.push(crate::model::atom::Atom::new(Element::H, [5.0, 0.0, 0.0]));
        system.bonds = vec![
            Bond::new(0, 1, BondOrder::Triple),
            Bond::new(2, 3, BondOrder::Single),
            Bond::new(1, 2, BondOrder::Double),
            Bond::new(0, 3, BondOrder::Aromatic),
            Bond::new(0, 2, BondOrder::Single),
        ];
        let molecule = Molecule {
            name: "m1".to_string(),
            index: Some(1),
            hybridization: vec![
                Hybridization::Unknown,
                Hybridization::SP,
                Hybridization::Unknown,
                Hybridization::Unknown,
            ],
            aromatic: vec![false; 4],
            charges: vec![0.0; 4],
            charge_type: ChargeType::Gasteiger,
            sybyl_policy: SybylPolicy::Extended,
            atom_order: OnceLock::new(),
            system,
        };

        molecule.atom_block().unwrap();
        let block = molecule.bond_block().unwrap();
        let rows = rows_of(&block);
        let types: Vec<&str> = rows.iter().map(|r| r[3]).collect();
        assert_eq!(types, vec!["ar", "1", "1", "2", "3"]);

        // rows: C=1, O(0)=2, O(2)=3, H=4
        let singles: Vec<(&str, &str)> = rows[1..3].iter().map(|r| (r[1], r[2])).collect();
        assert_eq!(singles, vec![("2", "3"), ("3", "4")]);
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[4][0], "5");
    }

    #[test]
    fn bond_block_requires_atom_block() {
        let water = from_system("m1", fixtures::water(), SybylPolicy::Strict);
        let err = water.bond_block().unwrap_err();
        assert!(matches!(err, Error::AtomOrderNotBuilt));
        assert_eq!(err.kind(), ErrorKind::State);

        water.atom_block().unwrap();
        assert!(water.bond_block().is_ok());
    }

    #[test]
    fn failed_atom_block_does_not_build_order() {
        let methanol = from_system("m1", fixtures::methanol(), SybylPolicy::Strict);
        let err = methanol.atom_block().unwrap_err();
        assert!(matches!(
            err,
            Error::UnassignedSybylType {
                atom: 0,
                element: Element::C,
                ..
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(methanol.atom_order().is_none());
        assert!(matches!(
            methanol.bond_block(),
            Err(Error::AtomOrderNotBuilt)
        ));
    }

    #[test]
    fn missing_structure_is_a_parse_error() {
        let err = Molecule::from_paths::<&str>(&[], true).unwrap_err();
        assert!(matches!(err, Error::MissingStructure));
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = Molecule::from_paths(&["charges.csv"], false).unwrap_err();
        assert!(matches!(err, Error::MissingStructure));
    }

    #[test]
    fn empty_structure_is_a_parse_error() {
        let err = Molecule::new(
            Identity::new("m1"),
            StructureSource::Xyz(System::new()),
            &ConvertConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyStructure));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn mol2_input_is_rejected() {
        let err = Molecule::from_paths(&["m1.xyz", "m1.mol2"], true).unwrap_err();
        assert!(matches!(
            err,
            Error::Io(IoError::UnsupportedReadFormat(Format::Mol2))
        ));
    }

    #[test]
    fn nitro_oxygens_are_not_aromatic_types() {
        let nitro = from_system("m1", fixtures::nitromethane(), SybylPolicy::Extended);
        assert!(nitro.aromatic().iter().all(|&a| !a));

        let block = nitro.atom_block().unwrap();
        let rows = rows_of(&block);
        let oxygens: Vec<&str> = rows
            .iter()
            .filter(|r| r[1].starts_with('O'))
            .map(|r| r[5])
            .collect();
        assert_eq!(oxygens.len(), 2);
        assert!(oxygens.iter().all(|t| t.starts_with("O.") && *t != "O.ar"), "{:?}", oxygens);
    }

    #[test]
    fn external_charges_need_a_charges_file() {
        let dir = TempDir::new().unwrap();
        let xyz = write(&dir, "m1.xyz", WATER_XYZ);
        let err = Molecule::from_paths(&[xyz], false).unwrap_err();
        assert!(matches!(err, Error::MissingChargeSource));
    }

    #[test]
    fn external_charges_selected_by_index() {
        let dir = TempDir::new().unwrap();
        let xyz = write(&dir, "m2.xyz", WATER_XYZ);
        let csv = write(&dir, "charges.csv", CHARGES);

        let water = Molecule::from_paths(&[csv, xyz], false).unwrap();
        assert_eq!(water.name(), "m2");
        assert_eq!(water.index(), Some(2));
        assert_eq!(water.charges(), &[0.4, 0.5, 0.6]);
        assert!(water.molecule_block().ends_with("SMALL\nDFT\n"));
    }

    #[test]
    fn short_charges_file_is_a_lookup_error() {
        let dir = TempDir::new().unwrap();
        let xyz = write(&dir, "m3.xyz", WATER_XYZ);
        let csv = write(&dir, "charges.csv", CHARGES);

        let err = Molecule::from_paths(&[xyz, csv], false).unwrap_err();
        assert!(matches!(err, Error::ChargeRowMissing { index: 3, rows: 2 }));
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn charge_count_mismatch_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let xyz = write(&dir, "m1.xyz", WATER_XYZ);
        let csv = write(&dir, "charges.csv", "0.1,0.2\n");

        let err = Molecule::from_paths(&[xyz, csv], false).unwrap_err();
        assert!(matches!(err, Error::ChargeCountMismatch { .. }));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn get_external_charges_switches_to_dft() {
        let dir = TempDir::new().unwrap();
        let xyz = write(&dir, "m2.xyz", WATER_XYZ);
        let csv = write(&dir, "charges.csv", CHARGES);

        let mut water = Molecule::from_paths(&[&xyz], true).unwrap();
        assert_eq!(water.charge_type(), ChargeType::Gasteiger);

        water.get_external_charges(&csv).unwrap();
        assert_eq!(water.charge_type(), ChargeType::External);
        assert_eq!(water.charges(), &[0.4, 0.5, 0.6]);
    }

    #[test]
    fn failed_external_load_keeps_charges() {
        let dir = TempDir::new().unwrap();
        let xyz = write(&dir, "m5.xyz", WATER_XYZ);
        let csv = write(&dir, "charges.csv", CHARGES);

        let mut water = Molecule::from_paths(&[&xyz], true).unwrap();
        let before = water.charges().to_vec();
        assert!(water.get_external_charges(&csv).is_err());
        assert_eq!(water.charges(), before.as_slice());
        assert_eq!(water.charge_type(), ChargeType::Gasteiger);
    }

    #[test]
    fn coords_follow_native_order() {
        let water = from_system("m1", fixtures::water(), SybylPolicy::Strict);
        let coords = water.coords();
        assert_eq!(coords.len(), 3);
        assert_eq!(coords[1], [0.9572, 0.0, 0.0]);
    }
}
