use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Sc,
    Ti,
    V,
    Cr,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Ga,
    Ge,
    As,
    Se,
    Br,
    Kr,
    Rb,
    Sr,
    Y,
    Zr,
    Nb,
    Mo,
    Tc,
    Ru,
    Rh,
    Pd,
    Ag,
    Cd,
    In,
    Sn,
    Sb,
    Te,
    I,
    Xe,
    Cs,
    Ba,
    La,
    Ce,
    Pr,
    Nd,
    Pm,
    Sm,
    Eu,
    Gd,
    Tb,
    Dy,
    Ho,
    Er,
    Tm,
    Yb,
    Lu,
    Hf,
    Ta,
    W,
    Re,
    Os,
    Ir,
    Pt,
    Au,
    Hg,
    Tl,
    Pb,
    Bi,
    Po,
    At,
    Rn,
    Fr,
    Ra,
    Ac,
    Th,
    Pa,
    U,
    Np,
    Pu,
    Am,
    Cm,
    Bk,
    Cf,
    Es,
    Fm,
    Md,
    No,
    Lr,
    Rf,
    Db,
    Sg,
    Bh,
    Hs,
    Mt,
    Ds,
    Rg,
    Cn,
    Nh,
    Fl,
    Mc,
    Lv,
    Ts,
    Og = 118,
}

#[rustfmt::skip]
const ELEMENTS: [Element; 118] = {
    use Element::*;
    [
        H, He, Li, Be, B, C, N, O, F, Ne, Na, Mg, Al, Si, P, S, Cl, Ar, K, Ca,
        Sc, Ti, V, Cr, Mn, Fe, Co, Ni, Cu, Zn, Ga, Ge, As, Se, Br, Kr, Rb, Sr, Y, Zr,
        Nb, Mo, Tc, Ru, Rh, Pd, Ag, Cd, In, Sn, Sb, Te, I, Xe, Cs, Ba, La, Ce, Pr, Nd,
        Pm, Sm, Eu, Gd, Tb, Dy, Ho, Er, Tm, Yb, Lu, Hf, Ta, W, Re, Os, Ir, Pt, Au, Hg,
        Tl, Pb, Bi, Po, At, Rn, Fr, Ra, Ac, Th, Pa, U, Np, Pu, Am, Cm, Bk, Cf, Es, Fm,
        Md, No, Lr, Rf, Db, Sg, Bh, Hs, Mt, Ds, Rg, Cn, Nh, Fl, Mc, Lv, Ts, Og,
    ]
};

#[rustfmt::skip]
const SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S",
    "Cl", "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga",
    "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd",
    "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm",
    "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os",
    "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa",
    "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg",
    "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Single-bond covalent radii in Å (Cordero et al., Dalton Trans. 2008), H through Cm.
#[rustfmt::skip]
const COVALENT_RADII: [f64; 96] = [
    0.31, 0.28, 1.28, 0.96, 0.84, 0.76, 0.71, 0.66, 0.57, 0.58,
    1.66, 1.41, 1.21, 1.11, 1.07, 1.05, 1.02, 1.06, 2.03, 1.76,
    1.70, 1.60, 1.53, 1.39, 1.39, 1.32, 1.26, 1.24, 1.32, 1.22,
    1.22, 1.20, 1.19, 1.20, 1.20, 1.16, 2.20, 1.95, 1.90, 1.75,
    1.64, 1.54, 1.47, 1.46, 1.42, 1.39, 1.45, 1.44, 1.42, 1.39,
    1.39, 1.38, 1.39, 1.40, 2.44, 2.15, 2.07, 2.04, 2.03, 2.01,
    1.99, 1.98, 1.98, 1.96, 1.94, 1.92, 1.92, 1.89, 1.90, 1.87,
    1.87, 1.75, 1.70, 1.62, 1.51, 1.44, 1.41, 1.36, 1.36, 1.32,
    1.45, 1.46, 1.48, 1.40, 1.50, 1.50, 2.60, 2.21, 2.15, 2.06,
    2.00, 1.96, 1.90, 1.87, 1.80, 1.69,
];

const FALLBACK_COVALENT_RADIUS: f64 = 1.50;

impl Element {
    #[inline]
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    pub fn from_atomic_number(z: u8) -> Option<Self> {
        let idx = usize::from(z).checked_sub(1)?;
        ELEMENTS.get(idx).copied()
    }

    pub fn symbol(&self) -> &'static str {
        SYMBOLS[self.index()]
    }

    pub fn covalent_radius(&self) -> f64 {
        COVALENT_RADII
            .get(self.index())
            .copied()
            .unwrap_or(FALLBACK_COVALENT_RADIUS)
    }

    /// Parses a symbol regardless of case, so `CL`, `cl` and `Cl` all give chlorine.
    pub fn from_symbol_loose(s: &str) -> Result<Self, ParseElementError> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let normalized: String = match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        };
        normalized
            .parse()
            .map_err(|_| ParseElementError(s.to_string()))
    }

    #[inline]
    fn index(&self) -> usize {
        usize::from(self.atomic_number()) - 1
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SYMBOLS
            .iter()
            .position(|&symbol| symbol == s)
            .map(|idx| ELEMENTS[idx])
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BondOrder {
    Single,
    Double,
    Triple,
    Aromatic,
}

impl BondOrder {
    pub fn value(&self) -> f64 {
        match self {
            BondOrder::Single => 1.0,
            BondOrder::Double => 2.0,
            BondOrder::Triple => 3.0,
            BondOrder::Aromatic => 1.5,
        }
    }

    /// Tripos bond type code written in the BOND block.
    pub fn mol2_code(&self) -> &'static str {
        match self {
            BondOrder::Aromatic => "ar",
            BondOrder::Single => "1",
            BondOrder::Double => "2",
            BondOrder::Triple => "3",
        }
    }

    /// Position of this bond type in the BOND block ordering `ar, 1, 2, 3`.
    pub fn mol2_rank(&self) -> u8 {
        match self {
            BondOrder::Aromatic => 0,
            BondOrder::Single => 1,
            BondOrder::Double => 2,
            BondOrder::Triple => 3,
        }
    }

    /// Next higher localized order, saturating at triple.
    pub fn raised(&self) -> BondOrder {
        match self {
            BondOrder::Single => BondOrder::Double,
            BondOrder::Double | BondOrder::Triple => BondOrder::Triple,
            BondOrder::Aromatic => BondOrder::Aromatic,
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BondOrder::Single => write!(f, "Single"),
            BondOrder::Double => write!(f, "Double"),
            BondOrder::Triple => write!(f, "Triple"),
            BondOrder::Aromatic => write!(f, "Aromatic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Hybridization {
    SP,
    SP2,
    SP3,
    Resonant,
    #[default]
    Unknown,
}

impl Hybridization {
    /// Suffix used after the element symbol in a SYBYL atom type.
    pub fn sybyl_code(&self) -> &'static str {
        match self {
            Hybridization::SP => "1",
            Hybridization::SP2 => "2",
            Hybridization::SP3 => "3",
            Hybridization::Resonant => "ar",
            Hybridization::Unknown => "",
        }
    }
}

impl fmt::Display for Hybridization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hybridization::SP => write!(f, "SP"),
            Hybridization::SP2 => write!(f, "SP2"),
            Hybridization::SP3 => write!(f, "SP3"),
            Hybridization::Resonant => write!(f, "Resonant"),
            Hybridization::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn element_from_str_valid() {
        assert_eq!(Element::from_str("H").unwrap(), Element::H);
        assert_eq!(Element::from_str("He").unwrap(), Element::He);
        assert_eq!(Element::from_str("Fe").unwrap(), Element::Fe);
        assert_eq!(Element::from_str("Og").unwrap(), Element::Og);
    }

    #[test]
    fn element_from_str_invalid_case() {
        let err = Element::from_str("h").unwrap_err();
        let s = format!("{}", err);
        assert_eq!(s, "invalid or unsupported element symbol: 'h'");
    }

    #[test]
    fn element_loose_parsing_normalizes_case() {
        assert_eq!(Element::from_symbol_loose("CL").unwrap(), Element::Cl);
        assert_eq!(Element::from_symbol_loose("br").unwrap(), Element::Br);
        assert_eq!(Element::from_symbol_loose(" c ").unwrap(), Element::C);
        assert!(Element::from_symbol_loose("Xx").is_err());
        assert!(Element::from_symbol_loose("").is_err());
    }

    #[test]
    fn element_symbol_display_and_atomic_number() {
        let el = Element::Na;
        assert_eq!(el.symbol(), "Na");
        assert_eq!(el.to_string(), "Na");
        assert_eq!(el.atomic_number(), 11u8);
    }

    #[test]
    fn element_table_is_consistent() {
        for z in 1..=118u8 {
            let el = Element::from_atomic_number(z).unwrap();
            assert_eq!(el.atomic_number(), z);
            assert_eq!(Element::from_str(el.symbol()).unwrap(), el);
        }
        assert_eq!(Element::from_atomic_number(0), None);
        assert_eq!(Element::from_atomic_number(119), None);
    }

    #[test]
    fn covalent_radius_values() {
        assert!(approx_eq(Element::H.covalent_radius(), 0.31, 1e-12));
        assert!(approx_eq(Element::C.covalent_radius(), 0.76, 1e-12));
        assert!(approx_eq(Element::Cl.covalent_radius(), 1.02, 1e-12));
        assert!(approx_eq(Element::Cm.covalent_radius(), 1.69, 1e-12));
        assert!(approx_eq(Element::Og.covalent_radius(), 1.50, 1e-12));
    }

    #[test]
    fn bondorder_mol2_codes_and_rank() {
        assert_eq!(BondOrder::Aromatic.mol2_code(), "ar");
        assert_eq!(BondOrder::Single.mol2_code(), "1");
        assert_eq!(BondOrder::Double.mol2_code(), "2");
        assert_eq!(BondOrder::Triple.mol2_code(), "3");

        assert!(BondOrder::Aromatic.mol2_rank() < BondOrder::Single.mol2_rank());
        assert!(BondOrder::Single.mol2_rank() < BondOrder::Double.mol2_rank());
        assert!(BondOrder::Double.mol2_rank() < BondOrder::Triple.mol2_rank());
    }

    #[test]
    fn bondorder_value_raise_and_display() {
        assert!(approx_eq(BondOrder::Aromatic.value(), 1.5, 1e-12));
        assert_eq!(BondOrder::Single.raised(), BondOrder::Double);
        assert_eq!(BondOrder::Double.raised(), BondOrder::Triple);
        assert_eq!(BondOrder::Triple.raised(), BondOrder::Triple);
        assert_eq!(BondOrder::Aromatic.raised(), BondOrder::Aromatic);
        assert_eq!(BondOrder::Triple.to_string(), "Triple");
    }

    #[test]
    fn hybridization_sybyl_codes() {
        assert_eq!(Hybridization::SP.sybyl_code(), "1");
        assert_eq!(Hybridization::SP2.sybyl_code(), "2");
        assert_eq!(Hybridization::SP3.sybyl_code(), "3");
        assert_eq!(Hybridization::Resonant.sybyl_code(), "ar");
        assert_eq!(Hybridization::Unknown.sybyl_code(), "");
        assert_eq!(Hybridization::default(), Hybridization::Unknown);
    }
}
