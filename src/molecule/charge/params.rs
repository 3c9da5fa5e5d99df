use crate::model::types::{Element, Hybridization};
use crate::molecule::error::Error;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

const DEFAULT_PARAMS_TOML: &str = include_str!("../../../resources/gasteiger.params.toml");

static DEFAULT_PARAMS: OnceLock<GasteigerParams> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
pub struct GasteigerParams {
    #[serde(default)]
    pub global: GlobalParams,
    #[serde(default)]
    pub elements: HashMap<String, ElementParams>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GlobalParams {
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    #[serde(default = "default_damping")]
    pub damping: f64,
}

fn default_iterations() -> usize {
    12
}
fn default_damping() -> f64 {
    0.5
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            damping: default_damping(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElementParams {
    pub sp: Option<Coefficients>,
    pub sp2: Option<Coefficients>,
    pub sp3: Option<Coefficients>,
    pub default: Option<Coefficients>,
}

/// Coefficients of `chi(q) = a + b*q + c*q^2`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub cation: Option<f64>,
}

impl Coefficients {
    #[inline]
    pub fn electronegativity(&self, q: f64) -> f64 {
        self.a + q * (self.b + q * self.c)
    }

    /// Electronegativity of the singly charged cation.
    #[inline]
    pub fn cationic(&self) -> f64 {
        self.cation.unwrap_or(self.a + self.b + self.c)
    }
}

impl GasteigerParams {
    /// Coefficients for `element` in `hybridization`.
    ///
    /// Resonant atoms use their sp2 entry; unknown hybridization tries the
    /// element default and then sp3.
    pub fn lookup(
        &self,
        element: Element,
        hybridization: Hybridization,
    ) -> Result<Coefficients, Error> {
        let entry = self
            .elements
            .get(element.symbol())
            .ok_or_else(|| Error::missing_parameter(element, hybridization))?;

        let found = match hybridization {
            Hybridization::SP => entry.sp.or(entry.default),
            Hybridization::SP2 | Hybridization::Resonant => entry.sp2.or(entry.default),
            Hybridization::SP3 => entry.sp3.or(entry.default),
            Hybridization::Unknown => entry.default.or(entry.sp3),
        };

        found.ok_or_else(|| Error::missing_parameter(element, hybridization))
    }
}

pub fn load_parameters(custom_toml: Option<&str>) -> Result<GasteigerParams, Error> {
    match custom_toml {
        Some(toml) => {
            let params: GasteigerParams = toml::from_str(toml)?;
            Ok(params)
        }
        None => Ok(get_default_parameters().clone()),
    }
}

pub fn get_default_parameters() -> &'static GasteigerParams {
    DEFAULT_PARAMS.get_or_init(|| {
        toml::from_str(DEFAULT_PARAMS_TOML)
            .expect("Failed to parse embedded Gasteiger parameters. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_cover_common_elements() {
        let params = get_default_parameters();
        for symbol in ["H", "C", "N", "O", "F", "Cl", "Br", "I", "S", "P", "Si"] {
            assert!(params.elements.contains_key(symbol), "missing {}", symbol);
        }
        assert_eq!(params.global.iterations, 12);
        assert_eq!(params.global.damping, 0.5);
    }

    #[test]
    fn lookup_selects_hybridization_entry() {
        let params = get_default_parameters();
        let c3 = params.lookup(Element::C, Hybridization::SP3).unwrap();
        assert_eq!((c3.a, c3.b, c3.c), (7.98, 9.18, 1.88));

        let car = params.lookup(Element::C, Hybridization::Resonant).unwrap();
        assert_eq!(car.a, 8.79);

        let n1 = params.lookup(Element::N, Hybridization::SP).unwrap();
        assert_eq!(n1.a, 15.68);
    }

    #[test]
    fn lookup_falls_back_to_element_default() {
        let params = get_default_parameters();
        let h = params.lookup(Element::H, Hybridization::SP3).unwrap();
        assert_eq!(h.a, 7.17);
        assert_eq!(h.cationic(), 20.02);

        let cl = params.lookup(Element::Cl, Hybridization::Unknown).unwrap();
        assert_eq!(cl.a, 11.00);
    }

    #[test]
    fn lookup_reports_missing_entries() {
        let params = get_default_parameters();
        assert!(matches!(
            params.lookup(Element::O, Hybridization::SP),
            Err(Error::MissingParameter { element: Element::O, .. })
        ));
        assert!(matches!(
            params.lookup(Element::Xe, Hybridization::SP3),
            Err(Error::MissingParameter { element: Element::Xe, .. })
        ));
    }

    #[test]
    fn cationic_electronegativity_defaults_to_sum() {
        let c = Coefficients {
            a: 7.98,
            b: 9.18,
            c: 1.88,
            cation: None,
        };
        assert!((c.cationic() - 19.04).abs() < 1e-12);
        assert_eq!(c.electronegativity(0.0), 7.98);
    }

    #[test]
    fn custom_parameters_parse_valid_toml() {
        let custom = r#"
            [global]
            iterations = 6

            [elements.C]
            default = { a = 8.0, b = 9.0, c = 1.0 }
        "#;
        let params = load_parameters(Some(custom)).unwrap();
        assert_eq!(params.global.iterations, 6);
        assert_eq!(params.global.damping, 0.5);
        assert_eq!(
            params.lookup(Element::C, Hybridization::SP2).unwrap().a,
            8.0
        );
    }

    #[test]
    fn errors_on_invalid_custom_toml() {
        let invalid = "not valid [[[toml";
        assert!(matches!(
            load_parameters(Some(invalid)),
            Err(Error::ParameterParse(_))
        ));
    }
}
