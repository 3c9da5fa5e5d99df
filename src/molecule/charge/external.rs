use crate::io::Identity;
use crate::io::charges::{self, ChargeRow};
use crate::molecule::error::Error;
use std::path::Path;

/// Reads the charges row selected by the molecule index.
///
/// Row `n` of the file belongs to the molecule whose index is `n`, so `m2`
/// takes the second row.
pub fn load_external_charges(
    path: &Path,
    identity: &Identity,
    atom_count: usize,
) -> Result<Vec<f64>, Error> {
    let index = identity
        .index
        .ok_or_else(|| Error::MissingIndex(identity.name.clone()))?;

    match charges::read_row_from_path(path, index)? {
        ChargeRow::Found(values) if values.len() == atom_count => {
            log::debug!(
                "loaded {} external charges for '{}' from row {} of {}",
                values.len(),
                identity.name,
                index,
                path.display()
            );
            Ok(values)
        }
        ChargeRow::Found(values) => Err(Error::ChargeCountMismatch {
            row: index,
            expected: atom_count,
            found: values.len(),
        }),
        ChargeRow::Missing { rows } => Err(Error::ChargeRowMissing { index, rows }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::error::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn charges_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const TWO_ROWS: &str = "0.1,0.2,0.3\n0.4,0.5,0.6\n";

    #[test]
    fn selects_row_by_index() {
        let file = charges_file(TWO_ROWS);
        let q = load_external_charges(file.path(), &Identity::new("m2"), 3).unwrap();
        assert_eq!(q, vec![0.4, 0.5, 0.6]);
    }

    #[test]
    fn short_file_is_a_lookup_error() {
        let file = charges_file(TWO_ROWS);
        let err = load_external_charges(file.path(), &Identity::new("m3"), 3).unwrap_err();
        assert!(matches!(err, Error::ChargeRowMissing { index: 3, rows: 2 }));
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn length_mismatch_is_a_parse_error() {
        let file = charges_file(TWO_ROWS);
        let err = load_external_charges(file.path(), &Identity::new("m1"), 4).unwrap_err();
        assert!(matches!(
            err,
            Error::ChargeCountMismatch {
                row: 1,
                expected: 4,
                found: 3
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn name_without_index_is_rejected() {
        let file = charges_file(TWO_ROWS);
        let err = load_external_charges(file.path(), &Identity::new("water"), 3).unwrap_err();
        assert!(matches!(err, Error::MissingIndex(ref name) if name == "water"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_external_charges(
            Path::new("/nonexistent/charges.csv"),
            &Identity::new("m1"),
            3,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Io(crate::io::Error::Io { .. })));
    }
}
