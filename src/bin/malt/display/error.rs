use std::io::{self, Write};

use anyhow::Error;
use malt::io::{Error as IoError, Format};

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    let hints = HintCollector::collect(err);
    if !hints.is_empty() {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

#[derive(Default)]
struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn collect(err: &Error) -> Vec<String> {
        let mut collector = Self::default();

        if let Some(e) = err.chain().find_map(|e| e.downcast_ref::<malt::Error>()) {
            collector.collect_molecule_hints(e);
        } else if let Some(e) = err.chain().find_map(|e| e.downcast_ref::<IoError>()) {
            collector.collect_io_hints(e);
        } else if let Some(e) = err.chain().find_map(|e| e.downcast_ref::<io::Error>()) {
            collector.has_typed_hints = true;
            collector.collect_std_io_hints(e);
        }

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        collector.hints
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn collect_io_hints(&mut self, io_err: &IoError) {
        self.has_typed_hints = true;

        match io_err {
            IoError::Io { source } => self.collect_std_io_hints(source),

            IoError::Parse { format, line, .. } => {
                self.add(format!(
                    "Parser encountered an issue near line {} in {} data",
                    line, format
                ));
                self.add("Inspect the file around that line for malformed entries");
                self.add_format_specific_parse_hints(*format);
            }

            IoError::UnsupportedReadFormat(fmt) => {
                self.add(format!("The '{}' format cannot be used for input", fmt));
                if *fmt == Format::Mol2 {
                    self.add("MOL2 is the output format; convert from the original PDB or XYZ");
                }
                self.add("Structures are read from .pdb or .xyz files");
            }

            IoError::BioForgeIo(_) => {
                self.add("The PDB reader rejected the file");
                self.add("Check ATOM/HETATM record formatting (columns 1-80)");
            }

            IoError::Conversion(msg) => {
                if msg.to_lowercase().contains("element") {
                    self.add("An atom has an element symbol that could not be recognized");
                    self.add("Fill in the element column (77-78) of the PDB records");
                } else {
                    self.add("Converting the parsed structure failed");
                }
            }
        }
    }

    fn collect_std_io_hints(&mut self, source: &io::Error) {
        use io::ErrorKind;

        match source.kind() {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::InvalidData => {
                self.add("File contains invalid data (not UTF-8 text?)");
                self.add("Verify the file is not truncated or corrupted");
            }

            ErrorKind::BrokenPipe => {
                self.add("Output consumer closed the pipe early");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn add_format_specific_parse_hints(&mut self, format: Format) {
        match format {
            Format::Pdb => {
                self.add("PDB: Check ATOM/HETATM record formatting (columns 1-80)");
            }

            Format::Xyz => {
                self.add("XYZ: First line is the atom count, second a comment");
                self.add("XYZ: Each atom line is '<element> <x> <y> <z>'");
            }

            Format::Charges => {
                self.add("CSV: One row per molecule, comma-separated numbers");
                self.add("CSV: Row N holds the charges of molecule mN in atom order");
            }

            Format::Mol2 => {
                self.add("MOL2: Files are written, never parsed");
            }
        }
    }

    fn collect_molecule_hints(&mut self, err: &malt::Error) {
        use malt::Error as E;

        self.has_typed_hints = true;

        match err {
            E::Io(io_err) => self.collect_io_hints(io_err),

            E::MissingStructure => {
                self.add("Provide a structure with -p/--pdb or -x/--xyz");
            }

            E::EmptyStructure => {
                self.add("The input parsed but holds no atoms");
                self.add("Check for ATOM/HETATM records or a non-zero XYZ atom count");
            }

            E::MissingChargeSource => {
                self.add("Pass the charges CSV with --charges <FILE>");
            }

            E::MissingIndex(name) => {
                self.add(format!(
                    "The charges row is taken from the name '{}' minus its first character",
                    name
                ));
                self.add("Name inputs like m1, m2, ... or pass --index <N>");
            }

            E::ChargeCountMismatch { row, expected, .. } => {
                self.add(format!(
                    "Row {} of the charges file must hold exactly {} values",
                    row, expected
                ));
                self.add("Check that the CSV row matches this molecule's atom order");
            }

            E::ChargeRowMissing { index, rows } => {
                self.add(format!(
                    "Molecule index {} needs at least {} rows; the file has {}",
                    index, index, rows
                ));
                self.add("Check --index or the molecule file name");
            }

            E::UnassignedSybylType { .. } => {
                self.add("Strict typing only covers aromatic carbon and nitrogen");
                self.add("Use --sybyl extended to type them by hybridization (C.3, N.2, ...)");
            }

            E::AtomOrderNotBuilt => {
                self.add("Internal ordering error; please report if reproducible");
            }

            E::ParameterParse(_) => {
                self.add("Gasteiger parameter file has invalid TOML syntax");
                self.add("Check for missing quotes, brackets, or invalid values");
            }

            E::MissingParameter { element, .. } => {
                self.add(format!("No Gasteiger parameters for {}", element));
                self.add("Provide custom parameters via --params");
                self.add("Or use --charge qeq or --charges <FILE>");
            }

            E::Typing(_) => {
                self.add("Hybridization could not be perceived from the bond graph");
                self.add("Check that the coordinates are in Ångström");
                self.add("Try adjusting --tolerance for bond detection");
            }

            E::ChargeCalculation(msg) => {
                let msg = msg.to_lowercase();
                if msg.contains("converge") || msg.contains("iteration") {
                    self.add("QEq solver failed to converge");
                    self.add("Raise --qeq-max-iter or use --qeq-damping fixed:0.3");
                } else {
                    self.add("QEq has no parameters for some elements");
                    self.add("Use --charge gasteiger instead");
                }
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("tty") {
            self.add("Redirect stdout to a file or pass -o/--output");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
            return;
        }

        if msg.contains("permission denied") {
            self.add("Check file permissions with `ls -la`");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn hints_for_wrapped_library_errors() {
        let err = Err::<(), _>(malt::Error::MissingIndex("water".into()))
            .context("Failed to build molecule")
            .unwrap_err();
        let hints = HintCollector::collect(&err);
        assert!(hints.iter().any(|h| h.contains("--index")));
    }

    #[test]
    fn hints_for_io_errors_nested_in_molecule_errors() {
        let io_err = IoError::parse(Format::Xyz, 3, "bad coordinate");
        let err = anyhow::Error::new(malt::Error::from(io_err));
        let hints = HintCollector::collect(&err);
        assert!(hints.iter().any(|h| h.contains("line 3")));
        assert!(hints.iter().any(|h| h.starts_with("XYZ:")));
    }

    #[test]
    fn fallback_hints_for_tty_refusal() {
        let err = anyhow::anyhow!("Refusing to write MOL2 to a terminal");
        let hints = HintCollector::collect(&err);
        assert_eq!(hints.len(), 1);
        assert!(hints[0].contains("--output"));
    }
}
