use crate::io::{Format, error::Error};
use crate::model::{atom::Atom, system::System, types::Element};
use std::io::BufRead;

/// Reads the first frame of an XYZ file.
///
/// Layout: an atom count line, a free-form comment line, then one
/// `symbol x y z` line per atom. The symbol may also be an atomic number.
/// Extra columns and any further frames are ignored.
pub fn read<R: BufRead>(reader: R) -> Result<System, Error> {
    let mut lines = reader.lines().enumerate().map(|(i, line)| {
        line.map(|v| (i + 1, v))
            .map_err(|e| Error::Io { source: e })
    });

    let (count_line_no, count_line) = loop {
        match lines.next().transpose()? {
            Some((_, line)) if line.trim().is_empty() => continue,
            Some(entry) => break entry,
            None => return Err(Error::parse(Format::Xyz, 1, "missing atom count line")),
        }
    };

    let expected = count_line
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Xyz, count_line_no, "invalid atom count"))?;

    if lines.next().transpose()?.is_none() {
        return Err(Error::parse(
            Format::Xyz,
            count_line_no + 1,
            "missing comment line after atom count",
        ));
    }

    let mut system = System::new();
    system.atoms.reserve(expected);

    for idx in 0..expected {
        let (ln, raw) = lines.next().transpose()?.ok_or_else(|| {
            Error::parse(
                Format::Xyz,
                count_line_no + 2 + idx,
                format!("expected {} atoms but the file ended after {}", expected, idx),
            )
        })?;
        system.atoms.push(parse_atom_line(&raw, ln)?);
    }

    Ok(system)
}

fn parse_atom_line(raw: &str, ln: usize) -> Result<Atom, Error> {
    let parts: Vec<_> = raw.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(Error::parse(
            Format::Xyz,
            ln,
            "atom line must contain a symbol and three coordinates",
        ));
    }

    let element = parse_element(parts[0])
        .ok_or_else(|| Error::parse(Format::Xyz, ln, format!("unknown element '{}'", parts[0])))?;

    let mut position = [0.0; 3];
    for (axis, (slot, field)) in position.iter_mut().zip(&parts[1..4]).enumerate() {
        *slot = field.parse::<f64>().map_err(|_| {
            Error::parse(
                Format::Xyz,
                ln,
                format!("invalid {} coordinate '{}'", ["x", "y", "z"][axis], field),
            )
        })?;
    }

    Ok(Atom::new(element, position))
}

fn parse_element(field: &str) -> Option<Element> {
    match field.parse::<u8>() {
        Ok(z) => Element::from_atomic_number(z),
        Err(_) => Element::from_symbol_loose(field).ok(),
    }
}
