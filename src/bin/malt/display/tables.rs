use std::io::{self, Write};

use malt::Molecule;

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_structure_info(molecule: &Molecule, charge_method: &str, sybyl_policy: &str) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let aromatic = molecule.aromatic().iter().filter(|&&a| a).count();
    let net: f64 = molecule.charges().iter().sum();

    let rows = vec![
        ("Name", molecule.name().to_string()),
        (
            "Index",
            molecule
                .index()
                .map_or_else(|| "-".to_string(), |i| i.to_string()),
        ),
        ("Total Atoms", molecule.atom_count().to_string()),
        ("Total Bonds", molecule.bond_count().to_string()),
        ("Aromatic Atoms", aromatic.to_string()),
        ("Charges", charge_method.to_string()),
        ("Net Charge", format!("{:+.3}", net)),
        ("SYBYL Policy", sybyl_policy.to_string()),
    ];

    print_kv_table(&mut out, "Molecule Summary", &rows);
}

pub fn print_element_distribution(molecule: &Molecule) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let by_element = molecule.elements_by_index();
    let data: Vec<(String, usize)> = molecule
        .elements()
        .into_iter()
        .map(|e| {
            let count = by_element.get(&e).map_or(0, Vec::len);
            (e.symbol().to_string(), count)
        })
        .collect();

    print_distribution_table(&mut out, "Element Distribution", &data, molecule.atom_count());
}

/// One line per batch molecule: name, atoms, bonds, and status.
pub fn print_batch_summary(rows: &[(String, Option<(usize, usize)>)]) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let name_w = 16usize;
    let num_w = 7usize;
    let sep_overhead = 9;
    let status_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + 2 * num_w + sep_overhead);

    let line = |l: &str, m: &str, r: &str| {
        format!(
            "{}{l}{}{m}{}{m}{}{m}{}{r}",
            INDENT,
            "─".repeat(name_w + 2),
            "─".repeat(num_w + 2),
            "─".repeat(num_w + 2),
            "─".repeat(status_w + 2),
        )
    };

    let _ = writeln!(out, "{}┌─ Batch Summary ─┐", INDENT);
    let _ = writeln!(out, "{}", line("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>num_w$} │ {:>num_w$} │ {:<status_w$} │",
        INDENT, "Molecule", "Atoms", "Bonds", "Status",
    );
    let _ = writeln!(out, "{}", line("├", "┼", "┤"));

    for (name, counts) in rows {
        let (atoms, bonds, status) = match counts {
            Some((a, b)) => (a.to_string(), b.to_string(), "written"),
            None => ("-".to_string(), "-".to_string(), "failed"),
        };
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>num_w$} │ {:>num_w$} │ {:<status_w$} │",
            INDENT,
            truncate(name, name_w),
            atoms,
            bonds,
            status,
        );
    }

    let _ = writeln!(out, "{}", line("└", "┴", "┘"));
}

fn print_distribution_table(
    out: &mut impl Write,
    title: &str,
    data: &[(String, usize)],
    total: usize,
) {
    let name_w = 10usize;
    let count_w = 8usize;
    let sep_overhead = 6;
    let dist_w = SAFE_TABLE_WIDTH.saturating_sub(name_w + count_w + sep_overhead);
    let max_bar_width = dist_w.saturating_sub(8).min(20);

    let rule = |l: &str, m: &str, r: &str| {
        format!(
            "{}{l}{}{m}{}{m}{}{r}",
            INDENT,
            "─".repeat(name_w + 2),
            "─".repeat(count_w + 2),
            "─".repeat(dist_w + 2)
        )
    };

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
        INDENT, "Element", "Count", "Distribution",
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (name, count) in data {
        let pct = if total == 0 {
            0.0
        } else {
            (*count as f64 / total as f64) * 100.0
        };
        let dist_cell = format!("{}  {:>5.1}%", make_bar(pct, max_bar_width), pct);
        let _ = writeln!(
            out,
            "{}│ {:<name_w$} │ {:>count_w$} │ {:<dist_w$} │",
            INDENT,
            truncate(name, name_w),
            count,
            dist_cell,
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let rule = |l: &str, m: &str, r: &str| {
        format!(
            "{}{l}{}{m}{}{r}",
            INDENT,
            "─".repeat(key_w + 2),
            "─".repeat(val_w + 2)
        )
    };

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}│ {:<key_w$} │ {:>val_w$} │",
        INDENT, "Metric", "Value",
    );
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }

    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
}

fn make_bar(pct: f64, max_width: usize) -> String {
    let filled = ((pct / 100.0) * max_width as f64).round() as usize;
    let filled = filled.min(max_width);
    format!("{}{}", "█".repeat(filled), "░".repeat(max_width - filled))
}
