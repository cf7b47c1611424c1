//! Print the Mintsoft order status table.

use std::io::{self, Write};

use brand_hangar_core::{STATUS_TABLE, StatusStyle};

/// Write the status table to stdout.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run() -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_table(&mut out, &STATUS_TABLE)
}

fn write_table(out: &mut impl Write, rows: &[StatusStyle]) -> io::Result<()> {
    let width = rows.iter().map(|row| row.label.len()).max().unwrap_or(0);

    writeln!(out, "{:>2}  {:<width$}  {:<7}  {:<7}", "ID", "LABEL", "BG", "FG")?;
    for row in rows {
        writeln!(
            out,
            "{:>2}  {:<width$}  {:<7}  {:<7}",
            row.id, row.label, row.background_color, row.foreground_color
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn render(rows: &[StatusStyle]) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, rows).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_table_has_header_and_every_status() {
        let output = render(&STATUS_TABLE);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), STATUS_TABLE.len() + 1);
        assert!(lines[0].starts_with("ID  LABEL"));
        assert!(lines[1].starts_with(" 1  NEW "));
        assert!(lines[10].starts_with("10  AWAITING CONFIRMATION"));
    }

    #[test]
    fn test_row_colors() {
        let output = render(&STATUS_TABLE);
        let despatched = output
            .lines()
            .find(|line| line.contains("DESPATCHED"))
            .unwrap();
        assert!(despatched.contains("#bbf7d0"));
        assert!(despatched.contains("#065f46"));
    }

    #[test]
    fn test_empty_table_prints_header_only() {
        assert_eq!(render(&[]).lines().count(), 1);
    }
}
