//! Plain-text tables and status lines for command output.

use colored::Colorize;
use tystrings::{LintReport, SyncReport};
use unicode_width::UnicodeWidthStr;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Renders an org-mode style table.
///
/// Columns whose cells are all integers are right-aligned, everything else
/// is left-aligned. Widths use display width so CJK text lines up.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    let mut numeric = vec![!rows.is_empty(); columns];

    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.width());
            numeric[i] &= cell.parse::<i64>().is_ok();
        }
    }

    let pad = |text: &str, i: usize| {
        let fill = " ".repeat(widths[i].saturating_sub(text.width()));
        if numeric[i] {
            format!("{}{}", fill, text)
        } else {
            format!("{}{}", text, fill)
        }
    };

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().enumerate().map(|(i, h)| pad(*h, i)).collect();
    out.push_str(&format!("| {} |\n", header_cells.join(" | ")));

    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    out.push_str(&format!("|{}|\n", rule.join("+")));

    for row in rows {
        let cells: Vec<String> = (0..columns)
            .map(|i| pad(row.get(i).map(String::as_str).unwrap_or(""), i))
            .collect();
        out.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    out
}

/// The `(index, key, count)` table of duplicated keys.
pub fn duplicate_table(report: &LintReport) -> String {
    let rows: Vec<Vec<String>> = report
        .duplicates
        .iter()
        .enumerate()
        .map(|(i, d)| vec![i.to_string(), d.key.clone(), d.count().to_string()])
        .collect();
    render_table(&["", "Key", "Count"], &rows)
}

/// The `(line, key, value)` table of every duplicated occurrence.
pub fn detail_table(report: &LintReport) -> String {
    let rows: Vec<Vec<String>> = report
        .duplicates
        .iter()
        .flat_map(|d| &d.occurrences)
        .map(|e| vec![e.line_number.to_string(), e.key.clone(), e.value.clone()])
        .collect();
    render_table(&["Line", "Key", "Value"], &rows)
}

/// One line summarizing a synchronizer run.
pub fn sync_summary(path: &str, report: &SyncReport) -> String {
    let mut line = format!(
        "{} {}: {} entries, {} restored, {} new, {} unchanged",
        SUCCESS_MARK.green(),
        path,
        report.total_entries,
        report.overwritten.len(),
        report.new_keys.len(),
        report.unchanged
    );
    if !report.duplicate_keys.is_empty() {
        line.push_str(&format!(
            ", {}",
            format!("{} duplicate key(s)", report.duplicate_keys.len()).yellow()
        ));
    }
    line
}

pub fn failure_line(message: &str) -> String {
    format!("{} {}", FAILURE_MARK.red(), message.red().bold())
}

pub fn success_line(message: &str) -> String {
    format!("{} {}", SUCCESS_MARK.green(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tystrings::{StringsFile, TextEncoding, lint};

    #[test]
    fn test_render_table_alignment() {
        let rows = vec![
            vec!["0".to_string(), "greeting".to_string(), "2".to_string()],
            vec!["1".to_string(), "挨拶".to_string(), "10".to_string()],
        ];
        let table = render_table(&["", "Key", "Count"], &rows);
        assert_eq!(
            table,
            "|   | Key      | Count |\n\
             |---+----------+-------|\n\
             | 0 | greeting |     2 |\n\
             | 1 | 挨拶     |    10 |\n"
        );
    }

    #[test]
    fn test_lint_tables() {
        let file = StringsFile::parse(
            "\"X\" = \"1\";\n\"Y\" = \"y\";\n\"X\" = \"2\";\n",
            TextEncoding::Utf8,
            false,
        );
        let report = lint(&file);

        let primary = duplicate_table(&report);
        assert!(primary.contains("| 0 | X   |     2 |"));

        assert_eq!(primary.lines().count(), 3);

        let detail = detail_table(&report);
        assert!(detail.contains("|    1 | X   |     1 |"));
        assert!(detail.contains("|    3 | X   |     2 |"));
        assert!(!detail.contains("| Y"));
    }

    #[test]
    fn test_empty_table_has_only_headers() {
        let table = render_table(&["Line", "Key"], &[]);
        assert_eq!(table.lines().count(), 2);
    }
}
