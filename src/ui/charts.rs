//! Horizontal text bar charts for the dashboard.

use crate::utils::table::visible_width;

const BAR: char = '█';

/// Render `rows` (label, count) as a bar chart whose longest bar is
/// `width` cells. Any non-zero count gets at least one cell.
pub fn bar_chart(title: &str, rows: &[(String, usize)], width: usize) -> String {
    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    if rows.is_empty() {
        out.push_str("  (no data)\n");
        return out;
    }

    let max = rows.iter().map(|(_, c)| *c).max().unwrap_or(0).max(1);
    let label_w = rows.iter().map(|(l, _)| visible_width(l)).max().unwrap_or(0);

    for (label, count) in rows {
        let mut cells = count * width / max;
        if *count > 0 && cells == 0 {
            cells = 1;
        }
        let fill = label_w.saturating_sub(visible_width(label));
        out.push_str(&format!(
            "  {}{} | {} {}\n",
            label,
            " ".repeat(fill),
            BAR.to_string().repeat(cells),
            count
        ));
    }

    out
}
