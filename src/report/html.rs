use std::fmt::Write;

use crate::stats::grouped::GroupedStats;

// ---------------------------------------------------------------------------
// HTML report
// ---------------------------------------------------------------------------

/// Format a statistic cell with exactly 3 fractional digits.
/// Non-finite values (a zero-Magnesium Gamma, say) print as `inf` / `NaN`.
fn fmt3(x: f64) -> String {
    format!("{x:.3}")
}

/// Escape text for use in HTML element content.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render one statistics table: header row of classes, then one row per
/// measure (mean, median, mode). An absent mode renders as `-`.
pub fn render_table(stats: &GroupedStats) -> String {
    let metric = escape(&stats.metric);
    let mut out = String::new();

    let _ = writeln!(out, "<h2>Mean, Median &amp; Mode ({metric})</h2>");
    let _ = writeln!(out, "<table>");

    // Header: one column per group key, first-seen order.
    let _ = writeln!(out, "  <thead>");
    let _ = write!(out, "    <tr><th>Measure</th>");
    for (key, _) in &stats.groups {
        let _ = write!(out, "<th>Class {}</th>", escape(key));
    }
    let _ = writeln!(out, "</tr>");
    let _ = writeln!(out, "  </thead>");

    // Body: mean / median / mode rows.
    let _ = writeln!(out, "  <tbody>");
    for (label, cell) in [
        ("Mean", Row::Mean),
        ("Median", Row::Median),
        ("Mode", Row::Mode),
    ] {
        let _ = write!(out, "    <tr><td>{metric} {label}</td>");
        for (_, group) in &stats.groups {
            let text = match cell {
                Row::Mean => fmt3(group.mean),
                Row::Median => fmt3(group.median),
                Row::Mode => group.mode.map(fmt3).unwrap_or_else(|| "-".to_string()),
            };
            let _ = write!(out, "<td>{text}</td>");
        }
        let _ = writeln!(out, "</tr>");
    }
    let _ = writeln!(out, "  </tbody>");
    let _ = writeln!(out, "</table>");

    out
}

#[derive(Clone, Copy)]
enum Row {
    Mean,
    Median,
    Mode,
}

/// Render the full report page: one table per metric, in the given order.
pub fn render_page(reports: &[GroupedStats]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Wine statistics</title>\n\
         <style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         table { border-collapse: collapse; margin-bottom: 2em; }\n\
         th, td { border: 1px solid #999; padding: 0.4em 0.8em; text-align: right; }\n\
         th { background: #eee; }\n\
         </style>\n\
         </head>\n\
         <body>\n",
    );
    for stats in reports {
        out.push_str(&render_table(stats));
    }
    out.push_str("</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::grouped::GroupStats;

    fn sample_stats() -> GroupedStats {
        GroupedStats {
            metric: "Flavanoids".to_string(),
            groups: vec![
                (
                    "1".to_string(),
                    GroupStats {
                        mean: 2.0,
                        median: 1.5,
                        mode: Some(1.0),
                    },
                ),
                (
                    "2".to_string(),
                    GroupStats {
                        mean: 0.25,
                        median: 0.2,
                        mode: None,
                    },
                ),
            ],
        }
    }

    #[test]
    fn cells_carry_three_fractional_digits() {
        let html = render_table(&sample_stats());
        assert!(html.contains("<td>2.000</td>"));
        assert!(html.contains("<td>1.500</td>"));
        assert!(html.contains("<td>0.250</td>"));
    }

    #[test]
    fn absent_mode_renders_as_dash() {
        let html = render_table(&sample_stats());
        assert!(html.contains("<td>-</td>"));
    }

    #[test]
    fn header_lists_classes_in_order() {
        let html = render_table(&sample_stats());
        let first = html.find("Class 1").unwrap();
        let second = html.find("Class 2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn group_keys_are_escaped() {
        let mut stats = sample_stats();
        stats.groups[0].0 = "<script>".to_string();
        let html = render_table(&stats);
        assert!(html.contains("Class &lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn page_contains_one_table_per_metric() {
        let mut gamma = sample_stats();
        gamma.metric = "Gamma".to_string();
        let page = render_page(&[sample_stats(), gamma]);
        assert_eq!(page.matches("<table>").count(), 2);
        assert!(page.contains("(Flavanoids)"));
        assert!(page.contains("(Gamma)"));
    }
}
