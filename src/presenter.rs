//! Terminal rendering of the result view.

use std::fmt::Write;

use fl_app::AnalysisResultView;
use fl_app::ResultRow;

const LABEL_WIDTH: usize = 14;

pub fn render_result(view: &AnalysisResultView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", "=".repeat(view.title.chars().count().max(1)));
    if let Some(image) = &view.image {
        let _ = writeln!(out, "Image: {image}");
    }

    render_section(&mut out, "Portion Information", &view.portion);
    render_section(&mut out, "Nutrition Facts", &view.nutrition);

    if !view.notes.is_empty() {
        let _ = writeln!(out, "\nAdditional Notes");
        for note in &view.notes {
            let _ = writeln!(out, "  - {note}");
        }
    }

    out
}

fn render_section(out: &mut String, title: &str, rows: &[ResultRow]) {
    let _ = writeln!(out, "\n{title}");
    for row in rows {
        let label = format!("{}:", row.label);
        let _ = writeln!(out, "  {label:<width$} {}", row.value, width = LABEL_WIDTH);
    }
}
