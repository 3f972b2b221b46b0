//! Output formatting for CLI commands.

use algotrace_core::{Step, Trace};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::Serialize;

/// Output format selection.
#[derive(Clone, Copy)]
pub enum Format {
    Table,
    Json,
}

impl From<crate::OutputFormat> for Format {
    fn from(f: crate::OutputFormat) -> Self {
        match f {
            crate::OutputFormat::Table => Format::Table,
            crate::OutputFormat::Json => Format::Json,
        }
    }
}

/// Print data as pretty JSON.
pub fn print_json<T: Serialize>(data: &T, quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("{}", serde_json::to_string_pretty(data)?);
    }
    Ok(())
}

/// Create a styled table with consistent formatting.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.load_preset(comfy_table::presets::UTF8_FULL_CONDENSED);
    table
}

/// Add a header row to a table.
pub fn add_header(table: &mut Table, headers: &[&str]) {
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
}

/// Print a key-value table (for summaries).
pub fn print_key_value_table(
    items: &[(&str, String)],
    format: Format,
    quiet: bool,
) -> anyhow::Result<()> {
    if quiet {
        return Ok(());
    }

    match format {
        Format::Json => {
            let map: serde_json::Map<String, serde_json::Value> = items
                .iter()
                .map(|(k, v)| ((*k).to_string(), serde_json::Value::String(v.clone())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        Format::Table => {
            let mut table = create_table();
            add_header(&mut table, &["Property", "Value"]);
            for (key, value) in items {
                table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

/// Render one step's highlights as a short list.
pub fn highlights(step: &Step) -> String {
    if step.highlighted.is_empty() {
        return "-".to_string();
    }
    step.highlighted
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build the step table for a trace.
pub fn trace_table(trace: &Trace) -> Table {
    let mut table = create_table();
    add_header(&mut table, &["#", "Step", "Message", "Highlights"]);
    for (index, step) in trace.iter().enumerate() {
        let kind = Cell::new(step.kind.label());
        let kind = if step.kind.is_terminal() {
            kind.fg(Color::Green)
        } else {
            kind
        };
        table.add_row(vec![
            Cell::new(index),
            kind,
            Cell::new(&step.message),
            Cell::new(highlights(step)),
        ]);
    }
    table
}

/// Print a status message (respects quiet mode).
pub fn status(msg: &str, quiet: bool) {
    if !quiet {
        println!("{msg}");
    }
}

/// Print a success message.
pub fn success(msg: &str, quiet: bool) {
    if !quiet {
        println!("✓ {msg}");
    }
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("✗ {msg}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::{AlgorithmKind, StepKind};

    #[test]
    fn test_highlights() {
        let step = Step::new(StepKind::Relax, "relax").edge(&"A".into(), &"B".into());
        assert_eq!(highlights(&step), "A-B");
        assert_eq!(highlights(&Step::new(StepKind::Init, "start")), "-");
    }

    #[test]
    fn test_trace_table_has_row_per_step() {
        let trace = Trace::new(
            AlgorithmKind::Bfs,
            vec![
                Step::new(StepKind::Init, "start"),
                Step::new(StepKind::Done, "done"),
            ],
        );
        let table = trace_table(&trace);
        assert_eq!(table.row_iter().count(), 2);
        assert!(table.to_string().contains("done"));
    }
}
