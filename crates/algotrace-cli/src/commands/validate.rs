//! Graph file validation command.

use std::path::Path;

use anyhow::Result;
use algotrace_engine::Visualizer;
use serde::Serialize;

use crate::OutputFormat;
use crate::output::{self, Format};

/// Validation result output.
#[derive(Serialize)]
struct ValidationOutput {
    valid: bool,
    vertex_count: usize,
    edge_count: usize,
    directed_edge_count: usize,
    error: Option<String>,
}

/// Run the validate command.
pub fn run(path: &Path, format: OutputFormat, quiet: bool) -> Result<()> {
    let output = validate(path);

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(&output, quiet)?,
        Format::Table => {
            if let Some(error) = &output.error {
                output::error(&format!("{} is invalid: {error}", path.display()));
            } else {
                output::success(&format!("{} is valid", path.display()), quiet);
                let items = [
                    ("Vertices", output.vertex_count.to_string()),
                    ("Edges", output.edge_count.to_string()),
                    ("Directed Edges", output.directed_edge_count.to_string()),
                ];
                output::print_key_value_table(&items, fmt, quiet)?;
            }
        }
    }

    // Return error exit code if validation failed
    if !output.valid {
        std::process::exit(1);
    }

    Ok(())
}

fn validate(path: &Path) -> ValidationOutput {
    match Visualizer::new().load_graph(path) {
        Ok(graph) => ValidationOutput {
            valid: true,
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            directed_edge_count: graph.edges().iter().filter(|e| e.directed).count(),
            error: None,
        },
        Err(e) => ValidationOutput {
            valid: false,
            vertex_count: 0,
            edge_count: 0,
            directed_edge_count: 0,
            error: Some(e.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_valid_graph() {
        let file = file(
            r#"{"vertices": ["A", "B"], "edges": [{"from": "A", "to": "B", "directed": true}]}"#,
        );
        let output = validate(file.path());
        assert!(output.valid);
        assert_eq!(output.vertex_count, 2);
        assert_eq!(output.directed_edge_count, 1);
    }

    #[test]
    fn test_invalid_weight() {
        let file = file(
            r#"{"vertices": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": -1}]}"#,
        );
        let output = validate(file.path());
        assert!(!output.valid);
        assert!(output.error.unwrap().contains("weight -1"));
    }
}
