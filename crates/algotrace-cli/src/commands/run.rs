//! Run command: execute an algorithm and print its trace.

use anyhow::Result;
use algotrace_core::Step;
use algotrace_engine::Outcome;
use serde::Serialize;

use super::{AlgorithmArgs, execute};
use crate::OutputFormat;
use crate::output::{self, Format};

/// Run result output.
#[derive(Serialize)]
struct RunOutput<'a> {
    algorithm: String,
    step_count: usize,
    summary: String,
    outcome: &'a Outcome,
    steps: &'a [Step],
}

/// Run the run command.
pub fn run(args: &AlgorithmArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let visualizer = args.visualizer(None);
    let traced = execute(args, &visualizer)?;
    let summary = traced.output.summary();

    let fmt: Format = format.into();
    match fmt {
        Format::Json => output::print_json(
            &RunOutput {
                algorithm: traced.trace.algorithm().to_string(),
                step_count: traced.trace.len(),
                summary,
                outcome: &traced.output,
                steps: traced.trace.steps(),
            },
            quiet,
        )?,
        Format::Table => {
            if !quiet {
                println!("{}", output::trace_table(&traced.trace));
            }
            output::success(
                &format!(
                    "{} finished in {} steps: {summary}",
                    traced.trace.algorithm(),
                    traced.trace.len()
                ),
                quiet,
            );
        }
    }

    Ok(())
}
