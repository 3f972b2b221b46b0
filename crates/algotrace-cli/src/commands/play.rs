//! Play command: run an algorithm and auto-play its trace.

use std::time::Duration;

use anyhow::{Result, ensure};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use super::{AlgorithmArgs, execute};
use crate::OutputFormat;
use crate::output::{self, Format};

/// Progress line emitted per step in JSON mode.
#[derive(Serialize)]
struct StepLine<'a> {
    index: usize,
    kind: &'a str,
    message: &'a str,
}

/// Run the play command.
pub fn run(args: &AlgorithmArgs, interval_ms: u64, format: OutputFormat, quiet: bool) -> Result<()> {
    ensure!(interval_ms > 0, "--interval must be at least 1 ms");

    let visualizer = args.visualizer(Some(Duration::from_millis(interval_ms)));
    let traced = execute(args, &visualizer)?;
    let algorithm = traced.trace.algorithm();
    let total = traced.trace.len();
    let summary = traced.output.summary();
    let player = visualizer.player(traced.trace);

    let fmt: Format = format.into();
    let progress = match fmt {
        Format::Table if !quiet => {
            output::status(&format!("Playing {algorithm} ({total} steps)"), quiet);
            let bar = ProgressBar::new(total as u64);
            bar.set_style(
                ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {wide_msg}")?
                    .progress_chars("=> "),
            );
            bar
        }
        _ => ProgressBar::hidden(),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let state = runtime.block_on(player.play(|index, step| {
        progress.set_position(index as u64 + 1);
        progress.set_message(format!("{}: {}", step.kind, step.message));
        if matches!(fmt, Format::Json) && !quiet {
            let line = StepLine {
                index,
                kind: step.kind.label(),
                message: &step.message,
            };
            if let Ok(line) = serde_json::to_string(&line) {
                println!("{line}");
            }
        }
    }))?;
    progress.finish();

    let items = [
        ("Algorithm", algorithm.to_string()),
        ("Steps", total.to_string()),
        ("State", state.to_string()),
        ("Result", summary),
    ];
    output::print_key_value_table(&items, fmt, quiet)
}
