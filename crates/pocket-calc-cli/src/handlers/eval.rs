//! `pocketcalc eval`: replay keystrokes without a terminal

use console::Style;
use pocket_calc::core::StateSnapshot;
use pocket_calc::script::{self, ReplayStep};
use serde::Serialize;

use crate::commands::EvalArgs;
use crate::config::CliConfig;
use crate::error::CliResult;

/// JSON report for `--json --trace`
#[derive(Debug, Serialize)]
struct EvalReport<'a> {
    steps: &'a [ReplayStep],
    state: StateSnapshot,
}

/// Runs the eval command, printing to stdout
pub fn execute_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<()> {
    let output = render_eval(args, config.color.should_color())?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Replays `args.keys` and renders the requested output
pub fn render_eval(args: &EvalArgs, color: bool) -> CliResult<String> {
    let script::Trace { steps, state } = script::trace(&args.keys)?;
    tracing::info!(keys = args.keys.as_str(), display = state.display(), "replayed");

    if args.json {
        let json = if args.trace {
            serde_json::to_string_pretty(&EvalReport {
                steps: &steps,
                state: state.snapshot(),
            })?
        } else {
            serde_json::to_string_pretty(&state.snapshot())?
        };
        return Ok(json);
    }

    let display_style = Style::new().bold().force_styling(color);
    let mut lines = Vec::new();
    if args.trace {
        let key_style = Style::new().yellow().force_styling(color);
        for step in &steps {
            lines.push(format!(
                "{} {}",
                key_style.apply_to(format!("{:>2}", step.event.label())),
                step.display
            ));
        }
    }
    lines.push(display_style.apply_to(state.display()).to_string());
    Ok(lines.join("\n"))
}
