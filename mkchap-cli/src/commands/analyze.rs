// ============================================================================
// mkchap-cli/src/commands/analyze.rs
// ============================================================================
//
// ANALYZE COMMAND: detect black sections, report chapters, optionally write
//
// Runs the core pipeline with the real ffprobe/ffmpeg collaborators and
// prints the report. Validation happens before any external tool is touched
// so argument mistakes surface as usage errors.

use crate::cli::Cli;
use crate::output::{render_json, render_text, stdout_color};
use mkchap_core::external::{CrateFfprobeExecutor, SidecarSpawner, check_dependency};
use mkchap_core::{AnalysisResult, CoreConfig, CoreResult, process_file};
use owo_colors::OwoColorize;

/// Checks the external tools the run will need.
pub fn check_dependencies(config: &CoreConfig) -> CoreResult<()> {
    check_dependency("ffprobe")?;
    if config.output_file.is_some() {
        check_dependency("ffmpeg")?;
    }
    Ok(())
}

/// Executes a full run for the parsed arguments.
///
/// Returns `Ok(None)` when the input's duration could not be determined,
/// in which case nothing is printed and nothing is written.
pub fn run_analyze(cli: &Cli) -> CoreResult<Option<AnalysisResult>> {
    let config = cli.to_config();
    config.validate()?;
    check_dependencies(&config)?;

    log::debug!("Analyzing {} with {:?}", config.input_file.display(), config.black_detect_params());

    let Some(result) = process_file(&CrateFfprobeExecutor::new(), &SidecarSpawner, &config)? else {
        return Ok(None);
    };

    if cli.json {
        println!("{}", render_json(&result)?);
    } else {
        print!("{}", render_text(&result, stdout_color()));
    }

    if let Some(output) = &config.output_file {
        let summary = format!(
            "Created {} chapter markers in {}",
            result.boundaries(),
            output.display()
        );
        // Keep stdout parseable in JSON mode.
        if cli.json {
            eprintln!("{summary}");
        } else if stdout_color() {
            println!("\n{}", summary.green());
        } else {
            println!("\n{summary}");
        }
    }

    Ok(Some(result))
}
