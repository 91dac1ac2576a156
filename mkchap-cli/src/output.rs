// mkchap-cli/src/output.rs
//
// Report rendering: a colored text table or pretty JSON.

use mkchap_core::{AnalysisResult, CoreResult, SectionState, format_timestamp};
use owo_colors::OwoColorize;
use std::fmt::Write as _;
use std::io::IsTerminal;

/// Whether stdout output should carry ANSI colors (respects NO_COLOR).
pub fn stdout_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Serializes the report as pretty-printed JSON.
pub fn render_json(result: &AnalysisResult) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

fn state_label(state: SectionState, color: bool) -> String {
    let label = match state {
        SectionState::Ok => "Ok",
        SectionState::TooShort => "TooShort",
        SectionState::OutsideOfWindows => "OutsideOfWindows",
    };
    if !color {
        return label.to_string();
    }
    match state {
        SectionState::Ok => label.green().to_string(),
        SectionState::TooShort => label.yellow().to_string(),
        SectionState::OutsideOfWindows => label.dimmed().to_string(),
    }
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Renders the report as a plain text table.
pub fn render_text(result: &AnalysisResult, color: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}: {}", heading("Duration", color), format_timestamp(result.duration));
    for window in &result.windows {
        let _ = writeln!(
            out,
            "{}:   {} - {}",
            heading("Window", color),
            format_timestamp(window.start),
            format_timestamp(window.finish)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} ({})", heading("Black sections", color), result.sections.len());
    if result.sections.is_empty() {
        let _ = writeln!(out, "  none detected");
    }
    for (index, section) in result.sections.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>3}  {} - {}  {:>8.3}s  {}",
            index + 1,
            format_timestamp(section.start),
            format_timestamp(section.finish),
            section.duration().as_secs_f64(),
            state_label(section.state, color)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} ({})", heading("Chapters", color), result.chapters.len());
    for (index, chapter) in result.chapters.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>3}  {} - {}",
            index + 1,
            format_timestamp(chapter.start),
            format_timestamp(chapter.finish)
        );
    }

    out
}
