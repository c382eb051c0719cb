use crate::domain::model::PassWindow;
use crate::utils::error::Result;

const RISE_TIME_FORMAT: &str = "%a %b %d %Y %H:%M:%S UTC";

/// One human-readable line per pass.
pub fn format_pass_line(pass: &PassWindow) -> String {
    let rise = match pass.rise_time() {
        Some(time) => time.format(RISE_TIME_FORMAT).to_string(),
        None => format!("epoch {}", pass.risetime),
    };
    format!("Next pass at {} for {} seconds!", rise, pass.duration)
}

pub fn render_text(passes: &[PassWindow]) -> String {
    passes
        .iter()
        .map(format_pass_line)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(passes: &[PassWindow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(passes)?)
}

/// Caller-side "next N" slicing. `None` keeps the whole list.
pub fn take_next(passes: &[PassWindow], limit: Option<usize>) -> &[PassWindow] {
    match limit {
        Some(n) if n < passes.len() => &passes[..n],
        _ => passes,
    }
}
