//! Output Rendering
//!
//! Text views return `String`s so commands decide where they go. JSON output
//! is one event object per line.

use std::fmt::Write;
use std::io;
use std::path::Path;

use crate::application::ExportReport;
use crate::domain::entities::{Entry, VariantSet};
use crate::domain::services::ResolveError;

use super::theme::{self, Icon};

/// Text styling switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
    pub unicode: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        color: false,
        unicode: true,
    };

    fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }

    fn chain_separator(&self) -> &'static str {
        if self.unicode {
            theme::icons::CHAIN
        } else {
            theme::icons_ascii::CHAIN
        }
    }
}

/// A resolved set with its entries, origin chains and assets.
pub fn render_set(set: &VariantSet, style: Style) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {}",
        style.icon(Icon::Success),
        theme::bold(set.name(), style.color),
        theme::dim(&format!("({})", set.path().display()), style.color)
    );
    if let Some(base) = set.based_on() {
        let _ = writeln!(out, "  based on {}", base);
    }

    let width = set.iter().map(|e| e.name().len()).max().unwrap_or(0);
    for entry in set {
        render_entry(&mut out, entry, width, style);
    }
    out
}

fn render_entry(out: &mut String, entry: &Entry, width: usize, style: Style) {
    let chain = entry.origin_chain().join(style.chain_separator());
    let _ = write!(
        out,
        "  {:<width$}  {}",
        entry.name(),
        theme::dim(&format!("[{}]", chain), style.color),
        width = width
    );
    if let Some(src) = entry.source() {
        let _ = write!(out, " src={}", src.display());
    } else if let Some(base) = entry.effective_base() {
        let _ = write!(out, " base={}", base);
    }
    out.push('\n');

    for asset in entry.assets() {
        let _ = write!(out, "    {} {}", style.icon(Icon::Arrow), asset.kind());
        if let Some(src) = asset.source() {
            let _ = write!(out, " {}", src.display());
        }
        if let Some(color) = asset.color() {
            let _ = write!(out, " color={}", color);
        }
        out.push('\n');
    }
}

/// A declaration that failed to resolve.
pub fn render_resolve_failure(path: &Path, err: &ResolveError, style: Style) -> String {
    format!(
        "{} {}\n  {}\n",
        style.icon(Icon::Error),
        path.display(),
        err
    )
}

/// Closing line of `resolve`.
pub fn render_resolve_summary(resolved: usize, failed: usize, style: Style) -> String {
    let icon = if failed == 0 { Icon::Success } else { Icon::Error };
    format!(
        "{} {} resolved, {} failed\n",
        style.icon(icon),
        resolved,
        failed
    )
}

/// Per-entry lines and a summary for one export run.
pub fn render_export_report(report: &ExportReport, style: Style) -> String {
    let mut out = String::new();
    for rendered in &report.rendered {
        if rendered.written {
            let _ = writeln!(out, "  {} {}", style.icon(Icon::Write), rendered.output.display());
        } else {
            let _ = writeln!(
                out,
                "  {} {} {}",
                style.icon(Icon::Unchanged),
                rendered.output.display(),
                theme::dim("(unchanged)", style.color)
            );
        }
    }
    for failure in &report.failures {
        let _ = writeln!(out, "  {} {}", style.icon(Icon::Warning), failure);
    }

    let icon = if report.is_success() {
        Icon::Success
    } else {
        Icon::Error
    };
    let _ = writeln!(
        out,
        "{} Exported {} of '{}' ({} written, {} unchanged, {} failed)",
        style.icon(icon),
        plural(report.rendered.len(), "entry", "entries"),
        report.set,
        report.written(),
        report.unchanged(),
        report.failures.len()
    );
    out
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

pub fn set_event(set: &VariantSet) -> serde_json::Value {
    serde_json::json!({
        "event": "resolved",
        "set": set,
    })
}

pub fn resolve_error_event(path: &Path, err: &ResolveError) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "path": path.display().to_string(),
        "set": err.set_name(),
        "message": err.to_string(),
    })
}

pub fn export_event(report: &ExportReport) -> serde_json::Value {
    serde_json::json!({
        "event": "export",
        "set": report.set,
        "success": report.is_success(),
        "rendered": report.rendered.iter().map(|r| serde_json::json!({
            "entry": r.entry,
            "output": r.output.display().to_string(),
            "written": r.written,
        })).collect::<Vec<_>>(),
        "failures": report.failures.iter().map(ToString::to_string).collect::<Vec<_>>(),
    })
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl io::Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(event: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, &event)
}
