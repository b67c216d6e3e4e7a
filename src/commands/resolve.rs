//! Resolve command handler

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use emotegen::infrastructure::expand_declaration_args;
use emotegen::presentation::output::{self, Style};
use emotegen::presentation::{create_registry, ColorWhen};

pub fn cmd_resolve(
    paths: &[PathBuf],
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<ExitCode> {
    let declarations = expand_declaration_args(paths)?;
    let start = declarations.first().cloned().unwrap_or_else(|| PathBuf::from("."));
    let (config, ui) = super::prepare(&start, json, verbose, color)?;
    let style = Style {
        color: ui.color,
        unicode: ui.unicode,
    };

    let mut registry = create_registry(&config);
    let results = registry.resolve_all(&declarations);

    let mut failed = 0;
    for (path, result) in &results {
        match result {
            Ok(set) if json => output::emit(output::set_event(set))?,
            Ok(set) => print!("{}", output::render_set(set, style)),
            Err(err) => {
                failed += 1;
                if json {
                    output::emit(output::resolve_error_event(path, err))?;
                } else {
                    eprint!("{}", output::render_resolve_failure(path, err, style));
                }
            }
        }
    }

    let resolved = results.len() - failed;
    if json {
        output::emit(serde_json::json!({
            "event": "summary",
            "resolved": resolved,
            "failed": failed,
        }))?;
    } else if results.len() > 1 || failed > 0 {
        print!("{}", output::render_resolve_summary(resolved, failed, style));
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
