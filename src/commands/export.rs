//! Export command handler

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;

use emotegen::application::{EntrySelection, ExportError};
use emotegen::domain::ports::RenderRequest;
use emotegen::presentation::output::{self, Style};
use emotegen::presentation::{create_export_use_case, create_registry, ColorWhen};

pub struct ExportArgs {
    pub declaration: PathBuf,
    pub names: Vec<String>,
    pub entries: Vec<String>,
    pub output: Option<PathBuf>,
    pub dimensions: Vec<u32>,
    pub no_resize: bool,
}

pub fn cmd_export(
    args: ExportArgs,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<ExitCode> {
    let (config, ui) = super::prepare(&args.declaration, json, verbose, color)?;
    let style = Style {
        color: ui.color,
        unicode: ui.unicode,
    };

    let mut registry = create_registry(&config);
    let set = match registry.get(&args.declaration) {
        Ok(set) => set,
        Err(err) => {
            if json {
                output::emit(output::resolve_error_event(&args.declaration, &err))?;
            } else {
                eprint!("{}", output::render_resolve_failure(&args.declaration, &err, style));
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    let names: Vec<String> = args.names.into_iter().chain(args.entries).collect();
    let selection = EntrySelection::from_names(&names);

    let output_dir = args.output.unwrap_or_else(|| config.export.output_dir.clone());
    let dimensions = if args.dimensions.is_empty() {
        config.export.dimensions.clone()
    } else {
        args.dimensions
    };
    let request = RenderRequest::new(output_dir)
        .with_dimensions(dimensions)
        .with_resize(config.export.resize && !args.no_resize);

    let report = create_export_use_case().export(&set, &selection, &request);

    if json {
        output::emit(output::export_event(&report))?;
    } else {
        if ui.verbose > 0 {
            println!("Exporting '{}' to {}", set.name(), display_dir(&request.output_dir));
        }
        print!("{}", output::render_export_report(&report, style));
    }

    let render_failed = report
        .failures
        .iter()
        .any(|f| matches!(f, ExportError::Render { .. }));
    Ok(if render_failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

fn display_dir(dir: &Path) -> String {
    if dir.as_os_str().is_empty() {
        ".".to_string()
    } else {
        dir.display().to_string()
    }
}
