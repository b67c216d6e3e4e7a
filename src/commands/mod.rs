pub mod export;
mod project_root;
pub mod resolve;

use std::path::Path;

use anyhow::{Context, Result};

use emotegen::config::{Config, ConfigWarning};
use emotegen::presentation::logging;
use emotegen::presentation::theme::Icon;
use emotegen::presentation::{ColorWhen, UiContext};

/// Load config for declarations at `start`, install logging and settle
/// output styling.
pub(crate) fn prepare(
    start: &Path,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<(Config, UiContext)> {
    let config_dir = project_root::discover_config_dir(start);
    let (config, warnings) =
        Config::load_or_default(config_dir.as_deref()).context("failed to load configuration")?;

    let ui = UiContext::new(json, verbose, color, &config);
    logging::init(verbose, config.output.verbosity, ui.color);
    print_config_warnings(&warnings, &ui);

    Ok((config, ui))
}

fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        eprintln!("{} {}", icon, w);
    }
}
