//! Export Use Case
//!
//! Hands every selected entry of a resolved set to an `EntryRenderer`.
//! Unknown entry names and render failures are collected per entry; the
//! remaining entries are still exported.

use std::str::FromStr;
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{Entry, VariantSet};
use crate::domain::ports::{EntryRenderer, RenderError, RenderRequest, RenderedEntry};
use crate::domain::services::closest_match;

/// Which entries of a set to export
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EntrySelection {
    #[default]
    All,
    /// Entries by name, exported in the order given
    Named(Vec<String>),
}

impl EntrySelection {
    /// Selection from CLI names; no names (or the literal `<all>`) means all.
    pub fn from_names(names: &[String]) -> Self {
        let names: Vec<String> = names
            .iter()
            .flat_map(|n| n.split(','))
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();

        if names.is_empty() || names.iter().any(|n| n == "<all>") {
            EntrySelection::All
        } else {
            EntrySelection::Named(names)
        }
    }
}

impl FromStr for EntrySelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_names(&[s.to_string()]))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("set '{set}' has no entry '{entry}'{}", suggestion_suffix(.suggestion))]
    UnknownEntry {
        set: String,
        entry: String,
        suggestion: Option<String>,
    },

    #[error("failed to export '{entry}': {source}")]
    Render {
        entry: String,
        #[source]
        source: RenderError,
    },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_ref()
        .map(|s| format!(" (did you mean '{}'?)", s))
        .unwrap_or_default()
}

/// Result of exporting one set
#[derive(Debug, Default)]
pub struct ExportReport {
    pub set: String,
    pub rendered: Vec<RenderedEntry>,
    pub failures: Vec<ExportError>,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn written(&self) -> usize {
        self.rendered.iter().filter(|r| r.written).count()
    }

    pub fn unchanged(&self) -> usize {
        self.rendered.len() - self.written()
    }
}

pub struct ExportUseCase {
    renderer: Arc<dyn EntryRenderer>,
}

impl ExportUseCase {
    pub fn new(renderer: Arc<dyn EntryRenderer>) -> Self {
        Self { renderer }
    }

    pub fn export(
        &self,
        set: &VariantSet,
        selection: &EntrySelection,
        request: &RenderRequest,
    ) -> ExportReport {
        let mut report = ExportReport {
            set: set.name().to_string(),
            ..ExportReport::default()
        };

        for selected in select(set, selection) {
            let entry = match selected {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(set = set.name(), "{}", err);
                    report.failures.push(err);
                    continue;
                }
            };

            match self.renderer.render(set, entry, request) {
                Ok(rendered) => {
                    info!(
                        set = set.name(),
                        entry = entry.name(),
                        output = %rendered.output.display(),
                        written = rendered.written,
                        "exported entry"
                    );
                    report.rendered.push(rendered);
                }
                Err(source) => {
                    let err = ExportError::Render {
                        entry: entry.name().to_string(),
                        source,
                    };
                    warn!(set = set.name(), "{}", err);
                    report.failures.push(err);
                }
            }
        }

        report
    }
}

fn select<'a>(
    set: &'a VariantSet,
    selection: &EntrySelection,
) -> Vec<Result<&'a Entry, ExportError>> {
    match selection {
        EntrySelection::All => set.iter().map(Ok).collect(),
        EntrySelection::Named(names) => {
            let known: Vec<&str> = set.iter().map(Entry::name).collect();
            names
                .iter()
                .map(|name| {
                    set.get(name).ok_or_else(|| ExportError::UnknownEntry {
                        set: set.name().to_string(),
                        entry: name.clone(),
                        suggestion: closest_match(name, &known),
                    })
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    impl EntryRenderer for RecordingRenderer {
        fn render(
            &self,
            set: &VariantSet,
            entry: &Entry,
            request: &RenderRequest,
        ) -> Result<RenderedEntry, RenderError> {
            self.calls.lock().unwrap().push(entry.name().to_string());
            let output = request
                .output_dir
                .join(format!("{}_{}.json", set.name(), entry.name()));
            if self.fail_on == Some(entry.name()) {
                return Err(RenderError::Io {
                    path: output,
                    source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
                });
            }
            Ok(RenderedEntry {
                entry: entry.name().to_string(),
                output,
                written: entry.name() != "sad",
            })
        }
    }

    fn fox() -> VariantSet {
        VariantSet::new(
            "fox",
            "decl/fox.yml",
            vec![
                Entry::new("base", "fox"),
                Entry::new("happy", "fox"),
                Entry::new("sad", "fox"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn selection_from_names() {
        assert_eq!(EntrySelection::from_names(&[]), EntrySelection::All);
        assert_eq!(
            EntrySelection::from_names(&["<all>".to_string()]),
            EntrySelection::All
        );
        assert_eq!(
            EntrySelection::from_names(&["happy,sad".to_string(), " base ".to_string()]),
            EntrySelection::Named(vec![
                "happy".to_string(),
                "sad".to_string(),
                "base".to_string()
            ])
        );
        assert_eq!("happy".parse::<EntrySelection>().unwrap(), EntrySelection::Named(vec!["happy".to_string()]));
    }

    #[test]
    fn exports_all_entries_in_set_order() {
        let renderer = Arc::new(RecordingRenderer::default());
        let use_case = ExportUseCase::new(renderer.clone());

        let report = use_case.export(&fox(), &EntrySelection::All, &RenderRequest::new("out"));

        assert!(report.is_success());
        assert_eq!(*renderer.calls.lock().unwrap(), vec!["base", "happy", "sad"]);
        assert_eq!(report.written(), 2);
        assert_eq!(report.unchanged(), 1);
        assert_eq!(report.rendered[0].output, PathBuf::from("out/fox_base.json"));
    }

    #[test]
    fn unknown_names_are_reported_and_skipped() {
        let renderer = Arc::new(RecordingRenderer::default());
        let use_case = ExportUseCase::new(renderer.clone());
        let selection = EntrySelection::Named(vec!["hapy".to_string(), "sad".to_string()]);

        let report = use_case.export(&fox(), &selection, &RenderRequest::new("out"));

        assert_eq!(*renderer.calls.lock().unwrap(), vec!["sad"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failures[0].to_string(),
            "set 'fox' has no entry 'hapy' (did you mean 'happy'?)"
        );
    }

    #[test]
    fn render_failure_does_not_stop_the_export() {
        let renderer = Arc::new(RecordingRenderer {
            fail_on: Some("happy"),
            ..RecordingRenderer::default()
        });
        let use_case = ExportUseCase::new(renderer.clone());

        let report = use_case.export(&fox(), &EntrySelection::All, &RenderRequest::new("out"));

        assert!(!report.is_success());
        assert_eq!(report.rendered.len(), 2);
        assert!(matches!(
            report.failures[0],
            ExportError::Render { ref entry, .. } if entry == "happy"
        ));
    }
}
