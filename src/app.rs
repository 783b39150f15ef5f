use std::path::PathBuf;

use tokio::task::JoinHandle;

use crate::config::Config;
use crate::draft::CardDraft;
use crate::export::{self, ExportError};
use crate::face::CardFace;
use crate::themes::ThemeRegistry;

/// The input row that owns keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Number,
    Expiry,
    Cvv,
    Theme,
}

impl Field {
    /// Form order, top to bottom.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Number,
        Field::Expiry,
        Field::Cvv,
        Field::Theme,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Cardholder Name",
            Field::Number => "Card Number",
            Field::Expiry => "Expiry",
            Field::Cvv => "CVV",
            Field::Theme => "Template",
        }
    }

    fn next(self) -> Field {
        let at = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(at + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Field {
        let at = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(at + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Status line severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// One-line message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusLine {
    pub text: String,
    pub kind: StatusKind,
}

/// Application state
pub struct App {
    /// The card being designed - single source of truth for the preview
    draft: CardDraft,
    /// Card theme registry (fixed at startup)
    themes: ThemeRegistry,
    /// Currently focused input row
    focus: Field,
    /// Status bar message, if any
    status: Option<StatusLine>,
    /// Configuration
    config: Config,
    /// In-flight export, if any; re-triggers are ignored while this is Some
    export_task: Option<JoinHandle<Result<PathBuf, ExportError>>>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            draft: CardDraft::default(),
            themes: ThemeRegistry::builtin(),
            focus: Field::Name,
            status: None,
            config,
            export_task: None,
        }
    }

    pub fn draft(&self) -> &CardDraft {
        &self.draft
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn status(&self) -> Option<&StatusLine> {
        self.status.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Move focus to the next input row
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous input row
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Route a typed character into the focused field. The field setter
    /// normalizes, so malformed input silently disappears.
    pub fn push_char(&mut self, c: char) {
        self.status = None;
        match self.focus {
            Field::Name => {
                let raw = format!("{}{}", self.draft.name, c);
                self.draft.set_name(&raw);
            }
            Field::Number => {
                let raw = format!("{}{}", self.draft.number, c);
                self.draft.set_number(&raw);
            }
            Field::Expiry => {
                let raw = format!("{}{}", self.draft.expiry, c);
                self.draft.set_expiry(&raw);
            }
            Field::Cvv => {
                let raw = format!("{}{}", self.draft.cvv, c);
                self.draft.set_cvv(&raw);
            }
            Field::Theme => {} // selector row, chars don't apply
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) {
        self.status = None;
        match self.focus {
            Field::Name => {
                self.draft.name.pop();
            }
            Field::Number => {
                let mut raw = self.draft.number.clone();
                raw.pop();
                self.draft.set_number(&raw);
            }
            Field::Expiry => {
                let mut raw = self.draft.expiry.clone();
                raw.pop();
                self.draft.set_expiry(&raw);
            }
            Field::Cvv => {
                let mut raw = self.draft.cvv.clone();
                raw.pop();
                self.draft.set_cvv(&raw);
            }
            Field::Theme => {}
        }
    }

    /// Clear the focused field
    pub fn clear_field(&mut self) {
        self.status = None;
        match self.focus {
            Field::Name => self.draft.set_name(""),
            Field::Number => self.draft.set_number(""),
            Field::Expiry => self.draft.set_expiry(""),
            Field::Cvv => self.draft.set_cvv(""),
            Field::Theme => {}
        }
    }

    /// Cycle the card theme. Only touches the theme field.
    pub fn cycle_theme(&mut self, step: isize) {
        let next = self.themes.cycle(&self.draft.theme, step);
        self.draft.set_theme(next);
    }

    /// Replace the whole draft with the sample card in one assignment, so
    /// no draw can observe a mix of old and new fields.
    pub fn load_sample(&mut self) {
        self.draft = CardDraft::sample();
        self.set_status(StatusKind::Info, "Sample card loaded");
        tracing::info!("Loaded sample card");
    }

    /// Whether an export is currently running
    pub fn export_in_flight(&self) -> bool {
        self.export_task.is_some()
    }

    /// Kick off a PNG export of the current preview on a blocking worker.
    /// Ignored while a previous export is still running.
    pub fn trigger_export(&mut self) {
        if self.export_in_flight() {
            tracing::debug!("Export already in flight, ignoring trigger");
            return;
        }

        // Owned snapshot: the worker never sees the live draft
        let face = CardFace::compose(&self.draft);
        let style = *self.themes.style(&self.draft.theme);
        let out_dir = self.config.output_dir();
        let name_seed = self.draft.name.clone();

        tracing::info!("Exporting card to {}", out_dir.display());
        self.export_task = Some(tokio::task::spawn_blocking(move || {
            export::export_card(&face, &style, &out_dir, &name_seed)
        }));
        self.set_status(StatusKind::Info, "Exporting...");
    }

    /// Check on the export worker; called once per event-loop tick.
    /// Surfaces the outcome on the status line when it finishes.
    pub async fn poll_export(&mut self) {
        let finished = self
            .export_task
            .as_ref()
            .map(|task| task.is_finished())
            .unwrap_or(false);
        if !finished {
            return;
        }

        let Some(task) = self.export_task.take() else {
            return;
        };
        match task.await {
            Ok(Ok(path)) => {
                self.set_status(StatusKind::Success, format!("Saved {}", path.display()));
            }
            Ok(Err(e)) => {
                tracing::warn!("Export failed: {e}");
                self.set_status(StatusKind::Error, format!("Export failed: {e}"));
            }
            Err(e) => {
                tracing::warn!("Export task panicked: {e}");
                self.set_status(StatusKind::Error, "Export failed");
            }
        }
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusLine {
            text: text.into(),
            kind,
        });
    }
}
