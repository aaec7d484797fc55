//! Import Users page: single-file CSV upload.
//!
//! The only client-side validation is the `.csv` extension. Content checks,
//! size limits, and per-row outcomes are entirely the backend's business; its
//! result messages are stored wholesale. This is also the one page that
//! surfaces backend failures to the end user, as a single banner string.

use crate::api::ImportApi;
use crate::phase::{Outcome, Phase};

/// The operator's current file selection.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Controller for the Import Users page.
#[derive(Debug, Default)]
pub struct ImportView {
    pub file: Option<SelectedFile>,
    pub results: Vec<String>,
    pub error: Option<String>,
    pub success: bool,
    phase: Phase,
}

impl ImportView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Select a file for upload, clearing any previous validation banner.
    pub fn select_file(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.file = Some(SelectedFile {
            name: name.into(),
            bytes,
        });
        self.error = None;
    }

    /// Upload the selected file. A missing selection or a non-`.csv` name
    /// sets the banner immediately and never reaches the transport.
    pub async fn upload<C: ImportApi>(&mut self, api: &C) {
        if self.phase.is_loading() {
            return;
        }
        let Some(file) = self.file.clone() else {
            self.error = Some("Please select a file to upload".to_string());
            return;
        };
        if !file.name.ends_with(".csv") {
            self.error = Some("Please upload a CSV file".to_string());
            return;
        }

        self.phase = Phase::Loading;
        self.results.clear();
        self.success = false;
        self.error = None;

        match api.import_users(&file.name, file.bytes).await {
            Ok(rows) => {
                self.results = rows;
                self.success = true;
                self.phase = Phase::Settled(Outcome::Success);
            }
            Err(error) => {
                tracing::error!(file = %file.name, %error, "user import failed");
                self.error = Some(
                    error
                        .first_detail()
                        .unwrap_or_else(|| "An error occurred during import".to_string()),
                );
                self.phase = Phase::Settled(Outcome::Error);
            }
        }
    }
}
