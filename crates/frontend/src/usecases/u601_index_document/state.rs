//! Upload panel state machine.
//!
//! Pure Rust, no DOM types: the view model owns the browser `File` handle and
//! feeds this machine with its name and size.

use contracts::usecases::u601_index_document::{IngestResponse, PDF_MEDIA_TYPE};

pub const INDEXING_MESSAGE: &str = "Indexing document...";
pub const ERROR_MESSAGE: &str = "Error indexing document. Please try again.";

pub fn success_message(chunks: u64) -> String {
    format!("Document indexed successfully. Chunks created: {}", chunks)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadStatus::Idle => "upload-status--idle",
            UploadStatus::Uploading => "upload-status--uploading",
            UploadStatus::Success => "upload-status--success",
            UploadStatus::Error => "upload-status--error",
        }
    }

    pub fn icon_name(&self) -> Option<&'static str> {
        match self {
            UploadStatus::Idle => None,
            UploadStatus::Uploading => Some("loader"),
            UploadStatus::Success => Some("check-circle"),
            UploadStatus::Error => Some("alert-circle"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// "1.50 MB"
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

/// Identifies one submission. Outcomes carrying a stale ticket are dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    file: Option<SelectedFile>,
    status: UploadStatus,
    message: String,
    dragging: bool,
    generation: u64,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    /// Picker selection. Not re-validated against the media type.
    pub fn select(&mut self, file: SelectedFile) {
        self.file = Some(file);
        self.status = UploadStatus::Idle;
        self.message.clear();
        self.generation += 1;
    }

    /// Drop onto the zone. Only an exact `application/pdf` is taken; anything
    /// else leaves the state untouched apart from the drag highlight.
    pub fn accept_drop(&mut self, file: SelectedFile, media_type: &str) -> bool {
        self.dragging = false;
        if media_type != PDF_MEDIA_TYPE {
            return false;
        }
        self.select(file);
        true
    }

    /// The upload button is rendered only once a file is chosen.
    pub fn show_submit(&self) -> bool {
        self.file.is_some()
    }

    pub fn submit_disabled(&self) -> bool {
        self.file.is_none() || self.status == UploadStatus::Uploading
    }

    /// Moves to `Uploading`. Returns `None` when there is nothing to send or a
    /// request is already outstanding.
    pub fn begin(&mut self) -> Option<UploadTicket> {
        if self.submit_disabled() {
            return None;
        }
        self.status = UploadStatus::Uploading;
        self.message = INDEXING_MESSAGE.to_string();
        Some(UploadTicket(self.generation))
    }

    /// Applies the settled request. Returns the chunk count on success so the
    /// caller can notify its parent.
    pub fn finish(
        &mut self,
        ticket: UploadTicket,
        outcome: Result<IngestResponse, String>,
    ) -> Option<u64> {
        if ticket.0 != self.generation || self.status != UploadStatus::Uploading {
            return None;
        }
        match outcome {
            Ok(resp) => {
                self.status = UploadStatus::Success;
                self.message = success_message(resp.chunks);
                Some(resp.chunks)
            }
            Err(_) => {
                self.status = UploadStatus::Error;
                self.message = ERROR_MESSAGE.to_string();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> SelectedFile {
        SelectedFile::new("report.pdf", 2 * 1024 * 1024)
    }

    fn indexed(chunks: u64) -> Result<IngestResponse, String> {
        Ok(IngestResponse {
            chunks,
            status: Some("indexed".to_string()),
        })
    }

    #[test]
    fn test_initial_state() {
        let state = UploadState::new();
        assert_eq!(state.status(), UploadStatus::Idle);
        assert_eq!(state.message(), "");
        assert!(state.file().is_none());
        assert!(!state.show_submit());
    }

    #[test]
    fn test_pdf_drop_selects_and_resets() {
        let mut state = UploadState::new();
        state.select(pdf());
        let ticket = state.begin().unwrap();
        state.finish(ticket, Err("HTTP 500".to_string()));
        assert_eq!(state.status(), UploadStatus::Error);

        state.set_dragging(true);
        let other = SelectedFile::new("other.pdf", 10);
        assert!(state.accept_drop(other.clone(), "application/pdf"));
        assert_eq!(state.file(), Some(&other));
        assert_eq!(state.status(), UploadStatus::Idle);
        assert_eq!(state.message(), "");
        assert!(!state.is_dragging());
    }

    #[test]
    fn test_non_pdf_drop_is_ignored() {
        let mut state = UploadState::new();
        state.select(pdf());
        let before = state.file().cloned();

        for media_type in ["image/png", "text/plain", "", "application/PDF", "application/pdf; x=1"] {
            assert!(!state.accept_drop(SelectedFile::new("x", 1), media_type));
            assert_eq!(state.file().cloned(), before);
        }
    }

    #[test]
    fn test_picker_selection_is_not_revalidated() {
        let mut state = UploadState::new();
        state.select(SelectedFile::new("notes.txt", 12));
        assert_eq!(state.file().map(|f| f.name.as_str()), Some("notes.txt"));
        assert!(state.show_submit());
    }

    #[test]
    fn test_begin_requires_file() {
        let mut state = UploadState::new();
        assert!(state.begin().is_none());
        assert_eq!(state.status(), UploadStatus::Idle);
    }

    #[test]
    fn test_begin_sets_uploading() {
        let mut state = UploadState::new();
        state.select(pdf());
        assert!(state.begin().is_some());
        assert_eq!(state.status(), UploadStatus::Uploading);
        assert_eq!(state.message(), INDEXING_MESSAGE);
        assert!(state.submit_disabled());
        // second submit while in flight is refused
        assert!(state.begin().is_none());
    }

    #[test]
    fn test_success_reports_chunks() {
        let mut state = UploadState::new();
        state.select(pdf());
        let ticket = state.begin().unwrap();
        assert_eq!(state.finish(ticket, indexed(17)), Some(17));
        assert_eq!(state.status(), UploadStatus::Success);
        assert!(state.message().contains("17"));
        assert!(!state.submit_disabled());
    }

    #[test]
    fn test_failure_sets_fixed_message() {
        let mut state = UploadState::new();
        state.select(pdf());
        let ticket = state.begin().unwrap();
        assert_eq!(state.finish(ticket, Err("connection refused".to_string())), None);
        assert_eq!(state.status(), UploadStatus::Error);
        assert_eq!(state.message(), ERROR_MESSAGE);
    }

    #[test]
    fn test_stale_outcome_after_reselect_is_dropped() {
        let mut state = UploadState::new();
        state.select(pdf());
        let ticket = state.begin().unwrap();

        state.select(SelectedFile::new("newer.pdf", 5));
        assert_eq!(state.finish(ticket, indexed(9)), None);
        assert_eq!(state.status(), UploadStatus::Idle);
        assert_eq!(state.message(), "");
    }

    #[test]
    fn test_size_label() {
        assert_eq!(pdf().size_label(), "2.00 MB");
        assert_eq!(SelectedFile::new("a", 1_572_864).size_label(), "1.50 MB");
        assert_eq!(SelectedFile::new("a", 0).size_label(), "0.00 MB");
    }
}
