//! The guided two-step email workflow.
//!
//! A `mailto:` handoff cannot attach a file, so composition is gated on a
//! successful PDF download: the artifact must be on disk before the mail
//! client opens, and the UI tells the user to attach it manually.

use crate::email::EmailDraft;

/// Step within one email-composition session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailStep {
    /// Waiting for the invoice PDF to be exported and saved.
    Download,
    /// Draft fields are editable; the mail handoff is available.
    Compose,
}

/// State for a single email-composition session.
///
/// The session is scoped to one dialog lifetime: closing and reopening
/// resets it, so every session starts at [`EmailStep::Download`].
#[derive(Debug, Clone)]
pub struct EmailWorkflow {
    step: EmailStep,
    downloaded: bool,
    draft: Option<EmailDraft>,
}

impl EmailWorkflow {
    pub fn new() -> Self {
        Self {
            step: EmailStep::Download,
            downloaded: false,
            draft: None,
        }
    }

    pub fn step(&self) -> EmailStep {
        self.step
    }

    /// Whether this session has already saved the PDF. Read by the UI to
    /// discourage (not block) repeat downloads.
    pub fn downloaded(&self) -> bool {
        self.downloaded
    }

    /// Record a successful export-and-save and enter the compose step,
    /// seeding the draft defaults.
    ///
    /// The caller invokes this only after the save succeeded; on failure
    /// the workflow is simply left alone, which keeps it in
    /// [`EmailStep::Download`] for a retry. Seeding happens exactly once
    /// per session: a repeat call in the compose step leaves the
    /// (possibly edited) draft untouched.
    pub fn complete_download(&mut self, defaults: EmailDraft) {
        if self.step == EmailStep::Download {
            self.draft = Some(defaults);
            self.step = EmailStep::Compose;
            self.downloaded = true;
        }
    }

    pub fn draft(&self) -> Option<&EmailDraft> {
        self.draft.as_ref()
    }

    /// Mutable access to the draft while composing.
    pub fn draft_mut(&mut self) -> Option<&mut EmailDraft> {
        self.draft.as_mut()
    }

    /// Return to the initial state, discarding the draft. Called whenever
    /// the dialog closes, including right after the mail handoff.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for EmailWorkflow {
    fn default() -> Self {
        Self::new()
    }
}
