//! The import flow: staged files plus the status of the last submission.
//!
//! ```text
//! picker ──▶ stage_files ──▶ [staged] ──▶ begin_submission ──▶ ImportService
//!                                                                   │
//!                     status ◀── complete_submission ◀──────────────┘
//! ```
//!
//! [`ImportFlow::submit_batch`] chains the two submission halves for callers
//! that can hold `&mut ImportFlow` across an await. Reactive UIs keep the flow
//! in a signal and call the halves separately so no borrow spans the request.

use serde::Serialize;

use crate::contract::{FileHandle, ImportService, ACCEPTED_NO_CONTENT};
use crate::error::{ImportResult, SubmitRejected};
use crate::locale::Locale;
use crate::size::readable_size;
use crate::status::{StatusMessage, SubmissionStatus};

// =============================================================================
// Staged Files
// =============================================================================

/// A picked file waiting to be submitted.
///
/// Name and readable size are captured once, at staging time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StagedFile<H> {
    #[serde(skip)]
    handle: H,
    name: String,
    size: u64,
    readable_size: String,
}

impl<H: FileHandle> StagedFile<H> {
    pub fn new(handle: H, locale: Locale) -> Self {
        let name = handle.name();
        let size = handle.size();
        Self {
            readable_size: readable_size(size, locale),
            name,
            size,
            handle,
        }
    }
}

impl<H> StagedFile<H> {
    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Size in bytes, as reported at staging time.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn readable_size(&self) -> &str {
        &self.readable_size
    }
}

// =============================================================================
// Pending Batches
// =============================================================================

/// Identifies one submission between `begin_submission` and
/// `complete_submission`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    /// Staging generation the batch was taken from.
    generation: u64,
    /// Sequence number of the submission itself.
    submission: u64,
}

/// Files handed out by [`ImportFlow::begin_submission`], in staged order.
#[derive(Debug, Clone)]
pub struct PendingBatch<H> {
    pub ticket: SubmissionTicket,
    pub files: Vec<H>,
}

// =============================================================================
// Import Flow
// =============================================================================

/// State container for staging files and submitting them as one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportFlow<H> {
    locale: Locale,
    staged: Vec<StagedFile<H>>,
    status: SubmissionStatus,
    /// Bumped on every `stage_files`.
    generation: u64,
    /// Bumped on every accepted `begin_submission`.
    submission: u64,
    /// Status to restore if the in-flight batch gets an unhandled reply.
    status_before_submit: SubmissionStatus,
}

impl<H> Default for ImportFlow<H> {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl<H> ImportFlow<H> {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            staged: Vec::new(),
            status: SubmissionStatus::Idle,
            generation: 0,
            submission: 0,
            status_before_submit: SubmissionStatus::Idle,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Currently staged files, in selection order.
    pub fn staged(&self) -> &[StagedFile<H>] {
        &self.staged
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// The status line to display, if any.
    pub fn render_status(&self) -> Option<StatusMessage> {
        self.status.message(self.locale)
    }

    /// Resolves a batch started by [`Self::begin_submission`].
    ///
    /// - `Ok(204)` clears the staged set (unless it was replaced meanwhile)
    ///   and reports success.
    /// - Any other `Ok` status is not handled: staged files stay and the
    ///   status goes back to what it was before submitting, or to `Idle` if
    ///   a new selection was staged meanwhile.
    /// - `Err` keeps the staged files for a manual retry and reports an error.
    ///
    /// A ticket for any batch other than the one in flight is ignored.
    pub fn complete_submission(
        &mut self,
        ticket: SubmissionTicket,
        outcome: ImportResult<u16>,
    ) -> SubmissionStatus {
        if !self.is_submitting() || ticket.submission != self.submission {
            log::warn!("Ignoring completion of a batch that is not in flight");
            return self.status;
        }

        match outcome {
            Ok(ACCEPTED_NO_CONTENT) => {
                if ticket.generation == self.generation {
                    self.staged.clear();
                } else {
                    log::info!("Selection changed during upload, keeping the new files");
                }
                self.status = SubmissionStatus::Success;
                log::info!("✅ Import accepted");
            }
            Ok(code) => {
                log::warn!(
                    "⚠️  Import replied {}, expected {}: leaving state as is",
                    code,
                    ACCEPTED_NO_CONTENT
                );
                self.status = self.status_before_submit;
            }
            Err(e) => {
                log::error!("❌ Import failed: {}", e);
                self.status = SubmissionStatus::Error;
            }
        }

        self.status
    }
}

impl<H: FileHandle> ImportFlow<H> {
    /// Replaces the staged set with a fresh selection.
    ///
    /// A non-empty selection clears any displayed status. An empty one
    /// leaves the status alone; the missing-files error only fires on submit.
    /// While a batch is in flight the `Submitting` status is kept.
    pub fn stage_files<I>(&mut self, selected: I)
    where
        I: IntoIterator<Item = H>,
    {
        let locale = self.locale;
        self.staged = selected
            .into_iter()
            .map(|handle| StagedFile::new(handle, locale))
            .collect();
        self.generation = self.generation.wrapping_add(1);

        log::debug!("📄 Staged {} file(s)", self.staged.len());

        if !self.staged.is_empty() {
            if self.is_submitting() {
                // Cleared once the in-flight batch resolves
                self.status_before_submit = SubmissionStatus::Idle;
            } else {
                self.status = SubmissionStatus::Idle;
            }
        }
    }

    /// Starts a submission: checks the guards, marks the flow as
    /// `Submitting` and hands out the files to send.
    ///
    /// An empty staged set sets `NoFilesSelected`. A second call while a
    /// batch is in flight is rejected without touching any state.
    pub fn begin_submission(&mut self) -> Result<PendingBatch<H>, SubmitRejected> {
        if self.is_submitting() {
            log::warn!("Submission already in flight, ignoring");
            return Err(SubmitRejected::InFlight);
        }

        if self.staged.is_empty() {
            self.status = SubmissionStatus::NoFilesSelected;
            return Err(SubmitRejected::NoFilesSelected);
        }

        self.status_before_submit = self.status;
        self.status = SubmissionStatus::Submitting;
        self.submission = self.submission.wrapping_add(1);
        log::info!("📤 Submitting {} file(s)", self.staged.len());

        Ok(PendingBatch {
            ticket: SubmissionTicket {
                generation: self.generation,
                submission: self.submission,
            },
            files: self.staged.iter().map(|f| f.handle.clone()).collect(),
        })
    }

    /// Submits every staged file in one request and folds the outcome into
    /// the status. Never fails: errors end up as [`SubmissionStatus::Error`].
    pub async fn submit_batch<S>(&mut self, service: &S) -> SubmissionStatus
    where
        S: ImportService<H>,
    {
        let batch = match self.begin_submission() {
            Ok(batch) => batch,
            Err(_) => return self.status,
        };

        let outcome = service.import(&batch.files).await;
        self.complete_submission(batch.ticket, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ImportError;
    use std::cell::RefCell;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct FakeFile {
        name: &'static str,
        size: u64,
    }

    impl FileHandle for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn size(&self) -> u64 {
            self.size
        }
    }

    fn file(name: &'static str, size: u64) -> FakeFile {
        FakeFile { name, size }
    }

    /// Records every batch and replies with a fixed outcome.
    struct FakeService {
        reply: ImportResult<u16>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl FakeService {
        fn replying(reply: ImportResult<u16>) -> Self {
            Self {
                reply,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ImportService<FakeFile> for FakeService {
        async fn import(&self, files: &[FakeFile]) -> ImportResult<u16> {
            self.calls
                .borrow_mut()
                .push(files.iter().map(|f| f.name.to_string()).collect());
            self.reply.clone()
        }
    }

    fn names(flow: &ImportFlow<FakeFile>) -> Vec<&str> {
        flow.staged().iter().map(|f| f.name()).collect()
    }

    #[test]
    fn test_new_flow_is_empty_and_idle() {
        let flow: ImportFlow<FakeFile> = ImportFlow::default();
        assert!(flow.staged().is_empty());
        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert_eq!(flow.render_status(), None);
    }

    #[test]
    fn test_stage_captures_name_and_size() {
        let mut flow = ImportFlow::new(Locale::En);
        flow.stage_files(vec![file("a.csv", 500), file("b.csv", 1536)]);

        assert_eq!(names(&flow), vec!["a.csv", "b.csv"]);
        assert_eq!(flow.staged()[0].readable_size(), "500 B");
        assert_eq!(flow.staged()[1].readable_size(), "1.5 KB");
        assert_eq!(flow.staged()[1].size(), 1536);
    }

    #[test]
    fn test_stage_replaces_instead_of_accumulating() {
        let mut once = ImportFlow::new(Locale::PtBr);
        once.stage_files(vec![file("a.csv", 1), file("a.csv", 1)]);

        let mut twice = ImportFlow::new(Locale::PtBr);
        twice.stage_files(vec![file("a.csv", 1), file("a.csv", 1)]);
        twice.stage_files(vec![file("a.csv", 1), file("a.csv", 1)]);

        assert_eq!(once.staged(), twice.staged());
        // duplicates are kept
        assert_eq!(twice.staged().len(), 2);
    }

    #[test]
    fn test_empty_selection_keeps_status() {
        let mut flow: ImportFlow<FakeFile> = ImportFlow::default();
        assert!(flow.begin_submission().is_err());
        assert_eq!(flow.status(), SubmissionStatus::NoFilesSelected);

        flow.stage_files(Vec::new());
        assert_eq!(flow.status(), SubmissionStatus::NoFilesSelected);
    }

    #[test]
    fn test_non_empty_selection_resets_status() {
        let mut flow: ImportFlow<FakeFile> = ImportFlow::default();
        let _ = flow.begin_submission();
        assert_eq!(flow.status(), SubmissionStatus::NoFilesSelected);

        flow.stage_files(vec![file("a.csv", 10)]);
        assert_eq!(flow.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_accepted_batch_clears_staged() {
        let service = FakeService::replying(Ok(204));
        let mut flow = ImportFlow::new(Locale::PtBr);
        flow.stage_files(vec![file("a.csv", 500)]);

        let status = flow.submit_batch(&service).await;

        assert_eq!(status, SubmissionStatus::Success);
        assert!(flow.staged().is_empty());
        assert_eq!(
            flow.render_status().unwrap().text,
            "Arquivos enviados com sucesso!"
        );
        assert_eq!(service.calls.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_submit_never_calls_service() {
        let service = FakeService::replying(Ok(204));
        let mut flow = ImportFlow::default();
        flow.stage_files(Vec::new());

        let status = flow.submit_batch(&service).await;

        assert_eq!(status, SubmissionStatus::NoFilesSelected);
        assert!(service.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_batch_keeps_staged() {
        let refused = ImportError::Transport("connection refused".into());
        let service = FakeService::replying(Err(refused));
        let mut flow = ImportFlow::new(Locale::En);
        flow.stage_files(vec![file("b.csv", 10)]);
        let before = flow.staged().to_vec();

        let status = flow.submit_batch(&service).await;

        assert_eq!(status, SubmissionStatus::Error);
        assert_eq!(flow.staged(), before.as_slice());
        assert_eq!(flow.staged()[0].handle(), &file("b.csv", 10));
    }

    #[tokio::test]
    async fn test_batch_is_sent_in_staged_order() {
        let service = FakeService::replying(Ok(204));
        let mut flow = ImportFlow::default();
        flow.stage_files(vec![file("c.csv", 3), file("a.csv", 1), file("b.csv", 2)]);

        flow.submit_batch(&service).await;

        assert_eq!(service.calls.borrow()[0], vec!["c.csv", "a.csv", "b.csv"]);
    }

    #[tokio::test]
    async fn test_restage_after_error_resets_status() {
        let service = FakeService::replying(Err(ImportError::Service {
            status: 500,
            body: String::new(),
        }));
        let mut flow = ImportFlow::default();
        flow.stage_files(vec![file("a.csv", 1)]);
        flow.submit_batch(&service).await;
        assert_eq!(flow.status(), SubmissionStatus::Error);

        flow.stage_files(vec![file("c.csv", 1)]);

        assert_eq!(flow.status(), SubmissionStatus::Idle);
        assert_eq!(names(&flow), vec!["c.csv"]);
    }

    #[tokio::test]
    async fn test_retry_after_error_can_succeed() {
        let mut flow = ImportFlow::default();
        flow.stage_files(vec![file("a.csv", 1)]);

        let failing = FakeService::replying(Err(ImportError::Transport("offline".into())));
        assert_eq!(flow.submit_batch(&failing).await, SubmissionStatus::Error);

        let working = FakeService::replying(Ok(204));
        assert_eq!(flow.submit_batch(&working).await, SubmissionStatus::Success);
        assert!(flow.staged().is_empty());
    }

    #[tokio::test]
    async fn test_unhandled_success_code_is_a_no_op() {
        let service = FakeService::replying(Ok(200));
        let mut flow = ImportFlow::default();
        flow.stage_files(vec![file("a.csv", 1)]);

        let status = flow.submit_batch(&service).await;

        assert_eq!(status, SubmissionStatus::Idle);
        assert_eq!(names(&flow), vec!["a.csv"]);
    }

    #[test]
    fn test_second_begin_is_rejected_while_in_flight() {
        let mut flow = ImportFlow::default();
        flow.stage_files(vec![file("a.csv", 1)]);

        let batch = flow.begin_submission().unwrap();
        assert!(flow.is_submitting());
        assert_eq!(
            flow.render_status().unwrap().text,
            "Enviando arquivos..."
        );

        assert_eq!(flow.begin_submission().unwrap_err(), SubmitRejected::InFlight);
        assert!(flow.is_submitting());

        flow.complete_submission(batch.ticket, Ok(204));
        assert_eq!(flow.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_restage_during_flight_survives_success() {
        let mut flow = ImportFlow::default();
        flow.stage_files(vec![file("a.csv", 1)]);
        let batch = flow.begin_submission().unwrap();

        flow.stage_files(vec![file("late.csv", 2)]);
        assert!(flow.is_submitting());

        flow.complete_submission(batch.ticket, Ok(204));

        assert_eq!(flow.status(), SubmissionStatus::Success);
        assert_eq!(names(&flow), vec!["late.csv"]);
    }

    #[tokio::test]
    async fn test_restage_during_flight_clears_old_status_on_unhandled_reply() {
        let failing = FakeService::replying(Err(ImportError::Transport("offline".into())));
        let mut flow = ImportFlow::default();
        flow.stage_files(vec![file("a.csv", 1)]);
        flow.submit_batch(&failing).await;
        assert_eq!(flow.status(), SubmissionStatus::Error);

        let batch = flow.begin_submission().unwrap();
        flow.stage_files(vec![file("c.csv", 1)]);
        let status = flow.complete_submission(batch.ticket, Ok(200));

        assert_eq!(status, SubmissionStatus::Idle);
        assert_eq!(names(&flow), vec!["c.csv"]);
    }

    #[test]
    fn test_empty_restage_during_flight_keeps_old_status_on_unhandled_reply() {
        let mut flow = ImportFlow::default();
        flow.stage_files(vec![file("a.csv", 1)]);
        let first = flow.begin_submission().unwrap();
        flow.complete_submission(first.ticket, Err(ImportError::Transport("x".into())));

        let second = flow.begin_submission().unwrap();
        flow.stage_files(Vec::new());
        let status = flow.complete_submission(second.ticket, Ok(200));

        assert_eq!(status, SubmissionStatus::Error);
    }

    #[test]
    fn test_late_reply_for_previous_batch_does_not_resolve_retry() {
        let mut flow = ImportFlow::default();
        flow.stage_files(vec![file("a.csv", 1)]);
        let first = flow.begin_submission().unwrap();
        flow.complete_submission(first.ticket, Err(ImportError::Transport("x".into())));

        let second = flow.begin_submission().unwrap();
        assert_ne!(first.ticket, second.ticket);

        let status = flow.complete_submission(first.ticket, Ok(204));

        assert_eq!(status, SubmissionStatus::Submitting);
        assert_eq!(names(&flow), vec!["a.csv"]);

        flow.complete_submission(second.ticket, Ok(204));
        assert_eq!(flow.status(), SubmissionStatus::Success);
        assert!(flow.staged().is_empty());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut flow = ImportFlow::default();
        flow.stage_files(vec![file("a.csv", 1)]);
        let batch = flow.begin_submission().unwrap();
        flow.complete_submission(batch.ticket, Err(ImportError::Transport("x".into())));

        let status = flow.complete_submission(batch.ticket, Ok(204));

        assert_eq!(status, SubmissionStatus::Error);
        assert_eq!(names(&flow), vec!["a.csv"]);
    }

    #[test]
    fn test_staged_file_serializes_without_handle() {
        let staged = StagedFile::new(file("a.csv", 2048), Locale::En);
        let json = serde_json::to_value(&staged).unwrap();
        assert_eq!(json["name"], "a.csv");
        assert_eq!(json["readableSize"], "2 KB");
        assert!(json.get("handle").is_none());
    }
}
