//! Submission status and its localized rendering.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Outcome of the most recent submission attempt.
///
/// Exactly one variant is active at a time. `Idle` means "no message": it is
/// the initial value and what a fresh non-empty selection resets to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    /// A batch has been handed to the import service and not resolved yet.
    Submitting,
    Success,
    Error,
    NoFilesSelected,
}

/// Visual tone of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    Success,
    Error,
    Warning,
    Pending,
}

impl StatusTone {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusTone::Success => "status-success",
            StatusTone::Error => "status-error",
            StatusTone::Warning => "status-warning",
            StatusTone::Pending => "status-pending",
        }
    }
}

/// A renderable status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub tone: StatusTone,
    pub text: &'static str,
}

impl SubmissionStatus {
    /// Projects the status onto a fixed localized line. `Idle` has none.
    pub fn message(&self, locale: Locale) -> Option<StatusMessage> {
        let tone = match self {
            SubmissionStatus::Idle => return None,
            SubmissionStatus::Submitting => StatusTone::Pending,
            SubmissionStatus::Success => StatusTone::Success,
            SubmissionStatus::Error => StatusTone::Error,
            SubmissionStatus::NoFilesSelected => StatusTone::Warning,
        };

        let text = match (locale, self) {
            (_, SubmissionStatus::Idle) => return None,
            (Locale::PtBr, SubmissionStatus::Submitting) => "Enviando arquivos...",
            (Locale::PtBr, SubmissionStatus::Success) => "Arquivos enviados com sucesso!",
            (Locale::PtBr, SubmissionStatus::Error) => {
                "Ocorreu um problema com o envio de arquivos!"
            }
            (Locale::PtBr, SubmissionStatus::NoFilesSelected) => "Nenhum arquivo encontrado.",
            (Locale::En, SubmissionStatus::Submitting) => "Sending files...",
            (Locale::En, SubmissionStatus::Success) => "Files sent successfully!",
            (Locale::En, SubmissionStatus::Error) => "There was a problem sending the files!",
            (Locale::En, SubmissionStatus::NoFilesSelected) => "No files found.",
        };

        Some(StatusMessage { tone, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_renders_nothing() {
        assert_eq!(SubmissionStatus::Idle.message(Locale::PtBr), None);
        assert_eq!(SubmissionStatus::Idle.message(Locale::En), None);
    }

    #[test]
    fn test_portuguese_messages() {
        let success = SubmissionStatus::Success.message(Locale::PtBr).unwrap();
        assert_eq!(success.text, "Arquivos enviados com sucesso!");
        assert_eq!(success.tone, StatusTone::Success);

        let missing = SubmissionStatus::NoFilesSelected.message(Locale::PtBr).unwrap();
        assert_eq!(missing.text, "Nenhum arquivo encontrado.");
        assert_eq!(missing.tone.css_class(), "status-warning");

        let error = SubmissionStatus::Error.message(Locale::PtBr).unwrap();
        assert_eq!(error.tone, StatusTone::Error);
    }

    #[test]
    fn test_every_active_status_has_english_text() {
        for status in [
            SubmissionStatus::Submitting,
            SubmissionStatus::Success,
            SubmissionStatus::Error,
            SubmissionStatus::NoFilesSelected,
        ] {
            let msg = status.message(Locale::En).unwrap();
            assert!(!msg.text.is_empty());
            assert_ne!(msg, status.message(Locale::PtBr).unwrap());
        }
    }
}
