use std::path::{Path, PathBuf};

/// Single file queued to accompany the next outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAttachment {
    path: PathBuf,
}

impl PendingAttachment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name shown to the user and sent as the multipart file name.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    pub fn badge_label(&self) -> String {
        format!("\u{1F4CE} {}", self.file_name())
    }

    /// Synthetic user message announcing the attachment in the transcript.
    pub fn transcript_note(&self) -> String {
        format!("\u{1F4CE} Attached: {}", self.file_name())
    }
}
