//! Input modalities and file acceptance.

use std::path::PathBuf;

use crate::ValidationError;

/// Filename suffixes accepted for upload.
///
/// Suffix match only — no content inspection happens client-side. The server
/// performs the real validation; this gate exists to save a round trip for
/// obviously wrong picks.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".pdf", ".docx"];

/// Check a candidate filename against the accepted extensions.
///
/// Case-sensitive, exactly the two literal suffixes.
pub fn validate_filename(name: &str) -> Result<(), ValidationError> {
    if ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        Ok(())
    } else {
        Err(ValidationError::UnsupportedFileType)
    }
}

/// The active input channel. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputModality {
    #[default]
    Text,
    File,
}

impl InputModality {
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text Input",
            Self::File => "Upload File",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Text => Self::File,
            Self::File => Self::Text,
        }
    }
}

/// A file the user has picked and the validator has accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub size_bytes: u64,
    /// Opaque handle used to read the content at submit time.
    pub path: PathBuf,
}

/// The two mutually exclusive input channels and the switch between them.
///
/// Switching modality keeps the other channel's buffered value, so typed
/// text survives a detour through the file tab. Only the active modality's
/// data is eligible for submission; the controller decides which.
///
/// No network or state-machine knowledge lives here.
#[derive(Debug, Clone, Default)]
pub struct InputModel {
    modality: InputModality,
    text: String,
    file: Option<PendingFile>,
}

impl InputModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modality(&self) -> InputModality {
        self.modality
    }

    pub fn set_modality(&mut self, modality: InputModality) {
        self.modality = modality;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append one character to the text buffer (editor convenience).
    pub fn push_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Delete the last character of the text buffer (editor convenience).
    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    pub fn file(&self) -> Option<&PendingFile> {
        self.file.as_ref()
    }

    /// Validate and accept a picked file, replacing any previous selection.
    ///
    /// On rejection the file slot is left exactly as it was — the rejected
    /// file is never stored — and the validation error is returned for the
    /// caller to surface.
    pub fn select_file(&mut self, file: PendingFile) -> Result<(), ValidationError> {
        validate_filename(&file.name)?;
        self.file = Some(file);
        Ok(())
    }

    pub fn remove_file(&mut self) {
        self.file = None;
    }

    /// Empty both channels. The active modality stays put.
    pub fn clear(&mut self) {
        self.text.clear();
        self.file = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> PendingFile {
        PendingFile {
            name: "report.pdf".to_string(),
            size_bytes: 2048,
            path: PathBuf::from("/tmp/report.pdf"),
        }
    }

    #[test]
    fn accepts_pdf_and_docx_suffixes() {
        assert!(validate_filename("report.pdf").is_ok());
        assert!(validate_filename("notes.docx").is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        for name in ["image.png", "article.txt", "report.doc", "archive.pdf.zip"] {
            assert_eq!(
                validate_filename(name),
                Err(ValidationError::UnsupportedFileType),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        assert!(validate_filename("REPORT.PDF").is_err());
        assert!(validate_filename("notes.DOCX").is_err());
    }

    #[test]
    fn select_file_stores_accepted_file() {
        let mut input = InputModel::new();
        input.select_file(pdf()).unwrap();
        assert_eq!(input.file().unwrap().name, "report.pdf");
    }

    #[test]
    fn rejected_file_leaves_slot_unchanged() {
        let mut input = InputModel::new();
        let err = input
            .select_file(PendingFile {
                name: "image.png".to_string(),
                size_bytes: 512,
                path: PathBuf::from("/tmp/image.png"),
            })
            .unwrap_err();
        assert_eq!(err, ValidationError::UnsupportedFileType);
        assert!(input.file().is_none());

        // A previously accepted file also survives a bad pick.
        input.select_file(pdf()).unwrap();
        let _ = input.select_file(PendingFile {
            name: "image.png".to_string(),
            size_bytes: 512,
            path: PathBuf::from("/tmp/image.png"),
        });
        assert_eq!(input.file().unwrap().name, "report.pdf");
    }

    #[test]
    fn replacement_selection_overwrites() {
        let mut input = InputModel::new();
        input.select_file(pdf()).unwrap();
        input
            .select_file(PendingFile {
                name: "statement.docx".to_string(),
                size_bytes: 100,
                path: PathBuf::from("/tmp/statement.docx"),
            })
            .unwrap();
        assert_eq!(input.file().unwrap().name, "statement.docx");
    }

    #[test]
    fn switching_modality_retains_buffers() {
        let mut input = InputModel::new();
        input.set_text("draft article");
        input.set_modality(InputModality::File);
        input.select_file(pdf()).unwrap();
        input.set_modality(InputModality::Text);
        assert_eq!(input.text(), "draft article");
        assert!(input.file().is_some());
    }

    #[test]
    fn clear_empties_buffers_but_keeps_modality() {
        let mut input = InputModel::new();
        input.set_modality(InputModality::File);
        input.set_text("some text");
        input.select_file(pdf()).unwrap();

        input.clear();

        assert_eq!(input.text(), "");
        assert!(input.file().is_none());
        assert_eq!(input.modality(), InputModality::File);
    }
}
