use std::path::PathBuf;

/// A single entry in the file picker.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Carries one of the accepted document suffixes (.pdf / .docx).
    pub is_document: bool,
    pub size_bytes: u64,
}

/// State for the file picker screen: a simple directory browser.
#[derive(Debug, Clone)]
pub struct FilePickerState {
    /// Current directory being browsed.
    pub current_dir: PathBuf,
    /// Entries in the current directory (dirs first, then files).
    pub entries: Vec<FileEntry>,
    /// Cursor position in the entries list.
    pub cursor: usize,
    /// Scroll offset for the entries list.
    pub scroll_offset: usize,
}

impl FilePickerState {
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::at(current_dir)
    }

    pub fn at(current_dir: PathBuf) -> Self {
        let mut state = Self {
            current_dir,
            entries: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
        };
        state.refresh_entries();
        state
    }

    /// Refresh the entries list from the current directory.
    pub fn refresh_entries(&mut self) {
        let mut entries = Vec::new();

        // Parent directory entry
        if let Some(parent) = self.current_dir.parent() {
            entries.push(FileEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
                is_document: false,
                size_bytes: 0,
            });
        }

        if let Ok(read_dir) = std::fs::read_dir(&self.current_dir) {
            let mut dirs = Vec::new();
            let mut files = Vec::new();

            for entry in read_dir.flatten() {
                let path = entry.path();
                let name = entry.file_name().to_string_lossy().to_string();

                // Skip hidden files/dirs
                if name.starts_with('.') {
                    continue;
                }

                if path.is_dir() {
                    dirs.push(FileEntry {
                        name,
                        path,
                        is_dir: true,
                        is_document: false,
                        size_bytes: 0,
                    });
                } else {
                    let is_document =
                        veridict_core::validate_filename(&name).is_ok();
                    let size_bytes = entry.metadata().map(|m| m.len()).unwrap_or(0);
                    files.push(FileEntry {
                        name,
                        path,
                        is_dir: false,
                        is_document,
                        size_bytes,
                    });
                }
            }

            dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
            files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            entries.extend(dirs);
            entries.extend(files);
        }

        self.entries = entries;
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn entry_under_cursor(&self) -> Option<&FileEntry> {
        self.entries.get(self.cursor)
    }

    /// Enter the directory at cursor, or return false if not a directory.
    pub fn enter_directory(&mut self) -> bool {
        if let Some(entry) = self.entries.get(self.cursor)
            && entry.is_dir
        {
            self.current_dir = entry.path.clone();
            self.refresh_entries();
            return true;
        }
        false
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1).min(self.entries.len() - 1);
        }
    }

    pub fn go_top(&mut self) {
        self.cursor = 0;
    }

    pub fn go_bottom(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
    }
}

impl Default for FilePickerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("drafts")).unwrap();
        std::fs::write(dir.path().join("report.pdf"), b"pdf").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"txt").unwrap();
        std::fs::write(dir.path().join(".hidden.pdf"), b"pdf").unwrap();
        dir
    }

    #[test]
    fn lists_dirs_first_then_files_skipping_hidden() {
        let dir = seed_dir();
        let picker = FilePickerState::at(dir.path().to_path_buf());

        let names: Vec<&str> = picker.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "drafts", "notes.txt", "report.pdf"]);
    }

    #[test]
    fn only_accepted_suffixes_are_documents() {
        let dir = seed_dir();
        let picker = FilePickerState::at(dir.path().to_path_buf());

        let doc = picker.entries.iter().find(|e| e.name == "report.pdf").unwrap();
        assert!(doc.is_document);
        let other = picker.entries.iter().find(|e| e.name == "notes.txt").unwrap();
        assert!(!other.is_document);
    }

    #[test]
    fn entering_a_directory_moves_and_refreshes() {
        let dir = seed_dir();
        let mut picker = FilePickerState::at(dir.path().to_path_buf());

        let drafts = picker.entries.iter().position(|e| e.name == "drafts").unwrap();
        picker.cursor = drafts;
        assert!(picker.enter_directory());
        assert!(picker.current_dir.ends_with("drafts"));
        assert_eq!(picker.cursor, 0);

        // ".." leads back out
        assert!(picker.enter_directory());
        assert_eq!(picker.current_dir, dir.path());
    }

    #[test]
    fn cursor_movement_is_clamped() {
        let dir = seed_dir();
        let mut picker = FilePickerState::at(dir.path().to_path_buf());

        picker.move_up();
        assert_eq!(picker.cursor, 0);
        picker.go_bottom();
        assert_eq!(picker.cursor, picker.entries.len() - 1);
        picker.move_down();
        assert_eq!(picker.cursor, picker.entries.len() - 1);
        picker.go_top();
        assert_eq!(picker.cursor, 0);
    }
}
