//! Config file fragments and the batched file editor
//!
//! Each fragment is a block of text appended to a host configuration file,
//! headed by an exact marker line the presence predicate matches on. Matching
//! is whole-line: a similarly-prefixed marker in the file is not a false
//! positive, and a partially-matching prior edit never suppresses or
//! duplicates content.
//!
//! Edits are staged in memory per file and flushed as one batched rewrite,
//! so a run opens each config file at most twice (read, then write-if-dirty).
//! The file contract is append-only, with one exception: a narrowly-scoped
//! find-and-replace for the theme marker, guarded by the same
//! presence-check-before-apply rule.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ShellsmithError};

pub const MARKER_PREFIX: &str = "# shellsmith:";

/// Theme marker written by the oh-my-zsh init fragment
pub const DEFAULT_THEME_LINE: &str = "ZSH_THEME=\"robbyrussell\"";
/// Customized replacement applied by the theme swap check
pub const CUSTOM_THEME_LINE: &str = "ZSH_THEME=\"powerlevel10k/powerlevel10k\"";

/// One appendable block with its marker line
#[derive(Debug, Clone)]
pub struct ConfigFragment {
    pub name: &'static str,
    marker: String,
    block: String,
}

impl ConfigFragment {
    pub fn new(name: &'static str, body: &str) -> Self {
        let marker = format!("{} {}", MARKER_PREFIX, name);
        let block = format!("\n{}\n{}\n", marker, body.trim_end());
        Self {
            name,
            marker,
            block,
        }
    }

    pub fn is_present_in(&self, editor: &FileEditor) -> bool {
        editor.contains_line(&self.marker)
    }

    pub fn append_to(&self, editor: &mut FileEditor) {
        editor.append_block(&self.block);
    }
}

/// In-memory view of one config file; loaded once, flushed once
#[derive(Debug)]
pub struct FileEditor {
    path: PathBuf,
    content: String,
    dirty: bool,
}

impl FileEditor {
    /// Load the file, treating a missing file as empty
    pub fn load(path: &Path) -> Result<Self> {
        let content = if path.exists() {
            fs::read_to_string(path).map_err(|e| ShellsmithError::FileReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
        } else {
            String::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            content,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whole-line containment; trailing whitespace on the file side is ignored
    pub fn contains_line(&self, line: &str) -> bool {
        self.content.lines().any(|l| l.trim_end() == line)
    }

    pub fn append_block(&mut self, block: &str) {
        if !self.content.is_empty() && !self.content.ends_with('\n') {
            self.content.push('\n');
        }
        self.content.push_str(block);
        self.dirty = true;
    }

    /// Replace the first occurrence of `from`; returns whether a match existed
    pub fn replace_once(&mut self, from: &str, to: &str) -> bool {
        match self.content.find(from) {
            Some(index) => {
                self.content.replace_range(index..index + from.len(), to);
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Write the staged content back, creating parent directories; no-op when
    /// nothing was staged
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ShellsmithError::FileWriteFailed {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        fs::write(&self.path, &self.content).map_err(|e| ShellsmithError::FileWriteFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        self.dirty = false;
        Ok(())
    }

    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Editors keyed by file path, lazily loaded
#[derive(Debug, Default)]
pub struct Editors {
    open: HashMap<PathBuf, FileEditor>,
}

impl Editors {
    pub fn editor(&mut self, path: &Path) -> Result<&mut FileEditor> {
        match self.open.entry(path.to_path_buf()) {
            std::collections::hash_map::Entry::Occupied(entry) => Ok(entry.into_mut()),
            std::collections::hash_map::Entry::Vacant(entry) => {
                Ok(entry.insert(FileEditor::load(path)?))
            }
        }
    }

    /// Flush every dirty editor; failures are reported per file
    pub fn flush_all(&mut self) -> Vec<(PathBuf, ShellsmithError)> {
        let mut failures = Vec::new();
        let mut paths: Vec<PathBuf> = self.open.keys().cloned().collect();
        paths.sort();
        for path in paths {
            if let Some(editor) = self.open.get_mut(&path) {
                if let Err(e) = editor.flush() {
                    failures.push((path, e));
                }
            }
        }
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn editor_with(content: &str) -> FileEditor {
        FileEditor {
            path: PathBuf::from("/test/.zshrc"),
            content: content.to_string(),
            dirty: false,
        }
    }

    #[test]
    fn test_fragment_marker_shape() {
        let fragment = ConfigFragment::new("aliases", "alias ls=\"eza\"");
        assert_eq!(fragment.marker, "# shellsmith: aliases");
        assert!(fragment.block.starts_with("\n# shellsmith: aliases\n"));
        assert!(fragment.block.ends_with("alias ls=\"eza\"\n"));
    }

    #[test]
    fn test_contains_line_exact_match_only() {
        let editor = editor_with("# shellsmith: aliases-extra\nalias x=y\n");
        // A similarly-prefixed marker must not count as present
        assert!(!editor.contains_line("# shellsmith: aliases"));
        assert!(editor.contains_line("# shellsmith: aliases-extra"));
    }

    #[test]
    fn test_contains_line_ignores_trailing_whitespace() {
        let editor = editor_with("# shellsmith: aliases  \n");
        assert!(editor.contains_line("# shellsmith: aliases"));
    }

    #[test]
    fn test_append_preserves_missing_trailing_newline() {
        let mut editor = editor_with("export PATH=$PATH");
        let fragment = ConfigFragment::new("zoxide", "eval \"$(zoxide init zsh)\"");
        fragment.append_to(&mut editor);
        assert!(editor.content().starts_with("export PATH=$PATH\n"));
        assert!(editor.content().ends_with("eval \"$(zoxide init zsh)\"\n"));
    }

    #[test]
    fn test_append_then_present() {
        let mut editor = editor_with("");
        let fragment = ConfigFragment::new("fzf", "source <(fzf --zsh)");
        assert!(!fragment.is_present_in(&editor));
        fragment.append_to(&mut editor);
        assert!(fragment.is_present_in(&editor));
    }

    #[test]
    fn test_append_idempotence_is_byte_identical() {
        let mut editor = editor_with("# mine\n");
        let fragment = ConfigFragment::new("aliases", "alias ls=\"eza\"");
        fragment.append_to(&mut editor);
        let after_first = editor.content().to_string();

        // Second run: presence predicate holds, so the apply step never fires
        assert!(fragment.is_present_in(&editor));
        assert_eq!(editor.content(), after_first);
    }

    #[test]
    fn test_replace_once_first_occurrence() {
        let mut editor = editor_with("a\nZSH_THEME=\"robbyrussell\"\nb\n");
        assert!(editor.replace_once(DEFAULT_THEME_LINE, CUSTOM_THEME_LINE));
        assert!(editor.content().contains(CUSTOM_THEME_LINE));
        assert!(!editor.content().contains(DEFAULT_THEME_LINE));
    }

    #[test]
    fn test_replace_once_no_match() {
        let mut editor = editor_with("nothing here\n");
        assert!(!editor.replace_once(DEFAULT_THEME_LINE, CUSTOM_THEME_LINE));
        assert_eq!(editor.content(), "nothing here\n");
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().expect("temp dir");
        let editor = FileEditor::load(&temp.path().join(".zshrc")).expect("load");
        assert_eq!(editor.content(), "");
    }

    #[test]
    fn test_flush_roundtrip_and_creates_parents() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(".config/kitty/kitty.conf");

        let mut editor = FileEditor::load(&path).expect("load");
        let fragment = ConfigFragment::new("kitty font", "font_family MesloLGS Nerd Font Mono");
        fragment.append_to(&mut editor);
        editor.flush().expect("flush");

        let written = fs::read_to_string(&path).expect("read back");
        assert!(written.contains("# shellsmith: kitty font"));
        assert!(written.contains("font_family MesloLGS Nerd Font Mono"));
    }

    #[test]
    fn test_flush_without_changes_writes_nothing() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(".zshrc");

        let mut editor = FileEditor::load(&path).expect("load");
        editor.flush().expect("flush");
        assert!(!path.exists());
    }

    #[test]
    fn test_editors_reuse_same_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(".zshrc");
        let mut editors = Editors::default();

        ConfigFragment::new("one", "a=1").append_to(editors.editor(&path).expect("editor"));
        ConfigFragment::new("two", "b=2").append_to(editors.editor(&path).expect("editor"));
        assert!(editors.flush_all().is_empty());

        let written = fs::read_to_string(&path).expect("read back");
        assert!(written.contains("# shellsmith: one"));
        assert!(written.contains("# shellsmith: two"));
    }
}
