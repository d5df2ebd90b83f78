//! IDE configuration folder location inside a repository
//!
//! Recognition is by folder name only. Matched folders are leaves: their
//! contents are never inspected or descended into.

use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::discovery::{GIT_DIR, is_repository_root};

/// IDE whose configuration folder can be recognized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IdeKind {
    /// JetBrains IDEs (`.idea`)
    JetBrains,
    /// Visual Studio Code (`.vscode`)
    VsCode,
    /// JetBrains Fleet (`.fleet`)
    Fleet,
    /// Zed (`.zed`)
    Zed,
    /// Visual Studio (`.vs`)
    VisualStudio,
    /// Eclipse (`.settings`)
    Eclipse,
    /// Cursor (`.cursor`)
    Cursor,
}

impl IdeKind {
    /// Every recognized IDE
    pub const ALL: [Self; 7] = [
        Self::JetBrains,
        Self::VsCode,
        Self::Fleet,
        Self::Zed,
        Self::VisualStudio,
        Self::Eclipse,
        Self::Cursor,
    ];

    /// Folder name the IDE keeps its settings in
    #[must_use]
    pub const fn folder_name(self) -> &'static str {
        match self {
            Self::JetBrains => ".idea",
            Self::VsCode => ".vscode",
            Self::Fleet => ".fleet",
            Self::Zed => ".zed",
            Self::VisualStudio => ".vs",
            Self::Eclipse => ".settings",
            Self::Cursor => ".cursor",
        }
    }

    /// Human-readable IDE name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::JetBrains => "JetBrains",
            Self::VsCode => "VS Code",
            Self::Fleet => "Fleet",
            Self::Zed => "Zed",
            Self::VisualStudio => "Visual Studio",
            Self::Eclipse => "Eclipse",
            Self::Cursor => "Cursor",
        }
    }

    /// Recognize a folder name
    #[must_use]
    pub fn from_folder_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ide| ide.folder_name() == name)
    }
}

impl fmt::Display for IdeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A recognized IDE configuration folder, relative to its repository root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdeConfigPath {
    /// IDE the folder belongs to
    pub ide: IdeKind,
    /// Path relative to the repository root
    pub relative: PathBuf,
}

impl IdeConfigPath {
    /// Resolve against the repository root
    #[must_use]
    pub fn absolute(&self, root: &Path) -> PathBuf {
        root.join(&self.relative)
    }
}

/// Lazy iterator over the IDE configuration folders of one repository
///
/// The walk skips `.git`, stops at nested repositories (discovery reports
/// those on their own) and never enters a matched folder.
pub struct IdeConfigLocator {
    root: PathBuf,
    entries: walkdir::IntoIter,
}

impl IdeConfigLocator {
    /// Start locating under `repo_root`
    #[must_use]
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        let root = repo_root.into();
        let entries = WalkDir::new(&root).follow_links(false).into_iter();
        Self { root, entries }
    }

    fn classify(&self, entry: &DirEntry) -> Visit {
        if entry.depth() == 0 {
            return Visit::Continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !entry.file_type().is_dir() {
            // A linked config folder counts; its target is never walked.
            return match IdeKind::from_folder_name(&name) {
                Some(ide) if entry.path_is_symlink() && entry.path().is_dir() => {
                    Visit::MatchLink(ide)
                }
                _ => Visit::Continue,
            };
        }

        if name == GIT_DIR {
            return Visit::Prune;
        }
        if let Some(ide) = IdeKind::from_folder_name(&name) {
            return Visit::Match(ide);
        }
        if is_repository_root(entry.path()) {
            tracing::debug!(
                "not descending into nested repository {}",
                entry.path().display()
            );
            return Visit::Prune;
        }

        Visit::Continue
    }

    fn found(&self, ide: IdeKind, entry: &DirEntry) -> IdeConfigPath {
        let relative = entry
            .path()
            .strip_prefix(&self.root)
            .map_or_else(|_| entry.path().to_path_buf(), Path::to_path_buf);
        IdeConfigPath { ide, relative }
    }
}

enum Visit {
    Continue,
    Prune,
    Match(IdeKind),
    /// Symlink to a directory, reported but not entered
    MatchLink(IdeKind),
}

impl Iterator for IdeConfigLocator {
    type Item = IdeConfigPath;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };

            match self.classify(&entry) {
                Visit::Continue => {}
                Visit::Prune => self.entries.skip_current_dir(),
                Visit::Match(ide) => {
                    self.entries.skip_current_dir();
                    return Some(self.found(ide, &entry));
                }
                Visit::MatchLink(ide) => return Some(self.found(ide, &entry)),
            }
        }
    }
}
