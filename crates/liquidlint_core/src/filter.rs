//! Extension-based eligibility of template files.

use std::path::{Path, PathBuf};

/// Extensions linted by default: markdown, HTML, and Liquid templates.
pub const DEFAULT_EXTENSIONS: &[&str] = &["md", "html", "lqd", "liquid"];

/// A file path paired with its computed extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub extension: String,
}

impl CandidateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = extension_of(&path);
        Self { path, extension }
    }
}

/// Text after the last `.` anywhere in the path, or empty when there is none.
///
/// This deliberately looks at the whole path rather than the file name, so
/// `dir.v2/README` yields `v2/README`.
pub fn extension_of(path: &Path) -> String {
    path.to_string_lossy()
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_string())
        .unwrap_or_default()
}

/// Whether a candidate goes to the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Skipped { extension: String },
}

/// Decides eligibility against an allow-list. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    allowed: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allow_list(&self) -> &[String] {
        &self.allowed
    }

    pub fn is_allowed(&self, extension: &str) -> bool {
        self.allowed.iter().any(|allowed| allowed == extension)
    }

    pub fn classify(&self, candidate: &CandidateFile) -> Eligibility {
        if self.is_allowed(&candidate.extension) {
            Eligibility::Eligible
        } else {
            Eligibility::Skipped {
                extension: candidate.extension.clone(),
            }
        }
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().copied())
    }
}
