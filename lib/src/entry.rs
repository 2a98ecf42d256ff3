use std::cmp::Ordering;

/// One item of a remote directory listing, either a folder or a file.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FileEntry {
    pub name: String,
    /// Path of the item, relative to the shared root, `/` separated
    pub path: String,
    #[serde(rename = "isFolder", alias = "is_folder", default)]
    pub is_folder: bool,
}

impl FileEntry {
    pub fn file<N: Into<String>, P: Into<String>>(name: N, path: P) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_folder: false,
        }
    }

    pub fn folder<N: Into<String>, P: Into<String>>(name: N, path: P) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_folder: true,
        }
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        !self.is_folder
    }
}

impl PartialOrd for FileEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Folders first, then case insensitive name.
impl Ord for FileEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .is_folder
            .cmp(&self.is_folder)
            .then_with(|| self.name.to_lowercase().cmp(&other.name.to_lowercase()))
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.path.cmp(&other.path))
    }
}

/// The content of a remote directory, as returned by the server
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub items: Vec<FileEntry>,
    #[serde(default)]
    pub current_path: Option<String>,
    #[serde(default)]
    pub back_path: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub cooldown_level: Option<u32>,
}

/// Returns the parent of a `/` separated remote path, `None` for the root.
///
/// ```
/// use merkaz::entry::parent_path;
///
/// assert_eq!(parent_path("docs/reports/q1.pdf"), Some("docs/reports"));
/// assert_eq!(parent_path("docs"), Some(""));
/// assert_eq!(parent_path(""), None);
/// ```
pub fn parent_path(path: &str) -> Option<&str> {
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        return None;
    }
    Some(path.rsplit_once('/').map_or("", |(parent, _)| parent))
}
