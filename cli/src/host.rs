//! The terminal playing the role of the browser for the views.

use merkaz::view::{Navigator, Route, Window};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// The terminal has a single screen, changing route is only reported.
#[derive(Debug, Default)]
pub(crate) struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        tracing::info!("redirecting to {route}");
    }
}

pub(crate) fn read_answer<R: BufRead>(mut reader: R) -> bool {
    let mut line = String::new();
    if let Err(err) = reader.read_line(&mut line) {
        tracing::warn!("unable to read answer: {err:?}");
        return false;
    }
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Name of the file targeted by a download url, the last segment of its path.
pub(crate) fn file_name(url: &merkaz::reqwest::Url) -> Option<String> {
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let name = urlencoding::decode(segment)
        .map(|value| value.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    // a decoded name can't escape the download directory
    if name.contains('/') || name == ".." || name == "." {
        None
    } else {
        Some(name)
    }
}

/// Prompts on stderr, reads answers from stdin and saves the opened links to a local directory.
pub(crate) struct TerminalWindow {
    client: merkaz::Client,
    assume_yes: bool,
    download_dir: PathBuf,
    downloaded: Mutex<Option<PathBuf>>,
}

impl TerminalWindow {
    pub(crate) fn new(client: merkaz::Client, assume_yes: bool, download_dir: PathBuf) -> Self {
        Self {
            client,
            assume_yes,
            download_dir,
            downloaded: Mutex::new(None),
        }
    }

    /// Path of the last file saved by [`Window::open`], if the download completed.
    pub(crate) fn take_downloaded(&self) -> Option<PathBuf> {
        self.downloaded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

#[async_trait::async_trait]
impl Window for TerminalWindow {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{message} [y/N] ");
        let _ = std::io::stderr().flush();
        read_answer(std::io::stdin().lock())
    }

    async fn open(&self, url: merkaz::reqwest::Url) {
        let Some(name) = file_name(&url) else {
            tracing::error!("unable to find a file name in {url}");
            return;
        };
        let target = self.download_dir.join(name);
        tracing::info!("downloading {url} to {target:?}");
        let file = match std::fs::File::create(&target) {
            Ok(file) => std::io::BufWriter::new(file),
            Err(err) => {
                tracing::error!(message = "unable to create file", path = ?target, cause = %err);
                return;
            }
        };
        match self.client.download(url, file).await {
            Ok(size) => {
                eprintln!("downloaded {size} bytes to {}", target.display());
                *self
                    .downloaded
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(target);
            }
            Err(err) => {
                tracing::error!(message = "download failed", cause = %err);
                if let Err(err) = std::fs::remove_file(&target) {
                    tracing::warn!("unable to remove partial file {target:?}: {err:?}");
                }
            }
        }
    }
}
