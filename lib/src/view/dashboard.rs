use super::{FlashMessage, Navigator, Route, Window};
use crate::entry::{parent_path, FileEntry};
use crate::Client;

pub const SUGGESTION_SUCCESS: &str = "Suggestion submitted!";
pub const SUGGESTION_FAILURE: &str = "Failed to send suggestion.";

/// The dashboard screen, listing the shared files
///
/// Each action issues at most one request and waits for its response. The failures of the
/// listing and of the deletion are only logged, the user gets no feedback for them.
pub struct DashboardView<N, W> {
    client: Client,
    navigator: N,
    window: W,
    pub items: Vec<FileEntry>,
    pub is_admin: bool,
    /// The folder being displayed, empty for the shared root
    pub current_path: String,
    pub flash_messages: Vec<FlashMessage>,
    pub cooldown_level: u32,
    pub suggestion_text: String,
    pub suggestion_success: String,
    pub suggestion_error: String,
}

impl<N: Navigator, W: Window> DashboardView<N, W> {
    pub fn new(client: Client, navigator: N, window: W) -> Self {
        Self {
            client,
            navigator,
            window,
            items: Vec::new(),
            is_admin: false,
            current_path: String::new(),
            flash_messages: Vec::new(),
            cooldown_level: 0,
            suggestion_text: String::new(),
            suggestion_success: String::new(),
            suggestion_error: String::new(),
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    /// Called once when the screen is displayed
    pub async fn init(&mut self) {
        self.load_files().await;
    }

    /// Replaces the items with the content of the current folder.
    ///
    /// On failure the items are left untouched.
    #[tracing::instrument(skip_all, fields(path = %self.current_path))]
    pub async fn load_files(&mut self) {
        let result = self
            .client
            .list_files(Some(self.current_path.as_str()))
            .await;
        match result {
            Ok(listing) => {
                tracing::debug!("loaded {} items", listing.items.len());
                self.items = listing.items;
                if let Some(is_admin) = listing.is_admin {
                    self.is_admin = is_admin;
                }
                if let Some(level) = listing.cooldown_level {
                    self.cooldown_level = level;
                }
            }
            Err(err) => {
                tracing::error!(message = "unable to list files", cause = %err);
            }
        }
    }

    /// Opens a folder, or downloads a file.
    pub async fn navigate(&mut self, item: &FileEntry) {
        if item.is_folder {
            self.current_path = item.path.clone();
            self.load_files().await;
        } else {
            self.download(item).await;
        }
    }

    /// Goes back to the parent folder. Does nothing at the shared root.
    pub async fn go_up(&mut self) {
        let Some(parent) = parent_path(&self.current_path).map(String::from) else {
            return;
        };
        self.current_path = parent;
        self.load_files().await;
    }

    pub async fn download(&self, item: &FileEntry) {
        self.window.open(self.client.download_url(&item.path)).await;
    }

    /// Deletes the item once the user confirmed, then reloads the listing.
    #[tracing::instrument(skip_all, fields(path = %item.path))]
    pub async fn delete_item(&mut self, item: &FileEntry) {
        if !self.window.confirm(&format!("Delete {}?", item.name)) {
            return;
        }
        match self.client.delete_item(&item.path).await {
            Ok(()) => {
                self.flash_messages.push(FlashMessage::success(format!(
                    "Successfully moved '{}' to trash.",
                    item.name
                )));
                self.load_files().await;
            }
            Err(err) => {
                tracing::error!(message = "unable to delete item", cause = %err);
            }
        }
    }

    /// Forgets the session token and goes back to the login screen. The server is not notified.
    pub fn logout(&mut self) {
        if let Err(err) = self.client.token_store().clear_token() {
            tracing::error!(message = "unable to clear token", cause = %err);
        }
        self.navigator.navigate(Route::Login);
    }

    pub async fn submit_suggestion(&mut self) {
        match self
            .client
            .submit_suggestion(self.suggestion_text.as_str())
            .await
        {
            Ok(()) => {
                self.suggestion_success = SUGGESTION_SUCCESS.to_string();
                self.suggestion_text.clear();
            }
            Err(err) => {
                tracing::error!(message = "unable to send suggestion", cause = %err);
                self.suggestion_error = SUGGESTION_FAILURE.to_string();
            }
        }
    }
}
