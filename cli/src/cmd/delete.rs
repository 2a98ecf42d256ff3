use merkaz::entry::{parent_path, FileEntry};
use std::path::PathBuf;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Don't ask for confirmation
    #[clap(short, long)]
    yes: bool,

    /// Remote path to the file or folder to delete
    remote_path: String,
}

impl Command {
    #[tracing::instrument(skip_all, fields(path = %self.remote_path))]
    pub(crate) async fn execute(self, client: merkaz::Client) -> anyhow::Result<()> {
        let path = self.remote_path.trim_matches('/');
        let entry = FileEntry::file(super::entry_name(path), path);
        let mut view = super::dashboard(client, self.yes, PathBuf::from("."));
        view.current_path = parent_path(path).unwrap_or_default().to_string();
        view.delete_item(&entry).await;
        match view.flash_messages.pop() {
            Some(flash) => {
                println!("{}", flash.text);
                Ok(())
            }
            None => anyhow::bail!("{} was not deleted", entry.name),
        }
    }
}
