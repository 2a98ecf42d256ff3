use merkaz::entry::FileEntry;
use std::path::PathBuf;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// Local directory to download the file to
    #[clap(short, long, default_value = ".")]
    output: PathBuf,

    /// Remote path to the file to download
    remote_path: String,
}

impl Command {
    #[tracing::instrument(skip_all, fields(path = %self.remote_path))]
    pub(crate) async fn execute(self, client: merkaz::Client) -> anyhow::Result<()> {
        if !self.output.is_dir() {
            anyhow::bail!("the provided output {:?} is not a directory", self.output);
        }
        let path = self.remote_path.trim_matches('/');
        let entry = FileEntry::file(super::entry_name(path), path);
        let view = super::dashboard(client, false, self.output);
        view.download(&entry).await;
        if view.window().take_downloaded().is_none() {
            anyhow::bail!("unable to download {path}");
        }
        Ok(())
    }
}
