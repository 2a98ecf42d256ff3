use std::path::PathBuf;

#[derive(clap::Parser)]
pub(crate) struct Command {
    /// The suggestion to send
    #[clap(required = true)]
    text: Vec<String>,
}

impl Command {
    pub(crate) async fn execute(self, client: merkaz::Client) -> anyhow::Result<()> {
        let mut view = super::dashboard(client, false, PathBuf::from("."));
        view.suggestion_text = self.text.join(" ");
        view.submit_suggestion().await;
        if !view.suggestion_error.is_empty() {
            anyhow::bail!("{}", view.suggestion_error);
        }
        println!("{}", view.suggestion_success);
        Ok(())
    }
}
