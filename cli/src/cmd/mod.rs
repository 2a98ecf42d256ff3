mod auth;
mod delete;
mod download;
mod list;
mod suggest;

use crate::host::{TerminalNavigator, TerminalWindow};
use merkaz::view::DashboardView;
use std::path::PathBuf;

#[derive(clap::Subcommand)]
pub(crate) enum Command {
    /// Authenticate and keep the session token
    Login(auth::Login),
    /// Request a new account, pending approval
    Register(auth::Register),
    /// Forget the session token
    Logout,
    /// Show whether a session token is stored
    Status,
    /// List the content of a remote folder
    #[clap(alias = "ls")]
    List(list::Command),
    /// Download a remote file
    Download(download::Command),
    /// Move a remote file or folder to the trash
    #[clap(alias = "rm")]
    Delete(delete::Command),
    /// Send a suggestion to the administrators
    Suggest(suggest::Command),
}

impl Command {
    pub(crate) async fn execute(self, client: merkaz::Client) -> anyhow::Result<()> {
        match self {
            Self::Login(inner) => inner.execute(client).await,
            Self::Register(inner) => inner.execute(client).await,
            Self::Logout => {
                dashboard(client, false, PathBuf::from(".")).logout();
                println!("logged out");
                Ok(())
            }
            Self::Status => {
                if client.token_store().is_logged_in() {
                    println!("logged in");
                } else {
                    println!("not logged in");
                }
                Ok(())
            }
            Self::List(inner) => inner.execute(client).await,
            Self::Download(inner) => inner.execute(client).await,
            Self::Delete(inner) => inner.execute(client).await,
            Self::Suggest(inner) => inner.execute(client).await,
        }
    }
}

pub(crate) type Dashboard = DashboardView<TerminalNavigator, TerminalWindow>;

pub(crate) fn dashboard(client: merkaz::Client, assume_yes: bool, download_dir: PathBuf) -> Dashboard {
    let window = TerminalWindow::new(client.clone(), assume_yes, download_dir);
    DashboardView::new(client, TerminalNavigator, window)
}

/// Last component of a remote path
pub(crate) fn entry_name(path: &str) -> &str {
    let path = path.trim_end_matches('/');
    path.rsplit_once('/').map_or(path, |(_, name)| name)
}
