use crate::host::TerminalNavigator;
use merkaz::auth::Credentials;
use merkaz::view::LoginView;
use std::io::{BufRead, Write};

fn prompt_password() -> anyhow::Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[derive(clap::Parser)]
pub(crate) struct Login {
    #[clap(long, env = "MERKAZ_EMAIL")]
    email: String,
    /// Read from the standard input when not provided
    #[clap(long, env = "MERKAZ_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl Login {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: merkaz::Client) -> anyhow::Result<()> {
        let password = match self.password {
            Some(value) => value,
            None => prompt_password()?,
        };
        let mut view = LoginView::new(client, TerminalNavigator);
        view.email = self.email;
        view.password = password;
        view.on_submit().await;
        if !view.error.is_empty() {
            anyhow::bail!("{}", view.error);
        }
        println!("{}", view.message);
        Ok(())
    }
}

#[derive(clap::Parser)]
pub(crate) struct Register {
    #[clap(long, env = "MERKAZ_EMAIL")]
    email: String,
    /// Read from the standard input when not provided
    #[clap(long, env = "MERKAZ_PASSWORD", hide_env_values = true)]
    password: Option<String>,
}

impl Register {
    #[tracing::instrument(skip_all)]
    pub(crate) async fn execute(self, client: merkaz::Client) -> anyhow::Result<()> {
        let password = match self.password {
            Some(value) => value,
            None => prompt_password()?,
        };
        match client.register(&Credentials::new(self.email, password)).await {
            Ok(()) => {
                println!("Registration successful! Your account is now pending administrator approval.");
                Ok(())
            }
            Err(merkaz::Error::Password(inner)) => anyhow::bail!("{inner}"),
            Err(err) => {
                if let Some(message) = err.server_message() {
                    anyhow::bail!("{message}");
                }
                Err(err.into())
            }
        }
    }
}
