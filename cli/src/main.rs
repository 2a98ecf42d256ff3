mod app;
mod cmd;
mod config;
mod host;


use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = app::Command::parse();
    cmd.set_log_level();

    let config = cmd.load_config()?;
    let client = config.build()?;
    cmd.execute(client).await
}
