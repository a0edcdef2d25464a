use clap::Parser as _;

mod cli;
mod config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = cli::Args::parse();
    cli::run(args)
        .await
        .inspect_err(|err| log::error!("{err:#}"))
}
