use std::fs::OpenOptions;

use anyhow::Context;
use party_invite::api::service::{State, router::router};
use party_invite::config::Config;
use party_invite::invite::Invitations;

#[tokio::main]
async fn main() {
    let config = Config::load();

    if let Err(e) = init_logger(&config) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }

    if let Err(e) = run(config).await {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn init_logger(config: &Config) -> anyhow::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    if let Some(path) = &config.log_path {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

async fn run(config: Config) -> anyhow::Result<()> {
    config.log();

    let reference = config.reference()?;
    let invitations = Invitations::new(reference);
    log::info!("Set office location to {}", invitations.reference());

    let state = State::new(invitations);

    let listen_addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    let router = router(state);

    log::info!("Listening on {listen_addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
