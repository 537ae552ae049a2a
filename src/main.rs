use clap::Parser;
use fights_service::utils::{logger, validation::Validate};
use fights_service::{
    CliConfig, FightConfig, FightService, InMemoryFightStore, RandomFighterClient,
};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_logger(cli.verbose);

    tracing::info!("Starting fights service");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = FightConfig::load(&cli)?;
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "Hero service: {}, villain service: {}, delay: {}ms, timeout: {}ms",
        config.hero_service_url,
        config.villain_service_url,
        config.process_delay_millis,
        config.request_timeout_millis
    );

    let hero_client = Arc::new(RandomFighterClient::hero(&config.hero_service_url));
    let villain_client = Arc::new(RandomFighterClient::villain(&config.villain_service_url));
    let store = Arc::new(InMemoryFightStore::new());

    let service = Arc::new(FightService::new(
        hero_client,
        villain_client,
        store,
        &config,
    ));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    fights_service::api::serve(addr, service).await?;

    Ok(())
}
