use actix_web::web;
use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use stationhub::{
    config::{Cli, Settings},
    engine::{seed_demo_data, StorageEngine},
    logging::init_logging,
    network::{
        banner::{print_banner, print_startup_log, BannerInfo},
        run_server,
    },
};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    settings.apply_cli(&cli);
    settings.validate().context("validating settings")?;

    let logging = init_logging(settings.logging.clone())?;

    let engine = StorageEngine::initialize(&settings.storage).context("initializing storage")?;

    print_banner(&BannerInfo {
        listen: &settings.listen_address,
        storage: &engine.kind().to_string(),
        workers: settings.workers,
    });

    if settings.seed_demo_data {
        let report = seed_demo_data(engine.get_store(), &mut StdRng::from_entropy())
            .context("seeding demo data")?;
        info!(
            companies = report.companies,
            stations = report.stations,
            "Demo data ready"
        );
    }

    print_startup_log(&settings.listen_address);

    let result = run_server(&settings, web::Data::new(engine)).await;
    if let Err(e) = &result {
        error!(error = %e, "HTTP server failed");
    }

    logging.shutdown();
    result.context("running HTTP server")
}
