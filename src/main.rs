use database::{DatabaseGenerator, DatabaseLoader, DatasetSource};
use engine::utils::TimeEstimation;
use env_logger::Env;
use log::info;
use web::{AppData, Clock, ProtacticServer, ServerConfig};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("info")
    ).init();

    let host = hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| String::from("unknown"));

    let source = DatasetSource::from_env();

    info!("starting on {}, dataset: {}", host, source);

    let (database, estimated) = TimeEstimation::estimate(|| DatabaseLoader::load(&source));
    let database = database?;

    info!("database loaded: {} ms", estimated);

    let (club_data, estimated) = TimeEstimation::estimate(|| DatabaseGenerator::generate(&database));
    let club_data = club_data?;

    info!("snapshot built: {} ms", estimated);

    let data = AppData::new(club_data, Clock::System);

    ProtacticServer::new(data, ServerConfig::from_env()).run().await?;

    Ok(())
}
