use clap::Parser;
use propx_api::RestApi;
use propx_store::ArtifactBundle;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A property similarity and proximity query server
#[derive(Parser, Debug)]
#[command(name = "propx")]
#[command(about = "A property similarity and proximity query server", long_about = None)]
struct Args {
    /// Path to the directory holding the pre-built artifacts
    #[arg(short, long, default_value = "./artifacts")]
    artifact_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting PropX v{}", env!("CARGO_PKG_VERSION"));
    info!("Artifact directory: {:?}", args.artifact_dir);
    info!("HTTP API port: {}", args.http_port);

    let bundle = ArtifactBundle::load(&args.artifact_dir)?;
    let engine = Arc::new(bundle.into_recommender()?);
    info!(
        "Engine ready: {} properties, {} reference locations",
        engine.item_count(),
        engine.location_count()
    );

    let http_port = args.http_port;
    let engine_http = engine.clone();
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("PropX started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
