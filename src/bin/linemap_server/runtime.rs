use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use super::*;

#[derive(Parser)]
#[command(name = "linemap-server")]
#[command(about = "Upload two text files, download their line mapping", long_about = None)]
pub(super) struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub(super) addr: SocketAddr,

    /// Write bound address to this file (dev/test convenience)
    #[arg(long)]
    pub(super) addr_file: Option<PathBuf>,

    /// Data directory holding `uploads/` and `outputs/`
    #[arg(long, default_value = "./linemap-data")]
    pub(super) data_dir: PathBuf,

    /// Maximum accepted request body size in bytes
    #[arg(long, default_value_t = 16 * 1024 * 1024)]
    pub(super) max_upload_bytes: usize,
}

pub(super) async fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let storage = Storage::open(&args.data_dir)
        .with_context(|| format!("open data dir {}", args.data_dir.display()))?;
    let state = Arc::new(AppState { storage });

    let app = app_router(state, args.max_upload_bytes);
    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .with_context(|| format!("bind {}", args.addr))?;
    let local_addr = listener.local_addr().context("read listener local addr")?;
    tracing::info!(addr = %local_addr, data_dir = %args.data_dir.display(), "linemap-server listening");
    maybe_write_addr_file(args.addr_file.as_ref(), local_addr)?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn maybe_write_addr_file(addr_file: Option<&PathBuf>, local_addr: SocketAddr) -> Result<()> {
    if let Some(addr_file) = addr_file {
        std::fs::write(addr_file, local_addr.to_string())
            .with_context(|| format!("write addr file {}", addr_file.display()))?;
    }
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutting down");
}
