use std::{net::IpAddr, net::SocketAddr, sync::Arc};

use dotenv::dotenv;

use city_connections::{
    dataset::DATASET,
    server::{app_state::AppState, router::create_router},
    views::ViewSettings,
};

use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tower_http::compression::CompressionLayer;

async fn http_server(app_state: Arc<AppState>, opts: &Opts) -> Result<(), anyhow::Error> {
    let app = create_router(app_state).layer(CompressionLayer::new());

    let addr = SocketAddr::from((opts.bind, opts.http_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Start listening on for HTTP on {addr:?}");
    Ok(axum::serve(listener, app).await?)
}

#[derive(StructOpt)]
struct Opts {
    #[structopt(short = "-h", long, default_value = "8000")]
    http_port: u16,

    #[structopt(long, default_value = "0.0.0.0")]
    bind: IpAddr,

    /// Largest node count accepted by the graph generator
    #[structopt(long, default_value = "100")]
    max_nodes: u32,

    #[structopt(long, default_value = "8")]
    map_zoom: u8,

    #[structopt(long, default_value = "700")]
    map_width: u32,

    #[structopt(long, default_value = "500")]
    map_height: u32,

    #[structopt(long, default_value = "700")]
    figure_width: u32,

    #[structopt(long, default_value = "500")]
    figure_height: u32,
}

impl Opts {
    fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            max_nodes: self.max_nodes,
            map_zoom: self.map_zoom,
            map_width: self.map_width,
            map_height: self.map_height,
            figure_width: self.figure_width,
            figure_height: self.figure_height,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    let opts = Opts::from_args();
    assert!(opts.max_nodes >= 2, "max_nodes must be at least 2");
    assert!(
        opts.map_width > 0 && opts.map_height > 0,
        "map dimensions must be positive"
    );
    assert!(
        opts.figure_width > 0 && opts.figure_height > 0,
        "figure dimensions must be positive"
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "city_connections=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = Arc::new(AppState::new(&DATASET, opts.view_settings()));
    info!(
        "Serving {} provinces; graphs up to {} nodes",
        DATASET.provinces().len(),
        opts.max_nodes
    );

    http_server(app_state, &opts).await
}
