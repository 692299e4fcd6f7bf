use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "movieproxy-server")]
#[command(about = "Movie search proxy for TMDB", long_about = None)]
struct Args {
    /// YAML config file; built-in defaults are used when omitted.
    #[arg(short, long)]
    config: Option<String>,

    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "movieproxy_rs=debug,tower_http=debug"
    } else {
        "movieproxy_rs=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if args.debug {
        tracing::debug!("Debug logging enabled");
    }

    if let Err(e) = movieproxy_rs::run(args.config.as_deref()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
