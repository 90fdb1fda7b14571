//! Marquee command-line client.
//!
//! Usage: `marquee [position]`. Prints the now-playing rows and, when a row
//! position is given, that movie's detail view.

use tracing::{error, info, warn};

use marquee_app::{init_tracing, run_session, AppSettings, StderrNotifier, TerminalSurface};
use marquee_tmdb::TmdbClient;

#[tokio::main]
async fn main() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        eprintln!("rustls crypto provider already installed");
    }

    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let position = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(position) => Some(position),
            Err(_) => {
                error!("Invalid row position: {}", arg);
                std::process::exit(2);
            }
        },
        None => None,
    };

    let settings = AppSettings::from_env();
    info!("Session settings: {:?}", settings);

    let client = match TmdbClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create TMDB client: {}", e);
            std::process::exit(1);
        }
    };

    let mut surface = TerminalSurface::new(std::io::stdout());
    let session = run_session(&client, &mut surface, &StderrNotifier, &settings).await;

    if let Some(position) = position {
        match session.open_detail(position) {
            Some(detail) => println!("\n{}", detail),
            None => warn!(position, "No movie at that position"),
        }
    }

    if session.failure().is_some() {
        std::process::exit(1);
    }
}
