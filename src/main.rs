use clap::Parser;
use log::info;
use pong_server::config::GameConfig;
use pong_server::game_loop::run_game_loop;
use pong_server::network;
use pong_server::store::GameStore;
use tokio::net::TcpListener;

/// Main-method of the application.
/// Parses command-line arguments, then spawns the tick driver and serves the
/// HTTP interface until shutdown.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Command line arguments
    #[derive(Parser, Debug)]
    #[clap(author, version, about)]
    struct Args {
        /// Server IP address to bind to
        #[clap(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
        /// Server port to listen on
        #[clap(short, long, default_value = "8080")]
        port: u16,
        /// Tick rate (simulation steps per second)
        #[clap(short, long, default_value = "50")]
        tick_rate: u32,
    }

    env_logger::init();
    let args = Args::parse();

    // Single authoritative store, handed by clone to every task.
    let store = GameStore::new(GameConfig::default());

    // Spawn the tick driver; it runs for the process lifetime.
    let tick_rate = args.tick_rate;
    let game_handle = {
        let store = store.clone();
        tokio::spawn(async move {
            run_game_loop(store, tick_rate).await;
        })
    };

    // A failed bind is the one fatal error in the system.
    let address = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&address).await?;
    info!("server listening on http://{}", address);

    let app = network::router(store);
    let server_handle = tokio::spawn(async move { axum::serve(listener, app).await });

    // Handle shutdown gracefully
    tokio::select! {
        result = server_handle => {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => eprintln!("Server error: {}", e),
                Err(e) => eprintln!("Server task panicked: {}", e),
            }
        }
        result = game_handle => {
            if let Err(e) = result {
                eprintln!("Game loop task panicked: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("received ctrl-c, shutting down");
        }
    }

    Ok(())
}
