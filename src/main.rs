use astra::Server;
use clap::Parser;
use env_logger::Env;
use hotel_viewer::config::Config;
use hotel_viewer::router::{handle, AppState};
use hotel_viewer::{payload, responses};

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::parse();

    // 1️⃣ Load the payload once; every request shares it read-only
    let dataset = match payload::load_file(&config.data) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("❌ Could not load hotel data: {e}");
            std::process::exit(1);
        }
    };
    let state = AppState::new(dataset);

    // 2️⃣ Start the server
    log::info!("Starting server at http://{}", config.bind);
    let server = Server::bind(&config.bind).max_workers(config.workers);

    // 3️⃣ Serve requests, passing the shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
