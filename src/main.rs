use napfetch::cli::Cli;
use napfetch::logging;

fn main() {
    // Pick up NAP_API_KEY (and RUST_LOG) from a local .env, if one exists.
    let _ = dotenvy::dotenv();

    // Initialize logging as early as possible.
    logging::init();

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("napfetch error: {:#}", err);
        std::process::exit(1);
    }
}
