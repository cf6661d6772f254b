mod logging;

fn main() {
    logging::setup_logging();

    if let Err(e) = cinelog::run() {
        log::error!("Session aborted on an I/O error: {}", e);
        std::process::exit(1);
    }
}
