//! Opens a window, keeps it on screen for five seconds and exits.

use xcb_windows::{
    backends::xcb::create_backend,
    config::Config,
    launcher::{Launcher, Program},
    logging,
};

fn main() {
    let config = Config::load().unwrap_or_else(|err| {
        eprintln!("{}", err);
        Config::default()
    });

    if let Err(err) = logging::init_logger(&config) {
        eprintln!("{}", err);
    }

    logging::log_prologue(Program::SimpleWindow);

    let status = Launcher::new(Program::SimpleWindow, std::io::stdout())
        .run(create_backend);

    std::process::exit(status);
}
