//! Opens a window and reports key and button presses until a key is pressed.

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

    logging::log_prologue(Program::EventWindow);

    let status = Launcher::new(Program::EventWindow, std::io::stdout())
        .run(create_backend);

    std::process::exit(status);
}
