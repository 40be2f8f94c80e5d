//! Entry point for **monfocus**.
//!
//! Parses the direction, loads the optional config, runs one focus change
//! through the X11 backend and exits.  Every failure prints a message and
//! exits with status 1.

use monfocus::cli;
use monfocus::config::{config_dir, Config};
use monfocus::focus::FocusChanger;
use monfocus::xdotool::wm::XdotoolWm;

fn main() {
    env_logger::init();

    let direction = match cli::parse_args(std::env::args().skip(1)) {
        Ok(direction) => direction,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", cli::USAGE);
            std::process::exit(1);
        }
    };

    let config = Config::load_or_default(&config_dir().join("config.json"));
    let changer = FocusChanger::new(XdotoolWm::new(config.tools, config.focus));

    if let Err(e) = changer.change_focus(direction) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
