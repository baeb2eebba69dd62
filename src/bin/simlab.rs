//! Interactive entry point: launches the menu session.
//!
//! No flags or arguments; the program starts on the menu and exits with
//! code 0 only through the quit key. Any session fault surfaces here as
//! a plain message (the terminal has already been restored) and a
//! non-zero exit.

fn main() {
    if let Err(e) = simlab::tui::run() {
        println!("An unexpected error occurred: {}", e);
        std::process::exit(1);
    }
}
