//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = siting_cli::run() {
        eprintln!("siting: {err}");
        std::process::exit(1);
    }
}
