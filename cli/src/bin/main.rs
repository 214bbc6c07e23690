//! pygen binary entry point.

fn main() {
    if let Err(e) = pygen_cli::run() {
        pygen_cli::output::error(&e);
        std::process::exit(1);
    }
}
