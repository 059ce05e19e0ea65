//! Binary entrypoint for canvasfix

fn main() {
    if let Err(err) = canvasfix_cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
