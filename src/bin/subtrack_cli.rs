use subtrack_core::cli::run_cli;

fn main() {
    subtrack_core::init();

    if let Err(err) = run_cli() {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}
