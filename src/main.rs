use clap::Parser;
use dnakit::{run, Cli};

// --------------------------------------------------
fn main() {
    // help and version requests exit 0, every other parse failure exits 1
    let args = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
