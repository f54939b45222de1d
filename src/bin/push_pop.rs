extern crate env_logger;
extern crate failure;
extern crate rpncalc;

use std::env;
use std::io;
use std::process;

use rpncalc::trace;

fn main() {
    env_logger::init();
    let path = env::args().nth(1).unwrap_or_else(|| "p206-input".to_string());
    let stdout = io::stdout();

    if let Err(err) = trace::run_file(&path, &mut stdout.lock()) {
        eprintln!("{}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
