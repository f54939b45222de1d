extern crate env_logger;
extern crate failure;
extern crate rpncalc;

use std::io;
use std::process;

use rpncalc::VM;

fn main() {
    env_logger::init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut vm = VM::new(stdin.lock(), stdout.lock());

    if let Err(err) = vm.run() {
        eprintln!("{}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
