use std::{io, process};

use bitcount::check;
use log::{error, info};

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    match check::run(&mut stdout.lock(), &check::CASES) {
        Ok(n) => info!("{} cases checked", n),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
