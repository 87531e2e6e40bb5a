//! rHostel main entrypoint.

use rhostel::run;
use rhostel::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
