//! rcalllog main entrypoint.

use rcalllog::run;
use rcalllog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
