//! rInterviews main entrypoint.

use rinterviews::run;
use rinterviews::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
