//! schedbot main entrypoint.

use schedbot::run;
use schedbot::ui::messages;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        messages::error(e);
        std::process::exit(1);
    }
}
