use dioxus_logger::tracing::Level;

use modal_kit::client::App;

fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialise logger: {}", err);
    }

    dioxus::launch(App);
}
