use bankfront::App;
use tracing::Level;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    tracing::info!("starting bankfront");
    dioxus::launch(App);
}
