#[tokio::main]
async fn main() {
    if let Err(e) = brain_buddy_lib::run().await {
        tracing::error!("Brain Buddy stopped: {}", e);
        eprintln!("brain-buddy: {}", e);
        std::process::exit(1);
    }
}
