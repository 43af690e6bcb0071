mod domain;
mod frameworks;
mod interface_adapters;
mod use_cases;

#[tokio::main]
async fn main() {
    // Load optional .env overrides before reading runtime config.
    let _ = dotenvy::dotenv();

    frameworks::server::run().await;
}
