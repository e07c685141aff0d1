#[tokio::main]
async fn main() -> anyhow::Result<()> {
    prospect_finder::cli::run().await
}
