#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tourbook_lib::run().await
}
