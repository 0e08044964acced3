#[tokio::main]
async fn main() -> anyhow::Result<()> {
    iconmatch_lib::main().await
}
