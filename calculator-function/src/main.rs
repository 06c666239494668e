#[tokio::main]
async fn main() -> anyhow::Result<()> {
    calculator_function::run_server().await
}
