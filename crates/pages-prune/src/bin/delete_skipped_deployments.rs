use pages_prune_config::Task;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pages_prune::run(Task::DeleteSkipped).await
}
