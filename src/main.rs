use clap::Parser;
use ipfs_moderation_adapter::adapters::http_server;
use ipfs_moderation_adapter::utils::{logger, validation::Validate};
use ipfs_moderation_adapter::{build_pipeline, AdapterConfig, Cli, Command, JobRequest};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    let config = AdapterConfig::from_env()?;
    if cli.verbose {
        tracing::debug!("Adapter config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let pipeline = build_pipeline(&config).await?;

    match cli.command {
        Command::Serve { host, port } => {
            let router = http_server::router(Arc::new(pipeline));
            http_server::serve(router, &host, port).await?;
        }
        Command::Run { job_id, hash } => {
            let envelope = pipeline.handle(&JobRequest::new(job_id, hash)).await;
            println!("{}", serde_json::to_string_pretty(&envelope)?);

            if !envelope.is_success() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
