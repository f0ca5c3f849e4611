use ipfs_moderation_adapter::adapters::lambda::handle_event;
use ipfs_moderation_adapter::utils::{logger, validation::Validate};
use ipfs_moderation_adapter::{build_pipeline, AdapterConfig, ProductionPipeline, ResponseEnvelope};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn function_handler(
    pipeline: &ProductionPipeline,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    tracing::info!(request_id = %event.context.request_id, "Moderation Lambda invoked");
    Ok(handle_event(pipeline, &event.payload).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時載入一次
    let config = AdapterConfig::from_env()?;
    config.validate()?;
    let pipeline = build_pipeline(&config).await?;
    let pipeline = &pipeline;

    run(service_fn(move |event| function_handler(pipeline, event))).await
}
