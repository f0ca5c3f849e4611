use ipfs_moderation_adapter::adapters::lambda::{handle_event_v2, ProxyEvent, ProxyResponse};
use ipfs_moderation_adapter::utils::{logger, validation::Validate};
use ipfs_moderation_adapter::{build_pipeline, AdapterConfig, ProductionPipeline};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

async fn function_handler(
    pipeline: &ProductionPipeline,
    event: LambdaEvent<ProxyEvent>,
) -> Result<ProxyResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "Moderation Lambda (proxy) invoked");
    Ok(handle_event_v2(pipeline, &event.payload).await?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = AdapterConfig::from_env()?;
    config.validate()?;
    let pipeline = build_pipeline(&config).await?;
    let pipeline = &pipeline;

    run(service_fn(move |event| function_handler(pipeline, event))).await
}
