use greeter_lambda::config::DeploymentConfig;
use greeter_lambda::handler::function_handler;
use lambda_runtime::tracing::info;
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Use Lambda runtime's built-in tracing subscriber for CloudWatch Logs
    lambda_runtime::tracing::init_default_subscriber();

    let config = DeploymentConfig::from_env();
    info!(
        environment = %config.environment_name(),
        region = config.region.as_deref().unwrap_or("unset"),
        table = %config.table_name(),
        table_arn = config.storage_table_arn.as_deref().unwrap_or("unset"),
        user_pool_id = config.user_pool_id.as_deref().unwrap_or("unset"),
        "Loaded deployment configuration"
    );

    let config = &config;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(event, config).await
    }))
    .await
}
