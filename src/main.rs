use dotenvy::dotenv;
use redis_enterprise_data_source::{
    config::app_config::AppConfig,
    redis_enterprise::{
        build_redis_enterprise_database_data_source,
        interfaces::provider::resources::{
            error_response_resource::ErrorResponseResource,
            redis_enterprise_database_data_source_request_resource::RedisEnterpriseDatabaseDataSourceRequestResource,
        },
    },
};
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    if let Err(response) = run(&config).await {
        error!(kind = %response.kind, "data source read failed");
        eprintln!(
            "{}",
            serde_json::to_string(&response).unwrap_or_else(|_| response.message.clone())
        );
        std::process::exit(1);
    }
}

async fn run(config: &AppConfig) -> Result<(), ErrorResponseResource> {
    let data_source =
        build_redis_enterprise_database_data_source(config).map_err(|message| {
            ErrorResponseResource {
                kind: "configuration".to_string(),
                message,
            }
        })?;

    let mut raw_request = String::new();
    tokio::io::stdin()
        .read_to_string(&mut raw_request)
        .await
        .map_err(|e| input_error(e.to_string()))?;

    let request: RedisEnterpriseDatabaseDataSourceRequestResource =
        serde_json::from_str(&raw_request).map_err(|e| input_error(e.to_string()))?;

    let cancellation = CancellationToken::new();
    let stop_signal = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop_signal.cancel();
        }
    });

    info!(
        data_source = data_source.schema().type_name,
        read_timeout = ?data_source.schema().timeouts.read,
        "reading data source"
    );

    let resource = data_source.read(request, cancellation).await?;

    let payload = serde_json::to_string_pretty(&resource).map_err(|e| input_error(e.to_string()))?;
    println!("{payload}");

    Ok(())
}

fn input_error(message: String) -> ErrorResponseResource {
    ErrorResponseResource {
        kind: "input".to_string(),
        message,
    }
}
