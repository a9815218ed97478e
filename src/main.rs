use lambda_http::{Error, Request, run, service_fn};
use mailrelay::RelayContext;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .json()
        .init();

    info!("Starting mail relay Lambda function");

    // Shared context: outbound HTTP client reused across warm invocations
    let ctx = RelayContext::new();

    // Run the Lambda runtime with our handler
    run(service_fn(|event: Request| {
        let ctx = ctx.clone();
        async move { mailrelay::handler(ctx, event).await }
    }))
    .await
}
