use clap::Parser;
use link_card::{
    setup_logging, Fetcher, FetcherConfig, LogConfig, MissingVideoIdPolicy, PreviewService,
    PreviewServiceConfig,
};
use std::error::Error;
use std::time::Duration;

/// Resolve link card previews and print them as JSON.
#[derive(Parser, Debug)]
struct Args {
    /// URLs to preview
    #[arg(required = true)]
    urls: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Treat video links without an identifier as failures
    #[arg(long)]
    strict_video_id: bool,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    setup_logging(LogConfig {
        log_level: args.log_level.clone(),
        file_output: false,
        ..LogConfig::default()
    });

    let fetcher = Fetcher::try_new_with_config(FetcherConfig {
        timeout: Duration::from_secs(args.timeout),
        ..FetcherConfig::default()
    })?;

    let policy = if args.strict_video_id {
        MissingVideoIdPolicy::Fail
    } else {
        MissingVideoIdPolicy::Degenerate
    };

    let service = PreviewService::new_with_config(
        PreviewServiceConfig::new()
            .with_fetcher(fetcher)
            .with_missing_video_id_policy(policy),
    );

    let urls: Vec<&str> = args.urls.iter().map(String::as_str).collect();
    let outcomes = service.preview_batch(&urls).await;

    for (url, outcome) in urls.iter().zip(outcomes) {
        println!("{url}");
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(())
}
