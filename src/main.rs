use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use metric_converter::core::check_field_names::check_field_names;
use metric_converter::core::parse_field::parse_fields;
use metric_converter::core::parse_headers::parse_headers;
use metric_converter::core::show_result_with_table::show_result_with_table;
use metric_converter::models::args::Args;
use metric_converter::{Converter, FetchConfig};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let fields = parse_fields(&args.fields);
    check_field_names(&fields).context("字段配置错误")?;
    let config = FetchConfig {
        method: args.method,
        url: args.url,
        body: args.body,
        headers: parse_headers(&args.headers),
        timeout_secs: Some(args.timeout),
        fields,
    };

    let converter = Converter::new().context("构建http客户端失败")?;
    match converter.fetch(&config).await {
        Ok(results) => {
            info!(url = %config.url, fields = results.len(), "fetch finished");
            show_result_with_table(&results);
            Ok(())
        }
        Err(e) => {
            error!(url = %config.url, error = %e, "fetch failed");
            Err(e).with_context(|| format!("抓取 {} 失败", config.url))
        }
    }
}
