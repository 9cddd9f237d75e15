use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_DIRECTIVE: &str = "reco_schema=info";
pub const VERBOSE_DIRECTIVE: &str = "reco_schema=debug,info";

/// Filter used when `RUST_LOG` is unset; `verbose` wins over a configured level.
pub fn filter_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        VERBOSE_DIRECTIVE.to_string()
    } else {
        level.unwrap_or(DEFAULT_DIRECTIVE).to_string()
    }
}

fn env_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, level)))
}

pub fn init_cli_logger(verbose: bool) {
    // stdout carries the validated payload, so logs go to stderr
    tracing_subscriber::registry()
        .with(env_filter(verbose, None))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: &str, verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, Some(level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
