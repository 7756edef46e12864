use std::io::Stderr;
use tracing::Subscriber;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

type StderrLayer<S> = fmt::Layer<S, DefaultFields, Format, fn() -> Stderr>;

/// Directives used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "rent_split=debug,info"
    } else {
        "rent_split=info"
    }
}

/// Logs go to stderr so stdout carries only the statement.
fn stderr_layer<S>() -> StderrLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr as fn() -> Stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

/// Installs the global subscriber: compact lines by default, JSON lines when
/// `json` is set.
pub fn init_logger(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(stderr_layer().json()).init();
    } else {
        registry.with(stderr_layer().compact()).init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(default_directives(false), "rent_split=info");
        assert_eq!(default_directives(true), "rent_split=debug,info");
        assert!(default_directives(true).parse::<EnvFilter>().is_ok());
    }
}
