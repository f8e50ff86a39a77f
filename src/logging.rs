//! Map the `--verbose` level onto a tracing subscriber.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

pub fn level_for(verbose: i32) -> LevelFilter {
    match verbose {
        i32::MIN..=0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr fmt subscriber at the level `--verbose` asks for.
///
/// Does nothing if a global subscriber is already set.
pub fn setup_logging(verbose: i32) {
    let filter = level_for(verbose);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    if tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()
        .is_err()
    {
        return;
    }

    match filter {
        LevelFilter::INFO => tracing::info!("Verbose level: info"),
        LevelFilter::DEBUG => tracing::debug!("Verbose level: debug"),
        LevelFilter::TRACE => tracing::debug!("Verbose level: trace"),
        _ => {}
    }
}
