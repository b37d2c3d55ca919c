use {
    tracing::{Level, Metadata, warn},
    tracing_subscriber::{
        prelude::*,
        filter::{filter_fn, FilterFn},
    },
    bigdata_sentiment_core::{
        config::LoggingConfig,
        observer::CLASSIFICATION_TARGET,
    },
};

pub fn init_logging(config: &LoggingConfig) {
    let (level, level_error) = match config.level.parse::<Level>() {
        Ok(level) => (level, None),
        Err(err) => (Level::INFO, Some(err)),
    };

    let builder = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr);

    if config.json {
        builder.json().finish().with(classification_filter(level)).init();
    } else {
        builder.finish().with(classification_filter(level)).init();
    }

    if let Some(err) = level_error {
        warn!("invalid log level \"{}\" ({}), using {}", config.level, err, level);
    }
}

// per-line decisions are only interesting when tracing everything
fn classification_filter(level: Level) -> FilterFn<impl Fn(&Metadata<'_>) -> bool> {
    filter_fn(move |metadata| {
        if metadata.target() == CLASSIFICATION_TARGET {
            is_classification_visible(level)
        } else {
            true
        }
    })
}

fn is_classification_visible(level: Level) -> bool {
    level == Level::TRACE
}
