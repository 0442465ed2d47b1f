use crate::utils::truncate_str;
use crate::PreviewResult;
use std::fmt::Display;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt as subscriber_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[derive(Debug)]
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: String,
    pub console_output: bool,
    pub file_output: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".into(),
            log_level: "info".into(),
            console_output: true,
            file_output: true,
        }
    }
}

fn create_separator(width: usize, ch: char) -> String {
    std::iter::repeat_n(ch, width).collect()
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn wrap_text(text: &str, width: usize) -> String {
    let mut wrapped = String::new();
    let mut line_length = 0;

    for word in text.split_whitespace() {
        if line_length + word.len() + 1 > width {
            wrapped.push('\n');
            wrapped.push_str("  ");
            wrapped.push_str(word);
            line_length = word.len() + 2;
        } else {
            if line_length > 0 {
                wrapped.push(' ');
                line_length += 1;
            }
            wrapped.push_str(word);
            line_length += word.len();
        }
    }
    wrapped
}

pub fn log_preview_card(preview: &PreviewResult, url: &str) {
    const CARD_WIDTH: usize = 80;
    const CONTENT_WIDTH: usize = CARD_WIDTH - 2;

    let horizontal_line = "═".repeat(CARD_WIDTH - 2);
    let url_wrapped = wrap_text(url, CONTENT_WIDTH - 5);

    match preview {
        PreviewResult::Video(video) => {
            info!(
                "\n╔{}╗\n\
                 URL: {}\n\
                 Video: {}\n\
                 Thumbnail: {}\n\
                 ╚{}╝",
                horizontal_line,
                url_wrapped,
                or_na(&video.video_id),
                wrap_text(&video.thumbnail_url, CONTENT_WIDTH - 11),
                horizontal_line,
            );
        }
        PreviewResult::Generic(page) => {
            info!(
                "\n╔{}╗\n\
                 URL: {}\n\
                 Source: {}\n\
                 Title: {}\n\
                 Desc: {}\n\
                 Image: {}\n\
                 ╚{}╝",
                horizontal_line,
                url_wrapped,
                or_na(&page.source),
                wrap_text(or_na(&page.title), CONTENT_WIDTH - 7),
                wrap_text(or_na(&page.description), CONTENT_WIDTH - 6),
                wrap_text(or_na(&page.image), CONTENT_WIDTH - 7),
                horizontal_line,
            );
        }
    }
}

pub fn log_error_card<E: Display + std::error::Error>(url: &str, error: &E) {
    const CARD_WIDTH: usize = 70;
    const CONTENT_WIDTH: usize = CARD_WIDTH - 8;

    let top_bottom = create_separator(CARD_WIDTH - 2, '═');
    let middle = create_separator(CARD_WIDTH - 2, '─');

    let mut error_details = error.to_string();
    if let Some(source) = error.source() {
        error_details = format!("{error_details} (caused by: {source})");
    }

    error!(
        "\n╔═{}═╗\n\
         ║ URL: {:<width$} ║\n\
         ║{}║\n\
         ║ Error: {:<width$} ║\n\
         ╚═{}═╝",
        top_bottom,
        truncate_str(url, CONTENT_WIDTH),
        middle,
        truncate_str(&error_details, CONTENT_WIDTH),
        top_bottom,
        width = CONTENT_WIDTH
    );
}

/// Installs the global subscriber. `RUST_LOG` overrides `config.log_level`.
pub fn setup_logging(config: LogConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let mut layers = Vec::new();

    if config.console_output {
        let console_layer = subscriber_fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .with_file(true)
            .pretty();
        layers.push(console_layer.boxed());
    }

    if config.file_output {
        std::fs::create_dir_all(&config.log_dir).expect("Failed to create log directory");

        let file_appender =
            RollingFileAppender::new(Rotation::DAILY, &config.log_dir, "link-card.log");

        let file_layer = subscriber_fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .with_file(true)
            .with_writer(file_appender);

        layers.push(file_layer.boxed());
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()
        .expect("Failed to set global default subscriber");

    debug!("Logging system initialized with config: {:?}", config);
}

/// Scoped subscriber for tests and demos; dropped guard restores the previous one.
pub struct LogLevelGuard {
    _guard: tracing::dispatcher::DefaultGuard,
}

impl LogLevelGuard {
    pub fn set_level(level: &str) -> Self {
        let filter = EnvFilter::new(level);
        let subscriber = tracing_subscriber::registry()
            .with(subscriber_fmt::layer())
            .with(filter);

        LogLevelGuard {
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("short text", 20), "short text");
        assert_eq!(wrap_text("aaaa bbbb cccc", 9), "aaaa bbbb\n  cccc");
    }

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(""), "N/A");
        assert_eq!(or_na("Example"), "Example");
    }

    #[test]
    fn test_cards_render_under_scoped_subscriber() {
        let _guard = LogLevelGuard::set_level("debug");
        let preview = PreviewResult::Generic(crate::GenericPreview {
            title: "Breaking".into(),
            source: "Example".into(),
            ..Default::default()
        });
        log_preview_card(&preview, "https://news.example.com/a");
        log_error_card(
            "https://news.example.com/a",
            &crate::PreviewError::TimeoutError("operation timed out".into()),
        );
    }
}
