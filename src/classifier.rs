//! Video link classification.
//!
//! A URL counts as a video link when its string form mentions one of the
//! YouTube domains. The identifier is then pulled out by a small ordered set
//! of URL shapes, each tried independently.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const VIDEO_MARKERS: [&str; 2] = ["youtube.com", "youtu.be"];

const THUMBNAIL_TEMPLATE_PREFIX: &str = "https://img.youtube.com/vi/";
const THUMBNAIL_TEMPLATE_SUFFIX: &str = "/maxresdefault.jpg";

static WATCH_PAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/watch\?(?:[^#]*?&)?v=([^&?#]+)").unwrap());
static SHORT_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"youtu\.be/([^&?#]+)").unwrap());
static EMBED_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"/embed/([^&?#]+)").unwrap());
static LEGACY_PATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"/v/([^&?#]+)").unwrap());
static BARE_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"/v=([^&?#]+)").unwrap());

/// URL shapes that carry a video identifier, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoShape {
    /// `youtube.com/watch?v=<id>`, with `v` anywhere in the query
    WatchPage,
    /// `youtu.be/<id>`
    ShortLink,
    /// `youtube.com/embed/<id>`
    EmbedPath,
    /// `youtube.com/v/<id>`
    LegacyPath,
    /// `youtube.com/v=<id>`, a `v=` pair written as a path segment
    BareParam,
}

impl VideoShape {
    pub const ALL: [VideoShape; 5] = [
        VideoShape::WatchPage,
        VideoShape::ShortLink,
        VideoShape::EmbedPath,
        VideoShape::LegacyPath,
        VideoShape::BareParam,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            VideoShape::WatchPage => &WATCH_PAGE,
            VideoShape::ShortLink => &SHORT_LINK,
            VideoShape::EmbedPath => &EMBED_PATH,
            VideoShape::LegacyPath => &LEGACY_PATH,
            VideoShape::BareParam => &BARE_PARAM,
        }
    }

    /// Returns the identifier if `url` has this shape. The identifier ends at
    /// the next `&`, `?` or `#`.
    pub fn capture(self, url: &str) -> Option<String> {
        self.pattern()
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Substring check only: a marker inside the query or path also counts.
pub fn is_video_url(url: &str) -> bool {
    VIDEO_MARKERS.iter().any(|marker| url.contains(marker))
}

/// First matching shape wins.
pub fn match_video_id(url: &str) -> Option<String> {
    VideoShape::ALL.iter().find_map(|shape| {
        let id = shape.capture(url)?;
        debug!(url = %url, shape = ?shape, video_id = %id, "Matched video URL shape");
        Some(id)
    })
}

/// Empty string when no shape matches.
pub fn extract_video_id(url: &str) -> String {
    match_video_id(url).unwrap_or_default()
}

pub fn thumbnail_url(video_id: &str) -> String {
    format!("{THUMBNAIL_TEMPLATE_PREFIX}{video_id}{THUMBNAIL_TEMPLATE_SUFFIX}")
}
