//! YouTube link handling
//!
//! Extracts the video identifier the embed needs from the links users
//! paste into playlists.

use crate::error::{AdapterError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;

/// Short-link path segment (`https://youtu.be/<id>`)
const SHORT_LINK_SEGMENT: &str = "youtu.be/";

/// Marker of the watch-page query form (`watch?v=<id>`)
const WATCH_QUERY_MARKER: &str = "v=";

/// YouTube video identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Extract the video identifier from a YouTube link
///
/// - Short links: the text right after `youtu.be/`, cut at the first `?`
/// - Watch pages: the `v` parameter of the query string
///
/// Anything else, or an empty identifier, is a `MalformedUrl`.
pub fn extract_video_id(url: &str) -> Result<VideoId> {
    let id = if let Some((_, rest)) = url.split_once(SHORT_LINK_SEGMENT) {
        rest.split('?').next().map(str::to_string)
    } else if url.contains(WATCH_QUERY_MARKER) {
        watch_param(url)
    } else {
        None
    };

    match id {
        Some(id) if !id.is_empty() => Ok(VideoId(id)),
        _ => Err(AdapterError::MalformedUrl(url.to_string())),
    }
}

/// Value of `v` in the query string, if any
fn watch_param(url: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "v")
        .map(|(_, value)| value.into_owned())
}

/// Medium-quality thumbnail for a video
pub fn thumbnail_url(id: &VideoId) -> String {
    format!("https://img.youtube.com/vi/{}/mqdefault.jpg", id)
}
