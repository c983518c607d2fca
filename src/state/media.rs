#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

/// Video sources with one of these extensions play in an inline `<video>`
/// element; any other declared video source is embedded in an `<iframe>`.
const VIDEO_FILE_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".mov"];

/// How a gallery item's media is presented once enlarged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaKind {
    InlineVideo(String),
    EmbeddedVideo(String),
    Image(String),
}

/// Resolved content for one open overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxMedia {
    pub kind: MediaKind,
    pub caption: String,
}

pub fn is_video_file(src: &str) -> bool {
    VIDEO_FILE_EXTENSIONS.iter().any(|ext| src.ends_with(ext))
}

/// Resolves a gallery item's declared sources into lightbox content.
///
/// A video source wins over an image. Caption falls back to the image alt
/// text, then to an empty string. Returns `None` when the item declares
/// nothing enlargeable, in which case activating it is a no-op.
pub fn resolve(
    image: Option<&str>,
    video: Option<&str>,
    caption: Option<&str>,
    alt: Option<&str>,
) -> Option<LightboxMedia> {
    let kind = match (video, image) {
        (Some(src), _) if is_video_file(src) => MediaKind::InlineVideo(src.to_string()),
        (Some(src), _) => MediaKind::EmbeddedVideo(src.to_string()),
        (None, Some(src)) => MediaKind::Image(src.to_string()),
        (None, None) => return None,
    };
    let caption = caption.or(alt).unwrap_or("").to_string();
    Some(LightboxMedia { kind, caption })
}

/// The single open-overlay slot. At most one overlay exists at a time:
/// opening while open replaces the slot, so the prior overlay is gone before
/// the next one renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    open: Option<LightboxMedia>,
}

impl LightboxState {
    pub fn open(&self, media: LightboxMedia) -> Self {
        Self { open: Some(media) }
    }

    pub fn close(&self) -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&LightboxMedia> {
        self.open.as_ref()
    }
}
