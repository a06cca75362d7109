//! QR image URLs and the single primary-to-fallback swap.
use crate::constants::{QR_FALLBACK_ENDPOINT, QR_PRIMARY_ENDPOINT, QR_SIZE};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left untouched by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `value` for use as a single query parameter.
#[must_use]
pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[must_use]
pub fn primary_qr_url(target: &str) -> String {
    format!(
        "{QR_PRIMARY_ENDPOINT}?size={QR_SIZE}&data={}",
        encode_uri_component(target)
    )
}

#[must_use]
pub fn fallback_qr_url(target: &str) -> String {
    format!(
        "{QR_FALLBACK_ENDPOINT}?cht=qr&chs={QR_SIZE}&chl={}",
        encode_uri_component(target)
    )
}

/// Which rendering service an image currently points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrSource {
    Primary,
    Fallback,
}

/// Source of a QR `<img>` for one target URL.
///
/// Starts on the primary service. The first load error moves it to the
/// fallback; any later error is ignored and the image stays broken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImageState {
    target: String,
    source: QrSource,
}

impl QrImageState {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            source: QrSource::Primary,
        }
    }

    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub const fn source(&self) -> QrSource {
        self.source
    }

    #[must_use]
    pub fn src(&self) -> String {
        match self.source {
            QrSource::Primary => primary_qr_url(&self.target),
            QrSource::Fallback => fallback_qr_url(&self.target),
        }
    }

    /// Record an image load error. Returns `true` only when the source
    /// actually changed.
    pub fn on_error(&mut self) -> bool {
        match self.source {
            QrSource::Primary => {
                self.source = QrSource::Fallback;
                true
            }
            QrSource::Fallback => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(
            encode_uri_component("https://example.com"),
            "https%3A%2F%2Fexample.com"
        );
        assert_eq!(
            encode_uri_component("a b&c=d?e#f/ç"),
            "a%20b%26c%3Dd%3Fe%23f%2F%C3%A7"
        );
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
    }

    #[test]
    fn endpoint_urls_embed_encoded_target() {
        assert_eq!(
            primary_qr_url("https://x/y?z=1"),
            "https://api.qrserver.com/v1/create-qr-code/?size=220x220&data=https%3A%2F%2Fx%2Fy%3Fz%3D1"
        );
        assert_eq!(
            fallback_qr_url("https://x"),
            "https://chart.googleapis.com/chart?cht=qr&chs=220x220&chl=https%3A%2F%2Fx"
        );
    }

    #[test]
    fn error_swaps_to_fallback_exactly_once() {
        let mut image = QrImageState::new("https://example.com");
        assert_eq!(image.source(), QrSource::Primary);
        assert!(image.src().contains("https%3A%2F%2Fexample.com"));
        assert!(image.src().starts_with(QR_PRIMARY_ENDPOINT));

        assert!(image.on_error());
        assert_eq!(image.source(), QrSource::Fallback);
        let fallback = image.src();
        assert!(fallback.starts_with(QR_FALLBACK_ENDPOINT));

        assert!(!image.on_error());
        assert_eq!(image.src(), fallback);
    }
}
