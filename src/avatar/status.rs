//! Image loading state for an avatar.
//!
//! The image and its fallback never decide visibility on their own: both read
//! one [`ImageLoadingStatus`] owned by the avatar root. The image reports
//! [`ImageEvent`]s and the fallback shows whenever the image is not loaded.

use serde::Serialize;

/// Loading state of the avatar's image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageLoadingStatus {
    /// No image has been registered yet.
    #[default]
    Idle,
    /// A source is set and the browser has not reported back.
    Loading,
    /// The image decoded successfully.
    Loaded,
    /// The source is missing or failed to load.
    Error,
}

/// Inputs that move the loading state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEvent {
    /// A new source was assigned; `blank` when it is empty or whitespace.
    SourceChanged { blank: bool },
    /// The element fired `load`.
    Load,
    /// The element fired `error`.
    Error,
}

impl ImageLoadingStatus {
    /// Initial state for an image with the given source.
    #[must_use]
    pub fn for_source(src: &str) -> Self {
        Self::Idle.next(ImageEvent::SourceChanged {
            blank: src.trim().is_empty(),
        })
    }

    /// Applies an event.
    #[must_use]
    pub fn next(self, event: ImageEvent) -> Self {
        match event {
            ImageEvent::SourceChanged { blank: true } => Self::Error,
            ImageEvent::SourceChanged { blank: false } => Self::Loading,
            ImageEvent::Load => Self::Loaded,
            ImageEvent::Error => Self::Error,
        }
    }

    /// Whether the image element should be visible.
    #[must_use]
    pub fn shows_image(self) -> bool {
        self == Self::Loaded
    }

    /// Whether the fallback should be visible, given whether its display
    /// delay (if any) has elapsed.
    #[must_use]
    pub fn shows_fallback(self, delay_elapsed: bool) -> bool {
        delay_elapsed && self != Self::Loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_source() {
        assert_eq!(ImageLoadingStatus::for_source("a.png"), ImageLoadingStatus::Loading);
        assert_eq!(ImageLoadingStatus::for_source(""), ImageLoadingStatus::Error);
        assert_eq!(ImageLoadingStatus::for_source("  "), ImageLoadingStatus::Error);
    }

    #[test]
    fn test_transitions() {
        let status = ImageLoadingStatus::for_source("a.png");
        assert_eq!(status.next(ImageEvent::Load), ImageLoadingStatus::Loaded);
        assert_eq!(status.next(ImageEvent::Error), ImageLoadingStatus::Error);

        // Swapping the source restarts loading, even after a failure.
        let failed = status.next(ImageEvent::Error);
        assert_eq!(
            failed.next(ImageEvent::SourceChanged { blank: false }),
            ImageLoadingStatus::Loading
        );
    }

    #[test]
    fn test_visibility_is_exclusive_once_delay_elapsed() {
        for status in [
            ImageLoadingStatus::Idle,
            ImageLoadingStatus::Loading,
            ImageLoadingStatus::Loaded,
            ImageLoadingStatus::Error,
        ] {
            assert_ne!(status.shows_image(), status.shows_fallback(true));
            assert!(!status.shows_fallback(false));
        }
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&ImageLoadingStatus::Loaded).unwrap();
        assert_eq!(json, "\"loaded\"");
    }
}
