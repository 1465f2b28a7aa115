use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

impl PlaybackState {
    pub fn toggled(self) -> Self {
        match self {
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Playing => PlaybackState::Paused,
        }
    }

    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }

    /// Button glyph: offers to mute while playing, to play while paused.
    pub fn glyph(self) -> &'static str {
        match self {
            PlaybackState::Playing => "🔇",
            PlaybackState::Paused => "🔊",
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            PlaybackState::Playing => "Pause ambient audio",
            PlaybackState::Paused => "Play ambient audio",
        }
    }
}

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("{0} element is not mounted")]
    Missing(&'static str),
    #[error("playback was rejected: {0}")]
    Playback(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused() {
        assert_eq!(PlaybackState::default(), PlaybackState::Paused);
        assert!(!PlaybackState::default().is_playing());
    }

    #[test]
    fn parity_of_toggles_decides_state() {
        for n in 0..10 {
            let state = (0..n).fold(PlaybackState::default(), |s, _| s.toggled());
            if n % 2 == 0 {
                assert_eq!(state, PlaybackState::Paused, "{} toggles", n);
            } else {
                assert_eq!(state, PlaybackState::Playing, "{} toggles", n);
            }
        }
    }

    #[test]
    fn glyph_matches_original_labels() {
        assert_eq!(PlaybackState::Playing.glyph(), "🔇");
        assert_eq!(PlaybackState::Paused.glyph(), "🔊");
    }

    #[test]
    fn media_errors_read_well() {
        assert_eq!(
            MediaError::Missing("audio").to_string(),
            "audio element is not mounted"
        );
        assert_eq!(
            MediaError::Playback("NotAllowedError".into()).to_string(),
            "playback was rejected: NotAllowedError"
        );
    }
}
