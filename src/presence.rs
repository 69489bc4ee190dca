//! Maps Steam's numeric `personastate` codes to something a human can read.

use std::fmt::{Display, Formatter};

/// The presence state attached to a profile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum PresenceState {
    Offline,
    Online,
    Busy,
    Away,
    Snooze,
    LookingToTrade,
    LookingToPlay,
    /// Any code outside the documented `0..=6` range.
    Unknown,
}

impl PresenceState {
    /// Maps a raw `personastate` code. Total over all of `i64`.
    #[must_use]
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Offline,
            1 => Self::Online,
            2 => Self::Busy,
            3 => Self::Away,
            4 => Self::Snooze,
            5 => Self::LookingToTrade,
            6 => Self::LookingToPlay,
            _ => Self::Unknown,
        }
    }

    /// The emoji shortcode shown in front of the label.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Offline => ":red_circle:",
            Self::Online => ":green_circle:",
            Self::Busy => ":blue_circle:",
            Self::Away => ":orange_circle:",
            Self::Snooze => ":zzz:",
            Self::LookingToTrade => ":repeat:",
            Self::LookingToPlay => ":video_game:",
            Self::Unknown => ":question:",
        }
    }

    /// The human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Offline => "Offline",
            Self::Online => "Online",
            Self::Busy => "Busy",
            Self::Away => "Away",
            Self::Snooze => "Snooze",
            Self::LookingToTrade => "Looking to trade",
            Self::LookingToPlay => "Looking to play",
            Self::Unknown => "Unknown state",
        }
    }
}

impl From<i64> for PresenceState {
    fn from(code: i64) -> Self {
        Self::from_code(code)
    }
}

impl Display for PresenceState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label())
    }
}
