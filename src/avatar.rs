//! Avatar size selection.

use std::str::FromStr;

use displaydoc::Display;
use thiserror::Error;

use crate::api::structures::PlayerSummary;

/// The caller asked for an avatar size that does not exist.
#[derive(Debug, Error, Display)]
#[displaydoc("`{0}` is not an avatar size. Accepted sizes are `small`, `medium` and `full`.")]
pub struct UnknownSize(pub String);

/// The three sizes Steam serves an avatar at.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AvatarSize {
    /// 32x32.
    Small,
    /// 64x64.
    Medium,
    /// 184x184.
    Full,
}

impl AvatarSize {
    /// Pixel dimensions of this size, width by height.
    #[must_use]
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Small => (32, 32),
            Self::Medium => (64, 64),
            Self::Full => (184, 184),
        }
    }

    /// Picks the matching URL out of a profile summary.
    #[must_use]
    pub fn url(self, summary: &PlayerSummary) -> &str {
        match self {
            Self::Small => &summary.avatar,
            Self::Medium => &summary.avatarmedium,
            Self::Full => &summary.avatarfull,
        }
    }
}

impl FromStr for AvatarSize {
    type Err = UnknownSize;

    // Case-sensitive on purpose: the accepted arguments are exactly the ones
    // listed in the rejection hint.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "small" => Self::Small,
            "medium" => Self::Medium,
            "full" => Self::Full,
            _ => return Err(UnknownSize(s.to_string())),
        })
    }
}
