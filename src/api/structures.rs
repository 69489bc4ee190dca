//! Wire structures for the Steam Web API responses.

use displaydoc::Display;
use serde::Deserialize;
use thiserror::Error;

/// Something went wrong while querying the Steam Web API.
#[derive(Debug, Error, Display)]
pub enum ApiError {
    /// The request failed in transit or came back with an error status.
    #[displaydoc("the Steam Web API request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Top-level envelope of a `GetFriendList` response.
#[derive(Debug, Deserialize)]
pub struct FriendListEnvelope {
    /// Missing entirely for private or unknown profiles.
    pub friendslist: Option<FriendsList>,
}

/// The `friendslist` payload.
#[derive(Debug, Deserialize)]
pub struct FriendsList {
    /// The roster, in the order Steam returns it.
    pub friends: Vec<FriendRef>,
}

/// One roster entry. The roster alone carries no display data; that takes a
/// summary lookup per friend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FriendRef {
    /// The friend's 64-bit account ID, as a string.
    pub steamid: String,
    /// How the profile relates to the principal, normally `"friend"`.
    #[serde(default)]
    pub relationship: String,
}

/// Top-level envelope of a `GetPlayerSummaries` response.
#[derive(Debug, Deserialize)]
pub struct SummariesEnvelope {
    /// The inner `response` object.
    pub response: Summaries,
}

/// The `response` payload of a summary lookup.
#[derive(Debug, Deserialize)]
pub struct Summaries {
    /// Zero players here means the queried ID does not exist.
    #[serde(default)]
    pub players: Vec<PlayerSummary>,
}

/// The public summary of one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlayerSummary {
    /// The 64-bit account ID, as a string.
    pub steamid: String,
    /// The display name.
    pub personaname: String,
    /// Link to the profile page.
    pub profileurl: String,
    /// Raw presence code, mapped by [`crate::presence::PresenceState`].
    #[serde(default)]
    pub personastate: i64,
    /// 32x32 avatar URL.
    #[serde(default)]
    pub avatar: String,
    /// 64x64 avatar URL.
    #[serde(default)]
    pub avatarmedium: String,
    /// 184x184 avatar URL.
    #[serde(default)]
    pub avatarfull: String,
}
