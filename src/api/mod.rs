//! Handles talking to the Steam Web API.

use tracing::debug;

use crate::api::structures::{
    ApiError, FriendListEnvelope, FriendRef, PlayerSummary, SummariesEnvelope,
};

pub mod structures;

/// Root of the public Steam Web API.
const API_BASE: &str = "https://api.steampowered.com";

/// A handle to the Steam Web API.
///
/// Holds the shared HTTP connection pool and the API key read from the
/// credential store at startup. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SteamClient {
    http: reqwest::Client,
    key: String,
    base: String,
}

impl SteamClient {
    /// Creates a client for the public API root.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_base(key, API_BASE)
    }

    /// Creates a client that talks to a different API root, such as the
    /// partner host.
    #[must_use]
    pub fn with_base(key: impl Into<String>, base: impl Into<String>) -> Self {
        SteamClient {
            http: reqwest::Client::new(),
            key: key.into(),
            base: base.into(),
        }
    }

    /// Fetches a profile's friend roster, in the order Steam returns it.
    ///
    /// A private or unknown profile comes back without a `friendslist`
    /// envelope; both surface as an empty roster.
    ///
    /// # Errors
    /// Errors with [`ApiError::Request`] on transport failure or a non-2xx
    /// status.
    pub async fn friend_list(&self, principal: &str) -> Result<Vec<FriendRef>, ApiError> {
        debug!(principal, "fetching friend list");
        let envelope: FriendListEnvelope = self
            .http
            .get(format!("{}/ISteamUser/GetFriendList/v0001/", self.base))
            .query(&[
                ("key", self.key.as_str()),
                ("steamid", principal),
                ("relationship", "friend"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope
            .friendslist
            .map(|list| list.friends)
            .unwrap_or_default())
    }

    /// Fetches the public summary of one profile.
    ///
    /// Returns `None` when the response carries no players, which is how the
    /// upstream signals an unknown ID.
    ///
    /// # Errors
    /// Errors with [`ApiError::Request`] on transport failure or a non-2xx
    /// status.
    pub async fn player_summary(&self, principal: &str) -> Result<Option<PlayerSummary>, ApiError> {
        debug!(principal, "fetching player summary");
        let envelope: SummariesEnvelope = self
            .http
            .get(format!("{}/ISteamUser/GetPlayerSummaries/v0002/", self.base))
            .query(&[("key", self.key.as_str()), ("steamids", principal)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.response.players.into_iter().next())
    }
}
