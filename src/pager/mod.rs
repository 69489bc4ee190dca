//! Handles the paginated friend-list browser.

use displaydoc::Display;
use thiserror::Error;
use tracing::debug;

use crate::api::structures::ApiError;
use crate::api::SteamClient;
use crate::pager::structures::{compose_page, page_bounds, total_page_count, PageRow, RenderedPage};

pub mod structures;

/// How many friends are shown on one page.
pub const PAGE_SIZE: usize = 7;

/// Something went wrong while opening a friend-list view.
#[derive(Debug, Error, Display)]
pub enum PagerError {
    /// The summary lookup reported no matching profile.
    #[displaydoc("no Steam profile matches the ID `{0}`")]
    InvalidPrincipal(String),
    /// A Steam Web API call failed.
    #[displaydoc("{0}")]
    Api(#[from] ApiError),
}

/// The live state of one open friend-list view.
///
/// Created per listing command and owned by the message that displays it;
/// never shared between users. The cursor and page count only move once the
/// page they describe has rendered, so a failed fetch leaves the session
/// exactly where it was and the same navigation can be retried.
#[derive(Debug, Clone)]
pub struct FriendPager {
    /// The profile whose friends are listed. Fixed for the session.
    pub principal: String,
    /// Fixed page capacity.
    pub page_size: usize,
    /// 1-based index of the page on display.
    pub cursor: usize,
    /// Page count as of the most recent fetch.
    pub total_pages: usize,
}

impl FriendPager {
    /// Opens a friend-list view: validates the principal, then renders page 1.
    ///
    /// # Errors
    /// Errors with [`PagerError::InvalidPrincipal`] when the summary lookup
    /// reports no matching profile, and [`PagerError::Api`] on transport
    /// failure. Neither leaves a session behind.
    pub async fn open(
        api: &SteamClient,
        principal: &str,
    ) -> Result<(Self, RenderedPage), PagerError> {
        if api.player_summary(principal).await?.is_none() {
            return Err(PagerError::InvalidPrincipal(principal.to_string()));
        }
        let mut pager = FriendPager {
            principal: principal.to_string(),
            page_size: PAGE_SIZE,
            cursor: 1,
            total_pages: 1,
        };
        let page = pager.render(api).await?;
        Ok((pager, page))
    }

    /// Renders the page under the cursor from a fresh roster fetch.
    ///
    /// The roster is re-fetched on every render; the page count is derived
    /// from whatever came back, and the cursor is clamped into it if the
    /// roster shrank since the last look.
    ///
    /// # Errors
    /// Errors with [`ApiError`] on a failed fetch, leaving the session
    /// untouched.
    pub async fn render(&mut self, api: &SteamClient) -> Result<RenderedPage, ApiError> {
        self.render_at(api, self.cursor).await
    }

    /// Moves one page forward. At the last page this is a no-op: no state
    /// change, no fetch, `Ok(None)`.
    ///
    /// # Errors
    /// Errors with [`ApiError`] on a failed fetch, leaving the session
    /// untouched.
    pub async fn advance(&mut self, api: &SteamClient) -> Result<Option<RenderedPage>, ApiError> {
        if self.cursor >= self.total_pages {
            return Ok(None);
        }
        self.render_at(api, self.cursor + 1).await.map(Some)
    }

    /// Moves one page backward. At the first page this is a no-op.
    ///
    /// # Errors
    /// Errors with [`ApiError`] on a failed fetch, leaving the session
    /// untouched.
    pub async fn retreat(&mut self, api: &SteamClient) -> Result<Option<RenderedPage>, ApiError> {
        if self.cursor <= 1 {
            return Ok(None);
        }
        self.render_at(api, self.cursor - 1).await.map(Some)
    }

    /// Fetches and renders page `target`, committing the cursor and page
    /// count only after every fetch for the page has succeeded.
    async fn render_at(
        &mut self,
        api: &SteamClient,
        target: usize,
    ) -> Result<RenderedPage, ApiError> {
        let roster = api.friend_list(&self.principal).await?;
        let total_pages = total_page_count(roster.len(), self.page_size);
        let target = target.clamp(1, total_pages);

        let bounds = page_bounds(target, self.page_size, roster.len());
        debug!(
            principal = self.principal.as_str(),
            page = target,
            rows = bounds.len(),
            "rendering friend page"
        );
        // The roster only carries IDs; each visible friend takes its own
        // summary lookup to resolve name and presence
        let mut rows = Vec::with_capacity(bounds.len());
        for (offset, friend) in roster[bounds.clone()].iter().enumerate() {
            let summary = api.player_summary(&friend.steamid).await?;
            rows.push(PageRow {
                rank: bounds.start + offset + 1,
                steamid: friend.steamid.clone(),
                summary,
            });
        }

        self.cursor = target;
        self.total_pages = total_pages;
        Ok(compose_page(&self.principal, &rows, target, total_pages))
    }
}
