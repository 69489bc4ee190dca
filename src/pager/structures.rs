//! Data structures and page math for the friend-list browser.

use std::ops::Range;

use crate::api::structures::PlayerSummary;
use crate::presence::PresenceState;

/// One rendered friend-list page, ready to be wrapped in an embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// The header line, naming the principal and the page position.
    pub title: String,
    /// One line per friend on this page.
    pub body: String,
    /// 1-based index of this page.
    pub page: usize,
    /// Page count as of this render.
    pub total_pages: usize,
}

impl RenderedPage {
    /// Joins the header and rows into one embed description.
    #[must_use]
    pub fn description(&self) -> String {
        format!("{}\n{}", self.title, self.body)
    }
}

/// One friend slot on a page, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    /// 1-based rank across the whole roster, not page-relative.
    pub rank: usize,
    /// The friend's account ID from the roster.
    pub steamid: String,
    /// The resolved summary; `None` when the lookup returned no players.
    pub summary: Option<PlayerSummary>,
}

/// Number of pages a roster of `len` entries occupies at `page_size` per page.
///
/// An empty roster still has exactly one (empty) page, so this never returns
/// 0 and page headers never read "of 0".
#[must_use]
pub fn total_page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).max(1)
}

/// Half-open bounds of page `page` (1-based) in a roster of `len` entries.
#[must_use]
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = (page.saturating_sub(1) * page_size).min(len);
    let end = (start + page_size).min(len);
    start..end
}

/// Formats the rows of one page under the friend-list header.
#[must_use]
pub fn compose_page(
    principal: &str,
    rows: &[PageRow],
    page: usize,
    total_pages: usize,
) -> RenderedPage {
    let title = format!("**`{principal}`'s Friends List [Page({page}/{total_pages})]**");
    let mut body = String::new();
    for row in rows {
        match &row.summary {
            Some(summary) => {
                let state = PresenceState::from_code(summary.personastate);
                body.push_str(&format!(
                    "**{}:** {} [*{}*] [[/id/{}/]({})] **{}**\n",
                    row.rank,
                    state.glyph(),
                    state.label(),
                    summary.steamid,
                    summary.profileurl,
                    summary.personaname,
                ));
            }
            // Steam no longer knows this friend; the slot stays so the
            // ordinals keep counting across the whole roster
            None => {
                let state = PresenceState::Unknown;
                body.push_str(&format!(
                    "**{}:** {} [*{}*] /id/{}/\n",
                    row.rank,
                    state.glyph(),
                    state.label(),
                    row.steamid,
                ));
            }
        }
    }
    RenderedPage {
        title,
        body,
        page,
        total_pages,
    }
}
