use steamcord::api::structures::PlayerSummary;
use steamcord::api::SteamClient;
use steamcord::pager::structures::{compose_page, page_bounds, total_page_count, PageRow};
use steamcord::pager::{FriendPager, PAGE_SIZE};

fn summary(id: &str, name: &str, state: i64) -> PlayerSummary {
    PlayerSummary {
        steamid: id.to_string(),
        personaname: name.to_string(),
        profileurl: format!("https://steamcommunity.com/profiles/{id}/"),
        personastate: state,
        ..Default::default()
    }
}

#[test]
fn page_count_is_ceiling_division() {
    assert_eq!(total_page_count(1, 7), 1);
    assert_eq!(total_page_count(7, 7), 1);
    assert_eq!(total_page_count(8, 7), 2);
    assert_eq!(total_page_count(14, 7), 2);
    assert_eq!(total_page_count(15, 7), 3);
    // An empty roster still occupies one page
    assert_eq!(total_page_count(0, 7), 1);
}

#[test]
fn pages_partition_the_roster() {
    for len in 0..40_usize {
        for page_size in 1..=9_usize {
            let total = total_page_count(len, page_size);
            let mut covered = 0;
            let mut last_end = 0;
            for page in 1..=total {
                let bounds = page_bounds(page, page_size, len);
                assert_eq!(
                    bounds.len(),
                    page_size.min(len.saturating_sub((page - 1) * page_size)),
                    "slice length off for page {page} of {len} at size {page_size}"
                );
                // Adjacent pages line up without gap or overlap
                assert_eq!(bounds.start, last_end);
                last_end = bounds.end;
                covered += bounds.len();
            }
            assert_eq!(covered, len, "pages must cover all {len} entries at size {page_size}");
        }
    }
}

#[test]
fn ten_friends_split_into_two_pages() {
    let len = 10;
    assert_eq!(total_page_count(len, PAGE_SIZE), 2);
    let first = page_bounds(1, PAGE_SIZE, len);
    let second = page_bounds(2, PAGE_SIZE, len);
    // Friends ranked 1-7, then 8-10
    assert_eq!((first.start, first.end), (0, 7));
    assert_eq!((second.start, second.end), (7, 10));
}

#[test]
fn rows_carry_absolute_ordinals_and_profile_links() {
    let rows = vec![
        PageRow {
            rank: 8,
            steamid: "111".to_string(),
            summary: Some(summary("111", "alice", 1)),
        },
        PageRow {
            rank: 9,
            steamid: "222".to_string(),
            summary: None,
        },
    ];
    let page = compose_page("76561198000000000", &rows, 2, 2);

    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 2);
    assert!(page.title.contains("`76561198000000000`"));
    assert!(page.title.contains("[Page(2/2)]"));

    let lines: Vec<&str> = page.body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("**8:**"));
    assert!(lines[0].contains(":green_circle:"));
    assert!(lines[0].contains("[*Online*]"));
    assert!(lines[0].contains("[[/id/111/](https://steamcommunity.com/profiles/111/)]"));
    assert!(lines[0].ends_with("**alice**"));
    // A friend Steam no longer knows keeps its slot and absolute rank
    assert!(lines[1].starts_with("**9:**"));
    assert!(lines[1].contains("Unknown state"));

    assert_eq!(page.description(), format!("{}\n{}", page.title, page.body));
}

#[test]
fn empty_roster_renders_one_empty_page() {
    let page = compose_page("76561198000000000", &[], 1, total_page_count(0, PAGE_SIZE));
    assert!(page.title.contains("[Page(1/1)]"));
    assert!(page.body.is_empty());
}

#[test]
fn rendering_is_deterministic_for_a_fixed_roster() {
    let rows: Vec<PageRow> = (8..=10)
        .map(|rank| PageRow {
            rank,
            steamid: rank.to_string(),
            summary: Some(summary(&rank.to_string(), "bob", 0)),
        })
        .collect();
    // Leaving a page and coming back reproduces it exactly
    assert_eq!(
        compose_page("id", &rows, 2, 2),
        compose_page("id", &rows, 2, 2)
    );
}

#[tokio::test]
async fn navigation_is_a_no_op_at_the_edges() {
    // No fetch happens at the edges, so the unused key never leaves the process
    let api = SteamClient::new("not-a-real-key");
    let mut pager = FriendPager {
        principal: "76561198000000000".to_string(),
        page_size: PAGE_SIZE,
        cursor: 2,
        total_pages: 2,
    };
    let advanced = pager
        .advance(&api)
        .await
        .expect("advancing past the last page must not fetch");
    assert!(advanced.is_none());
    assert_eq!(pager.cursor, 2);

    pager.cursor = 1;
    let retreated = pager
        .retreat(&api)
        .await
        .expect("retreating past the first page must not fetch");
    assert!(retreated.is_none());
    assert_eq!(pager.cursor, 1);
    assert_eq!(pager.total_pages, 2);
}

#[tokio::test]
async fn failed_fetch_leaves_the_cursor_alone() {
    // Nothing listens on the discard port, so every fetch fails fast
    let api = SteamClient::with_base("not-a-real-key", "http://127.0.0.1:9");
    let mut pager = FriendPager {
        principal: "76561198000000000".to_string(),
        page_size: PAGE_SIZE,
        cursor: 1,
        total_pages: 2,
    };
    pager
        .advance(&api)
        .await
        .expect_err("the roster fetch cannot succeed");
    assert_eq!(pager.cursor, 1);
    assert_eq!(pager.total_pages, 2);

    pager.cursor = 2;
    pager
        .retreat(&api)
        .await
        .expect_err("the roster fetch cannot succeed");
    assert_eq!(pager.cursor, 2);
}

#[tokio::test]
async fn open_rejects_an_unreachable_upstream_without_a_session() {
    let api = SteamClient::with_base("not-a-real-key", "http://127.0.0.1:9");
    FriendPager::open(&api, "76561198000000000")
        .await
        .expect_err("validation cannot reach the upstream");
}
