//! Tracker Integration Tests
//!
//! Drive events through the router, services, store, and cache together.
//! Everything runs against in-memory SQLite; no external services needed.
//!
//! Run with: cargo test -p integration-tests --test tracker_tests

use std::time::Duration;

use emote_cache::LiveListConfig;
use emote_core::ItemKind;
use emote_service::dto::ButtonStyle;
use emote_service::InteractionResponse;
use integration_tests::{
    body, button, command, jump_submit, message, reaction_add, reaction_remove, shared_command,
    sticker_message, TestTracker,
};

const S: u64 = 100;
const T: u64 = 200;

// ============================================================================
// Counting
// ============================================================================

#[tokio::test]
async fn test_posts_and_reactions_accumulate() {
    let tracker = TestTracker::start().await.unwrap();

    tracker
        .send_all([
            message(S, "hello <:foo:111>"),
            message(S, "<:foo:111>"),
            message(S, "again <:foo:111>!"),
            reaction_add(S, 111, "foo"),
            reaction_remove(S, 111, "foo"),
        ])
        .await
        .unwrap();

    assert_eq!(tracker.count_of(ItemKind::Emoji, S, 111).await.unwrap(), 3);
}

#[tokio::test]
async fn test_first_and_last_used_timestamps() {
    let tracker = TestTracker::start().await.unwrap();

    tracker.send(message(S, "<:foo:111>")).await.unwrap();
    let first = tracker.usage(ItemKind::Emoji, S, 111).await.unwrap().unwrap();

    tokio::time::sleep(Duration::from_millis(20)).await;
    tracker.send(message(S, "<:foo:111>")).await.unwrap();
    let second = tracker.usage(ItemKind::Emoji, S, 111).await.unwrap().unwrap();

    assert_eq!(second.usage_count, 2);
    assert_eq!(second.first_used, first.first_used);
    assert!(second.last_used > first.last_used);
}

#[tokio::test]
async fn test_count_never_goes_negative() {
    let tracker = TestTracker::start().await.unwrap();

    tracker
        .send_all([
            reaction_add(S, 111, "foo"),
            reaction_remove(S, 111, "foo"),
            reaction_remove(S, 111, "foo"),
            reaction_remove(S, 111, "foo"),
        ])
        .await
        .unwrap();
    assert_eq!(tracker.count_of(ItemKind::Emoji, S, 111).await.unwrap(), 0);

    tracker.send(reaction_add(S, 111, "foo")).await.unwrap();
    assert_eq!(tracker.count_of(ItemKind::Emoji, S, 111).await.unwrap(), 1);
}

#[tokio::test]
async fn test_stickers_and_emojis_are_counted_separately() {
    let tracker = TestTracker::start().await.unwrap();

    tracker
        .send_all([
            sticker_message(S, &[(111, "wave"), (222, "dance")]),
            message(S, "<:foo:111>"),
        ])
        .await
        .unwrap();

    assert_eq!(tracker.count_of(ItemKind::Sticker, S, 111).await.unwrap(), 1);
    assert_eq!(tracker.count_of(ItemKind::Sticker, S, 222).await.unwrap(), 1);
    assert_eq!(tracker.count_of(ItemKind::Emoji, S, 111).await.unwrap(), 1);
}

// ============================================================================
// Reset
// ============================================================================

#[tokio::test]
async fn test_reset_only_touches_one_server() {
    let tracker = TestTracker::start().await.unwrap();

    tracker
        .send_all([
            message(S, "<:foo:111>"),
            sticker_message(S, &[(900, "wave")]),
            message(T, "<:foo:111>"),
        ])
        .await
        .unwrap();

    let response = tracker.respond(command(S, "resetcount")).await.unwrap();
    assert_eq!(
        body(&response).unwrap().content,
        "✅ All emoji and sticker counts have been reset for this server."
    );

    assert!(tracker.usage(ItemKind::Emoji, S, 111).await.unwrap().is_none());
    assert!(tracker.usage(ItemKind::Sticker, S, 900).await.unwrap().is_none());
    assert_eq!(tracker.count_of(ItemKind::Emoji, T, 111).await.unwrap(), 1);
}

// ============================================================================
// Listings and pagination
// ============================================================================

#[tokio::test]
async fn test_listing_flow_with_paging_and_jump() {
    let tracker = TestTracker::start().await.unwrap();
    for id in 1..=12u64 {
        tracker
            .send(sticker_message(S, &[(id, "s")]))
            .await
            .unwrap();
    }

    let response = tracker
        .respond(shared_command(S, "liststickers", true))
        .await
        .unwrap();
    let InteractionResponse::ChannelMessage(first) = &response else {
        panic!("expected a channel message");
    };
    assert!(!first.ephemeral);
    assert_eq!(first.embeds.len(), 5);
    assert_eq!(first.components[0].labels(), vec!["1/3", ">", ">>"]);

    let next_id = first.components[0].components[1].custom_id.clone();
    let response = tracker.respond(button(S, &next_id)).await.unwrap();
    let InteractionResponse::UpdateMessage(second) = &response else {
        panic!("expected an update");
    };
    assert_eq!(second.components[0].labels(), vec!["<", "2/3", ">"]);

    let indicator = second.components[0].components[1].custom_id.clone();
    let response = tracker.respond(button(S, &indicator)).await.unwrap();
    let InteractionResponse::Modal(modal) = &response else {
        panic!("expected a modal");
    };

    let response = tracker
        .respond(jump_submit(S, &modal.custom_id, "3"))
        .await
        .unwrap();
    let third = body(&response).unwrap();
    assert_eq!(third.embeds.len(), 2);
    assert_eq!(third.components[0].labels(), vec!["<<", "<", "3/3"]);

    assert!(tracker
        .send(jump_submit(S, &modal.custom_id, "4"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_page_past_the_end_shows_only_disabled_indicator() {
    let tracker = TestTracker::start().await.unwrap();
    tracker.send(message(S, "<:foo:111>")).await.unwrap();

    let response = tracker.respond(button(S, "emoji_page:4")).await.unwrap();
    let page = body(&response).unwrap();

    assert!(!page.content.contains("<:foo:111>"));
    let row = &page.components[0];
    assert_eq!(row.labels(), vec!["5/1"]);
    assert!(row.components[0].disabled);
    assert_eq!(row.components[0].style, ButtonStyle::Success);
}

#[tokio::test]
async fn test_listing_ties_broken_by_recency() {
    let tracker = TestTracker::start().await.unwrap();
    tracker.send(message(S, "<:old:1>")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(20)).await;
    tracker.send(message(S, "<:new:2>")).await.unwrap();

    let response = tracker.respond(command(S, "listemotes")).await.unwrap();
    let content = &body(&response).unwrap().content;
    let newer = content.find("<:new:2>").unwrap();
    let older = content.find("<:old:1>").unwrap();
    assert!(newer < older);
}

#[tokio::test]
async fn test_empty_listing_is_an_ephemeral_error() {
    let tracker = TestTracker::start().await.unwrap();
    tracker.send(message(T, "<:foo:111>")).await.unwrap();

    let response = tracker
        .respond(shared_command(S, "listemotes", true))
        .await
        .unwrap();
    let data = body(&response).unwrap();
    assert!(data.ephemeral);
    assert_eq!(data.content, "❌ No emoji data found for this server.");
}

// ============================================================================
// Least used and the live list cache
// ============================================================================

#[tokio::test]
async fn test_least_used_only_lists_live_emojis() {
    let tracker = TestTracker::start().await.unwrap();
    tracker.live.set(&[(1, "busy"), (2, "quiet")]);
    tracker
        .send_all([
            message(S, "<:busy:1> <:busy:1> <:busy:1>"),
            message(S, "<:quiet:2>"),
            message(S, "<:gone:3>"),
        ])
        .await
        .unwrap();

    let response = tracker.respond(command(S, "listleastused")).await.unwrap();
    let content = &body(&response).unwrap().content;

    let quiet = content.find("<:quiet:2> **x1**").unwrap();
    let busy = content.find("<:busy:1> **x3**").unwrap();
    assert!(quiet < busy);
    assert!(!content.contains("<:gone:3>"));
}

#[tokio::test]
async fn test_least_used_without_live_emojis() {
    let tracker = TestTracker::start().await.unwrap();
    let response = tracker.respond(command(S, "listleastused")).await.unwrap();
    assert_eq!(
        body(&response).unwrap().content,
        "❌ No custom emojis found in this server."
    );
}

#[tokio::test]
async fn test_live_list_is_cached_until_ttl_expires() {
    let tracker = TestTracker::start_with_cache(LiveListConfig {
        ttl: Duration::from_millis(300),
        fetch_timeout: None,
    })
    .await
    .unwrap();
    tracker.live.set(&[(1, "foo")]);
    tracker.send(message(S, "<:foo:1>")).await.unwrap();

    tracker.respond(command(S, "listleastused")).await.unwrap();
    tracker.respond(command(S, "listleastused")).await.unwrap();
    assert_eq!(tracker.live.fetches(), 1);

    // A changed listing is not seen until the entry expires
    tracker.live.set(&[]);
    let response = tracker.respond(command(S, "listleastused")).await.unwrap();
    assert!(body(&response).unwrap().content.contains("<:foo:1>"));

    tokio::time::sleep(Duration::from_millis(400)).await;
    let response = tracker.respond(command(S, "listleastused")).await.unwrap();
    assert_eq!(tracker.live.fetches(), 2);
    assert_eq!(
        body(&response).unwrap().content,
        "❌ No custom emojis found in this server."
    );
}
