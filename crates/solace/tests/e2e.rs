// SPDX-FileCopyrightText: 2026 Solace Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end integration tests for the complete triage pipeline.
//!
//! Each test creates an isolated TestDesk with a pinned selection strategy,
//! a short thinking delay, and a captured escalation channel. Tests are
//! independent and order-insensitive.

use solace_config::SolaceConfig;
use solace_core::{RiskTier, Sender, SolaceError};
use solace_test_utils::TestDesk;

// ---- Crisis path ----

#[tokio::test(start_paused = true)]
async fn high_risk_turn_delivers_crisis_script_and_escalates() {
    let mut harness = TestDesk::builder().build().await;

    let reply = harness
        .send_and_wait("I want to end it all")
        .await
        .expect("turn should complete");

    assert!(reply.contains("988"), "crisis line must be listed");
    assert!(reply.contains("741741"), "crisis text line must be listed");
    assert!(reply.contains("911"), "emergency number must be listed");
    assert!(reply.contains("counselor"), "counselor offer must close the script");

    let messages = harness.messages().await;
    let last = messages.last().expect("reply appended");
    assert_eq!(last.sender, Sender::Assistant);
    assert_eq!(last.risk_tier, Some(RiskTier::High));

    let events = harness.drain_risk_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].tier, RiskTier::High);
    assert_eq!(events[0].session_id, harness.session_id);

    // The crisis path never consults the selection strategy.
    assert_eq!(harness.selector.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn escalation_fires_while_the_reply_is_still_pending() {
    let mut harness = TestDesk::builder().with_delay_ms(500).build().await;

    harness.submit("life is not worth living").await.expect("accepted");

    // Tier was assigned synchronously; the event is on the channel before
    // the thinking delay elapses.
    let events = harness.drain_risk_events();
    assert_eq!(events.len(), 1);
    assert!(
        harness
            .desk
            .is_replying(&harness.session_id)
            .await
            .expect("session exists")
    );

    harness.settle().await;
}

// ---- Medium tier ----

#[tokio::test(start_paused = true)]
async fn stress_turn_uses_a_stress_template_and_booking_offer() {
    let mut harness = TestDesk::builder().build().await;
    let config = SolaceConfig::default();

    let reply = harness
        .send_and_wait("I feel so stressed about finals")
        .await
        .expect("turn should complete");

    assert!(reply.starts_with(&config.responses.empathy_preamble));
    assert!(
        config.responses.stress.strategies.iter().any(|t| reply.contains(t)),
        "reply should contain a stress coping template"
    );
    assert!(reply.contains(&config.responses.booking_offer));

    let messages = harness.messages().await;
    assert_eq!(messages.last().expect("reply").risk_tier, Some(RiskTier::Medium));
    assert!(harness.drain_risk_events().is_empty(), "medium tier must not escalate");
}

#[tokio::test(start_paused = true)]
async fn priority_law_high_beats_medium_keywords() {
    let harness = TestDesk::builder().build().await;

    let reply = harness
        .send_and_wait("I'm depressed and want to hurt myself")
        .await
        .expect("turn should complete");

    // The high-tier script wins over the medium-tier coping reply.
    assert!(reply.contains("988"));
    let messages = harness.messages().await;
    assert_eq!(messages.last().expect("reply").risk_tier, Some(RiskTier::High));
}

// ---- Low tier ----

#[tokio::test(start_paused = true)]
async fn low_risk_turn_gets_an_acknowledgment() {
    let harness = TestDesk::builder().with_pick_index(1).build().await;
    let config = SolaceConfig::default();

    let reply = harness
        .send_and_wait("nice weather today")
        .await
        .expect("turn should complete");

    assert_eq!(reply, config.responses.acknowledgments[1]);
    let messages = harness.messages().await;
    assert_eq!(messages.last().expect("reply").risk_tier, Some(RiskTier::Low));
}

// ---- Turn guard ----

#[tokio::test(start_paused = true)]
async fn double_submit_accepts_exactly_one_turn() {
    let harness = TestDesk::builder().with_delay_ms(200).build().await;

    let first = harness.submit("first thought").await;
    let second = harness.submit("second thought").await;

    assert!(first.is_ok());
    assert!(matches!(second, Err(SolaceError::TurnInProgress)));

    harness.settle().await;
    let messages = harness.messages().await;
    // Greeting + one accepted user message + one reply.
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].content, "first thought");
}

#[tokio::test(start_paused = true)]
async fn empty_submission_changes_nothing() {
    let harness = TestDesk::builder().build().await;

    for input in ["", "   ", "\t\n"] {
        let err = harness.submit(input).await.expect_err("should reject");
        assert!(matches!(err, SolaceError::EmptyInput));
    }

    let messages = harness.messages().await;
    assert_eq!(messages.len(), 1, "only the greeting may be present");
    assert!(
        !harness
            .desk
            .is_replying(&harness.session_id)
            .await
            .expect("session exists")
    );
}

// ---- Ordering ----

#[tokio::test(start_paused = true)]
async fn n_turns_yield_2n_plus_1_messages_in_order() {
    let harness = TestDesk::builder().build().await;
    let n = 5;

    for i in 0..n {
        harness
            .send_and_wait(&format!("update number {i}"))
            .await
            .expect("turn should complete");
    }

    let messages = harness.messages().await;
    assert_eq!(messages.len(), 2 * n + 1);
    for (i, msg) in messages.iter().enumerate() {
        assert_eq!(msg.seq, i as u64);
    }
    // Greeting, then strict user/assistant alternation.
    assert_eq!(messages[0].sender, Sender::Assistant);
    for i in 0..n {
        assert_eq!(messages[1 + 2 * i].sender, Sender::User);
        assert_eq!(messages[2 + 2 * i].sender, Sender::Assistant);
        assert_eq!(messages[1 + 2 * i].content, format!("update number {i}"));
    }
}

// ---- Cancellation ----

#[tokio::test(start_paused = true)]
async fn cancelling_a_turn_twice_is_silent_and_appends_nothing() {
    let harness = TestDesk::builder().with_delay_ms(500).build().await;

    harness.submit("hello out there").await.expect("accepted");
    harness
        .desk
        .cancel_turn(&harness.session_id)
        .await
        .expect("cancel");
    harness
        .desk
        .cancel_turn(&harness.session_id)
        .await
        .expect("second cancel is a no-op");

    tokio::time::sleep(std::time::Duration::from_millis(1000)).await;
    let messages = harness.messages().await;
    assert_eq!(messages.len(), 2, "cancelled reply must never land");

    // The session is usable again.
    harness.send_and_wait("still here").await.expect("turn completes");
    assert_eq!(harness.messages().await.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn cancel_after_completion_is_a_noop() {
    let harness = TestDesk::builder().build().await;

    harness.send_and_wait("hello").await.expect("turn completes");
    let before = harness.messages().await.len();

    harness
        .desk
        .cancel_turn(&harness.session_id)
        .await
        .expect("late cancel is a no-op");
    assert_eq!(harness.messages().await.len(), before);
}

#[tokio::test(start_paused = true)]
async fn closing_a_session_mid_turn_orphans_no_message() {
    let harness = TestDesk::builder().with_delay_ms(500).build().await;

    // Keep a handle to the actor so the log outlives the desk entry.
    let actor = harness
        .desk
        .session(&harness.session_id)
        .await
        .expect("session open");

    harness.submit("are you there").await.expect("accepted");
    harness
        .desk
        .close_session(&harness.session_id)
        .await
        .expect("closed");

    tokio::time::sleep(std::time::Duration::from_millis(1000)).await;
    assert_eq!(
        actor.messages().await.len(),
        2,
        "no reply may be appended to a torn-down session"
    );
}

// ---- Typing indicator ----

#[tokio::test(start_paused = true)]
async fn typing_indicator_tracks_the_turn_exactly() {
    let harness = TestDesk::builder().with_delay_ms(100).build().await;

    assert!(!harness.desk.is_replying(&harness.session_id).await.expect("open"));
    harness.submit("checking in").await.expect("accepted");
    assert!(harness.desk.is_replying(&harness.session_id).await.expect("open"));

    harness.settle().await;
    assert!(!harness.desk.is_replying(&harness.session_id).await.expect("open"));
}
