//! End-to-end turns through the controller, selector, and store together.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

use treadgpt::actions;
use treadgpt::config::ChatConfig;
use treadgpt::conversation::{ChatController, MessageRole, RiskLevel, SendOutcome};
use treadgpt::responder::{ReplyKind, select};

fn controller() -> ChatController {
    ChatController::seeded(42).with_response_delay(Duration::from_millis(5))
}

#[tokio::test(start_paused = true)]
async fn aapl_turn_appends_exactly_the_analysis_reply() {
    let controller = controller();

    let outcome = controller.send("AAPL price").await;
    let SendOutcome::Replied { user, assistant } = outcome else {
        panic!("expected a completed turn");
    };

    // Rule 8 produces one fixed text, independent of the RNG.
    let expected = select("AAPL price", &mut StdRng::seed_from_u64(0)).text;
    assert_eq!(assistant.content, expected);
    assert_eq!(assistant.kind, Some(ReplyKind::TechnicalAnalysis));

    let meta = assistant.metadata.expect("assistant replies carry metadata");
    assert!((70..=99).contains(&meta.confidence));
    assert!(matches!(
        meta.risk_level,
        RiskLevel::Low | RiskLevel::Medium | RiskLevel::High
    ));

    let history = controller.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, MessageRole::User);
    assert_eq!(history[0].content, user.content);
    assert_eq!(history[1].role, MessageRole::Assistant);
}

#[tokio::test(start_paused = true)]
async fn quick_action_is_equivalent_to_typing_its_prompt() {
    let action = actions::find("fed-analysis").expect("catalog id");

    let via_action = controller();
    let via_text = controller();

    let SendOutcome::Replied {
        assistant: from_action,
        ..
    } = via_action.send_quick_action(action).await
    else {
        panic!("expected a completed turn");
    };
    let SendOutcome::Replied {
        assistant: from_text,
        ..
    } = via_text.send(action.prompt).await
    else {
        panic!("expected a completed turn");
    };

    assert_eq!(from_action.content, from_text.content);
    assert_eq!(from_action.kind, from_text.kind);
    assert_eq!(from_action.metadata, from_text.metadata);

    let history = via_action.history();
    assert_eq!(history[0].content, action.prompt);
}

#[tokio::test(start_paused = true)]
async fn sector_rotation_action_reaches_the_fallback_echo() {
    let action = actions::find("sector-analysis").expect("catalog id");
    let controller = controller();

    let SendOutcome::Replied { assistant, .. } = controller.send_quick_action(action).await else {
        panic!("expected a completed turn");
    };

    assert_eq!(assistant.kind, Some(ReplyKind::Fallback));
    assert!(assistant.content.contains(action.prompt));
}

#[tokio::test(start_paused = true)]
async fn from_config_honors_delay_seed_and_welcome() {
    let config = ChatConfig {
        response_delay_ms: 5,
        rng_seed: Some(7),
        welcome: true,
    };

    let first = ChatController::from_config(&config);
    let second = ChatController::from_config(&config);

    assert_eq!(first.history().len(), 1, "welcome message is seeded");

    let SendOutcome::Replied {
        assistant: first_reply,
        ..
    } = first.send("hello").await
    else {
        panic!("expected a completed turn");
    };
    let SendOutcome::Replied {
        assistant: second_reply,
        ..
    } = second.send("hello").await
    else {
        panic!("expected a completed turn");
    };

    assert_eq!(first_reply.content, second_reply.content);
}

#[tokio::test(start_paused = true)]
async fn welcome_is_omitted_when_disabled() {
    let config = ChatConfig {
        response_delay_ms: 5,
        rng_seed: None,
        welcome: false,
    };
    let controller = ChatController::from_config(&config);
    assert!(controller.history().is_empty());
}
