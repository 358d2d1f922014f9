//! Integration tests for [`answer_pipeline::ResolverStage`].
//!
//! Covers: empty and whitespace-only input (no solve, no reply), unanswered text (no reply), answered text (one
//! verbatim reply with keyboard and link preview forwarded), normalizer output reaching the solver, and
//! collaborator failures propagating without a reply.

use std::sync::Arc;

use answer_core::{
    Answer, AnswerError, Button, IdentityNormalizer, Keyboard, LinkPreview, Markup, Normalizer,
    OutboundReply, Replier, Solver, Update,
};
use answer_pipeline::{ItemHandler, QueueItem, Resolution, ResolverStage};
use async_trait::async_trait;
use mockall::mock;
use tokio::sync::mpsc;

mock! {
    pub Solver {}

    #[async_trait]
    impl Solver for Solver {
        async fn solve(&self, text: &str) -> answer_core::Result<Option<Answer>>;
    }
}

/// Replier that records every reply it is asked to send.
struct RecordingReplier {
    sender: mpsc::UnboundedSender<OutboundReply>,
}

impl RecordingReplier {
    fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<OutboundReply>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sender: tx }), rx)
    }
}

#[async_trait]
impl Replier for RecordingReplier {
    async fn send(&self, reply: &OutboundReply) -> answer_core::Result<()> {
        let _ = self.sender.send(reply.clone());
        Ok(())
    }
}

/// Replier that always fails, as a broken transport would.
struct FailingReplier;

#[async_trait]
impl Replier for FailingReplier {
    async fn send(&self, _reply: &OutboundReply) -> answer_core::Result<()> {
        Err(AnswerError::Channel("sendMessage failed: 400".to_string()))
    }
}

/// Normalizer that upper-cases; idempotent.
struct UpperNormalizer;

#[async_trait]
impl Normalizer for UpperNormalizer {
    async fn normalize(&self, text: &str) -> answer_core::Result<String> {
        Ok(text.to_uppercase())
    }
}

struct FailingNormalizer;

#[async_trait]
impl Normalizer for FailingNormalizer {
    async fn normalize(&self, _text: &str) -> answer_core::Result<String> {
        Err(AnswerError::Normalizer("lookup failed".to_string()))
    }
}

fn stage(solver: MockSolver, replier: Arc<dyn Replier>) -> ResolverStage {
    ResolverStage::new(Arc::new(IdentityNormalizer), Arc::new(solver), replier)
}

/// **Test: Whitespace-only and empty text never reach the solver and send nothing.**
///
/// **Setup:** Solver mock expecting zero calls; recording replier.
/// **Action:** resolve "", "  ", "\n\t ".
/// **Expected:** each is Resolution::Empty; no reply recorded.
#[tokio::test]
async fn test_blank_text_is_discarded_without_solving() {
    let mut solver = MockSolver::new();
    solver.expect_solve().times(0);
    let (replier, mut rx) = RecordingReplier::new();
    let stage = stage(solver, replier);

    for text in ["", "  ", "\n\t "] {
        let result = stage.resolve(&Update::new(42, text)).await.unwrap();
        assert_eq!(result, Resolution::Empty);
    }

    drop(stage);
    assert!(rx.recv().await.is_none());
}

/// **Test: Answered text produces exactly one verbatim reply to the originating chat.**
///
/// **Setup:** Solver returns Answer("4", no keyboard, preview suppressed) for "2+2".
/// **Action:** resolve Update(42, "  2+2 ").
/// **Expected:** Replied; one reply to chat 42 with body "`4`", MarkdownV2, preview suppressed.
#[tokio::test]
async fn test_answer_is_sent_as_verbatim_markup() {
    let mut solver = MockSolver::new();
    solver
        .expect_solve()
        .withf(|text| text == "2+2")
        .times(1)
        .returning(|_| Ok(Some(Answer::new("4"))));
    let (replier, mut rx) = RecordingReplier::new();
    let stage = stage(solver, replier);

    let result = stage.resolve(&Update::new(42, "  2+2 ")).await.unwrap();
    assert_eq!(result, Resolution::Replied);

    drop(stage);
    let reply = rx.recv().await.expect("one reply");
    assert_eq!(reply.conversation_id, 42);
    assert_eq!(reply.body, "`4`");
    assert_eq!(reply.markup, Markup::MarkdownV2);
    assert!(reply.keyboard.is_none());
    assert_eq!(reply.link_preview, LinkPreview::suppressed());
    assert!(rx.recv().await.is_none());
}

/// **Test: Keyboard and link preview are forwarded unchanged; HTML markup escapes the body.**
#[tokio::test]
async fn test_keyboard_and_preview_forwarded() {
    let keyboard = Keyboard::single(Button::url("Open", "https://example.com/a"));
    let expected_keyboard = keyboard.clone();
    let mut solver = MockSolver::new();
    solver.expect_solve().times(1).returning(move |_| {
        Ok(Some(
            Answer::new("a<b")
                .with_keyboard(keyboard.clone())
                .with_link_preview(LinkPreview::for_url("https://example.com/a")),
        ))
    });
    let (replier, mut rx) = RecordingReplier::new();
    let stage = stage(solver, replier).with_markup(Markup::Html);

    stage.resolve(&Update::new(7, "anything")).await.unwrap();

    let reply = rx.recv().await.expect("one reply");
    assert_eq!(reply.conversation_id, 7);
    assert_eq!(reply.body, "<code>a&lt;b</code>");
    assert_eq!(reply.markup, Markup::Html);
    assert_eq!(reply.keyboard, Some(expected_keyboard));
    assert_eq!(reply.link_preview, LinkPreview::for_url("https://example.com/a"));
}

/// **Test: No answer from the solver sends nothing.**
#[tokio::test]
async fn test_no_answer_sends_nothing() {
    let mut solver = MockSolver::new();
    solver.expect_solve().times(1).returning(|_| Ok(None));
    let (replier, mut rx) = RecordingReplier::new();
    let stage = stage(solver, replier);

    let result = stage.resolve(&Update::new(42, "hello")).await.unwrap();
    assert_eq!(result, Resolution::NoAnswer);

    drop(stage);
    assert!(rx.recv().await.is_none());
}

/// **Test: The solver receives the trimmed, normalized text.**
#[tokio::test]
async fn test_solver_sees_normalized_text() {
    let mut solver = MockSolver::new();
    solver
        .expect_solve()
        .withf(|text| text == "ABC")
        .times(1)
        .returning(|_| Ok(None));
    let (replier, _rx) = RecordingReplier::new();
    let stage = ResolverStage::new(Arc::new(UpperNormalizer), Arc::new(solver), replier);

    let result = stage.resolve(&Update::new(1, " abc\n")).await.unwrap();
    assert_eq!(result, Resolution::NoAnswer);
}

/// **Test: Solver, normalizer and replier failures propagate; nothing is sent.**
#[tokio::test]
async fn test_collaborator_failures_propagate() {
    let mut solver = MockSolver::new();
    solver
        .expect_solve()
        .times(1)
        .returning(|_| Err(AnswerError::Solver("timeout".to_string())));
    let (replier, mut rx) = RecordingReplier::new();
    let failing_solver = stage(solver, replier.clone());
    assert!(matches!(
        failing_solver.resolve(&Update::new(1, "2+2")).await,
        Err(AnswerError::Solver(_))
    ));

    let mut solver = MockSolver::new();
    solver.expect_solve().times(0);
    let failing_normalizer =
        ResolverStage::new(Arc::new(FailingNormalizer), Arc::new(solver), replier.clone());
    assert!(matches!(
        failing_normalizer.resolve(&Update::new(1, "2+2")).await,
        Err(AnswerError::Normalizer(_))
    ));

    drop(failing_solver);
    drop(failing_normalizer);
    drop(replier);
    assert!(rx.recv().await.is_none());

    let mut solver = MockSolver::new();
    solver
        .expect_solve()
        .times(1)
        .returning(|_| Ok(Some(Answer::new("4"))));
    let failing_replier = stage(solver, Arc::new(FailingReplier));
    assert!(matches!(
        failing_replier.resolve(&Update::new(1, "2+2")).await,
        Err(AnswerError::Channel(_))
    ));
}

/// **Test: As an item handler the stage ignores non-text items.**
#[tokio::test]
async fn test_handler_ignores_raw_items() {
    let mut solver = MockSolver::new();
    solver.expect_solve().times(0);
    let (replier, _rx) = RecordingReplier::new();
    let stage = stage(solver, replier);

    let item = QueueItem::Raw {
        tag: "callback".to_string(),
        payload: serde_json::json!({ "data": "again" }),
    };
    stage.handle(&item).await.unwrap();
}

/// **Test: Two sends of an equal reply are two independent sends.**
#[tokio::test]
async fn test_equal_updates_reply_twice() {
    let mut solver = MockSolver::new();
    solver
        .expect_solve()
        .times(2)
        .returning(|_| Ok(Some(Answer::new("4"))));
    let (replier, mut rx) = RecordingReplier::new();
    let stage = stage(solver, replier);

    let update = Update::new(42, "2+2");
    stage.resolve(&update).await.unwrap();
    stage.resolve(&update).await.unwrap();
    drop(stage);

    assert!(rx.recv().await.is_some());
    assert!(rx.recv().await.is_some());
    assert!(rx.recv().await.is_none());
}
