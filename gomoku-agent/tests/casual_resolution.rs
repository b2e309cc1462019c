//! Casual style: first-block parsing, no repair, first-legal fallback.

mod common;

use common::{FakeBoard, ScriptedProvider};
use gomoku_agent::{Agent, AgentConfig, LlmAgent, Move, Player, PromptStyle, Stage};

fn casual_agent(provider: ScriptedProvider) -> LlmAgent<ScriptedProvider> {
    LlmAgent::with_provider(
        Player::White,
        provider,
        AgentConfig::default().with_style(PromptStyle::Casual),
    )
}

#[tokio::test]
async fn test_first_block_wins() {
    let provider = ScriptedProvider::texts(&[
        r#"noise {"row": 2, "col": 3} more noise {"row": 4, "col": 4} end"#,
    ]);
    let board = FakeBoard::new(8, &[(2, 3), (4, 4)]);
    let agent = casual_agent(provider);

    let resolution = agent.resolve(&board).await.unwrap();

    assert_eq!(resolution.mv, Move::new(2, 3));
    assert_eq!(resolution.stage, Stage::FirstAttempt);
}

#[tokio::test]
async fn test_unparsable_falls_back_to_first_legal_without_repair() {
    let provider = ScriptedProvider::texts(&["Let me think about this position..."]);
    let board = FakeBoard::new(8, &[(2, 2), (5, 5)]);
    let agent = casual_agent(provider);

    let resolution = agent.resolve(&board).await.unwrap();

    // (5, 5) is closer to the centre; casual ignores distance
    assert_eq!(resolution.mv, Move::new(2, 2));
    assert_eq!(resolution.stage, Stage::Default);
    assert_eq!(agent.provider().calls(), 1);
}

#[tokio::test]
async fn test_malformed_first_block_is_not_rescued_by_later_one() {
    let provider = ScriptedProvider::texts(&[r#"{"reasoning": "centre"} {"row": 5, "col": 5}"#]);
    let board = FakeBoard::new(8, &[(2, 2), (5, 5)]);
    let agent = casual_agent(provider);

    let mv = agent.get_move(&board).await.unwrap();

    assert_eq!(mv, Move::new(2, 2));
}

#[tokio::test]
async fn test_validity_alone_decides() {
    // Not in the enumerated list, but the game state accepts it
    let provider = ScriptedProvider::texts(&[r#"{"row": 6, "col": 6}"#]);
    let board = FakeBoard::new(8, &[(2, 2)]).also_valid(&[(6, 6)]);
    let agent = casual_agent(provider);

    let resolution = agent.resolve(&board).await.unwrap();

    assert_eq!(resolution.mv, Move::new(6, 6));
    assert_eq!(resolution.stage, Stage::FirstAttempt);
}

#[tokio::test]
async fn test_invalid_move_falls_back() {
    let provider = ScriptedProvider::texts(&[r#"{"row": 8, "col": 0}"#]);
    let board = FakeBoard::new(8, &[(1, 7), (3, 3)]);
    let agent = casual_agent(provider);

    let resolution = agent.resolve(&board).await.unwrap();

    assert_eq!(resolution.mv, Move::new(1, 7));
    assert_eq!(resolution.stage, Stage::Default);
    assert_eq!(agent.provider().calls(), 1);
}

#[tokio::test]
async fn test_prompt_uses_readable_grid() {
    let provider = ScriptedProvider::texts(&[r#"{"row": 0, "col": 0}"#]);
    let board = FakeBoard::new(3, &[(0, 0)]);
    let agent = casual_agent(provider);

    agent.get_move(&board).await.unwrap();

    let request = agent.provider().request(0);
    assert!(request.messages[0].content.contains("3x3"));
    assert!(request.messages[1].content.contains(". . .\n. . .\n. . ."));
    assert!(request.messages[1].content.contains("Legend: O = your stones"));
    assert!(!request.messages[1].content.contains("[[0,0]]"));
}
