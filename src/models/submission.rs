// src/models/submission.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// One row of the leaderboard as served by GET /leaderboard.
#[derive(Debug, Serialize, FromRow)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i64,
    pub created_at: Option<chrono::NaiveDateTime>,
}

/// One picked answer within a submission request.
#[derive(Debug, Deserialize)]
pub struct SubmittedAnswer {
    #[serde(rename = "answerId")]
    pub answer_id: i64,
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Invalid submission format"))]
    pub name: String,

    /// The answers picked by the player. Kept optional so that an absent
    /// array is reported as a 400 by the handler.
    #[serde(default)]
    pub answers: Option<Vec<SubmittedAnswer>>,
}
