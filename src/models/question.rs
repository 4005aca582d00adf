// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The text content of the question.
    pub text: String,
}

/// Represents the 'answers' table in the database.
/// Each question owns exactly 4 of these, exactly 1 marked correct.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}

/// One candidate answer as returned to the client, without the parent id.
#[derive(Debug, Serialize)]
pub struct AnswerView {
    pub id: i64,
    pub text: String,
    pub is_correct: bool,
}

/// A question with its answers grouped underneath, as served by GET /questions.
#[derive(Debug, Serialize)]
pub struct QuestionWithAnswers {
    pub id: i64,
    pub text: String,
    pub answers: Vec<AnswerView>,
}

/// DTO for one answer within a question-creation request.
#[derive(Debug, Serialize, Deserialize)]
pub struct NewAnswer {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// DTO for creating a new question with its 4 candidate answers.
///
/// Missing fields deserialize to their empty defaults so that shape errors
/// surface as a 400 from validation rather than a body-rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Question text and 4 answers are required."))]
    pub text: String,
    #[serde(default)]
    #[validate(length(equal = 4, message = "Question text and 4 answers are required."))]
    pub answers: Vec<NewAnswer>,
}
