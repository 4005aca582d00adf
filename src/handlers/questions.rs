// src/handlers/questions.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use rand::Rng;
use rand::seq::SliceRandom;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use validator::Validate;

use crate::{
    error::{AppError, AppJson},
    models::question::{
        Answer, AnswerView, CreateQuestionRequest, Question, QuestionWithAnswers,
    },
};

/// How many questions a quiz round contains at most.
const QUIZ_SIZE: usize = 10;

/// Picks up to `count` distinct ids uniformly at random, without replacement.
fn sample_ids<R: Rng>(ids: &[i64], count: usize, rng: &mut R) -> Vec<i64> {
    ids.choose_multiple(rng, count).copied().collect()
}

/// Serves a random quiz round.
///
/// Samples up to 10 question ids, fetches the selected questions together
/// with all their answers, and groups the answers under their parent
/// question. Answer order carries no guarantee.
pub async fn list_questions(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM questions")
        .fetch_all(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch question ids: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    let picked = sample_ids(&ids, QUIZ_SIZE, &mut rand::thread_rng());

    if picked.is_empty() {
        return Ok(Json(Vec::<QuestionWithAnswers>::new()));
    }

    // Dynamic IN clauses via QueryBuilder
    let mut question_query =
        QueryBuilder::<Sqlite>::new("SELECT id, text FROM questions WHERE id IN (");
    let mut separated = question_query.separated(",");
    for id in &picked {
        separated.push_bind(id);
    }
    separated.push_unseparated(")");

    let questions: Vec<Question> = question_query
        .build_query_as()
        .fetch_all(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch questions: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    let mut answer_query = QueryBuilder::<Sqlite>::new(
        "SELECT id, question_id, text, is_correct FROM answers WHERE question_id IN (",
    );
    let mut separated = answer_query.separated(",");
    for id in &picked {
        separated.push_bind(id);
    }
    separated.push_unseparated(")");

    let answers: Vec<Answer> = answer_query
        .build_query_as()
        .fetch_all(&pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch answers: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    let mut grouped: Vec<QuestionWithAnswers> = questions
        .into_iter()
        .map(|q| QuestionWithAnswers {
            id: q.id,
            text: q.text,
            answers: Vec::new(),
        })
        .collect();

    for answer in answers {
        if let Some(question) = grouped.iter_mut().find(|q| q.id == answer.question_id) {
            question.answers.push(AnswerView {
                id: answer.id,
                text: answer.text,
                is_correct: answer.is_correct,
            });
        }
    }

    Ok(Json(grouped))
}

/// Creates a new question with its 4 candidate answers.
///
/// * Rejects a missing text or an answer list whose length is not 4.
/// * Rejects unless exactly one answer is marked correct.
/// * Inserts the question and all answers inside one transaction so a
///   failure cannot leave a question without its full answer set.
pub async fn create_question(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.validate().is_err() {
        return Err(AppError::BadRequest(
            "Question text and 4 answers are required.".to_string(),
        ));
    }

    let correct_count = payload.answers.iter().filter(|a| a.is_correct).count();
    if correct_count != 1 {
        return Err(AppError::BadRequest(
            "Exactly one answer must be marked as correct.".to_string(),
        ));
    }

    let mut tx = pool.begin().await?;

    let question_id: i64 = sqlx::query_scalar("INSERT INTO questions (text) VALUES (?) RETURNING id")
        .bind(&payload.text)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert question: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;

    for answer in &payload.answers {
        sqlx::query("INSERT INTO answers (question_id, text, is_correct) VALUES (?, ?, ?)")
            .bind(question_id)
            .bind(&answer.text)
            .bind(answer.is_correct)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert answer: {:?}", e);
                AppError::InternalServerError(e.to_string())
            })?;
    }

    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Question and answers added successfully.",
            "questionId": question_id
        })),
    ))
}

#[cfg(test)]
mod tests {
    use super::sample_ids;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn sample_returns_everything_when_fewer_than_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let ids = vec![1, 2, 3];

        let picked = sample_ids(&ids, 10, &mut rng);

        let picked: HashSet<i64> = picked.into_iter().collect();
        assert_eq!(picked, ids.into_iter().collect());
    }

    #[test]
    fn sample_is_distinct_and_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        let ids: Vec<i64> = (1..=100).collect();

        let picked = sample_ids(&ids, 10, &mut rng);

        assert_eq!(picked.len(), 10);
        let distinct: HashSet<i64> = picked.iter().copied().collect();
        assert_eq!(distinct.len(), 10);
        assert!(picked.iter().all(|id| ids.contains(id)));
    }

    #[test]
    fn sample_of_empty_input_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sample_ids(&[], 10, &mut rng).is_empty());
    }
}
