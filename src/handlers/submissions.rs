// src/handlers/submissions.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use validator::Validate;

use crate::{
    error::{AppError, AppJson},
    models::submission::{LeaderboardEntry, SubmitRequest},
};

/// Helper struct for fetching answer keys from the database.
#[derive(sqlx::FromRow)]
struct AnswerKey {
    id: i64,
    question_id: i64,
    is_correct: bool,
}

/// Submits a named quiz attempt and computes its score.
///
/// Looks up the picked answers by id; ids that do not exist simply return no
/// row and drop out of the score. The score is the raw count of correct rows
/// found, with no one-answer-per-question check. The submission row and its
/// per-answer links are written in one transaction.
pub async fn submit_answers(
    State(pool): State<SqlitePool>,
    AppJson(payload): AppJson<SubmitRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.validate().is_err() {
        return Err(AppError::BadRequest("Invalid submission format".to_string()));
    }

    let picks = payload
        .answers
        .ok_or_else(|| AppError::BadRequest("Invalid submission format".to_string()))?;

    let rows: Vec<AnswerKey> = if picks.is_empty() {
        Vec::new()
    } else {
        // Dynamic IN clause via QueryBuilder
        let mut query_builder = QueryBuilder::<Sqlite>::new(
            "SELECT id, question_id, is_correct FROM answers WHERE id IN (",
        );
        let mut separated = query_builder.separated(",");
        for pick in &picks {
            separated.push_bind(pick.answer_id);
        }
        separated.push_unseparated(")");

        query_builder
            .build_query_as()
            .fetch_all(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to look up answers: {:?}", e);
                AppError::InternalServerError(e.to_string())
            })?
    };

    let score = rows.iter().filter(|r| r.is_correct).count() as i64;

    let mut tx = pool.begin().await?;

    let submission_id: i64 =
        sqlx::query_scalar("INSERT INTO submissions (name, score) VALUES (?, ?) RETURNING id")
            .bind(&payload.name)
            .bind(score)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert submission: {:?}", e);
                AppError::InternalServerError(e.to_string())
            })?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO submission_answers (submission_id, question_id, answer_id) VALUES (?, ?, ?)",
        )
        .bind(submission_id)
        .bind(row.question_id)
        .bind(row.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert submission answer: {:?}", e);
            AppError::InternalServerError(e.to_string())
        })?;
    }

    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "message": "Submission saved",
            "score": score
        })),
    ))
}

/// Retrieves the full leaderboard, best score first.
///
/// Ties are broken by earlier `created_at`; equal timestamps fall back to
/// insertion order so the first submission to reach a score ranks higher.
pub async fn get_leaderboard(
    State(pool): State<SqlitePool>,
) -> Result<impl IntoResponse, AppError> {
    let leaderboard: Vec<LeaderboardEntry> = sqlx::query_as(
        "SELECT name, score, created_at FROM submissions ORDER BY score DESC, created_at ASC, id ASC",
    )
    .fetch_all(&pool)
    .await
    .map_err(|e| {
        tracing::error!("Failed to fetch leaderboard: {:?}", e);
        AppError::InternalServerError(e.to_string())
    })?;

    Ok(Json(leaderboard))
}
