use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::{
    errors::AppResult,
    models::{LeaderboardEntry, NewQuizResult, NewUser, Question, Quiz, QuizResult, QuizSummary, User},
    storage::Storage,
};

/// Relational backend over PostgreSQL. Schema and seed content live in
/// `db/schema.sql`; every query here runs as its own implicit transaction
/// and concurrency control is left to the database.
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connects and probes the database once. Callers treat a failure here
    /// as "relational backend unavailable" and fall back to in-memory.
    pub async fn connect(url: &str) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .min_connections(2)
            .acquire_timeout(Duration::from_secs(5))
            .connect(url)
            .await?;

        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl Storage for PgStorage {
    fn backend_name(&self) -> &'static str {
        "postgresql"
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, is_admin FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert_user(&self, new_user: NewUser) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) \
             RETURNING id, username, email, password, is_admin",
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn list_quiz_summaries(&self) -> AppResult<Vec<QuizSummary>> {
        let summaries = sqlx::query_as::<_, QuizSummary>(
            "SELECT id, title, description FROM quizzes WHERE is_active = TRUE ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(summaries)
    }

    async fn find_quiz(&self, quiz_id: i32) -> AppResult<Option<Quiz>> {
        let summary = sqlx::query_as::<_, QuizSummary>(
            "SELECT id, title, description FROM quizzes WHERE id = $1",
        )
        .bind(quiz_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(summary) = summary else {
            return Ok(None);
        };

        let questions = sqlx::query_as::<_, Question>(
            "SELECT id, question, options, correct_answer FROM questions \
             WHERE quiz_id = $1 ORDER BY id",
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Quiz {
            id: summary.id,
            title: summary.title,
            description: summary.description,
            questions,
        }))
    }

    async fn insert_result(&self, new_result: NewQuizResult) -> AppResult<QuizResult> {
        let result = sqlx::query_as::<_, QuizResult>(
            "INSERT INTO quiz_results (user_id, quiz_id, score, total_questions, completed_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING id, user_id, quiz_id, score, total_questions, completed_at",
        )
        .bind(new_result.user_id)
        .bind(new_result.quiz_id)
        .bind(new_result.score)
        .bind(new_result.total_questions)
        .bind(new_result.completed_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn leaderboard(&self, limit: i64) -> AppResult<Vec<LeaderboardEntry>> {
        // ROUND on numeric is half-up, matching the in-memory percentage.
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT u.username, qr.score, qr.total_questions, \
                    ROUND(qr.score::numeric * 100 / qr.total_questions)::int AS percentage, \
                    qr.completed_at \
             FROM quiz_results qr \
             JOIN users u ON qr.user_id = u.id \
             ORDER BY percentage DESC, qr.completed_at DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}
