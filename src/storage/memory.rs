use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    errors::AppResult,
    models::{LeaderboardEntry, NewQuizResult, NewUser, Quiz, QuizResult, QuizSummary, User},
    storage::{seed, Storage},
};

/// In-process backend. All collections live behind one `RwLock` so that
/// concurrent appends cannot lose writes or corrupt id assignment; readers
/// share the lock. Quiz content is fixed seed data.
pub struct MemoryStorage {
    inner: RwLock<Inner>,
}

struct Inner {
    users: Vec<User>,
    quizzes: Vec<Quiz>,
    results: Vec<QuizResult>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: seed::users(),
                quizzes: seed::quizzes(),
                results: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Round-half-up percentage, matching `ROUND(numeric)` on the relational side.
fn percentage(score: i32, total_questions: i32) -> i32 {
    (score as f64 / total_questions as f64 * 100.0).round() as i32
}

#[async_trait]
impl Storage for MemoryStorage {
    fn backend_name(&self) -> &'static str {
        "in-memory"
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&self, new_user: NewUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;

        // Users are never deleted, so length + 1 is strictly increasing.
        let user = User {
            id: inner.users.len() as i32 + 1,
            username: new_user.username,
            email: new_user.email,
            password_hash: new_user.password_hash,
            is_admin: false,
        };

        inner.users.push(user.clone());
        Ok(user)
    }

    async fn list_quiz_summaries(&self) -> AppResult<Vec<QuizSummary>> {
        let inner = self.inner.read().await;
        Ok(inner.quizzes.iter().map(Quiz::summary).collect())
    }

    async fn find_quiz(&self, quiz_id: i32) -> AppResult<Option<Quiz>> {
        let inner = self.inner.read().await;
        Ok(inner.quizzes.iter().find(|q| q.id == quiz_id).cloned())
    }

    async fn insert_result(&self, new_result: NewQuizResult) -> AppResult<QuizResult> {
        let mut inner = self.inner.write().await;

        let result = QuizResult {
            id: inner.results.len() as i32 + 1,
            user_id: new_result.user_id,
            quiz_id: new_result.quiz_id,
            score: new_result.score,
            total_questions: new_result.total_questions,
            completed_at: new_result.completed_at,
        };

        inner.results.push(result.clone());
        Ok(result)
    }

    async fn leaderboard(&self, limit: i64) -> AppResult<Vec<LeaderboardEntry>> {
        let inner = self.inner.read().await;

        let mut entries: Vec<LeaderboardEntry> = inner
            .results
            .iter()
            .filter_map(|result| {
                let user = inner.users.iter().find(|u| u.id == result.user_id)?;
                Some(LeaderboardEntry {
                    username: user.username.clone(),
                    score: result.score,
                    total_questions: result.total_questions,
                    percentage: percentage(result.score, result.total_questions),
                    completed_at: result.completed_at,
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            b.percentage
                .cmp(&a.percentage)
                .then(b.completed_at.cmp(&a.completed_at))
        });
        entries.truncate(limit.max(0) as usize);

        Ok(entries)
    }
}
