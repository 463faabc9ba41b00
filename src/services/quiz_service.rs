use std::sync::Arc;

use chrono::Utc;

use crate::{
    errors::{AppError, AppResult},
    models::{NewQuizResult, Quiz, QuizResult, QuizSummary},
    services::scoring,
    storage::Storage,
};

/// Quiz catalog and submission grading.
pub struct QuizService {
    storage: Arc<dyn Storage>,
}

impl QuizService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn list_summaries(&self) -> AppResult<Vec<QuizSummary>> {
        self.storage.list_quiz_summaries().await
    }

    /// Full quiz payload, correct-answer indices included.
    pub async fn get_quiz(&self, quiz_id: i32) -> AppResult<Quiz> {
        self.storage
            .find_quiz(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))
    }

    /// Grades the submission and persists the result record.
    pub async fn submit(
        &self,
        quiz_id: i32,
        user_id: i32,
        answers: &[Option<i32>],
    ) -> AppResult<QuizResult> {
        let quiz = self.get_quiz(quiz_id).await?;

        let score = scoring::grade(&quiz.questions, answers);

        self.storage
            .insert_result(NewQuizResult {
                user_id,
                quiz_id: quiz.id,
                score,
                total_questions: quiz.questions.len() as i32,
                completed_at: Utc::now(),
            })
            .await
    }
}
