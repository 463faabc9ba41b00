use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

/// Catalog listing entry: quiz metadata without question content.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
pub struct QuizSummary {
    pub id: i32,
    pub title: String,
    pub description: String,
}

/// A single multiple-choice question. `correct_index` points into `options`
/// and is serialized as `correct`, so the full quiz payload exposes the
/// answer key to any authenticated client. Kept for API compatibility.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    #[serde(rename = "question")]
    #[sqlx(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
    #[serde(rename = "correct")]
    #[sqlx(rename = "correct_answer")]
    pub correct_index: i32,
}

impl Quiz {
    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}
