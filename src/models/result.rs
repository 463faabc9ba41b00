use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A graded submission. Written exactly once, never updated or deleted.
/// Invariant: `0 <= score <= total_questions`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub id: i32,
    pub user_id: i32,
    pub quiz_id: i32,
    pub score: i32,
    pub total_questions: i32,
    pub completed_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewQuizResult {
    pub user_id: i32,
    pub quiz_id: i32,
    pub score: i32,
    pub total_questions: i32,
    pub completed_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i32,
    pub total_questions: i32,
    pub percentage: i32,
    pub completed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_wire_names_are_camel_case() {
        let result = QuizResult {
            id: 1,
            user_id: 2,
            quiz_id: 1,
            score: 4,
            total_questions: 5,
            completed_at: Utc::now(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["userId"], 2);
        assert_eq!(json["quizId"], 1);
        assert_eq!(json["totalQuestions"], 5);
        assert!(json.get("completedAt").is_some());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_leaderboard_entry_round_trip() {
        let entry = LeaderboardEntry {
            username: "alice".to_string(),
            score: 3,
            total_questions: 5,
            percentage: 60,
            completed_at: Utc::now(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: LeaderboardEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
    }
}
