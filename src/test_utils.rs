#[cfg(test)]
pub mod fixtures {
    use chrono::{DateTime, Utc};

    use crate::models::{NewQuizResult, NewUser};

    /// Wraps a plain index list the way the submit endpoint receives it.
    pub fn answers(indices: &[i32]) -> Vec<Option<i32>> {
        indices.iter().copied().map(Some).collect()
    }

    pub fn test_new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: "hash".to_string(),
        }
    }

    pub fn test_new_result(
        user_id: i32,
        score: i32,
        total_questions: i32,
        completed_at: DateTime<Utc>,
    ) -> NewQuizResult {
        NewQuizResult {
            user_id,
            quiz_id: 1,
            score,
            total_questions,
            completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use chrono::Utc;

    #[test]
    fn test_answers_fixture() {
        assert_eq!(answers(&[1, 2]), vec![Some(1), Some(2)]);
        assert!(answers(&[]).is_empty());
    }

    #[test]
    fn test_new_user_fixture() {
        let user = test_new_user("alice");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn test_new_result_fixture() {
        let result = test_new_result(1, 3, 5, Utc::now());
        assert_eq!(result.quiz_id, 1);
        assert_eq!(result.score, 3);
    }
}
