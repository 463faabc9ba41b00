use std::sync::Arc;

use crate::{errors::AppResult, models::LeaderboardEntry, storage::Storage};

/// Number of entries served by the leaderboard route.
pub const DEFAULT_LEADERBOARD_SIZE: i64 = 10;

/// Ranking view over the result records; the ordering itself is part of the
/// storage contract so both backends produce the same ranking.
pub struct LeaderboardService {
    storage: Arc<dyn Storage>,
}

impl LeaderboardService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn top(&self, limit: i64) -> AppResult<Vec<LeaderboardEntry>> {
        self.storage.leaderboard(limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewQuizResult;
    use crate::storage::MemoryStorage;
    use chrono::Utc;

    #[tokio::test]
    async fn test_top_with_no_results_is_empty() {
        let leaderboard = LeaderboardService::new(Arc::new(MemoryStorage::new()));
        let entries = leaderboard.top(DEFAULT_LEADERBOARD_SIZE).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_top_is_sorted_non_increasing_by_percentage() {
        let storage = Arc::new(MemoryStorage::new());
        let leaderboard = LeaderboardService::new(storage.clone());

        for score in [2, 5, 0, 4] {
            storage
                .insert_result(NewQuizResult {
                    user_id: 1,
                    quiz_id: 1,
                    score,
                    total_questions: 5,
                    completed_at: Utc::now(),
                })
                .await
                .unwrap();
        }

        let entries = leaderboard.top(DEFAULT_LEADERBOARD_SIZE).await.unwrap();
        let percentages: Vec<i32> = entries.iter().map(|e| e.percentage).collect();
        assert_eq!(percentages, vec![100, 80, 40, 0]);
    }
}
