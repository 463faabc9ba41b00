use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    services::{AccountService, LeaderboardService, QuizService},
    storage::{self, Storage},
};

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub quiz_service: Arc<QuizService>,
    pub leaderboard_service: Arc<LeaderboardService>,
    pub jwt_service: JwtService,
    pub storage: Arc<dyn Storage>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Probes the relational backend once and wires all services against
    /// whichever backend comes up. Infallible: probe failure means the
    /// in-memory backend.
    pub async fn new(config: Config) -> Self {
        let storage = storage::connect(&config).await;
        Self::with_storage(config, storage)
    }

    /// Builds the state against an already-selected backend. Used by tests
    /// to run the whole service over `MemoryStorage`.
    pub fn with_storage(config: Config, storage: Arc<dyn Storage>) -> Self {
        let jwt_service = JwtService::new(&config.jwt_secret);

        Self {
            account_service: Arc::new(AccountService::new(storage.clone())),
            quiz_service: Arc::new(QuizService::new(storage.clone())),
            leaderboard_service: Arc::new(LeaderboardService::new(storage.clone())),
            jwt_service,
            storage,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_with_storage_shares_one_backend() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let state = AppState::with_storage(Config::test_config(), storage);

        let user = state
            .account_service
            .register("alice", "alice@example.com", "hunter22")
            .await
            .unwrap();
        let result = state
            .quiz_service
            .submit(1, user.id, &[Some(1)])
            .await
            .unwrap();

        let entries = state.leaderboard_service.top(10).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].username, "alice");
        assert_eq!(entries[0].score, result.score);
    }
}
