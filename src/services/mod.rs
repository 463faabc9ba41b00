pub mod account_service;
pub mod leaderboard_service;
pub mod quiz_service;
pub mod scoring;

pub use account_service::AccountService;
pub use leaderboard_service::{LeaderboardService, DEFAULT_LEADERBOARD_SIZE};
pub use quiz_service::QuizService;
