pub mod quiz;
pub mod result;
pub mod user;

pub use quiz::{Question, Quiz, QuizSummary};
pub use result::{LeaderboardEntry, NewQuizResult, QuizResult};
pub use user::{NewUser, User};
