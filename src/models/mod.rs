pub mod level;
pub mod plan;
pub mod question;
pub mod results;
pub mod user;

pub use level::HskLevel;
pub use plan::{BillingPeriod, SubscriptionPlan};
pub use question::{AnswerValue, Answers, Difficulty, MockTest, Question, QuestionType, Section};
pub use results::{PlacementQuizResult, Score, TestResult};
pub use user::{PlanTier, Subscription, SubscriptionStatus, User};
