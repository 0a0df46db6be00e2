pub mod controller;
pub mod store;
pub mod types;

pub use controller::{ChatController, DEFAULT_RESPONSE_DELAY, SendOutcome};
pub use store::ConversationStore;
pub use types::{Message, MessageRole, ResponseMeta, RiskLevel};
