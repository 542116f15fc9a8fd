//! Request and response contracts
//!
//! Request bodies are checked for shape and field types by serde during
//! extraction; there is no further validation.

pub mod choice;
pub mod question;

pub use choice::{ChoiceResponse, NewChoice};
pub use question::{NewQuestion, QuestionResponse};
