//! Conversational surface for the advisor.
//!
//! Prepares raw user input, classifies it against the knowledge base, and
//! composes the assistant's reply. Also hosts the canned operator console.

pub mod assistant;
pub mod console;
pub mod error;
pub mod types;

pub use assistant::ChatAssistant;
pub use console::{Console, ConsoleCommand, ConsoleOutcome};
pub use error::ChatError;
pub use types::{ChatMessage, Exchange, Reply, Role};
