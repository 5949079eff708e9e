//! Services of the application layer.

pub mod dispatcher;
pub mod interpreter;

pub use dispatcher::ShorteningDispatcher;
pub use interpreter::{QueryInterpreter, USAGE_HINT, USAGE_TITLE};
