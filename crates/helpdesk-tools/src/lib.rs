//! Invokable tools exposed to a hosting agent

pub mod base;
pub mod docs;
pub mod error;
pub mod prompt;
pub mod registry;

pub use base::{parse_args, Tool, ToolDescriptor};
pub use docs::{AnswerFromDocsTool, ListDocsTool, SearchDocsTool};
pub use error::{ErrorData, ToolError};
pub use prompt::support_prompt;
pub use registry::ToolRegistry;
