//! Records mirroring the remote API's JSON schemas.
//!
//! - `chat` - chat completion requests and responses
//! - `file` - file metadata
//! - `fine_tuning` - fine-tuning jobs and events
//! - `list` - the shared list envelope and pagination options

pub mod chat;
pub mod file;
pub mod fine_tuning;
pub mod list;

pub use chat::*;
pub use file::*;
pub use fine_tuning::*;
pub use list::{ListOptions, ListResponse};
