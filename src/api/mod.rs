//! Endpoint operations, one `impl ChatGptClient` block per API area.

pub mod chat;
pub mod files;
pub mod fine_tuning;

pub use chat::SIMPLE_SEND_MODEL;
pub use files::DEFAULT_UPLOAD_FILENAME;
