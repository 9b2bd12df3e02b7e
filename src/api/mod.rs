pub mod homeq;
pub mod telegram;
pub mod types;

pub use homeq::{HomeQClient, SearchFilter};
pub use telegram::TelegramClient;
pub use types::*;
