// Shared helpers

pub mod dialog;
pub mod storage;

pub use dialog::confirm;
pub use storage::{get_local_storage, BrowserStorage, KeyValueStore, MemoryStorage};

pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_ROLE: &str = "role";
pub const STORAGE_KEY_USERNAME: &str = "username";
