// Adapters layer: concrete implementations of the domain ports (http catalog, storage slots, notifiers).

pub mod http;
pub mod notify;
pub mod storage;

pub use http::HttpCatalog;
pub use notify::{ChannelNotifier, ConsoleNotifier};
pub use storage::{LocalStorage, MemoryStorage};
