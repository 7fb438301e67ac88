pub mod history_loader;
pub mod transport;

pub use history_loader::HistoryLoader;
pub use transport::{HistorySource, Transport};
