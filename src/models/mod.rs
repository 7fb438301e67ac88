pub mod document;
pub mod history;
pub mod loaders;
pub mod result;

pub use document::{DocumentId, ErrorBody, FileHandle, UploadResponse};
pub use history::{HistoryEntry, ProcessingStatus};
pub use loaders::load_input_files;
pub use result::{ProcessingResult, SyncStatus};
