pub mod file_ctx;
pub mod file_flow;
pub mod file_state;

pub use file_ctx::FileCtx;
pub use file_flow::{FileFlow, FileOutcome};
pub use file_state::{FilePhase, FileState};
