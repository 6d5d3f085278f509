//! TUI screens

mod generate;
mod history;
mod upload;

pub use generate::GenerateScreen;
pub use history::HistoryScreen;
pub use upload::UploadScreen;
