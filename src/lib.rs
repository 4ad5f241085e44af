pub mod config;
pub mod export;
pub mod filter;
pub mod icons;
pub mod models;
pub mod stats;
pub mod storage;
pub mod store;
pub mod utils;

pub use config::Config;
pub use export::{export_file_name, ExportBundle};
pub use filter::{filter_by_range, TimeRange};
pub use icons::Icon;
pub use models::{initial_tasks, HistoryEntry, Progress, Task, TaskCategory};
pub use storage::{MemoryStorage, SqliteStorage, StoragePort};
pub use store::ChecklistStore;
pub use utils::Profile;
