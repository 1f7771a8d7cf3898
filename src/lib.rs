pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod state;
pub mod sync;
pub mod ui;

pub use app::router;
pub use client::{AlarmApi, HttpAlarmApi};
pub use errors::{SyncError, SyncResult};
pub use models::AlarmRecord;
pub use state::AppState;
pub use sync::AlarmFormSync;
