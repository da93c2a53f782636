//! Preview server and file watching for folio sites.
//!
//! Serves the built output directory over HTTP and watches source
//! directories so the site can be rebuilt whenever something changes.

pub mod server;
pub mod watcher;

pub use server::{router, PreviewConfig, PreviewServer, ServerError};
pub use watcher::{rebuild_on_change, FileWatcher, WatchEvent};
