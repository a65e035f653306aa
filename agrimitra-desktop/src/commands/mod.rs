//! Host commands.
//!
//! Shaped like IPC handlers: each takes the shared [`AppState`] plus plain
//! arguments and returns `Result<T, String>` with a serializable `T`.
//!
//! [`AppState`]: crate::app::AppState

pub mod config;
pub mod location;
pub mod notices;
pub mod profile;
pub mod recommendations;
pub mod session;
pub mod view;
pub mod voice;

pub use config::*;
pub use location::*;
pub use notices::*;
pub use profile::*;
pub use recommendations::*;
pub use session::*;
pub use view::*;
pub use voice::*;
