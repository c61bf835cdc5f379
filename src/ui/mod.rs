//! Terminal user interface.
//!
//! One submodule per screen, each a small state machine that maps keystrokes
//! to an action enum and knows how to render itself into an area. The
//! [`App`] controller in `app` owns the screens, the timer engine, and the
//! cooperative event loop that drives everything on a single thread.

pub mod app;
pub mod frame;
pub mod log_viewer;
pub mod main_menu;
pub mod settings_screen;
pub mod task_prompt;
pub mod timer_screen;

pub use app::{App, Screen};
