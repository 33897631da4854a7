//! Console session glue: configuration, per-user library files and menus

pub mod config;
pub mod library_file;
pub mod menu;

pub use config::LibraryConfig;
pub use library_file::{load_library, save_library};
pub use menu::Session;
