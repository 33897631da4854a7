//! Music Library - personal music collection manager
//!
//! Users register and log in, build a collection of songs and albums from
//! a shared store catalog, rate and play songs, and generate playlists by
//! genre or rating.

pub mod account;
pub mod model;
pub mod session;
pub mod store;

pub use model::LibraryModel;
pub use session::{LibraryConfig, Session};
