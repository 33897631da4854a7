//! In-memory music library model
//!
//! Songs, albums and playlists, plus the per-user [`LibraryModel`] that
//! tracks ratings, favorites and play counts on top of them.

mod album;
mod library;
mod playlist;
mod song;
mod song_list;

pub use album::Album;
pub use library::{
    LibraryError, LibraryModel, GENRE_PLAYLIST_MIN_SONGS, TOP_PLAYED_LIMIT, TOP_RATED_PLAYLIST,
    TOP_RATED_THRESHOLD,
};
pub use playlist::Playlist;
pub use song::{Song, DEFAULT_RATING, MAX_RATING, MIN_RATING};
pub use song_list::SongList;
