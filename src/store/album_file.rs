//! Per-album file parser
//!
//! First line is the header `title,artist,genre,year`; every following
//! line is one song title. Songs inherit artist, album and genre from the
//! header.

use crate::model::{Album, Song};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Why an album file could not be turned into an [`Album`]
#[derive(Debug, thiserror::Error)]
pub enum AlbumFileError {
    #[error("failed to read album file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("album file {0:?} is empty")]
    MissingHeader(PathBuf),

    #[error("album header in {path:?} has {found} fields, expected at least 4")]
    ShortHeader { path: PathBuf, found: usize },

    #[error("album header in {path:?} has a non-integer year: {year:?}")]
    BadYear { path: PathBuf, year: String },
}

/// File name of the album file for `title` by `artist`
pub fn album_file_name(title: &str, artist: &str) -> String {
    format!("{}_{}.txt", title, artist)
}

/// Read and parse one album file
pub fn read_album_file(path: &Path) -> Result<Album, AlbumFileError> {
    let content = fs::read_to_string(path).map_err(|source| AlbumFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_album(&content, path)
}

/// Parse album file contents; `path` is only used for error reporting
pub fn parse_album(content: &str, path: &Path) -> Result<Album, AlbumFileError> {
    let mut lines = content.lines();

    let header = lines
        .next()
        .ok_or_else(|| AlbumFileError::MissingHeader(path.to_path_buf()))?;

    let fields: Vec<&str> = header.split(',').map(str::trim).collect();
    if fields.len() < 4 {
        return Err(AlbumFileError::ShortHeader {
            path: path.to_path_buf(),
            found: fields.len(),
        });
    }

    let (title, artist, genre) = (fields[0], fields[1], fields[2]);
    let year = fields[3]
        .parse::<i32>()
        .map_err(|_| AlbumFileError::BadYear {
            path: path.to_path_buf(),
            year: fields[3].to_string(),
        })?;

    let songs = lines
        .map(str::trim)
        // Blank lines would become untitled songs
        .filter(|line| !line.is_empty())
        .map(|song_title| Song::new(song_title, artist, title, genre));

    Ok(Album::new(title, artist, genre, year).with_songs(songs))
}
