//! Per-user library file
//!
//! Songs are stored as `title,artist,album,genre`, followed by albums as
//! `Album:,title,artist`. Album tracks are written in track order so a
//! reload keeps it. Ratings, favorites and play counts are not persisted.

use crate::model::{Album, LibraryModel, Song};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const ALBUM_MARKER: &str = "Album:";

/// Render a library in its on-disk form
pub fn render_library(library: &LibraryModel) -> String {
    let mut out = String::new();
    let mut written = HashSet::new();

    let album_tracks = library
        .user_albums()
        .values()
        .flat_map(|album| album.songs())
        .filter_map(|track| library.search_song_by_title(&track.title));
    for song in album_tracks.chain(library.songs()) {
        if written.insert(song.title.as_str()) {
            out.push_str(&format!(
                "{},{},{},{}\n",
                song.title, song.artist, song.album, song.genre
            ));
        }
    }

    for album in library.user_albums().values() {
        out.push_str(&format!("{},{},{}\n", ALBUM_MARKER, album.title, album.artist));
    }

    out
}

/// Write `library` to `path`, replacing any previous contents
pub fn save_library(path: &Path, library: &LibraryModel) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    fs::write(path, render_library(library))
        .with_context(|| format!("Failed to write library file {:?}", path))?;

    log::info!(
        "Saved library to {:?}: {} songs, {} albums",
        path,
        library.song_count(),
        library.album_count()
    );
    Ok(())
}

/// Rebuild a library from its on-disk form
///
/// Albums are reassembled, in file order, from the songs already read whose
/// album title and artist match; malformed lines are skipped.
pub fn parse_library(content: &str) -> LibraryModel {
    let mut library = LibraryModel::new();
    let mut song_lines: Vec<Song> = Vec::new();

    for line in content.lines() {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        match fields.as_slice() {
            [marker, title, artist] if is_album_marker(marker) => {
                let album = rebuild_album(&library, &song_lines, title, artist);
                if let Err(e) = library.add_album(album) {
                    log::debug!("Skipping album line {:?}: {}", line, e);
                }
            }
            [title, artist, album, genre] => {
                let song = Song::new(*title, *artist, *album, *genre);
                match library.add_song(song.clone()) {
                    Ok(()) => song_lines.push(song),
                    Err(e) => log::debug!("Skipping song line {:?}: {}", line, e),
                }
            }
            _ => log::debug!("Skipping malformed library line: {:?}", line),
        }
    }

    library
}

/// Load the library at `path`; a missing file gives an empty library
pub fn load_library(path: &Path) -> Result<LibraryModel> {
    if !path.exists() {
        log::info!("No previous library found at {:?}", path);
        return Ok(LibraryModel::new());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read library file {:?}", path))?;

    let library = parse_library(&content);
    log::info!(
        "Loaded library from {:?}: {} songs, {} albums",
        path,
        library.song_count(),
        library.album_count()
    );
    Ok(library)
}

fn is_album_marker(field: &str) -> bool {
    field == ALBUM_MARKER || field == "Album"
}

/// Collect the album's tracks from `song_lines`, skipping lines a later
/// song with the same title replaced
fn rebuild_album(library: &LibraryModel, song_lines: &[Song], title: &str, artist: &str) -> Album {
    let songs: Vec<Song> = song_lines
        .iter()
        .filter(|song| song.album == title && song.artist == artist)
        .filter(|song| library.search_song_by_title(&song.title) == Some(*song))
        .cloned()
        .collect();

    let genre = songs.first().map(|s| s.genre.clone()).unwrap_or_default();
    Album::new(title, artist, genre, 0).with_songs(songs)
}
