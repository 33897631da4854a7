//! Music store catalog loading
//!
//! Reads the catalog index (one `albumTitle,artist` per line) and the
//! per-album files it points to, named `<albumTitle>_<artist>.txt` inside
//! the albums directory. Albums are registered under the title and artist
//! from their index line.

mod album_file;
mod catalog;

pub use album_file::{album_file_name, parse_album, read_album_file, AlbumFileError};
pub use catalog::Catalog;

use std::fs;
use std::path::Path;

/// One usable line of the catalog index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub title: String,
    pub artist: String,
}

/// Parse index file contents, skipping lines that are not exactly two fields
pub fn parse_index(content: &str) -> Vec<IndexEntry> {
    content
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 2 {
                log::debug!("Skipping malformed index line: {:?}", line);
                return None;
            }
            Some(IndexEntry {
                title: fields[0].trim().to_string(),
                artist: fields[1].trim().to_string(),
            })
        })
        .collect()
}

/// Load the catalog described by the index file at `index_path`, reading
/// album files from `albums_dir`
///
/// Best effort: an unreadable index yields an empty catalog, and any album
/// whose file is missing or malformed is left out entirely.
pub fn load_catalog(index_path: &Path, albums_dir: &Path) -> Catalog {
    let mut catalog = Catalog::new();

    log::info!("Loading album index from {:?}", index_path);
    let content = match fs::read_to_string(index_path) {
        Ok(content) => content,
        Err(e) => {
            log::error!("Error loading albums from {:?}: {}", index_path, e);
            return catalog;
        }
    };

    for entry in parse_index(&content) {
        let album_path = albums_dir.join(album_file_name(&entry.title, &entry.artist));
        match read_album_file(&album_path) {
            Ok(album) => {
                log::debug!("Loaded album '{}' ({} songs)", album.title, album.len());
                catalog.add_album(&entry.title, &entry.artist, album);
            }
            Err(e) => log::warn!("Skipping album '{}': {}", entry.title, e),
        }
    }

    log::info!("Loaded catalog: {} albums", catalog.album_count());
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_skips_malformed_lines() {
        let entries = parse_index("Old Ideas,Leonard Cohen\nno comma here\na,b,c\n\n 21 , Adele \n");

        assert_eq!(
            entries,
            vec![
                IndexEntry {
                    title: "Old Ideas".to_string(),
                    artist: "Leonard Cohen".to_string(),
                },
                IndexEntry {
                    title: "21".to_string(),
                    artist: "Adele".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_index_yields_empty_catalog() {
        let catalog = load_catalog(
            Path::new("/nonexistent/albums/albums.txt"),
            Path::new("/nonexistent/albums"),
        );
        assert!(catalog.is_empty());
    }
}
