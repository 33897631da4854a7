use crate::model::{Album, Song};
use std::collections::HashMap;

/// Shared, read-only pool of albums available to every user
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Albums indexed by title
    albums_by_title: HashMap<String, Album>,

    /// Songs grouped by artist, across all of the artist's albums
    songs_by_artist: HashMap<String, Vec<Song>>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `album` under `title` and append its songs to `artist`'s list
    ///
    /// The keys come from the catalog index, not the album file header.
    /// Songs are not de-duplicated across albums.
    pub fn add_album(&mut self, title: &str, artist: &str, album: Album) {
        self.songs_by_artist
            .entry(artist.to_string())
            .or_default()
            .extend(album.songs().iter().cloned());
        self.albums_by_title.insert(title.to_string(), album);
    }

    /// Get an album by title
    pub fn get_album(&self, title: &str) -> Option<&Album> {
        self.albums_by_title.get(title)
    }

    /// All songs by `artist`; empty when the artist is unknown
    pub fn get_songs_by_artist(&self, artist: &str) -> &[Song] {
        self.songs_by_artist
            .get(artist)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get all albums
    pub fn all_albums(&self) -> impl Iterator<Item = &Album> {
        self.albums_by_title.values()
    }

    /// Total number of albums
    pub fn album_count(&self) -> usize {
        self.albums_by_title.len()
    }

    /// Check if the catalog has no albums
    pub fn is_empty(&self) -> bool {
        self.albums_by_title.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(title: &str, artist: &str, songs: &[&str]) -> Album {
        Album::new(title, artist, "Rock", 2000).with_songs(
            songs
                .iter()
                .map(|s| Song::new(*s, artist, title, "Rock")),
        )
    }

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.all_albums().count(), 0);
    }

    #[test]
    fn test_get_album() {
        let mut catalog = Catalog::new();
        catalog.add_album("Old Ideas", "Leonard Cohen", album("Old Ideas", "Leonard Cohen", &["Amen"]));

        assert_eq!(catalog.get_album("Old Ideas").unwrap().artist, "Leonard Cohen");
        assert!(catalog.get_album("Nonexistent Album").is_none());
    }

    #[test]
    fn test_songs_by_artist_span_albums() {
        let mut catalog = Catalog::new();
        catalog.add_album("First", "Band", album("First", "Band", &["Intro", "Hit"]));
        catalog.add_album("Second", "Band", album("Second", "Band", &["Intro"]));

        assert_eq!(catalog.get_songs_by_artist("Band").len(), 3);
        assert!(catalog.get_songs_by_artist("Unknown Artist").is_empty());
    }

    #[test]
    fn test_keys_come_from_caller() {
        let mut catalog = Catalog::new();
        catalog.add_album(
            "Old Ideas",
            "Leonard Cohen",
            album("Old Ideas (Deluxe)", "L. Cohen", &["Amen"]),
        );

        assert!(catalog.get_album("Old Ideas").is_some());
        assert!(catalog.get_album("Old Ideas (Deluxe)").is_none());
        assert_eq!(catalog.get_songs_by_artist("Leonard Cohen").len(), 1);
        assert!(catalog.get_songs_by_artist("L. Cohen").is_empty());
    }
}
