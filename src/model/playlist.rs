use super::{Song, SongList};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Represents a named, ordered playlist of unique songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Playlist entries (ordered, no duplicates)
    songs: SongList,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            songs: SongList::new(),
        }
    }

    /// Add a song to this playlist unless it is already present
    pub fn add_song(&mut self, song: Song) {
        self.songs.insert(song);
    }

    /// Remove the matching song, if any
    pub fn remove_song(&mut self, song: &Song) {
        self.songs.remove(song);
    }

    /// Whether an equal song is in this playlist
    pub fn contains(&self, song: &Song) -> bool {
        self.songs.contains(song)
    }

    /// Copy of the playlist entries, in order
    pub fn songs(&self) -> Vec<Song> {
        self.songs.as_slice().to_vec()
    }

    /// Iterate over the entries without copying
    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.songs.iter()
    }

    /// Reorder the entries randomly in place
    pub fn shuffle(&mut self) {
        self.songs.order_mut().shuffle(&mut rand::thread_rng());
    }

    /// Number of songs in this playlist
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Multi-line description: name followed by one line per song
    pub fn details(&self) -> String {
        let mut out = format!("Playlist: {}", self.name);
        for song in &self.songs {
            out.push_str(&format!("\n - {}", song));
        }
        out
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn song(title: &str) -> Song {
        Song::new(title, "Artist", "Album", "Pop")
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut playlist = Playlist::new("Chill Vibes");
        playlist.add_song(song("A"));
        playlist.add_song(song("A"));

        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_remove_song() {
        let mut playlist = Playlist::new("Road Trip");
        playlist.add_song(song("A"));
        playlist.add_song(song("B"));

        playlist.remove_song(&song("A"));
        playlist.remove_song(&song("Missing"));

        assert_eq!(playlist.songs(), vec![song("B")]);
    }

    #[test]
    fn test_songs_returns_copy() {
        let mut playlist = Playlist::new("Workout");
        playlist.add_song(song("A"));

        let mut copy = playlist.songs();
        copy.clear();

        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_shuffle_preserves_songs() {
        let mut playlist = Playlist::new("Everything");
        for i in 0..20 {
            playlist.add_song(song(&format!("Song {i}")));
        }
        let before: HashSet<Song> = playlist.iter().cloned().collect();

        playlist.shuffle();

        let after: HashSet<Song> = playlist.iter().cloned().collect();
        assert_eq!(playlist.len(), 20);
        assert_eq!(before, after);
        // Membership must still work after reordering
        playlist.add_song(song("Song 3"));
        assert_eq!(playlist.len(), 20);
    }

    #[test]
    fn test_details() {
        let mut playlist = Playlist::new("Mix");
        playlist.add_song(song("A"));
        assert_eq!(
            playlist.details(),
            "Playlist: Mix\n - A - Artist (Album, Genre: Pop, Rating: 3)"
        );
    }
}
