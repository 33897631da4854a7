use super::Song;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Insertion-ordered collection of unique songs
///
/// Backs both albums and playlists. Membership is checked against a hash
/// set, order is kept in a separate vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Song>", into = "Vec<Song>")]
pub struct SongList {
    order: Vec<Song>,
    members: HashSet<Song>,
}

impl SongList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `song` unless an equal song is already present.
    /// Returns whether the song was inserted.
    pub fn insert(&mut self, song: Song) -> bool {
        if self.members.contains(&song) {
            return false;
        }
        self.members.insert(song.clone());
        self.order.push(song);
        true
    }

    /// Remove the song equal to `song`. Returns whether one was removed.
    pub fn remove(&mut self, song: &Song) -> bool {
        if !self.members.remove(song) {
            return false;
        }
        if let Some(pos) = self.order.iter().position(|s| s == song) {
            self.order.remove(pos);
        }
        true
    }

    /// Check if an equal song is present
    pub fn contains(&self, song: &Song) -> bool {
        self.members.contains(song)
    }

    /// Songs in insertion order
    pub fn as_slice(&self) -> &[Song] {
        &self.order
    }

    /// Iterate songs in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.order.iter()
    }

    /// Mutable access to the ordering only; membership is unaffected by reordering
    pub(crate) fn order_mut(&mut self) -> &mut [Song] {
        &mut self.order
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl From<Vec<Song>> for SongList {
    fn from(songs: Vec<Song>) -> Self {
        songs.into_iter().collect()
    }
}

impl From<SongList> for Vec<Song> {
    fn from(list: SongList) -> Self {
        list.order
    }
}

impl FromIterator<Song> for SongList {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        let mut list = SongList::new();
        for song in iter {
            list.insert(song);
        }
        list
    }
}

impl<'a> IntoIterator for &'a SongList {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
