use super::{Song, SongList};
use serde::{Deserialize, Serialize};

/// Represents an album: metadata plus its ordered song list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Album title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Genre shared by the album's songs
    pub genre: String,

    /// Release year (0 when unknown)
    pub year: i32,

    songs: SongList,
}

impl Album {
    /// Create an album with no songs yet
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            genre: genre.into(),
            year,
            songs: SongList::new(),
        }
    }

    /// Builder-style variant of [`Album::add_song`] for a whole track list
    pub fn with_songs(mut self, songs: impl IntoIterator<Item = Song>) -> Self {
        for song in songs {
            self.add_song(song);
        }
        self
    }

    /// Add a song to this album. Re-adding an equal song is a no-op.
    pub fn add_song(&mut self, song: Song) {
        self.songs.insert(song);
    }

    /// Songs in track order
    pub fn songs(&self) -> &[Song] {
        self.songs.as_slice()
    }

    /// Number of songs on this album
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check if album has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Multi-line description: metadata followed by the song titles
    pub fn details(&self) -> String {
        let mut out = format!(
            "Album: {}\nArtist: {}\nGenre: {}\nYear: {}\nSongs:",
            self.title, self.artist, self.genre, self.year
        );
        for song in &self.songs {
            out.push_str("\n - ");
            out.push_str(&song.title);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_song_is_idempotent() {
        let mut album = Album::new("Old Ideas", "Leonard Cohen", "Singer/Songwriter", 2012);
        let song = Song::new("Going Home", "Leonard Cohen", "Old Ideas", "Singer/Songwriter");

        album.add_song(song.clone());
        album.add_song(song);

        assert_eq!(album.len(), 1);
    }

    #[test]
    fn test_details_lists_songs_in_order() {
        let album = Album::new("21", "Adele", "Pop", 2011).with_songs(vec![
            Song::new("Rolling in the Deep", "Adele", "21", "Pop"),
            Song::new("Rumour Has It", "Adele", "21", "Pop"),
        ]);

        let details = album.details();
        assert!(details.starts_with("Album: 21\nArtist: Adele\nGenre: Pop\nYear: 2011"));
        assert!(details.ends_with(" - Rolling in the Deep\n - Rumour Has It"));
    }
}
