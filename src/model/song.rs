use serde::{Deserialize, Serialize};
use std::fmt;

/// Rating given to a song when none is supplied
pub const DEFAULT_RATING: u8 = 3;

/// Lowest accepted rating
pub const MIN_RATING: u8 = 1;

/// Highest accepted rating; rating a song this high marks it as favorite
pub const MAX_RATING: u8 = 5;

/// Represents a single song with its metadata
///
/// Two songs with identical fields are interchangeable, so equality and
/// hashing are structural over every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    /// Song title (the key a library indexes songs by)
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album the song belongs to
    pub album: String,

    /// Genre
    pub genre: String,

    /// Intrinsic rating (1-5), defaults to 3
    pub rating: u8,
}

impl Song {
    /// Create a song with the default rating
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self::with_rating(title, artist, album, genre, DEFAULT_RATING)
    }

    /// Create a song with an explicit rating
    pub fn with_rating(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        genre: impl Into<String>,
        rating: u8,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            genre: genre.into(),
            rating,
        }
    }

    /// Whether `rating` falls in the accepted 1-5 range
    pub fn is_valid_rating(rating: i32) -> bool {
        (i32::from(MIN_RATING)..=i32::from(MAX_RATING)).contains(&rating)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}, Genre: {}, Rating: {})",
            self.title, self.artist, self.album, self.genre, self.rating
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rating() {
        let song = Song::new("Title", "Artist", "Album", "Pop");
        assert_eq!(song.rating, DEFAULT_RATING);
    }

    #[test]
    fn test_structural_equality() {
        let a = Song::new("Title", "Artist", "Album", "Pop");
        let b = Song::new("Title", "Artist", "Album", "Pop");
        let c = Song::with_rating("Title", "Artist", "Album", "Pop", 5);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(!Song::is_valid_rating(0));
        assert!(Song::is_valid_rating(1));
        assert!(Song::is_valid_rating(5));
        assert!(!Song::is_valid_rating(6));
        assert!(!Song::is_valid_rating(-3));
    }

    #[test]
    fn test_display() {
        let song = Song::new("Hey Jude", "The Beatles", "Hey Jude", "Rock");
        assert_eq!(
            song.to_string(),
            "Hey Jude - The Beatles (Hey Jude, Genre: Rock, Rating: 3)"
        );
    }
}
