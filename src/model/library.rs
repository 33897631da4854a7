use super::song::MAX_RATING;
use super::{Album, Playlist, Song};
use rand::seq::SliceRandom;
use std::collections::hash_map::Values;
use std::collections::{HashMap, HashSet};

/// Maximum length of the most-played list
pub const TOP_PLAYED_LIMIT: usize = 10;

/// A genre needs at least this many songs to get its own playlist
pub const GENRE_PLAYLIST_MIN_SONGS: usize = 10;

/// Songs rated at least this high land in the top-rated playlist
pub const TOP_RATED_THRESHOLD: u8 = 4;

/// Name of the generated top-rated playlist
pub const TOP_RATED_PLAYLIST: &str = "Top Rated Songs";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LibraryError {
    #[error("song has no title")]
    MissingTitle,
}

/// One user's music library: songs, albums, playlists and listening state
///
/// Songs are keyed by title, so adding a song whose title is already
/// present replaces the earlier entry. Ratings, favorites and play counts
/// are keyed by title as well and never outlive the song they refer to.
#[derive(Debug, Clone, Default)]
pub struct LibraryModel {
    songs: HashMap<String, Song>,
    albums: HashMap<String, Album>,
    playlists: HashMap<String, Playlist>,
    favorite_songs: HashSet<String>,
    song_ratings: HashMap<String, u8>,
    play_counts: HashMap<String, u32>,
    // Recomputed by play count on every play; doubles as "recent" and "most played"
    top_played: Vec<String>,
}

impl LibraryModel {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a song, replacing any song with the same title
    pub fn add_song(&mut self, song: Song) -> Result<(), LibraryError> {
        if song.title.trim().is_empty() {
            return Err(LibraryError::MissingTitle);
        }
        self.songs.insert(song.title.clone(), song);
        Ok(())
    }

    /// Register an album and add each of its songs
    ///
    /// All-or-nothing: an album holding an untitled song leaves the library
    /// untouched.
    pub fn add_album(&mut self, album: Album) -> Result<(), LibraryError> {
        if album.songs().iter().any(|s| s.title.trim().is_empty()) {
            return Err(LibraryError::MissingTitle);
        }
        for song in album.songs() {
            self.songs.insert(song.title.clone(), song.clone());
        }
        self.albums.insert(album.title.clone(), album);
        Ok(())
    }

    /// Create an empty playlist unless one with this name exists
    pub fn create_playlist(&mut self, name: &str) {
        self.playlists
            .entry(name.to_string())
            .or_insert_with(|| Playlist::new(name));
    }

    /// Add a song to an existing playlist; unknown playlists are ignored
    pub fn add_song_to_playlist(&mut self, name: &str, song: Song) {
        if let Some(playlist) = self.playlists.get_mut(name) {
            playlist.add_song(song);
        }
    }

    /// Remove a song from an existing playlist; unknown playlists are ignored
    pub fn remove_song_from_playlist(&mut self, name: &str, song: &Song) {
        if let Some(playlist) = self.playlists.get_mut(name) {
            playlist.remove_song(song);
        }
    }

    /// Rate a known song 1-5. A rating of 5 also marks it as favorite.
    ///
    /// Unknown titles and out-of-range ratings are ignored. Lower ratings
    /// never clear an earlier favorite.
    pub fn rate_song(&mut self, title: &str, rating: i32) {
        if !self.songs.contains_key(title) || !Song::is_valid_rating(rating) {
            return;
        }
        let rating = rating as u8;
        self.song_ratings.insert(title.to_string(), rating);
        if rating == MAX_RATING {
            self.favorite_songs.insert(title.to_string());
        }
    }

    /// Mark a known song as favorite without rating it
    pub fn mark_favorite(&mut self, title: &str) {
        if self.songs.contains_key(title) {
            self.favorite_songs.insert(title.to_string());
        }
    }

    /// Record one play of a known song and refresh the most-played list
    pub fn play_song(&mut self, title: &str) {
        if !self.songs.contains_key(title) {
            return;
        }
        *self.play_counts.entry(title.to_string()).or_insert(0) += 1;
        self.refresh_top_played();
    }

    fn refresh_top_played(&mut self) {
        let mut counts: Vec<(&String, &u32)> = self.play_counts.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1));
        self.top_played = counts
            .into_iter()
            .take(TOP_PLAYED_LIMIT)
            .map(|(title, _)| title.clone())
            .collect();
    }

    /// Remove a song together with its rating, favorite flag and play count
    pub fn remove_song(&mut self, title: &str) {
        if self.songs.remove(title).is_none() {
            return;
        }
        self.song_ratings.remove(title);
        self.favorite_songs.remove(title);
        self.play_counts.remove(title);
        self.top_played.retain(|t| t != title);
        log::info!("Song '{}' removed from library", title);
    }

    /// Remove an album and every one of its songs
    pub fn remove_album(&mut self, title: &str) {
        let Some(album) = self.albums.remove(title) else {
            return;
        };
        for song in album.songs() {
            self.remove_song(&song.title);
        }
        log::info!("Album '{}' removed from library", title);
    }

    /// Create or replace "<Genre> Playlist" for every genre with at least
    /// ten songs
    pub fn generate_genre_based_playlists(&mut self) {
        let mut by_genre: HashMap<&str, Vec<&Song>> = HashMap::new();
        for song in self.songs.values() {
            by_genre.entry(song.genre.as_str()).or_default().push(song);
        }

        let generated: Vec<Playlist> = by_genre
            .into_iter()
            .filter(|(_, songs)| songs.len() >= GENRE_PLAYLIST_MIN_SONGS)
            .map(|(genre, songs)| {
                let mut playlist = Playlist::new(format!("{} Playlist", genre));
                for song in songs {
                    playlist.add_song(song.clone());
                }
                playlist
            })
            .collect();

        for playlist in generated {
            log::info!(
                "Created playlist '{}' ({} songs)",
                playlist.name,
                playlist.len()
            );
            self.playlists.insert(playlist.name.clone(), playlist);
        }
    }

    /// Create or replace the "Top Rated Songs" playlist from songs rated 4 or 5
    pub fn generate_top_rated_playlist(&mut self) {
        let mut playlist = Playlist::new(TOP_RATED_PLAYLIST);
        for (title, rating) in &self.song_ratings {
            if *rating < TOP_RATED_THRESHOLD {
                continue;
            }
            if let Some(song) = self.songs.get(title) {
                playlist.add_song(song.clone());
            }
        }
        log::info!(
            "Top rated playlist created with {} songs",
            playlist.len()
        );
        self.playlists.insert(playlist.name.clone(), playlist);
    }

    /// All songs, sorted by title
    pub fn sort_by_title(&self) -> Vec<Song> {
        let mut songs = self.all_songs();
        songs.sort_by(|a, b| a.title.cmp(&b.title));
        songs
    }

    /// All songs, sorted by artist
    pub fn sort_by_artist(&self) -> Vec<Song> {
        let mut songs = self.all_songs();
        songs.sort_by(|a, b| a.artist.cmp(&b.artist));
        songs
    }

    /// All songs, highest rating first
    pub fn sort_by_rating(&self) -> Vec<Song> {
        let mut songs = self.all_songs();
        songs.sort_by(|a, b| b.rating.cmp(&a.rating));
        songs
    }

    /// All songs in random order
    pub fn shuffled_songs(&self) -> Vec<Song> {
        let mut songs = self.all_songs();
        songs.shuffle(&mut rand::thread_rng());
        songs
    }

    fn all_songs(&self) -> Vec<Song> {
        self.songs.values().cloned().collect()
    }

    /// Songs whose genre matches, ignoring case
    pub fn search_songs_by_genre(&self, genre: &str) -> Vec<Song> {
        let genre = genre.to_lowercase();
        self.songs
            .values()
            .filter(|song| song.genre.to_lowercase() == genre)
            .cloned()
            .collect()
    }

    /// Exact title lookup
    pub fn search_song_by_title(&self, title: &str) -> Option<&Song> {
        self.songs.get(title)
    }

    /// Whether an album with this title (ignoring case) is in the library
    pub fn is_album_in_library(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        self.albums.keys().any(|t| t.to_lowercase() == title)
    }

    /// Iterate over all songs
    pub fn songs(&self) -> Values<'_, String, Song> {
        self.songs.values()
    }

    /// Songs keyed by title
    pub fn user_songs(&self) -> &HashMap<String, Song> {
        &self.songs
    }

    /// Albums keyed by title
    pub fn user_albums(&self) -> &HashMap<String, Album> {
        &self.albums
    }

    /// Playlists keyed by name
    pub fn playlists(&self) -> &HashMap<String, Playlist> {
        &self.playlists
    }

    /// Get a playlist by name
    pub fn get_playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(name)
    }

    /// Ratings keyed by song title
    pub fn song_ratings(&self) -> &HashMap<String, u8> {
        &self.song_ratings
    }

    /// Titles of songs ever rated 5 or marked favorite
    pub fn favorite_songs(&self) -> &HashSet<String> {
        &self.favorite_songs
    }

    /// Up to ten titles ordered by descending play count
    pub fn recent_songs(&self) -> &[String] {
        &self.top_played
    }

    /// Same list as [`LibraryModel::recent_songs`]
    pub fn frequently_played_songs(&self) -> &[String] {
        &self.top_played
    }

    /// How often a song has been played (0 if never or unknown)
    pub fn play_count(&self, title: &str) -> u32 {
        self.play_counts.get(title).copied().unwrap_or(0)
    }

    /// Total number of songs
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Total number of albums
    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}

impl<'a> IntoIterator for &'a LibraryModel {
    type Item = &'a Song;
    type IntoIter = Values<'a, String, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.values()
    }
}
