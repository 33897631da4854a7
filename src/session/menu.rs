//! Interactive console session

use super::config::LibraryConfig;
use super::library_file::{load_library, save_library};
use crate::account::{AccountStore, Registration};
use crate::model::{LibraryModel, Song, TOP_RATED_PLAYLIST};
use crate::store::Catalog;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Console session over any line-based input and output
///
/// Generic over the reader and writer so scripted sessions can be driven
/// from tests.
pub struct Session<R, W> {
    config: LibraryConfig,
    accounts: AccountStore,
    catalog: Catalog,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session, opening the account file named in `config`
    pub fn new(config: LibraryConfig, catalog: Catalog, input: R, output: W) -> Self {
        let accounts = AccountStore::open(&config.accounts_file);
        Self {
            config,
            accounts,
            catalog,
            input,
            output,
        }
    }

    /// Run the top-level menu until the user exits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\nWelcome to the Music Library!")?;
            writeln!(self.output, "1. Register")?;
            writeln!(self.output, "2. Login")?;
            writeln!(self.output, "3. Exit")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.register()?,
                "2" => self.login()?,
                "3" => break,
                _ => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }

        writeln!(self.output, "Exiting... Goodbye!")?;
        Ok(())
    }

    /// Consume the session and hand back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn register(&mut self) -> Result<()> {
        let Some(username) = self.prompt("Enter a username: ")? else {
            return Ok(());
        };
        let Some(password) = self.prompt("Enter a password: ")? else {
            return Ok(());
        };

        match self.accounts.register_user(&username, &password) {
            Registration::Created => {
                writeln!(self.output, "Registration successful! You can now log in.")?
            }
            Registration::AlreadyExists => {
                writeln!(self.output, "Username already exists. Try again.")?
            }
            Registration::Invalid => writeln!(
                self.output,
                "Usernames must be non-empty and cannot contain commas."
            )?,
        }
        Ok(())
    }

    fn login(&mut self) -> Result<()> {
        let Some(username) = self.prompt("Enter username: ")? else {
            return Ok(());
        };
        let Some(password) = self.prompt("Enter password: ")? else {
            return Ok(());
        };

        if !self.accounts.authenticate_user(&username, &password) {
            writeln!(self.output, "Invalid username or password.")?;
            return Ok(());
        }

        writeln!(self.output, "Login successful! Welcome, {}", username)?;
        let library_path = self.config.library_path(&username);
        let mut library = load_library(&library_path).unwrap_or_else(|e| {
            log::error!("Error loading library for '{}': {:#}", username, e);
            LibraryModel::new()
        });

        self.user_menu(&mut library)?;

        if let Err(e) = save_library(&library_path, &library) {
            log::error!("Error saving library for '{}': {:#}", username, e);
        }
        Ok(())
    }

    fn user_menu(&mut self, library: &mut LibraryModel) -> Result<()> {
        loop {
            writeln!(self.output, "\nMusic Library Menu:")?;
            writeln!(self.output, "1. View Library")?;
            writeln!(self.output, "2. Add Song to Library")?;
            writeln!(self.output, "3. Add Album from Store")?;
            writeln!(self.output, "4. Play Song")?;
            writeln!(self.output, "5. Rate Song")?;
            writeln!(self.output, "6. View Most Played Songs")?;
            writeln!(self.output, "7. Create Genre-Based Playlists")?;
            writeln!(self.output, "8. View Top-Rated Songs")?;
            writeln!(self.output, "9. View Playlists")?;
            writeln!(self.output, "10. Logout")?;

            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.view_library(library)?,
                "2" => self.add_song(library)?,
                "3" => self.add_album(library)?,
                "4" => self.play_song(library)?,
                "5" => self.rate_song(library)?,
                "6" => self.view_most_played(library)?,
                "7" => self.generate_genre_playlists(library)?,
                "8" => self.view_top_rated(library)?,
                "9" => self.view_playlists(library)?,
                "10" => break,
                _ => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }

        writeln!(self.output, "Logging out...")?;
        Ok(())
    }

    fn view_library(&mut self, library: &LibraryModel) -> Result<()> {
        writeln!(self.output, "\nYour Library:")?;
        for song in library.sort_by_title() {
            writeln!(self.output, "{}", song)?;
        }
        Ok(())
    }

    fn add_song(&mut self, library: &mut LibraryModel) -> Result<()> {
        let Some(title) = self.prompt("Enter song title: ")? else {
            return Ok(());
        };
        let Some(artist) = self.prompt("Enter artist name: ")? else {
            return Ok(());
        };
        let Some(album) = self.prompt("Enter album name: ")? else {
            return Ok(());
        };
        let Some(genre) = self.prompt("Enter genre: ")? else {
            return Ok(());
        };

        match library.add_song(Song::new(title, artist, album, genre)) {
            Ok(()) => writeln!(self.output, "Song added to your library!")?,
            Err(e) => writeln!(self.output, "Could not add song: {}", e)?,
        }
        Ok(())
    }

    fn add_album(&mut self, library: &mut LibraryModel) -> Result<()> {
        let Some(title) = self.prompt("Enter album title: ")? else {
            return Ok(());
        };

        let Some(album) = self.catalog.get_album(&title).cloned() else {
            writeln!(self.output, "Album '{}' is not in the store.", title)?;
            return Ok(());
        };

        let song_count = album.len();
        match library.add_album(album) {
            Ok(()) => writeln!(
                self.output,
                "Album '{}' added with {} songs.",
                title, song_count
            )?,
            Err(e) => writeln!(self.output, "Could not add album: {}", e)?,
        }
        Ok(())
    }

    fn play_song(&mut self, library: &mut LibraryModel) -> Result<()> {
        let Some(title) = self.prompt("Enter song title: ")? else {
            return Ok(());
        };

        match library.search_song_by_title(&title) {
            Some(song) => writeln!(self.output, "Now playing: {}", song)?,
            None => {
                writeln!(self.output, "Song '{}' is not in your library.", title)?;
                return Ok(());
            }
        }
        library.play_song(&title);
        Ok(())
    }

    fn rate_song(&mut self, library: &mut LibraryModel) -> Result<()> {
        let Some(title) = self.prompt("Enter song title: ")? else {
            return Ok(());
        };
        let Some(rating) = self.prompt("Enter rating (1-5): ")? else {
            return Ok(());
        };

        if library.search_song_by_title(&title).is_none() {
            writeln!(self.output, "Song '{}' is not in your library.", title)?;
            return Ok(());
        }
        match rating.parse::<i32>() {
            Ok(rating) if Song::is_valid_rating(rating) => {
                library.rate_song(&title, rating);
                writeln!(self.output, "Rated '{}' {}.", title, rating)?;
            }
            _ => writeln!(self.output, "Rating must be a number from 1 to 5.")?,
        }
        Ok(())
    }

    fn view_most_played(&mut self, library: &LibraryModel) -> Result<()> {
        writeln!(self.output, "\nMost Played Songs:")?;
        for title in library.frequently_played_songs() {
            writeln!(self.output, "{} ({} plays)", title, library.play_count(title))?;
        }
        Ok(())
    }

    fn generate_genre_playlists(&mut self, library: &mut LibraryModel) -> Result<()> {
        library.generate_genre_based_playlists();

        let mut names: Vec<&String> = library
            .playlists()
            .keys()
            .filter(|name| name.ends_with(" Playlist"))
            .collect();
        names.sort();

        if names.is_empty() {
            writeln!(
                self.output,
                "No genre has enough songs for a playlist yet."
            )?;
        } else {
            for name in names {
                writeln!(self.output, "Genre playlist ready: {}", name)?;
            }
        }
        Ok(())
    }

    fn view_top_rated(&mut self, library: &mut LibraryModel) -> Result<()> {
        library.generate_top_rated_playlist();

        writeln!(self.output, "\nTop-Rated Songs:")?;
        if let Some(playlist) = library.get_playlist(TOP_RATED_PLAYLIST) {
            for song in playlist {
                writeln!(self.output, "{}", song)?;
            }
        }

        let mut favorites: Vec<&String> = library.favorite_songs().iter().collect();
        favorites.sort();
        writeln!(self.output, "\nFavorites:")?;
        for title in favorites {
            writeln!(self.output, "{}", title)?;
        }
        Ok(())
    }

    fn view_playlists(&mut self, library: &LibraryModel) -> Result<()> {
        let mut playlists: Vec<_> = library.playlists().values().collect();
        playlists.sort_by(|a, b| a.name.cmp(&b.name));

        writeln!(self.output, "\nPlaylists:")?;
        for playlist in playlists {
            writeln!(self.output, "{}", playlist.details())?;
        }
        Ok(())
    }
}
