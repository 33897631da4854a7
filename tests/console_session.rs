use music_library::account::AccountStore;
use music_library::session::load_library;
use music_library::store::load_catalog;
use music_library::{LibraryConfig, Session};
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

/// Create a data directory with a one-album store
fn create_test_config(temp_dir: &TempDir) -> LibraryConfig {
    let config = LibraryConfig::new(temp_dir.path().to_path_buf());
    let albums_dir = config.albums_dir().to_path_buf();
    fs::create_dir_all(&albums_dir).unwrap();
    fs::write(&config.index_file, "21,Adele\n").unwrap();
    fs::write(
        albums_dir.join("21_Adele.txt"),
        "21,Adele,Pop,2011\nRolling in the Deep\nRumour Has It\n",
    )
    .unwrap();
    config
}

/// Run a scripted session and return everything it printed
fn run_script(config: &LibraryConfig, script: &str) -> String {
    let catalog = load_catalog(&config.index_file, config.albums_dir());
    let mut session = Session::new(
        config.clone(),
        catalog,
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
    );
    session.run().expect("Session failed");
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn test_register_login_and_save_on_logout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&temp_dir);

    let output = run_script(
        &config,
        "1\nalice\nsecret\n\
         2\nalice\nsecret\n\
         3\n21\n\
         2\nSolo Song\nSomeone\nSingle\nJazz\n\
         4\nRumour Has It\n\
         5\nRumour Has It\n5\n\
         6\n\
         8\n\
         10\n\
         3\n",
    );

    assert!(output.contains("Registration successful!"));
    assert!(output.contains("Login successful! Welcome, alice"));
    assert!(output.contains("Album '21' added with 2 songs."));
    assert!(output.contains("Now playing: Rumour Has It - Adele"));
    assert!(output.contains("Rumour Has It (1 plays)"));
    assert!(output.contains("Logging out..."));
    assert!(output.ends_with("Exiting... Goodbye!\n"));

    let library = load_library(&config.library_path("alice")).unwrap();
    assert_eq!(library.song_count(), 3);
    assert_eq!(library.album_count(), 1);
    assert!(library.search_song_by_title("Solo Song").is_some());
}

#[test]
fn test_duplicate_registration_and_bad_login() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&temp_dir);

    let output = run_script(
        &config,
        "1\nbob\npw\n1\nbob\nother\n2\nbob\nwrong\n3\n",
    );

    assert!(output.contains("Username already exists. Try again."));
    assert!(output.contains("Invalid username or password."));

    let accounts = AccountStore::open(&config.accounts_file);
    assert_eq!(accounts.user_count(), 1);
    assert!(accounts.authenticate_user("bob", "pw"));
}

#[test]
fn test_invalid_choices_and_end_of_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&temp_dir);

    let output = run_script(&config, "7\nabc\n");

    assert_eq!(output.matches("Invalid choice! Please try again.").count(), 2);
    assert!(output.ends_with("Exiting... Goodbye!\n"));
}

#[test]
fn test_unknown_album_and_song() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&temp_dir);

    let output = run_script(
        &config,
        "1\ncarol\npw\n2\ncarol\npw\n3\nNope\n4\nGhost\n5\nGhost\n4\n10\n3\n",
    );

    assert!(output.contains("Album 'Nope' is not in the store."));
    assert_eq!(output.matches("Song 'Ghost' is not in your library.").count(), 2);
}
