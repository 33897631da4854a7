use anyhow::Result;
use clap::Parser;
use music_library::{store, LibraryConfig, Session};
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "music-library")]
#[command(about = "Manage a personal music library backed by a shared album store", long_about = None)]
struct Args {
    /// Data directory holding albums/, users/ and users.txt
    #[arg(short = 'd', long, default_value = "resources")]
    data_dir: String,

    /// Album index file (default: <data-dir>/albums/albums.txt)
    #[arg(short = 'a', long)]
    albums: Option<String>,

    /// Print the store catalog and exit
    #[arg(long)]
    list_albums: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let data_dir = shellexpand::tilde(&args.data_dir);
    let mut config = LibraryConfig::new(PathBuf::from(data_dir.as_ref()));
    if let Some(albums) = &args.albums {
        config = config.with_index_file(PathBuf::from(shellexpand::tilde(albums).as_ref()));
    }

    log::debug!("Using data directory {:?}", config.data_dir);
    let catalog = store::load_catalog(&config.index_file, config.albums_dir());

    if args.list_albums {
        let mut albums: Vec<_> = catalog.all_albums().collect();
        albums.sort_by(|a, b| a.title.cmp(&b.title));
        for album in albums {
            println!("{} by {} ({}, {} songs)", album.title, album.artist, album.year, album.len());
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut session = Session::new(config, catalog, stdin.lock(), io::stdout());
    session.run()
}
