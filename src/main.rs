use anyhow::Result;
use clap::Arg;

use reset_users::{db, reset, settings};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let matches = clap::Command::new("reset-users")
        .about("Wipes the hoto user table and seeds a fresh admin account")
        .arg(
            Arg::new("settings")
                .short('s')
                .long("settings")
                .value_name("SETTINGS")
                .help("Path to the YAML settings file (overrides HOTO_SETTINGS)"),
        )
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("DATABASE")
                .help("Path to the SQLite database file (overrides the settings file)"),
        )
        .get_matches();

    let settings_path =
        settings::resolve_path(matches.get_one::<String>("settings").map(|s| s.as_str()));
    let settings = settings::load(&settings_path)?;

    let db_path = matches
        .get_one::<String>("database")
        .map(|s| s.as_str())
        .unwrap_or_else(|| settings.database.as_str());

    let pool = db::init_db(db_path).await?;

    // Errors past this point are reported by the reset procedure itself
    reset::run(&pool).await;

    Ok(())
}
