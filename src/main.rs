use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use finance_manager::config::FinancePaths;
use finance_manager::session;
use finance_manager::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finman",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "A personal finance tracker for the terminal: register, log in, \
                  record income and expense transactions, generate reports, and \
                  check spending against per-category monthly budgets."
)]
struct Cli {
    /// Path to the SQLite database file (defaults to the user data directory)
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let db_path = match cli.db {
        Some(path) => path,
        None => {
            let paths = FinancePaths::new()?;
            paths.ensure_directories()?;
            paths.db_file()
        }
    };

    let storage = Storage::new(db_path);
    storage.create_schema()?;

    println!("Personal Finance Manager");
    session::run(&storage)?;

    Ok(())
}
