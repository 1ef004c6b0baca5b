//! Contact book - Main entry point
//!
//! Runs the interactive assistant: greets the user, then reads commands from
//! stdin until `exit`/`close` or end of input.

use anyhow::{Context, Result};
use contact_book::cli::session::INPUT_PROMPT;
use contact_book::cli::{greeting, interrupted_message, Session};
use contact_book::services::ContactServiceImpl;
use contact_book::Config;
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logging goes to stderr so it never mixes with the session output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.effective_log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting contact book (birthday window: {} days)",
        config.birthday_window_days
    );

    let service = ContactServiceImpl::new().with_birthday_window(config.birthday_window_days);
    let mut session = Session::new(service);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    println!("\n{}", greeting());

    loop {
        print!("\n{}", INPUT_PROMPT);
        stdout.flush()?;

        let Some(line) = lines.next() else {
            println!("\n{}", interrupted_message());
            break;
        };

        let reply = session.execute_read(line)?;
        println!("{}", reply.message());

        if reply.is_exit() {
            break;
        }
    }

    info!("Contact book session finished");
    Ok(())
}
