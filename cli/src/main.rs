//! Command-line client for the StudyHub resource API.
//!
//! This is the client helper layer: it checks required fields before
//! calling the API, issues the HTTP request, and re-renders the resource
//! list after a successful add. Failures come back as structured errors;
//! main decides presentation and the exit code.
//!
//! Configuration via environment:
//! - STUDYHUB_URL: Base URL of the StudyHub server (default: http://localhost:5000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{add::AddCommand, delete::DeleteArgs, list::ListArgs, update::UpdateCommand};

/// StudyHub CLI
///
/// Manage notes, videos, and tools from the command line. Outputs JSON by
/// default; pass --human for formatted output.
#[derive(Parser)]
#[command(name = "studyhub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// StudyHub server URL
    #[arg(
        long,
        env = "STUDYHUB_URL",
        default_value = "http://localhost:5000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all records in a collection
    List(ListArgs),

    /// Add a record, then reload the collection
    #[command(subcommand)]
    Add(AddCommand),

    /// Overwrite the provided fields of an existing record
    #[command(subcommand)]
    Update(UpdateCommand),

    /// Delete a record (succeeds even if the id no longer exists)
    Delete(DeleteArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let client = commands::build_client();

    let result = match cli.command {
        Commands::List(args) => commands::list::execute(&client, &cli.url, cli.human, args).await,
        Commands::Add(command) => {
            commands::add::execute(&client, &cli.url, cli.human, command).await
        }
        Commands::Update(command) => {
            commands::update::execute(&client, &cli.url, cli.human, command).await
        }
        Commands::Delete(args) => {
            commands::delete::execute(&client, &cli.url, cli.human, args).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
