//! DELETE command - Delete a record.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use uuid::Uuid;

use super::{Kind, MessageResponse, make_request, output};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Which collection the record belongs to
    #[arg(value_enum)]
    pub kind: Kind,

    /// Record id to delete
    pub id: Uuid,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Are you sure you want to delete {} {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.kind.resource().singular(),
            args.id
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let url = format!(
        "{}/{}/{}",
        base_url,
        args.kind.resource().collection(),
        args.id
    );
    let response: MessageResponse = make_request(client.delete(&url)).await?;

    output(&response, human)
}
