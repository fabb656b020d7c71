//! ADD command - Create a record, then reload the collection.
//!
//! Mirrors the web form flow: required fields are checked for presence
//! before any request is issued, and a successful add re-fetches the
//! full list so the caller sees the refreshed collection.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use serde::Serialize;
use serde_json::Value;

use studyhub_core::{NoteFields, ResourceKind, ToolFields, VideoFields};

use super::{list, make_request, require_present, HumanReadable};

/// Add a record to one of the collections.
#[derive(Subcommand)]
pub enum AddCommand {
    /// Add a note (a downloadable document)
    Note(AddNoteArgs),
    /// Add a video
    Video(AddVideoArgs),
    /// Add a tool
    Tool(AddToolArgs),
}

/// Arguments for adding a note.
#[derive(Args)]
pub struct AddNoteArgs {
    /// Note title
    #[arg(long)]
    pub title: String,

    /// URL of the document file
    #[arg(long)]
    pub file_url: String,

    /// Category label
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for adding a video.
#[derive(Args)]
pub struct AddVideoArgs {
    /// Video title
    #[arg(long)]
    pub title: String,

    /// URL of the video
    #[arg(long)]
    pub video_url: String,

    /// Category label
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for adding a tool.
#[derive(Args)]
pub struct AddToolArgs {
    /// Tool name
    #[arg(long)]
    pub name: String,

    /// URL of the tool's image
    #[arg(long)]
    pub image_url: String,

    /// Short description
    #[arg(long)]
    pub description: Option<String>,

    /// Category label
    #[arg(long)]
    pub category: Option<String>,
}

/// Execute the add command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    command: AddCommand,
) -> Result<()> {
    match command {
        AddCommand::Note(args) => {
            let fields = NoteFields {
                title: Some(require_present("title", &args.title)?),
                file_url: Some(require_present("file-url", &args.file_url)?),
                category: args.category,
            };
            add_record(client, base_url, human, ResourceKind::Note, &fields).await
        }
        AddCommand::Video(args) => {
            let fields = VideoFields {
                title: Some(require_present("title", &args.title)?),
                video_url: Some(require_present("video-url", &args.video_url)?),
                category: args.category,
            };
            add_record(client, base_url, human, ResourceKind::Video, &fields).await
        }
        AddCommand::Tool(args) => {
            let fields = ToolFields {
                name: Some(require_present("name", &args.name)?),
                image_url: Some(require_present("image-url", &args.image_url)?),
                description: args.description,
                category: args.category,
            };
            add_record(client, base_url, human, ResourceKind::Tool, &fields).await
        }
    }
}

/// POST the field bag, then reload the collection on success.
async fn add_record<F: Serialize>(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    kind: ResourceKind,
    fields: &F,
) -> Result<()> {
    let url = format!("{}/{}", base_url, kind.collection());
    let body: Value = make_request(client.post(&url).json(fields)).await?;

    if human {
        let message = body["message"].as_str().unwrap_or("Added");
        println!("{}", message.green().bold());
        println!();

        let view = list::fetch_collection(client, base_url, kind).await?;
        view.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(&body)?);
    }

    Ok(())
}
