//! UPDATE command - Merge-update fields of an existing record.
//!
//! Only the flags provided end up in the request body, so fields left out
//! keep their stored values. The server reports success whether or not
//! the id matched a record.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use uuid::Uuid;

use studyhub_core::{NoteFields, ResourceKind, ToolFields, VideoFields};

use super::{MessageResponse, make_request, output};

/// Update a record in one of the collections.
#[derive(Subcommand)]
pub enum UpdateCommand {
    /// Update a note
    Note(UpdateNoteArgs),
    /// Update a video
    Video(UpdateVideoArgs),
    /// Update a tool
    Tool(UpdateToolArgs),
}

/// Arguments for updating a note.
#[derive(Args)]
pub struct UpdateNoteArgs {
    /// Record id
    pub id: Uuid,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New document URL
    #[arg(long)]
    pub file_url: Option<String>,

    /// New category label
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for updating a video.
#[derive(Args)]
pub struct UpdateVideoArgs {
    /// Record id
    pub id: Uuid,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New video URL
    #[arg(long)]
    pub video_url: Option<String>,

    /// New category label
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for updating a tool.
#[derive(Args)]
pub struct UpdateToolArgs {
    /// Record id
    pub id: Uuid,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New image URL
    #[arg(long)]
    pub image_url: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New category label
    #[arg(long)]
    pub category: Option<String>,
}

/// Execute the update command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    command: UpdateCommand,
) -> Result<()> {
    match command {
        UpdateCommand::Note(args) => {
            let patch = NoteFields {
                title: args.title,
                file_url: args.file_url,
                category: args.category,
            };
            update_record(client, base_url, human, ResourceKind::Note, args.id, &patch).await
        }
        UpdateCommand::Video(args) => {
            let patch = VideoFields {
                title: args.title,
                video_url: args.video_url,
                category: args.category,
            };
            update_record(client, base_url, human, ResourceKind::Video, args.id, &patch).await
        }
        UpdateCommand::Tool(args) => {
            let patch = ToolFields {
                name: args.name,
                image_url: args.image_url,
                description: args.description,
                category: args.category,
            };
            update_record(client, base_url, human, ResourceKind::Tool, args.id, &patch).await
        }
    }
}

/// PUT the patch to the record's URL.
async fn update_record<F: Serialize>(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    kind: ResourceKind,
    id: Uuid,
    patch: &F,
) -> Result<()> {
    let url = format!("{}/{}/{}", base_url, kind.collection(), id);
    let response: MessageResponse = make_request(client.put(&url).json(patch)).await?;

    output(&response, human)
}
