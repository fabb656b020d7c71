//! LIST command - List all records in a collection.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use studyhub_core::ResourceKind;

use super::{CliError, HumanReadable, Kind, make_request, output, truncate};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Which collection to list
    #[arg(value_enum)]
    pub kind: Kind,
}

/// A record as returned by the server: an id plus a flat field bag.
///
/// Kept untyped so one view renders all three collections.
#[derive(Debug, Deserialize, Serialize)]
pub struct RecordView {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, Value>,
}

/// A fetched collection, ready for rendering.
#[derive(Debug)]
pub struct ListView {
    pub kind: ResourceKind,
    pub records: Vec<RecordView>,
}

impl Serialize for ListView {
    // JSON output is the server's response: the bare array.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

impl HumanReadable for ListView {
    fn print_human(&self) {
        println!("{}", self.kind.collection().green().bold());
        println!("{}", "=".repeat(60));
        println!();

        if self.records.is_empty() {
            println!("  {}", "(empty)".dimmed());
            return;
        }

        for record in &self.records {
            // Lead with whichever naming field the kind uses.
            let label = record
                .fields
                .get("title")
                .or_else(|| record.fields.get("name"))
                .and_then(Value::as_str)
                .unwrap_or("(untitled)");
            println!("  {}", label.bold());
            println!("    {} {}", "ID:".cyan(), record.id);

            for (key, value) in &record.fields {
                if key == "title" || key == "name" {
                    continue;
                }
                if let Some(text) = value.as_str() {
                    println!("    {} {}", format!("{}:", key).cyan(), truncate(text, 60));
                }
            }
            println!();
        }

        println!("  {} {}", "Total:".cyan(), self.records.len());
    }
}

/// Fetch a collection from the server.
///
/// Shared with the add command, which reloads the list after a
/// successful create.
pub async fn fetch_collection(
    client: &reqwest::Client,
    base_url: &str,
    kind: ResourceKind,
) -> Result<ListView, CliError> {
    let url = format!("{}/{}", base_url, kind.collection());
    let records: Vec<RecordView> = make_request(client.get(&url)).await?;
    Ok(ListView { kind, records })
}

/// Execute the list command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: ListArgs,
) -> Result<()> {
    let view = fetch_collection(client, base_url, args.kind.resource()).await?;
    output(&view, human)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_view_round_trip() {
        let json = json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "title": "Algebra",
            "fileUrl": "http://x/a.pdf"
        });
        let record: RecordView = serde_json::from_value(json).unwrap();
        assert_eq!(record.id, Uuid::nil());
        assert_eq!(record.fields["title"], "Algebra");
        assert_eq!(record.fields["fileUrl"], "http://x/a.pdf");
    }

    #[test]
    fn test_list_view_serializes_as_bare_array() {
        let view = ListView {
            kind: ResourceKind::Note,
            records: vec![],
        };
        assert_eq!(serde_json::to_string(&view).unwrap(), "[]");
    }
}
