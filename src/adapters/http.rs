use crate::domain::model::{OptionEntry, OptionList};
use crate::domain::ports::OptionSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches option lists from the geo endpoints. The server answers with a
/// JSON object mapping option ids to display labels, in server-chosen
/// order; that order is preserved all the way to the rendered markup.
pub struct HttpOptionSource {
    client: Client,
}

impl HttpOptionSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpOptionSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OptionSource for HttpOptionSource {
    async fn fetch(&self, url: &str) -> Result<OptionList> {
        tracing::debug!("Fetching options from: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        let response = response.error_for_status()?;
        let payload: serde_json::Value = response.json().await?;
        Ok(entries_from_payload(payload))
    }
}

/// No validation beyond iteration: objects yield key/label pairs, arrays
/// yield index/label pairs, anything else yields nothing.
fn entries_from_payload(payload: serde_json::Value) -> OptionList {
    match payload {
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(id, value)| OptionEntry::new(id, label_of(value)))
            .collect(),
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, value)| OptionEntry::new(index.to_string(), label_of(value)))
            .collect(),
        _ => Vec::new(),
    }
}

fn label_of(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
