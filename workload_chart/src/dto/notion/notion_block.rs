use crate::common::*;

#[derive(Debug, Clone, Deserialize)]
pub struct NotionBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub embed: Option<NotionEmbed>,
}

#[derive(Debug, Clone, Deserialize, Serialize, new)]
pub struct NotionEmbed {
    #[serde(default)]
    pub url: String,
}

impl NotionBlock {
    #[doc = "Embedded URL when this is an `embed` block"]
    pub fn embed_url(&self) -> Option<&str> {
        if self.block_type != "embed" {
            return None;
        }

        self.embed.as_ref().map(|embed| embed.url.as_str())
    }
}
