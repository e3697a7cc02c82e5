use serde::Deserialize;

/// Request body for adding a carousel image.
#[derive(Debug, Deserialize)]
pub struct AddImageRequest {
    #[serde(default)]
    pub imgurl: String,
    #[serde(default)]
    pub maker: String,
}
