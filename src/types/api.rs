use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreatePaste {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PasteCreated {
    pub code: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct PasteExists {
    pub exists: bool,
}

#[derive(Debug, Serialize)]
pub struct PasteDeleted {
    pub deleted: bool,
}
