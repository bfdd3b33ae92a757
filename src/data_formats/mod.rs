mod request;
mod response;

pub use request::*;
pub use response::*;

use serde::{Deserialize, Serialize};

/// Query parameters of the article list endpoint. `tags` may be repeated
/// (`?tags=a&tags=b`); both filters are optional and compose with AND.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ArticleFilter {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub search_query: Option<String>,
}
