use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Post {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub author: String,
    pub content: String,
    #[serde(default)]
    pub date: String,
}

/// Request body for creating or updating a post. The server owns the
/// id and the date, so neither is part of this struct.
#[derive(Clone, PartialEq, Eq, Serialize, Default, Debug)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}
