use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const UNCONFIRMED_TITLE: &str = "Unconfirmed";
pub const UNCONFIRMED_COLOR: &str = "#c8c8c8";

/// Leave classification (vacation, sick leave, ...) with its annual day limit.
/// `limit == 0` marks an unlimited/unconfirmed category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventLogCategory {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub limit: u32,
}

impl EventLogCategory {
    pub fn unconfirmed(title: &str) -> Self {
        Self {
            id: String::new(),
            title: title.to_string(),
            color: UNCONFIRMED_COLOR.to_string(),
            limit: 0,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.limit == 0
    }
}

/// Id → category lookup with a sentinel for unknown ids.
pub struct CategoryIndex<'a> {
    by_id: HashMap<&'a str, &'a EventLogCategory>,
    fallback: EventLogCategory,
}

impl<'a> CategoryIndex<'a> {
    pub fn new(categories: &'a [EventLogCategory], unconfirmed_title: &str) -> Self {
        let by_id = categories.iter().map(|c| (c.id.as_str(), c)).collect();
        Self {
            by_id,
            fallback: EventLogCategory::unconfirmed(unconfirmed_title),
        }
    }

    /// Resolve a category id. Unknown ids and untitled categories resolve to the
    /// unconfirmed sentinel, so the returned title is never empty.
    pub fn resolve(&self, id: &str) -> &EventLogCategory {
        match self.by_id.get(id) {
            Some(c) if !c.title.trim().is_empty() => *c,
            Some(_) => {
                log::warn!("category '{}' has no title, using sentinel", id);
                &self.fallback
            }
            None => {
                log::warn!("unknown category '{}', using sentinel", id);
                &self.fallback
            }
        }
    }
}
