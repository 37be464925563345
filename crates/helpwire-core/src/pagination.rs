//! Cursor pagination shared by list endpoints.

use serde::{Deserialize, Serialize};

/// Pagination descriptor returned next to each list payload.
///
/// The caller drives pagination: feed [`PageMeta::after_cursor`] or
/// [`PageMeta::before_cursor`] back into the next request's options.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub meta: PageMeta,
    #[serde(default)]
    pub links: PageLinks,
}

/// Cursor metadata for one page.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub has_more: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_cursor: Option<String>,
}

/// Ready-made URLs for the adjacent pages.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

impl Page {
    /// Whether the server indicated another page after this one.
    pub fn has_more(&self) -> bool {
        self.meta.has_more
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialization() {
        let json = serde_json::json!({
            "meta": {
                "has_more": true,
                "after_cursor": "aWQ6MTU",
                "before_cursor": "aWQ6MTQ"
            },
            "links": {
                "next": "https://example.helpwire.com/api/v2/webhooks?page[after]=aWQ6MTU",
                "prev": "https://example.helpwire.com/api/v2/webhooks?page[before]=aWQ6MTQ"
            }
        });

        let page: Page = serde_json::from_value(json).unwrap();
        assert!(page.has_more());
        assert_eq!(page.meta.after_cursor.as_deref(), Some("aWQ6MTU"));
        assert_eq!(page.meta.before_cursor.as_deref(), Some("aWQ6MTQ"));
        assert!(page.links.next.as_deref().unwrap().contains("page[after]"));
    }

    #[test]
    fn test_page_defaults_when_fields_absent() {
        let page: Page = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(!page.has_more());
        assert!(page.meta.after_cursor.is_none());
        assert!(page.links.next.is_none());
        assert_eq!(page, Page::default());
    }

    #[test]
    fn test_page_roundtrip() {
        let page = Page {
            meta: PageMeta {
                has_more: true,
                after_cursor: Some("abc".to_string()),
                before_cursor: None,
            },
            links: PageLinks::default(),
        };

        let json = serde_json::to_value(&page).unwrap();
        assert!(json["meta"].get("before_cursor").is_none());
        let parsed: Page = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, page);
    }
}
