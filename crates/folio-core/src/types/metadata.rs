//! Document head metadata (title, description, social preview).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    pub creator: String,
    pub open_graph: OpenGraph,
}

/// Social preview card fields (`og:*`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Which attribute a `<meta>` element is keyed by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetaAttr {
    /// `<meta name=...>`
    Name,
    /// `<meta property=...>` (Open Graph)
    Property,
}

/// A single `<meta>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: String,
    pub content: String,
}

impl MetaTag {
    fn name(key: &str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name,
            key: key.to_string(),
            content: content.into(),
        }
    }

    fn property(key: &str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property,
            key: key.to_string(),
            content: content.into(),
        }
    }
}

impl PageMetadata {
    /// Flatten into `<meta>` elements in head order.
    ///
    /// Empty keyword and author lists produce no tag.
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        let mut tags = vec![MetaTag::name("description", self.description.clone())];
        if !self.keywords.is_empty() {
            tags.push(MetaTag::name("keywords", self.keywords.join(", ")));
        }
        for author in &self.authors {
            tags.push(MetaTag::name("author", author.clone()));
        }
        tags.push(MetaTag::name("creator", self.creator.clone()));
        tags.push(MetaTag::property("og:title", self.open_graph.title.clone()));
        tags.push(MetaTag::property(
            "og:description",
            self.open_graph.description.clone(),
        ));
        tags.push(MetaTag::property("og:type", self.open_graph.kind.clone()));
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> PageMetadata {
        PageMetadata {
            title: "Portfolio".to_string(),
            description: "Work".to_string(),
            keywords: vec!["UX Designer".to_string(), "Portfolio".to_string()],
            authors: vec!["Josh".to_string()],
            creator: "Josh".to_string(),
            open_graph: OpenGraph {
                title: "Portfolio".to_string(),
                description: "Work".to_string(),
                kind: "website".to_string(),
            },
        }
    }

    #[test]
    fn test_meta_tags_order() {
        let keys: Vec<_> = metadata()
            .meta_tags()
            .into_iter()
            .map(|t| t.key)
            .collect();
        assert_eq!(
            keys,
            [
                "description",
                "keywords",
                "author",
                "creator",
                "og:title",
                "og:description",
                "og:type"
            ]
        );
    }

    #[test]
    fn test_keywords_joined() {
        let tags = metadata().meta_tags();
        let keywords = tags.iter().find(|t| t.key == "keywords").unwrap();
        assert_eq!(keywords.content, "UX Designer, Portfolio");
        assert_eq!(keywords.attr, MetaAttr::Name);
    }

    #[test]
    fn test_empty_keywords_omitted() {
        let mut meta = metadata();
        meta.keywords.clear();
        meta.authors.clear();
        let tags = meta.meta_tags();
        assert!(tags.iter().all(|t| t.key != "keywords" && t.key != "author"));
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn test_open_graph_uses_property() {
        let tags = metadata().meta_tags();
        assert!(tags
            .iter()
            .filter(|t| t.key.starts_with("og:"))
            .all(|t| t.attr == MetaAttr::Property));
    }
}
