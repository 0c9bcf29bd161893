//! Resource Configuration
//!
//! Static description of every REST resource the app talks to.

/// DummyJSON mock service
pub const DUMMY_JSON: &str = "https://dummyjson.com";

/// JSONPlaceholder mock service
pub const JSON_PLACEHOLDER: &str = "https://jsonplaceholder.typicode.com";

/// Where the collection lives in a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListShape {
    /// `{ "<field>": [...], "total": .., "skip": .., "limit": .. }`
    Envelope(&'static str),
    /// `[...]`
    BareArray,
}

/// Route used to create a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateRoute {
    /// `POST /{resource}/add`
    AddSuffix,
    /// `POST /{resource}`
    Collection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceConfig {
    pub base_url: &'static str,
    pub path: &'static str,
    pub list_shape: ListShape,
    pub create_route: CreateRoute,
    /// Appended as `?limit=` on list reads. `0` asks DummyJSON for every record.
    pub list_limit: Option<u32>,
}

impl ResourceConfig {
    /// A DummyJSON resource whose envelope field is named after the path
    pub const fn dummy_json(path: &'static str) -> Self {
        Self {
            base_url: DUMMY_JSON,
            path,
            list_shape: ListShape::Envelope(path),
            create_route: CreateRoute::AddSuffix,
            list_limit: None,
        }
    }

    pub const fn with_limit(self, limit: u32) -> Self {
        Self {
            list_limit: Some(limit),
            ..self
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.path)
    }

    pub fn list_url(&self) -> String {
        match self.list_limit {
            Some(limit) => format!("{}?limit={}", self.collection_url(), limit),
            None => self.collection_url(),
        }
    }

    pub fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    pub fn create_url(&self) -> String {
        match self.create_route {
            CreateRoute::AddSuffix => format!("{}/add", self.collection_url()),
            CreateRoute::Collection => self.collection_url(),
        }
    }
}

// ========================
// Resources
// ========================

pub const POSTS: ResourceConfig = ResourceConfig::dummy_json("posts");
pub const RECIPES: ResourceConfig = ResourceConfig::dummy_json("recipes");
pub const QUOTES: ResourceConfig = ResourceConfig::dummy_json("quotes");
pub const TODOS: ResourceConfig = ResourceConfig::dummy_json("todos");
pub const COMMENTS: ResourceConfig = ResourceConfig::dummy_json("comments").with_limit(0);

pub const PLACEHOLDER_COMMENTS: ResourceConfig = ResourceConfig {
    base_url: JSON_PLACEHOLDER,
    path: "comments",
    list_shape: ListShape::BareArray,
    create_route: CreateRoute::Collection,
    list_limit: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dummy_json_urls() {
        assert_eq!(POSTS.collection_url(), "https://dummyjson.com/posts");
        assert_eq!(POSTS.list_url(), "https://dummyjson.com/posts");
        assert_eq!(POSTS.item_url(7), "https://dummyjson.com/posts/7");
        assert_eq!(POSTS.create_url(), "https://dummyjson.com/posts/add");
        assert_eq!(POSTS.list_shape, ListShape::Envelope("posts"));
    }

    #[test]
    fn test_list_limit() {
        assert_eq!(COMMENTS.list_url(), "https://dummyjson.com/comments?limit=0");
    }

    #[test]
    fn test_placeholder_routes() {
        assert_eq!(
            PLACEHOLDER_COMMENTS.create_url(),
            "https://jsonplaceholder.typicode.com/comments"
        );
        assert_eq!(
            PLACEHOLDER_COMMENTS.item_url(3),
            "https://jsonplaceholder.typicode.com/comments/3"
        );
        assert_eq!(PLACEHOLDER_COMMENTS.list_shape, ListShape::BareArray);
    }
}
