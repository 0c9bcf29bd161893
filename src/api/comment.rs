//! Comment Resource
//!
//! Comments can be read from either mock service.

use super::ResourceClient;
use crate::config::{self, ResourceConfig};
use crate::models::Comment;

/// Backing service for the comments page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSource {
    #[default]
    DummyJson,
    JsonPlaceholder,
}

impl CommentSource {
    pub const ALL: [CommentSource; 2] = [CommentSource::DummyJson, CommentSource::JsonPlaceholder];

    pub fn label(&self) -> &'static str {
        match self {
            CommentSource::DummyJson => "DummyJSON",
            CommentSource::JsonPlaceholder => "JSONPlaceholder",
        }
    }

    pub fn config(&self) -> ResourceConfig {
        match self {
            CommentSource::DummyJson => config::COMMENTS,
            CommentSource::JsonPlaceholder => config::PLACEHOLDER_COMMENTS,
        }
    }
}

pub fn comment_client(source: CommentSource) -> ResourceClient<Comment> {
    ResourceClient::new(source.config())
}
