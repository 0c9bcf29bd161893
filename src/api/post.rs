//! Post Resource

use super::ResourceClient;
use crate::config;
use crate::models::Post;

pub fn post_client() -> ResourceClient<Post> {
    ResourceClient::new(config::POSTS)
}
