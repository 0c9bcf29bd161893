//! Recipe Resource

use super::ResourceClient;
use crate::config;
use crate::models::Recipe;

pub fn recipe_client() -> ResourceClient<Recipe> {
    ResourceClient::new(config::RECIPES)
}
