//! Quote Resource

use super::ResourceClient;
use crate::config;
use crate::models::Quote;

pub fn quote_client() -> ResourceClient<Quote> {
    ResourceClient::new(config::QUOTES)
}
