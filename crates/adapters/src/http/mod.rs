#[cfg(test)]
pub(crate) mod stub;

use log::debug;
use poke_wall_application::{ApplicationError, ImageDownloader};
use reqwest::blocking::{Client, Response};

const USER_AGENT: &str = concat!("poke-wall/", env!("CARGO_PKG_VERSION"));

pub fn build_client() -> Result<Client, ApplicationError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|error| ApplicationError::Network(error.to_string()))
}

/// Issues a GET and turns transport failures and non-2xx statuses into errors.
pub(crate) fn get_ok(client: &Client, url: &str) -> Result<Response, ApplicationError> {
    debug!("GET {url}");
    client
        .get(url)
        .send()
        .and_then(Response::error_for_status)
        .map_err(|error| ApplicationError::Network(error.to_string()))
}

#[derive(Debug, Clone)]
pub struct ReqwestDownloader {
    client: Client,
}

impl ReqwestDownloader {
    pub fn new() -> Result<Self, ApplicationError> {
        Ok(Self::with_client(build_client()?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl ImageDownloader for ReqwestDownloader {
    fn download(&self, url: &str) -> Result<Vec<u8>, ApplicationError> {
        let response = get_ok(&self.client, url)?;
        let bytes = response
            .bytes()
            .map_err(|error| ApplicationError::Network(error.to_string()))?;
        Ok(bytes.to_vec())
    }
}
