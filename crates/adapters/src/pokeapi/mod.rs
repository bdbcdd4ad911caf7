use log::warn;
use poke_wall_application::{ApplicationError, SpeciesCatalog};
use poke_wall_domain::SpeciesName;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::http::{build_client, get_ok};

pub const DEFAULT_API_BASE: &str = "https://pokeapi.co/api/v2";
const LIST_LIMIT: u32 = 100_000;

#[derive(Debug, Deserialize)]
struct SpeciesPage {
    results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PokemonDetail {
    sprites: Sprites,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    #[serde(default)]
    other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    official_artwork: Option<ArtworkSprite>,
}

#[derive(Debug, Deserialize)]
struct ArtworkSprite {
    front_default: Option<String>,
}

/// PokeAPI-backed species catalog.
#[derive(Debug, Clone)]
pub struct PokeApiCatalog {
    client: Client,
    base_url: String,
}

impl PokeApiCatalog {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApplicationError> {
        Ok(Self::with_client(build_client()?, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn species_list_url(&self) -> String {
        format!("{}/pokemon?limit={LIST_LIMIT}&offset=0", self.base_url)
    }

    fn pokemon_url(&self, name: &SpeciesName) -> String {
        format!("{}/pokemon/{name}", self.base_url)
    }

    fn get_text(&self, url: &str) -> Result<String, ApplicationError> {
        get_ok(&self.client, url)?
            .text()
            .map_err(|error| ApplicationError::Network(error.to_string()))
    }
}

impl SpeciesCatalog for PokeApiCatalog {
    fn list_species(&self) -> Result<Vec<SpeciesName>, ApplicationError> {
        let body = self.get_text(&self.species_list_url())?;
        parse_species_page(&body)
    }

    fn artwork_url(&self, name: &SpeciesName) -> Result<String, ApplicationError> {
        let body = self.get_text(&self.pokemon_url(name))?;
        parse_artwork_url(name, &body)
    }
}

fn parse_species_page(body: &str) -> Result<Vec<SpeciesName>, ApplicationError> {
    let page: SpeciesPage =
        serde_json::from_str(body).map_err(|error| ApplicationError::Decode(error.to_string()))?;

    Ok(page
        .results
        .into_iter()
        .filter_map(|entry| match SpeciesName::new(entry.name) {
            Ok(name) => Some(name),
            Err(error) => {
                warn!("skipping catalog entry: {error}");
                None
            }
        })
        .collect())
}

fn parse_artwork_url(name: &SpeciesName, body: &str) -> Result<String, ApplicationError> {
    let detail: PokemonDetail =
        serde_json::from_str(body).map_err(|error| ApplicationError::Decode(error.to_string()))?;

    detail
        .sprites
        .other
        .and_then(|other| other.official_artwork)
        .and_then(|artwork| artwork.front_default)
        .filter(|url| !url.is_empty())
        .ok_or_else(|| ApplicationError::NotFound(format!("official artwork for {name}")))
}
