use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};

use super::{
    common_types::{CardDetail, CardId, CardSummary, SearchPage},
    error::CatalogError,
};

pub const DEFAULT_BASE_URL: &str = "https://ygocdb.com";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait CatalogApiT: Send + Sync + 'static {
    /// Text search resuming at `start`; `0` requests the first page.
    async fn search(&self, query: &str, start: u64) -> Result<SearchPage, CatalogError>;

    async fn get_card(&self, id: CardId) -> Result<CardDetail, CatalogError>;
}

pub struct CatalogApi {
    base_url: String,
    client: Client,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ApiSearchResponse {
    result: Option<Vec<ApiCard>>,
    next: u64,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ApiCard {
    id: CardId,
    cn_name: Option<String>,
    sc_name: Option<String>,
    md_name: Option<String>,
    nwbbs_n: Option<String>,
    cnocg_n: Option<String>,
    en_name: Option<String>,
    jp_name: Option<String>,
    text: ApiCardText,
    data: ApiCardData,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ApiCardText {
    name: Option<String>,
    types: Option<String>,
    pdesc: Option<String>,
    desc: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct ApiCardData {
    #[serde(rename = "type")]
    type_code: u32,
    atk: i32,
    def: i32,
    level: u32,
    race: u32,
    attribute: u32,
}

impl ApiCard {
    fn display_name(&self) -> String {
        [
            &self.cn_name,
            &self.sc_name,
            &self.md_name,
            &self.nwbbs_n,
            &self.cnocg_n,
            &self.en_name,
            &self.jp_name,
            &self.text.name,
        ]
        .into_iter()
        .flatten()
        .map(|name| name.trim())
        .find(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{}", self.id))
    }
}

impl From<ApiCard> for CardSummary {
    fn from(card: ApiCard) -> Self {
        CardSummary {
            id: card.id,
            display_name: card.display_name(),
        }
    }
}

impl From<ApiCard> for CardDetail {
    fn from(card: ApiCard) -> Self {
        let name = match card.text.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => card.display_name(),
        };

        CardDetail {
            id: card.id,
            name,
            type_line: card.text.types.unwrap_or_default(),
            type_code: card.data.type_code,
            race_code: card.data.race,
            attribute_code: card.data.attribute,
            level: card.data.level,
            attack: card.data.atk,
            defense: card.data.def,
            description: card.text.desc.unwrap_or_default(),
            pendulum_description: card.text.pdesc.unwrap_or_default(),
        }
    }
}

impl CatalogApi {
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        log::debug!("Creating catalog client with base url: {base_url}");

        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("ygocdb-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::transport)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, CatalogError> {
        let response = request.send().await.map_err(|err| {
            log::error!("Failed to make HTTP request: {err}");
            CatalogError::transport(err)
        })?;

        let status = response.status();
        log::debug!("Received HTTP response with status code: {status}");

        if !status.is_success() {
            log::error!("Catalog returned non-OK status code: {status}");
            return Err(CatalogError::BadStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|err| {
            log::error!("Failed to read response body: {err}");
            CatalogError::transport(err)
        })?;
        log::debug!("Response body read, size: {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|err| {
            log::error!("Failed to parse JSON response: {err}");
            CatalogError::decode(err)
        })
    }
}

#[async_trait]
impl CatalogApiT for CatalogApi {
    async fn search(&self, query: &str, start: u64) -> Result<SearchPage, CatalogError> {
        log::info!("Searching cards with query: {query}, start: {start}");

        let start = start.to_string();
        let request = self
            .client
            .get(format!("{}/api/v0/", self.base_url))
            .query(&[("search", query), ("start", start.as_str())]);

        let response: ApiSearchResponse = self.fetch(request).await?;
        let page = SearchPage {
            records: response
                .result
                .unwrap_or_default()
                .into_iter()
                .map(CardSummary::from)
                .collect(),
            next: response.next,
        };

        log::info!(
            "Search completed, found {} results, next: {}",
            page.records.len(),
            page.next
        );

        Ok(page)
    }

    async fn get_card(&self, id: CardId) -> Result<CardDetail, CatalogError> {
        log::info!("Getting card by id: {id}");

        let request = self
            .client
            .get(format!("{}/api/v0/card/{id}", self.base_url));

        let card: ApiCard = match self.fetch(request).await {
            Err(CatalogError::BadStatus(status)) if status == StatusCode::NOT_FOUND.as_u16() => {
                return Err(CatalogError::NotFound(id));
            }
            result => result?,
        };

        // The service answers unknown ids with an empty object.
        if card.id == 0 {
            log::warn!("Catalog has no card with id {id}");
            return Err(CatalogError::NotFound(id));
        }

        log::info!("Card retrieval completed, card id: {}", card.id);

        Ok(card.into())
    }
}
