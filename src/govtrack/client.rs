use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::{Error, Result, govtrack::types::{BillObject, Page, VoteObject, VoterObject}};
use crate::votes::{Bill, BillQuery, VoteQuery, VoteSource, Voter};

pub const DEFAULT_BASE_URL: &str = "https://www.govtrack.us/api/v2";

/// Connection settings for the GovTrack API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash, e.g. `https://www.govtrack.us/api/v2`.
    pub base_url: String,
    /// Per-request timeout. A timed-out request is a transport error.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("votemap/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Async client for the bill, vote and vote_voter endpoints.
pub struct GovTrackClient {
    client: Client,
    base_url: String,
}

impl GovTrackClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_string() })
    }

    #[inline] pub fn base_url(&self) -> &str { &self.base_url }

    /// GET `{base_url}/{endpoint}?{query}` and decode the JSON page.
    async fn get_page<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Vec<T>> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(url = %url, ?query, "GET");

        let resp = self.client.get(&url).query(query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Http { status: status.as_u16(), body });
        }

        let page: Page<T> = resp.json().await?;
        Ok(page.objects)
    }
}

impl VoteSource for GovTrackClient {
    async fn find_bill(&self, query: &BillQuery) -> Result<Bill> {
        let bills: Vec<BillObject> = self.get_page("bill", &[
            ("congress", query.congress.to_string()),
            ("bill_type", query.bill_type.to_string()),
            ("number", query.number.to_string()),
        ]).await?;

        let bill: Bill = bills.into_iter().next()
            .ok_or_else(|| Error::Lookup(format!(
                "no {} {} in congress {}", query.bill_type, query.number, query.congress)))?
            .into();
        info!(title = bill.title.as_deref().unwrap_or(""), "found bill");
        Ok(bill)
    }

    async fn find_vote(&self, query: &VoteQuery) -> Result<u64> {
        let votes: Vec<VoteObject> = self.get_page("vote", &[
            ("congress", query.congress.to_string()),
            ("chamber", query.chamber.to_string()),
            ("session", query.session.to_string()),
            ("number", query.number.to_string()),
        ]).await?;

        votes.first().map(|vote| vote.id)
            .ok_or_else(|| Error::Lookup(format!(
                "no {} roll call {} in session {}", query.chamber, query.number, query.session)))
    }

    async fn find_vote_voters(&self, vote_id: u64, limit: u32) -> Result<Vec<Voter>> {
        let voters: Vec<VoterObject> = self.get_page("vote_voter", &[
            ("vote", vote_id.to_string()),
            ("limit", limit.to_string()),
        ]).await?;

        Ok(voters.into_iter().map(Voter::from).collect())
    }
}
