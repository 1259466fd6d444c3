use std::{fmt, str::FromStr};

use crate::Result;

/// Legislation type as named by the GovTrack API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillType {
    HouseBill,
    HouseResolution,
    HouseJointResolution,
    HouseConcurrentResolution,
    SenateBill,
    SenateResolution,
    SenateJointResolution,
    SenateConcurrentResolution,
}

impl BillType {
    pub const ALL: [BillType; 8] = [
        BillType::HouseBill,
        BillType::HouseResolution,
        BillType::HouseJointResolution,
        BillType::HouseConcurrentResolution,
        BillType::SenateBill,
        BillType::SenateResolution,
        BillType::SenateJointResolution,
        BillType::SenateConcurrentResolution,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BillType::HouseBill => "house_bill",
            BillType::HouseResolution => "house_resolution",
            BillType::HouseJointResolution => "house_joint_resolution",
            BillType::HouseConcurrentResolution => "house_concurrent_resolution",
            BillType::SenateBill => "senate_bill",
            BillType::SenateResolution => "senate_resolution",
            BillType::SenateJointResolution => "senate_joint_resolution",
            BillType::SenateConcurrentResolution => "senate_concurrent_resolution",
        }
    }
}

impl fmt::Display for BillType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for BillType {
    type Err = String;

    /// Parse an API name such as "house_bill" (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        BillType::ALL.iter().copied()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown bill type {s:?}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chamber {
    House,
    Senate,
}

impl Chamber {
    /// Chamber of a vote payload's `where` attribute ("h" or "s").
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "h" | "H" => Some(Chamber::House),
            "s" | "S" => Some(Chamber::Senate),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Chamber::House => "house",
            Chamber::Senate => "senate",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BillQuery {
    pub congress: u32,
    pub bill_type: BillType,
    pub number: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoteQuery {
    pub congress: u32,
    pub chamber: Chamber,
    /// Session year.
    pub session: i32,
    pub number: u32,
}

/// A significant event in a bill's history. `xml` is the embedded structured payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MajorAction {
    pub datetime: Option<String>,
    pub description: Option<String>,
    pub xml: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bill {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub major_actions: Vec<MajorAction>,
}

/// One member's ballot as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Voter {
    pub name: Option<String>,
    /// Postal abbreviation of the member's state.
    pub state: Option<String>,
    /// District within the state; 0 or `None` for at-large seats.
    pub district: Option<u32>,
    pub party: Option<String>,
    /// Option value ("Yea", "Nay", ...) or key ("+", "-").
    pub option: String,
}

/// Where vote data comes from. Implemented over HTTP by `GovTrackClient`.
#[allow(async_fn_in_trait)]
pub trait VoteSource {
    /// Look up a bill. A bill that does not exist is a lookup error.
    async fn find_bill(&self, query: &BillQuery) -> Result<Bill>;

    /// Look up a roll-call vote and return its id. A vote that does not exist is a lookup error.
    async fn find_vote(&self, query: &VoteQuery) -> Result<u64>;

    /// Fetch up to `limit` ballots cast in vote `vote_id`.
    async fn find_vote_voters(&self, vote_id: u64, limit: u32) -> Result<Vec<Voter>>;
}
