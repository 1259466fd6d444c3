use std::{collections::{hash_map, HashMap}, fmt};

use crate::votes::DistrictKey;

/// How a member voted on a roll call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BallotDecision {
    Yea,
    Nay,
    /// Present, not voting, or anything else the API reports.
    Other,
}

impl BallotDecision {
    /// Parse an API option value ("Yea", "Aye", "Nay", "No", "Not Voting", ...) or key ("+", "-", "P", "0").
    pub fn parse(option: &str) -> Self {
        match option.trim().to_ascii_lowercase().as_str() {
            "yea" | "aye" | "yes" | "+" => BallotDecision::Yea,
            "nay" | "no" | "-" => BallotDecision::Nay,
            _ => BallotDecision::Other,
        }
    }
}

impl fmt::Display for BallotDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BallotDecision::Yea => "Yea",
            BallotDecision::Nay => "Nay",
            BallotDecision::Other => "Other",
        })
    }
}

/// Party affiliation, collapsed to the two majority parties plus everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    Republican,
    Democrat,
    Other,
}

impl Party {
    pub fn parse(party: &str) -> Self {
        match party.trim().to_ascii_lowercase().as_str() {
            "republican" | "r" | "rep" => Party::Republican,
            "democrat" | "democratic" | "d" | "dem" => Party::Democrat,
            _ => Party::Other,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Party::Republican => "Republican",
            Party::Democrat => "Democrat",
            Party::Other => "Other",
        })
    }
}

/// One district's recorded ballot on a roll call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteRecord {
    pub key: DistrictKey,
    pub decision: BallotDecision,
    pub party: Party,
}

/// All recorded ballots of a roll call, keyed by district. Later inserts overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoteMapping {
    records: HashMap<DistrictKey, VoteRecord>,
}

impl VoteMapping {
    pub fn new() -> Self { Self::default() }

    /// Insert a record, replacing (and returning) any previous record for the same district.
    pub fn insert(&mut self, record: VoteRecord) -> Option<VoteRecord> {
        self.records.insert(record.key, record)
    }

    #[inline] pub fn get(&self, key: &DistrictKey) -> Option<&VoteRecord> { self.records.get(key) }

    #[inline] pub fn len(&self) -> usize { self.records.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Records in unspecified order.
    pub fn iter(&self) -> hash_map::Values<'_, DistrictKey, VoteRecord> { self.records.values() }

    /// Records sorted by district key.
    pub fn sorted(&self) -> Vec<&VoteRecord> {
        let mut records: Vec<_> = self.records.values().collect();
        records.sort_by_key(|r| r.key);
        records
    }
}

impl Extend<VoteRecord> for VoteMapping {
    fn extend<I: IntoIterator<Item = VoteRecord>>(&mut self, iter: I) {
        for record in iter { self.insert(record); }
    }
}

impl FromIterator<VoteRecord> for VoteMapping {
    fn from_iter<I: IntoIterator<Item = VoteRecord>>(iter: I) -> Self {
        let mut mapping = Self::new();
        mapping.extend(iter);
        mapping
    }
}
