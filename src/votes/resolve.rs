use futures::future::try_join_all;
use tracing::{debug, info, warn};

use crate::{Result, votes::{
    BallotDecision, Bill, BillQuery, BillType, Chamber, DistrictKey, Party, RollCallRef,
    VoteMapping, VoteQuery, VoteRecord, VoteSource, Voter, parse_action,
}};

/// Seats in the House including non-voting delegates; the voter page size.
pub const HOUSE_SIZE: u32 = 441;

/// Which bill family and chamber to resolve votes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    pub congress: u32,
    pub bill_type: BillType,
    pub chamber: Chamber,
    pub voter_limit: u32,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            congress: 114,
            bill_type: BillType::HouseBill,
            chamber: Chamber::House,
            voter_limit: HOUSE_SIZE,
        }
    }
}

/// Turns a bill number into the district-level ballots of its recorded roll calls.
pub struct VoteResolver<S> {
    source: S,
    config: ResolverConfig,
}

impl<S: VoteSource> VoteResolver<S> {
    pub fn new(source: S, config: ResolverConfig) -> Self { Self { source, config } }

    #[inline] pub fn config(&self) -> &ResolverConfig { &self.config }

    #[inline] pub fn source(&self) -> &S { &self.source }

    /// Resolve every recorded roll call on the bill into one mapping.
    ///
    /// Each roll call is fetched concurrently; the mapping is assembled only after all of them
    /// complete, in major-action order, so a later action overwrites an earlier one for the same
    /// district. Any failed bill, vote or voter lookup aborts the whole resolution.
    pub async fn resolve(&self, bill_number: u32) -> Result<VoteMapping> {
        let query = BillQuery {
            congress: self.config.congress,
            bill_type: self.config.bill_type,
            number: bill_number,
        };

        info!(congress = query.congress, bill_type = %query.bill_type, number = query.number, "looking up bill");
        let bill = self.source.find_bill(&query).await?;

        let roll_calls = roll_calls(&bill, self.config.chamber);
        info!(actions = bill.major_actions.len(), roll_calls = roll_calls.len(), "scanned major actions");

        let chains = roll_calls.iter().map(|&roll_call| self.resolve_roll_call(roll_call));
        let ballots = try_join_all(chains).await?;

        let mapping: VoteMapping = ballots.into_iter().flatten().collect();
        if mapping.is_empty() {
            warn!(number = bill_number, "no recorded roll-call ballots; every district will render without data");
        } else {
            info!(districts = mapping.len(), "resolved vote mapping");
        }
        Ok(mapping)
    }

    /// One chain: roll call -> vote id -> ballots.
    async fn resolve_roll_call(&self, roll_call: RollCallRef) -> Result<Vec<VoteRecord>> {
        let query = VoteQuery {
            congress: self.config.congress,
            chamber: self.config.chamber,
            session: roll_call.year,
            number: roll_call.roll,
        };

        debug!(session = query.session, roll = query.number, "looking up roll call");
        let vote_id = self.source.find_vote(&query).await?;
        let voters = self.source.find_vote_voters(vote_id, self.config.voter_limit).await?;
        debug!(vote_id, voters = voters.len(), "fetched ballots");

        Ok(voters.iter().filter_map(voter_record).collect())
    }
}

/// Recorded roll calls of `chamber` referenced by the bill's major actions, in action order.
/// Actions that are not votes, whose payload cannot be read, or that were taken in the other
/// chamber are skipped. A vote without a `where` attribute is taken to be in `chamber`.
pub(crate) fn roll_calls(bill: &Bill, chamber: Chamber) -> Vec<RollCallRef> {
    bill.major_actions.iter().enumerate()
        .filter_map(|(i, action)| {
            let xml = action.xml.as_deref()?;
            let roll_call = match parse_action(xml) {
                Ok(roll_call) => roll_call?,
                Err(e) => {
                    debug!(action = i, error = %e, "skipping major action");
                    return None;
                }
            };
            if roll_call.chamber.is_some_and(|c| c != chamber) {
                debug!(action = i, roll = roll_call.roll, "skipping roll call in the other chamber");
                return None;
            }
            Some(roll_call)
        })
        .collect()
}

/// Convert a ballot into a vote record; ballots without a known state are dropped.
fn voter_record(voter: &Voter) -> Option<VoteRecord> {
    let Some(key) = voter.state.as_deref().and_then(|abbr| DistrictKey::from_abbr(abbr, voter.district)) else {
        debug!(name = voter.name.as_deref().unwrap_or("?"), state = ?voter.state, "skipping ballot with unknown state");
        return None;
    };

    Some(VoteRecord {
        key,
        decision: BallotDecision::parse(&voter.option),
        party: voter.party.as_deref().map_or(Party::Other, Party::parse),
    })
}
