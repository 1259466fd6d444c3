//! Vote resolution: bill -> recorded roll calls -> per-district ballots.

mod action;
mod key;
mod record;
mod resolve;
mod source;

pub use action::{parse_action, RollCallRef};
pub use key::{District, DistrictKey};
pub use record::{BallotDecision, Party, VoteMapping, VoteRecord};
pub use resolve::{ResolverConfig, VoteResolver, HOUSE_SIZE};
pub use source::{Bill, BillQuery, BillType, Chamber, MajorAction, Voter, VoteQuery, VoteSource};
