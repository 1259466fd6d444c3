use std::fmt;

use crate::common::State;

/// District within a state. Single-seat states and delegates sit at-large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum District {
    AtLarge,
    Seat(u32),
}

impl District {
    /// District number 0 (or none) means at-large.
    pub fn from_number(number: u32) -> Self {
        match number {
            0 => District::AtLarge,
            n => District::Seat(n),
        }
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            District::AtLarge => f.write_str("atlarge"),
            District::Seat(n) => write!(f, "{n}"),
        }
    }
}

/// District code used in census files for the delegates of DC and the territories.
const DELEGATE_DISTRICT: u64 = 98;

/// Join key between district geometry and vote records: (numeric state code, district).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DistrictKey {
    pub state: u32,
    pub district: District,
}

impl DistrictKey {
    /// Decompose a geometry feature id: the trailing two digits are the district,
    /// the leading digits the state code. Remainder 0 is at-large, as is 98, the census code for
    /// a non-voting delegate. e.g. 3701 -> (37, 1), 3700 -> (37, atlarge), 1198 -> (11, atlarge).
    pub fn from_feature_id(id: u64) -> Self {
        let state = u32::try_from(id / 100).unwrap_or(u32::MAX);
        let district = match id % 100 {
            DELEGATE_DISTRICT => District::AtLarge,
            n => District::from_number(n as u32),
        };
        Self { state, district }
    }

    /// Key for a member's reported state and district; a missing district is at-large.
    pub fn from_state(state: State, district: Option<u32>) -> Self {
        Self {
            state: u32::from(state.fips()),
            district: district.map_or(District::AtLarge, District::from_number),
        }
    }

    /// Key from a postal abbreviation, or `None` if the abbreviation is unknown.
    pub fn from_abbr(abbr: &str, district: Option<u32>) -> Option<Self> {
        State::from_abbr(abbr).map(|state| Self::from_state(state, district))
    }

    /// The state's numeric code as text, e.g. "37".
    pub fn state_code(&self) -> String { self.state.to_string() }
}

impl fmt::Display for DistrictKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.state, self.district)
    }
}
