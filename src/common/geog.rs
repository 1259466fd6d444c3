use std::fmt;

/// USPS postal codes for every jurisdiction that seats a House member or delegate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum State {
    AL, AK, AZ, AR, CA, CO, CT, DE, FL, GA,
    HI, ID, IL, IN, IA, KS, KY, LA, ME, MD,
    MA, MI, MN, MS, MO, MT, NE, NV, NH, NJ,
    NM, NY, NC, ND, OH, OK, OR, PA, RI, SC,
    SD, TN, TX, UT, VT, VA, WA, WV, WI, WY,
    DC, AS, GU, MP, PR, VI,
}

impl State {
    pub const ALL: [State; 56] = [
        State::AL, State::AK, State::AZ, State::AR, State::CA, State::CO, State::CT, State::DE, State::FL, State::GA,
        State::HI, State::ID, State::IL, State::IN, State::IA, State::KS, State::KY, State::LA, State::ME, State::MD,
        State::MA, State::MI, State::MN, State::MS, State::MO, State::MT, State::NE, State::NV, State::NH, State::NJ,
        State::NM, State::NY, State::NC, State::ND, State::OH, State::OK, State::OR, State::PA, State::RI, State::SC,
        State::SD, State::TN, State::TX, State::UT, State::VT, State::VA, State::WA, State::WV, State::WI, State::WY,
        State::DC, State::AS, State::GU, State::MP, State::PR, State::VI,
    ];

    /// Return (numeric FIPS code, UPPER_SNAKE name).
    fn info(self) -> (u8, &'static str) {
        match self {
            State::AL => (1, "ALABAMA"),
            State::AK => (2, "ALASKA"),
            State::AZ => (4, "ARIZONA"),
            State::AR => (5, "ARKANSAS"),
            State::CA => (6, "CALIFORNIA"),
            State::CO => (8, "COLORADO"),
            State::CT => (9, "CONNECTICUT"),
            State::DE => (10, "DELAWARE"),
            State::FL => (12, "FLORIDA"),
            State::GA => (13, "GEORGIA"),
            State::HI => (15, "HAWAII"),
            State::ID => (16, "IDAHO"),
            State::IL => (17, "ILLINOIS"),
            State::IN => (18, "INDIANA"),
            State::IA => (19, "IOWA"),
            State::KS => (20, "KANSAS"),
            State::KY => (21, "KENTUCKY"),
            State::LA => (22, "LOUISIANA"),
            State::ME => (23, "MAINE"),
            State::MD => (24, "MARYLAND"),
            State::MA => (25, "MASSACHUSETTS"),
            State::MI => (26, "MICHIGAN"),
            State::MN => (27, "MINNESOTA"),
            State::MS => (28, "MISSISSIPPI"),
            State::MO => (29, "MISSOURI"),
            State::MT => (30, "MONTANA"),
            State::NE => (31, "NEBRASKA"),
            State::NV => (32, "NEVADA"),
            State::NH => (33, "NEW_HAMPSHIRE"),
            State::NJ => (34, "NEW_JERSEY"),
            State::NM => (35, "NEW_MEXICO"),
            State::NY => (36, "NEW_YORK"),
            State::NC => (37, "NORTH_CAROLINA"),
            State::ND => (38, "NORTH_DAKOTA"),
            State::OH => (39, "OHIO"),
            State::OK => (40, "OKLAHOMA"),
            State::OR => (41, "OREGON"),
            State::PA => (42, "PENNSYLVANIA"),
            State::RI => (44, "RHODE_ISLAND"),
            State::SC => (45, "SOUTH_CAROLINA"),
            State::SD => (46, "SOUTH_DAKOTA"),
            State::TN => (47, "TENNESSEE"),
            State::TX => (48, "TEXAS"),
            State::UT => (49, "UTAH"),
            State::VT => (50, "VERMONT"),
            State::VA => (51, "VIRGINIA"),
            State::WA => (53, "WASHINGTON"),
            State::WV => (54, "WEST_VIRGINIA"),
            State::WI => (55, "WISCONSIN"),
            State::WY => (56, "WYOMING"),
            State::DC => (11, "DISTRICT_OF_COLUMBIA"),
            State::AS => (60, "AMERICAN_SAMOA"),
            State::GU => (66, "GUAM"),
            State::MP => (69, "NORTHERN_MARIANA_ISLANDS"),
            State::PR => (72, "PUERTO_RICO"),
            State::VI => (78, "US_VIRGIN_ISLANDS"),
        }
    }

    /// Numeric FIPS state code, e.g. 37 for NC.
    #[inline] pub fn fips(self) -> u8 { self.info().0 }

    #[inline] pub fn name(self) -> &'static str { self.info().1 }

    /// Two-letter postal code.
    pub fn abbr(self) -> &'static str {
        match self {
            State::AL => "AL", State::AK => "AK", State::AZ => "AZ", State::AR => "AR",
            State::CA => "CA", State::CO => "CO", State::CT => "CT", State::DE => "DE",
            State::FL => "FL", State::GA => "GA", State::HI => "HI", State::ID => "ID",
            State::IL => "IL", State::IN => "IN", State::IA => "IA", State::KS => "KS",
            State::KY => "KY", State::LA => "LA", State::ME => "ME", State::MD => "MD",
            State::MA => "MA", State::MI => "MI", State::MN => "MN", State::MS => "MS",
            State::MO => "MO", State::MT => "MT", State::NE => "NE", State::NV => "NV",
            State::NH => "NH", State::NJ => "NJ", State::NM => "NM", State::NY => "NY",
            State::NC => "NC", State::ND => "ND", State::OH => "OH", State::OK => "OK",
            State::OR => "OR", State::PA => "PA", State::RI => "RI", State::SC => "SC",
            State::SD => "SD", State::TN => "TN", State::TX => "TX", State::UT => "UT",
            State::VT => "VT", State::VA => "VA", State::WA => "WA", State::WV => "WV",
            State::WI => "WI", State::WY => "WY", State::DC => "DC", State::AS => "AS",
            State::GU => "GU", State::MP => "MP", State::PR => "PR", State::VI => "VI",
        }
    }

    /// Case-insensitive lookup by postal code.
    pub fn from_abbr(code: &str) -> Option<State> {
        let code = code.trim();
        State::ALL.iter().copied().find(|state| state.abbr().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::State;

    #[test]
    fn abbr_round_trips() {
        for state in State::ALL {
            assert_eq!(State::from_abbr(state.abbr()), Some(state));
        }
    }

    #[test]
    fn fips_codes_are_unique() {
        let codes: HashSet<u8> = State::ALL.iter().map(|s| s.fips()).collect();
        assert_eq!(codes.len(), State::ALL.len());
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(State::from_abbr(" nc "), Some(State::NC));
        assert_eq!(State::NC.fips(), 37);
        assert_eq!(State::from_abbr("ZZ"), None);
        assert_eq!(State::from_abbr(""), None);
    }
}
