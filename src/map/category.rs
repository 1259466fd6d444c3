use std::fmt::Write;

use crate::{
    common::Rgb,
    votes::{BallotDecision, DistrictKey, Party, VoteMapping},
};

/// What a district is drawn as: the member's party crossed with a yes/no reading of the ballot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayCategory {
    NoData,
    RepYes,
    DemYes,
    OtherYes,
    RepNo,
    DemNo,
    OtherNo,
}

impl DisplayCategory {
    pub const ALL: [DisplayCategory; 7] = [
        DisplayCategory::NoData,
        DisplayCategory::RepYes,
        DisplayCategory::DemYes,
        DisplayCategory::OtherYes,
        DisplayCategory::RepNo,
        DisplayCategory::DemNo,
        DisplayCategory::OtherNo,
    ];

    /// Category for a district. Districts without a key or a record have no data;
    /// anything other than Yea counts as "no".
    pub fn classify(key: Option<DistrictKey>, mapping: &VoteMapping) -> Self {
        let Some(record) = key.and_then(|key| mapping.get(&key)) else {
            return DisplayCategory::NoData;
        };

        match (record.party, record.decision) {
            (Party::Republican, BallotDecision::Yea) => DisplayCategory::RepYes,
            (Party::Democrat, BallotDecision::Yea) => DisplayCategory::DemYes,
            (Party::Other, BallotDecision::Yea) => DisplayCategory::OtherYes,
            (Party::Republican, _) => DisplayCategory::RepNo,
            (Party::Democrat, _) => DisplayCategory::DemNo,
            (Party::Other, _) => DisplayCategory::OtherNo,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DisplayCategory::NoData => "district-none",
            DisplayCategory::RepYes => "district-rep-yes",
            DisplayCategory::DemYes => "district-dem-yes",
            DisplayCategory::OtherYes => "district-other-yes",
            DisplayCategory::RepNo => "district-rep-no",
            DisplayCategory::DemNo => "district-dem-no",
            DisplayCategory::OtherNo => "district-other-no",
        }
    }

    /// Saturated hues for "yes", light tints of the same hue for "no".
    pub(crate) fn fill(self) -> Rgb {
        match self {
            DisplayCategory::NoData => Rgb::new(0xcc, 0xcc, 0xcc),
            DisplayCategory::RepYes => Rgb::new(0xb2, 0x18, 0x2b),
            DisplayCategory::DemYes => Rgb::new(0x21, 0x66, 0xac),
            DisplayCategory::OtherYes => Rgb::new(0x5e, 0x3c, 0x99),
            DisplayCategory::RepNo => Rgb::new(0xf4, 0xa5, 0x82),
            DisplayCategory::DemNo => Rgb::new(0x92, 0xc5, 0xde),
            DisplayCategory::OtherNo => Rgb::new(0xb2, 0xab, 0xd2),
        }
    }
}

/// Embedded stylesheet: background, one fill rule per category, and the two boundary strokes.
pub(crate) fn stylesheet() -> String {
    let mut css = String::from(".background { fill: none; }\n");
    for category in DisplayCategory::ALL {
        // writing to a String cannot fail
        let _ = writeln!(css, ".{} {{ fill: {}; }}", category.css_class(), category.fill());
    }
    css.push_str(".state-boundaries { fill: none; stroke: #fff; stroke-width: 1.5px; }\n");
    css.push_str(".district-boundaries { fill: none; stroke: #fff; stroke-width: .5px; stroke-linecap: round; stroke-linejoin: round; }\n");
    css
}
