use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};

use crate::{Error, Result, votes::Chamber};

/// A recorded roll call referenced by one of a bill's major actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollCallRef {
    pub roll: u32,
    /// Calendar year of the vote, which is the API's session identifier.
    pub year: i32,
    /// Chamber from the payload's `where` attribute, if present and known.
    pub chamber: Option<Chamber>,
}

/// Inspect a major action's embedded XML payload.
///
/// Returns `Ok(None)` when the action is not a recorded vote: the root element is not `<vote>`,
/// or the roll number is absent, not a number, or not positive (voice votes).
/// Malformed XML or a vote without a usable `datetime` is a parse error.
pub fn parse_action(xml: &str) -> Result<Option<RollCallRef>> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| Error::Parse(format!("malformed action payload: {e}")))?;

    let vote = doc.root_element();
    if vote.tag_name().name() != "vote" {
        return Ok(None);
    }

    let Some(roll) = vote.attribute("roll")
        .and_then(|roll| roll.trim().parse::<i64>().ok())
        .filter(|&roll| roll > 0)
        .and_then(|roll| u32::try_from(roll).ok())
    else {
        return Ok(None);
    };

    let datetime = vote.attribute("datetime")
        .ok_or_else(|| Error::Parse(format!("vote {roll} has no datetime")))?;
    let year = parse_year(datetime)
        .ok_or_else(|| Error::Parse(format!("vote {roll} has unreadable datetime {datetime:?}")))?;

    let chamber = vote.attribute("where").and_then(Chamber::from_code);

    Ok(Some(RollCallRef { roll, year, chamber }))
}

/// Year of an RFC 3339 timestamp (in its own offset), a naive timestamp, or a bare date.
fn parse_year(datetime: &str) -> Option<i32> {
    let s = datetime.trim();
    if let Ok(dt) = s.parse::<DateTime<FixedOffset>>() { return Some(dt.year()) }
    if let Ok(dt) = s.parse::<NaiveDateTime>() { return Some(dt.year()) }
    s.parse::<NaiveDate>().ok().map(|d| d.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_vote_is_a_candidate() {
        let xml = r#"<vote roll="42" datetime="2016-03-01"></vote>"#;
        assert_eq!(parse_action(xml).unwrap(), Some(RollCallRef { roll: 42, year: 2016, chamber: None }));
    }

    #[test]
    fn full_govtrack_payload() {
        let xml = r#"<vote how="roll" type="vote" datetime="2016-12-31T23:30:00-05:00" where="h" result="pass" state="pass_over:house" roll="123"><text>On passage Passed by the Yeas and Nays: 264 - 158 (Roll no. 123).</text><reference ref="CR H1234-1235" label="text as House agreed to"/></vote>"#;
        // the year follows the timestamp's own offset
        assert_eq!(parse_action(xml).unwrap(), Some(RollCallRef { roll: 123, year: 2016, chamber: Some(Chamber::House) }));
    }

    #[test]
    fn senate_vote_keeps_its_chamber() {
        let xml = r#"<vote how="roll" where="s" roll="100" datetime="2016-09-20T12:00:00-04:00"/>"#;
        assert_eq!(parse_action(xml).unwrap(), Some(RollCallRef { roll: 100, year: 2016, chamber: Some(Chamber::Senate) }));
    }

    #[test]
    fn naive_timestamp_year() {
        assert_eq!(parse_year("2015-07-08T14:01:00"), Some(2015));
        assert_eq!(parse_year("2015-07-08"), Some(2015));
        assert_eq!(parse_year("July 8"), None);
    }

    #[test]
    fn non_vote_action_is_skipped() {
        let xml = r#"<action datetime="2016-05-25" state="REFERRED"><text>Referred to the House Committee.</text></action>"#;
        assert_eq!(parse_action(xml).unwrap(), None);
    }

    #[test]
    fn roll_zero_is_not_a_recorded_vote() {
        assert_eq!(parse_action(r#"<vote roll="0" datetime="2016-03-01"/>"#).unwrap(), None);
        assert_eq!(parse_action(r#"<vote how="by voice vote" datetime="2016-03-01"/>"#).unwrap(), None);
        assert_eq!(parse_action(r#"<vote roll="-3" datetime="2016-03-01"/>"#).unwrap(), None);
        assert_eq!(parse_action(r#"<vote roll="n/a" datetime="2016-03-01"/>"#).unwrap(), None);
    }

    #[test]
    fn malformed_payloads_are_parse_errors() {
        assert!(matches!(parse_action(r#"<vote roll="42" datetime="2016-03-01">"#), Err(Error::Parse(_))));
        assert!(matches!(parse_action(""), Err(Error::Parse(_))));
        assert!(matches!(parse_action(r#"<vote roll="42"/>"#), Err(Error::Parse(_))));
        assert!(matches!(parse_action(r#"<vote roll="42" datetime="soon"/>"#), Err(Error::Parse(_))));
    }
}
