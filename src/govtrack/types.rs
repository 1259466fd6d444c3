//! Wire format of the GovTrack v2 list endpoints.

use serde::Deserialize;
use serde_json::Value;

use crate::votes::{Bill, MajorAction, Voter};

/// Every list endpoint wraps its results in `objects`.
#[derive(Debug, Deserialize)]
pub(crate) struct Page<T> {
    #[serde(default = "Vec::new")]
    pub(crate) objects: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BillObject {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    title: Option<String>,
    /// Each action is an array: [datetime, action code, description, xml, ...].
    #[serde(default)]
    major_actions: Vec<Vec<Value>>,
}

impl From<BillObject> for Bill {
    fn from(bill: BillObject) -> Self {
        let text = |action: &[Value], i: usize| action.get(i).and_then(Value::as_str).map(str::to_string);
        Bill {
            id: bill.id,
            title: bill.title,
            major_actions: bill.major_actions.iter()
                .map(|action| MajorAction {
                    datetime: text(action, 0),
                    description: text(action, 2),
                    xml: text(action, 3),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct VoteObject {
    pub(crate) id: u64,
}

#[derive(Debug, Default, Deserialize)]
struct VoteOption {
    #[serde(default)]
    key: Option<String>,
    #[serde(default)]
    value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Person {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PersonRole {
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    district: Option<i64>,
    #[serde(default)]
    party: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VoterObject {
    #[serde(default)]
    option: VoteOption,
    #[serde(default)]
    person: Option<Person>,
    #[serde(default)]
    person_role: Option<PersonRole>,
}

impl From<VoterObject> for Voter {
    fn from(voter: VoterObject) -> Self {
        let role = voter.person_role.unwrap_or_default();
        Voter {
            name: voter.person.and_then(|p| p.name),
            state: role.state,
            district: role.district.and_then(|d| u32::try_from(d).ok()),
            party: role.party,
            option: voter.option.value.or(voter.option.key).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bill_actions_carry_embedded_xml() {
        let json = r#"{
            "meta": { "limit": 100, "offset": 0, "total_count": 1 },
            "objects": [{
                "id": 347362,
                "title": "H.R. 5389: Leveraging Emerging Technologies Act of 2016",
                "major_actions": [
                    ["2016-06-07 00:00:00", 2, "Introduced in House", "<action datetime=\"2016-06-07\" state=\"REFERRED\"/>"],
                    ["2016-09-12 18:52:00", 19, "Passed House", "<vote datetime=\"2016-09-12T18:52:00-04:00\" roll=\"504\" how=\"roll\"/>"],
                    ["2016-09-13 00:00:00", 20]
                ]
            }]
        }"#;
        let page: Page<BillObject> = serde_json::from_str(json).unwrap();
        let bill: Bill = page.objects.into_iter().next().unwrap().into();

        assert_eq!(bill.id, Some(347362));
        assert_eq!(bill.major_actions.len(), 3);
        assert_eq!(bill.major_actions[0].description.as_deref(), Some("Introduced in House"));
        assert!(bill.major_actions[1].xml.as_deref().unwrap().starts_with("<vote"));
        assert_eq!(bill.major_actions[2].xml, None);
    }

    #[test]
    fn voter_role_maps_to_ballot() {
        let json = r#"{ "objects": [
            { "option": { "key": "+", "value": "Yea" },
              "person": { "name": "Rep. G. K. Butterfield [D-NC1]" },
              "person_role": { "state": "NC", "district": 1, "party": "Democrat" } },
            { "option": { "key": "0" },
              "person_role": { "state": "WY", "district": 0, "party": "Republican" } },
            { "option": { "key": "-", "value": "Nay" },
              "person_role": { "state": "PR", "district": null, "party": "Republican" } }
        ]}"#;
        let page: Page<VoterObject> = serde_json::from_str(json).unwrap();
        let voters: Vec<Voter> = page.objects.into_iter().map(Voter::from).collect();

        assert_eq!(voters[0].state.as_deref(), Some("NC"));
        assert_eq!(voters[0].district, Some(1));
        assert_eq!(voters[0].option, "Yea");
        assert_eq!(voters[1].option, "0");
        assert_eq!(voters[1].name, None);
        assert_eq!(voters[2].district, None);
    }

    #[test]
    fn page_of_types_without_default_decodes() {
        let votes: Page<VoteObject> = serde_json::from_str(r#"{ "objects": [{ "id": 117238 }] }"#).unwrap();
        assert_eq!(votes.objects.iter().map(|v| v.id).collect::<Vec<_>>(), [117238]);

        let bills: Page<BillObject> = serde_json::from_str(r#"{ "meta": { "total_count": 0 } }"#).unwrap();
        assert!(bills.objects.is_empty());
    }

    #[test]
    fn empty_page_has_no_objects() {
        let page: Page<VoteObject> = serde_json::from_str(r#"{ "meta": {} }"#).unwrap();
        assert!(page.objects.is_empty());
    }
}
