//! End to end: bill lookup -> vote mapping -> rendered map on disk.

use std::collections::HashMap;

use votemap::{
    render, render_svg, write_image, Bill, BillQuery, Error, ImageFormat, MajorAction, RenderOptions, ResolverConfig,
    Result, Topology, VoteMapping, VoteQuery, VoteResolver, VoteSource, Voter,
};

/// Serves one bill with a single recorded roll call.
struct StaticSource {
    bill: u32,
    actions: Vec<&'static str>,
    votes: HashMap<(i32, u32), u64>,
    voters: Vec<Voter>,
}

impl VoteSource for StaticSource {
    async fn find_bill(&self, query: &BillQuery) -> Result<Bill> {
        if query.number != self.bill {
            return Err(Error::Lookup(format!("bill {} not found", query.number)));
        }
        Ok(Bill {
            id: Some(1),
            title: Some("H.R. 5389".into()),
            major_actions: self.actions.iter()
                .map(|xml| MajorAction { xml: Some(xml.to_string()), ..Default::default() })
                .collect(),
        })
    }

    async fn find_vote(&self, query: &VoteQuery) -> Result<u64> {
        self.votes.get(&(query.session, query.number)).copied()
            .ok_or_else(|| Error::Lookup(format!("vote {} not found", query.number)))
    }

    async fn find_vote_voters(&self, _vote_id: u64, limit: u32) -> Result<Vec<Voter>> {
        Ok(self.voters.iter().take(limit as usize).cloned().collect())
    }
}

fn hr5389() -> StaticSource {
    StaticSource {
        bill: 5389,
        actions: vec![
            r#"<action datetime="2016-06-07" state="REFERRED"><text>Referred to committee.</text></action>"#,
            r#"<vote how="roll" roll="279" datetime="2016-06-08T14:30:00-04:00" where="h" result="pass"/>"#,
        ],
        votes: HashMap::from([((2016, 279), 123_456)]),
        voters: vec![
            Voter {
                name: Some("Rep. One".into()),
                state: Some("NC".into()),
                district: Some(1),
                party: Some("Republican".into()),
                option: "Yea".into(),
            },
            Voter {
                name: Some("Rep. Two".into()),
                state: Some("NC".into()),
                district: Some(2),
                party: Some("Democrat".into()),
                option: "Not Voting".into(),
            },
        ],
    }
}

/// NC-1 and NC-2 side by side, and a third district with no ballot.
const DISTRICTS: &str = r#"{
    "type": "Topology",
    "transform": { "scale": [0.001, 0.001], "translate": [-81, 35] },
    "arcs": [
        [[1000, 0], [0, 1000]],
        [[1000, 1000], [-1000, 0], [0, -1000], [1000, 0]],
        [[1000, 0], [1000, 0], [0, 1000], [-1000, 0]],
        [[2000, 0], [1000, 0], [0, 1000], [-1000, 0], [0, -1000]]
    ],
    "objects": {
        "districts": { "type": "GeometryCollection", "geometries": [
            { "type": "Polygon", "id": 3701, "arcs": [[0, 1]] },
            { "type": "Polygon", "id": 3702, "arcs": [[2, -1]] },
            { "type": "Polygon", "id": 4501, "arcs": [[3]] }
        ]}
    }
}"#;

const NATIONAL: &str = r#"{
    "type": "Topology",
    "arcs": [
        [[-79, 34], [-79, 37]],
        [[-79, 37], [-82, 37], [-82, 34], [-79, 34]],
        [[-79, 34], [-77, 34], [-77, 37], [-79, 37]]
    ],
    "objects": {
        "land": { "type": "GeometryCollection", "geometries": [
            { "type": "Polygon", "arcs": [[0, 1]] },
            { "type": "Polygon", "arcs": [[2, -1]] }
        ]},
        "states": { "type": "GeometryCollection", "geometries": [
            { "type": "Polygon", "id": 37, "arcs": [[0, 1]] },
            { "type": "Polygon", "id": 45, "arcs": [[2, -1]] }
        ]}
    }
}"#;

fn topologies() -> (Topology, Topology) {
    (Topology::from_slice(NATIONAL.as_bytes()).unwrap(), Topology::from_slice(DISTRICTS.as_bytes()).unwrap())
}

/// CSS classes of the district paths, in document order.
fn district_classes(svg: &str) -> Vec<String> {
    svg.lines()
        .filter_map(|line| line.strip_prefix(r#"<path class=""#))
        .filter_map(|rest| rest.split('"').next())
        .filter(|class| !class.ends_with("-boundaries"))
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn recorded_vote_colors_its_district() {
    let resolver = VoteResolver::new(hr5389(), ResolverConfig::default());
    let mapping = resolver.resolve(5389).await.unwrap();
    assert_eq!(mapping.len(), 2);

    let (national, districts) = topologies();
    let svg = render_svg(&mapping, &national, &districts, &RenderOptions::default()).unwrap();
    assert_eq!(district_classes(&svg), ["district-rep-yes", "district-dem-no", "district-none"]);
}

#[tokio::test]
async fn unknown_bill_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("map.svg");

    let resolver = VoteResolver::new(hr5389(), ResolverConfig::default());
    assert!(matches!(resolver.resolve(1).await, Err(Error::Lookup(_))));
    assert!(!output.exists());
}

#[test]
fn empty_mapping_renders_every_district_without_data() {
    let (national, districts) = topologies();
    let svg = render_svg(&VoteMapping::new(), &national, &districts, &RenderOptions::default()).unwrap();
    assert_eq!(district_classes(&svg), ["district-none"; 3]);
}

#[test]
fn rendering_is_deterministic() {
    let (national, districts) = topologies();
    let first = render_svg(&VoteMapping::new(), &national, &districts, &RenderOptions::default()).unwrap();
    let second = render_svg(&VoteMapping::new(), &national, &districts, &RenderOptions::default()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn boundaries_follow_shared_arcs() {
    let (national, districts) = topologies();
    let svg = render_svg(&VoteMapping::new(), &national, &districts, &RenderOptions::default()).unwrap();

    // NC-1 | NC-2 share one arc, the state line is the shared national arc
    let boundary = |class: &str| svg.lines()
        .find(|line| line.starts_with(&format!(r#"<path class="{class}""#)))
        .map(|line| line.matches('M').count())
        .unwrap();
    assert_eq!(boundary("district-boundaries"), 1);
    assert_eq!(boundary("state-boundaries"), 1);

    assert!(svg.contains("<clipPath"));
    assert!(!svg.contains("<clippath"));
}

#[test]
fn unreadable_topology_is_an_input_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("us.json");
    assert!(matches!(Topology::read(&missing), Err(Error::Input { .. })));

    let garbage = dir.path().join("garbage.json");
    std::fs::write(&garbage, b"{ not json").unwrap();
    assert!(matches!(Topology::read(&garbage), Err(Error::Input { .. })));
}

#[test]
fn missing_object_writes_nothing() {
    let (national, districts) = topologies();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("map.svg");

    let options = RenderOptions { land_object: "nation".into(), ..RenderOptions::default() };
    let result = render(&VoteMapping::new(), &national, &districts, &options, ImageFormat::Svg)
        .and_then(|bytes| write_image(&output, &bytes, false));
    assert!(result.is_err());
    assert!(!output.exists());
}

#[test]
fn svg_is_written_to_disk() {
    let (national, districts) = topologies();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("maps").join("hr5389.svg");

    let format = ImageFormat::from_path(&output).unwrap();
    let bytes = render(&VoteMapping::new(), &national, &districts, &RenderOptions::default(), format).unwrap();
    write_image(&output, &bytes, false).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("<?xml"));
    assert!(written.trim_end().ends_with("</svg>"));
}
