#![doc = "Roll-call vote maps of US congressional districts"]
mod common;
mod error;
#[cfg(feature = "fetch")]
mod govtrack;
mod map;
mod topology;
mod votes;

#[doc(inline)]
pub use common::{write_image, State};

#[doc(inline)]
pub use error::{Error, Result};

#[cfg(feature = "fetch")]
#[doc(inline)]
pub use govtrack::{ClientConfig, GovTrackClient, DEFAULT_BASE_URL};

#[doc(inline)]
pub use map::{render, render_svg, AlbersUsa, DisplayCategory, ImageFormat, RenderOptions};

#[doc(inline)]
pub use topology::{Feature, FeatureId, Geometry, Shape, Topology};

#[doc(inline)]
pub use votes::{
    parse_action, BallotDecision, Bill, BillQuery, BillType, Chamber, District, DistrictKey, MajorAction, Party,
    ResolverConfig, RollCallRef, VoteMapping, VoteQuery, VoteRecord, VoteResolver, VoteSource, Voter, HOUSE_SIZE,
};
