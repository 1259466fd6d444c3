use std::path::PathBuf;

use votemap::{BillType, DEFAULT_BASE_URL};

/// Roll-call vote maps of US congressional districts
#[derive(clap::Parser, Debug)]
#[command(name = "votemap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render a bill's House vote as a district map (forbids stdout)
    Render(RenderArgs),

    /// Print how each district voted on a bill
    Votes(VoteArgs),
}

/// Which bill to look up, and where.
#[derive(clap::Args, Debug)]
pub struct BillArgs {
    /// Bill number, e.g. 5389
    #[arg(long)]
    pub bill: u32,

    /// Congress number
    #[arg(long, default_value_t = 114)]
    pub congress: u32,

    /// Bill type as named by the API, e.g. house_bill, senate_bill
    #[arg(long, default_value_t = BillType::HouseBill)]
    pub bill_type: BillType,

    /// GovTrack API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL, value_hint = clap::ValueHint::Url)]
    pub api_base: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub bill: BillArgs,

    /// National TopoJSON (land and state outlines)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub national: PathBuf,

    /// Congressional district TopoJSON
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub districts: PathBuf,

    /// Output image, .svg or .png
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: PathBuf,

    /// Overwrite the output file if it exists
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args, Debug)]
pub struct VoteArgs {
    #[command(flatten)]
    pub bill: BillArgs,
}
