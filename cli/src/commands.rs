pub mod render;
pub mod votes;

use std::time::Duration;

use anyhow::{Context, Result};
use votemap::{ClientConfig, GovTrackClient, ResolverConfig, VoteMapping, VoteResolver};

use crate::cli::BillArgs;

/// Resolve the bill's recorded House votes into a per-district mapping.
pub async fn resolve_votes(args: &BillArgs) -> Result<VoteMapping> {
    let client = GovTrackClient::new(ClientConfig {
        base_url: args.api_base.clone(),
        timeout: Duration::from_secs(args.timeout),
        ..ClientConfig::default()
    })?;

    let resolver = VoteResolver::new(client, ResolverConfig {
        congress: args.congress,
        bill_type: args.bill_type,
        ..ResolverConfig::default()
    });

    resolver.resolve(args.bill).await
        .with_context(|| format!("failed to resolve votes for {} {} ({}th congress)", args.bill_type, args.bill, args.congress))
}
