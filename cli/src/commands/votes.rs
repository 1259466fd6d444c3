use std::io::{self, Write};

use anyhow::Result;
use votemap::VoteMapping;

use crate::{cli::VoteArgs, commands::resolve_votes};

pub async fn run(args: &VoteArgs) -> Result<()> {
    let mapping = resolve_votes(&args.bill).await?;
    print_table(&mut io::stdout().lock(), &mapping)?;
    Ok(())
}

/// One line per district, sorted by state code then district.
fn print_table(out: &mut impl Write, mapping: &VoteMapping) -> io::Result<()> {
    writeln!(out, "{:<6} {:<9} {:<6} {}", "state", "district", "vote", "party")?;
    for record in mapping.sorted() {
        writeln!(out, "{:<6} {:<9} {:<6} {}",
            record.key.state_code(), record.key.district.to_string(), record.decision.to_string(), record.party)?;
    }
    Ok(())
}
