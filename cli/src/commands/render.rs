use anyhow::{Context, Result};
use tracing::info;
use votemap::{render, write_image, ImageFormat, RenderOptions, Topology};

use crate::{cli::RenderArgs, commands::resolve_votes};

pub async fn run(args: &RenderArgs) -> Result<()> {
    let format = ImageFormat::from_path(&args.output)?;

    // read the geometry first so bad inputs fail before any network traffic
    let national = Topology::read(&args.national)?;
    let districts = Topology::read(&args.districts)?;

    let mapping = resolve_votes(&args.bill).await?;

    let bytes = render(&mapping, &national, &districts, &RenderOptions::default(), format)
        .context("failed to render map")?;

    info!(path = %args.output.display(), bytes = bytes.len(), "writing map");
    write_image(&args.output, &bytes, args.force)?;

    Ok(())
}
