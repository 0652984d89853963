use clap::Parser;

use crate::{
    api::LocationResolver,
    cli::services::ServiceArgs,
    prelude::*,
    tables::build_locations_table,
};

#[derive(Parser)]
pub struct SearchArgs {
    /// Free-text place name.
    pub query: String,

    #[clap(long, default_value = "5")]
    pub limit: usize,

    #[clap(long)]
    pub json: bool,

    #[clap(flatten)]
    pub services: ServiceArgs,
}

#[instrument(skip_all, fields(query = %args.query))]
pub async fn search(args: &SearchArgs) -> Result {
    let resolver = args.services.location_resolver(args.services.client()?);
    let locations = resolver.search(&args.query, args.limit).await?;
    info!(n_locations = locations.len(), "found");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&locations)?);
    } else {
        println!("{}", build_locations_table(&locations));
    }
    Ok(())
}
