use clap::Parser;

use crate::{
    api::RouteProvider,
    cli::services::ServiceArgs,
    core::{
        planner::{Endpoint, resolve},
        route::RouteSummary,
    },
    prelude::*,
    tables::build_route_table,
};

#[derive(Parser)]
pub struct RouteArgs {
    /// Starting point: a place name or `latitude,longitude`.
    #[clap(long)]
    pub from: String,

    /// Destination: a place name or `latitude,longitude`.
    #[clap(long)]
    pub to: String,

    #[clap(long)]
    pub json: bool,

    #[clap(flatten)]
    pub services: ServiceArgs,
}

#[instrument(skip_all, fields(from = %args.from, to = %args.to))]
pub async fn route(args: &RouteArgs) -> Result {
    let client = args.services.client()?;
    let resolver = args.services.location_resolver(client.clone());
    let source = resolve(&resolver, Endpoint::Source, &args.from).await?;
    let destination = resolve(&resolver, Endpoint::Destination, &args.to).await?;
    let route = args
        .services
        .route_provider(client)
        .get_route(source.coordinates, destination.coordinates)
        .await
        .context("routing failed")?;
    let summary = RouteSummary::new(&route, &source, &destination);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", build_route_table(&summary));
    }
    Ok(())
}
