use async_trait::async_trait;

use crate::{
    core::location::{Coordinates, ResolvedLocation},
    prelude::*,
};

/// Queries shorter than this are not worth searching for.
pub const MIN_QUERY_LENGTH: usize = 2;

#[async_trait]
pub trait LocationResolver: Sync {
    /// Find the candidate locations for the free-text query, best match first.
    ///
    /// Blank and too short queries resolve to nothing without calling the service.
    #[instrument(skip_all, fields(query = query, limit = limit))]
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<ResolvedLocation>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LENGTH || limit == 0 {
            debug!("skipped");
            return Ok(Vec::new());
        }
        self.lookup(query, limit).await
    }

    async fn lookup(&self, query: &str, limit: usize) -> Result<Vec<ResolvedLocation>>;

    /// Find the display name for the coordinates.
    async fn reverse(&self, coordinates: Coordinates) -> Result<ResolvedLocation>;
}
