use thiserror::Error;

use crate::model::client::ClientId;

/// Catalog entries that break the data-model invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("client {0} does not list any platform")]
    NoPlatforms(ClientId),

    #[error("client {client} lists install channel {channel_id} more than once")]
    DuplicateChannel {
        client: ClientId,
        channel_id: &'static str,
    },

    #[error("client {0} is registered more than once")]
    DuplicateClient(ClientId),
}
