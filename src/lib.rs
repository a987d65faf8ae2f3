//! Client catalog and link formatting for a matrix.to style redirector.
//!
//! Given a link already validated by the parser, the catalog decides which
//! clients can open it, how to deep-link into them, and where to install them.

pub mod clients;
pub mod error;
pub mod model;

pub use clients::catalog::{Catalog, ClientFilter};
pub use error::CatalogError;
pub use model::client::{Client, ClientDescription, ClientId, ClientKind, LinkedClient, TextClient};
pub use model::install_link::InstallLink;
pub use model::invite::InviteMarkup;
pub use model::platform::{Maturity, Platform};
pub use model::safe_link::{LinkArguments, LinkKind, SafeLink};
