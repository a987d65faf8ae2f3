use std::collections::HashSet;
use std::sync::LazyLock;

use crate::clients::{element, fractal, nheko, weechat};
use crate::error::CatalogError;
use crate::model::client::{Client, ClientId};
use crate::model::platform::{Maturity, Platform};
use crate::model::safe_link::SafeLink;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::new(vec![
        element::element().into(),
        element::element_develop().into(),
        weechat::weechat().into(),
        nheko::nheko().into(),
        fractal::fractal().into(),
    ])
    .expect("builtin clients satisfy catalog invariants")
});

/// Presentation preferences applied on top of link support.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub show_experimental: bool,
    pub min_maturity: Maturity,
    /// Empty means every platform.
    pub platforms: Vec<Platform>,
}

impl ClientFilter {
    pub fn allows(&self, client: &Client) -> bool {
        let description = client.description();

        if description.experimental && !self.show_experimental {
            return false;
        }

        if description.maturity < self.min_maturity {
            return false;
        }

        self.platforms.is_empty()
            || self
                .platforms
                .iter()
                .any(|platform| description.runs_on(*platform))
    }
}

/// Immutable set of known clients, in display order.
#[derive(Debug)]
pub struct Catalog {
    clients: Vec<Client>,
}

impl Catalog {
    pub fn new(clients: Vec<Client>) -> Result<Self, CatalogError> {
        let mut seen_clients = HashSet::new();

        for client in &clients {
            let description = client.description();
            let id = description.client_id;

            if !seen_clients.insert(id) {
                return Err(CatalogError::DuplicateClient(id));
            }

            if description.platforms.is_empty() {
                return Err(CatalogError::NoPlatforms(id));
            }

            let mut seen_channels = HashSet::new();
            for install in &description.install_links {
                if !seen_channels.insert(install.channel_id()) {
                    return Err(CatalogError::DuplicateChannel {
                        client: id,
                        channel_id: install.channel_id(),
                    });
                }
            }
        }

        tracing::debug!("client catalog ready with {} clients", clients.len());
        Ok(Self { clients })
    }

    /// The process-wide catalog of known clients.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn get(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|client| client.id() == id)
    }

    /// Looks a client up by its string id, as found in a link's `client` argument.
    pub fn find(&self, id: &str) -> Option<&Client> {
        id.parse::<ClientId>().ok().and_then(|id| self.get(id))
    }

    pub fn supporting<'a>(&'a self, link: &'a SafeLink) -> impl Iterator<Item = &'a Client> {
        self.clients
            .iter()
            .filter(move |client| client.link_support(link))
    }

    /// The client the link's sharer asked for, if it is known and can open the link.
    pub fn preferred(&self, link: &SafeLink) -> Option<&Client> {
        let requested = link.arguments.client.as_deref()?;
        let Some(client) = self.find(requested) else {
            tracing::debug!("link requests unknown client {requested}");
            return None;
        };

        if !client.link_support(link) {
            tracing::debug!("requested client {requested} cannot open {}", link.kind);
            return None;
        }

        Some(client)
    }

    /// Clients to offer for `link`: those that support it and pass `filter`,
    /// with the preferred client (if any) moved to the front.
    pub fn visible(&self, link: &SafeLink, filter: &ClientFilter) -> Vec<&Client> {
        let mut visible: Vec<&Client> = self
            .clients
            .iter()
            .filter(|client| client.link_support(link))
            .filter(|client| {
                let allowed = filter.allows(client);
                if !allowed {
                    tracing::debug!("filtered out client {}", client.id());
                }
                allowed
            })
            .collect();

        if let Some(preferred) = self.preferred(link) {
            if let Some(pos) = visible.iter().position(|client| client.id() == preferred.id()) {
                let client = visible.remove(pos);
                visible.insert(0, client);
            }
        }

        visible
    }
}
