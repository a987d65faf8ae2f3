use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::install_link::InstallLink;
use crate::model::invite::InviteMarkup;
use crate::model::platform::{Maturity, Platform};
use crate::model::safe_link::SafeLink;

/// Discriminant of [`Client`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientKind {
    LinkedClient,
    TextClient,
}

impl ClientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientKind::LinkedClient => "LINKED_CLIENT",
            ClientKind::TextClient => "TEXT_CLIENT",
        }
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known clients. The string form is what a link's `client` argument uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClientId {
    #[serde(rename = "element.io")]
    Element,
    #[serde(rename = "develop.element.io")]
    ElementDevelop,
    #[serde(rename = "weechat")]
    WeeChat,
    #[serde(rename = "nheko")]
    Nheko,
    #[serde(rename = "fractal")]
    Fractal,
}

impl ClientId {
    pub const ALL: [ClientId; 5] = [
        ClientId::Element,
        ClientId::ElementDevelop,
        ClientId::WeeChat,
        ClientId::Nheko,
        ClientId::Fractal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientId::Element => "element.io",
            ClientId::ElementDevelop => "develop.element.io",
            ClientId::WeeChat => "weechat",
            ClientId::Nheko => "nheko",
            ClientId::Fractal => "fractal",
        }
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClientId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown client id: {s}"))
    }
}

pub type LinkPredicate = fn(&SafeLink) -> bool;
pub type UrlBuilder = fn(&SafeLink) -> Url;
pub type InviteBuilder = fn(&SafeLink) -> InviteMarkup;
pub type CopyBuilder = fn(&SafeLink) -> String;

/// Descriptive details shared by every client.
#[derive(Debug, Clone)]
pub struct ClientDescription {
    pub name: String,
    pub author: String,
    pub homepage: String,
    pub logo: String,
    pub description: String,
    pub platforms: Vec<Platform>,
    pub maturity: Maturity,
    pub client_id: ClientId,
    pub experimental: bool,
    pub link_support: LinkPredicate,
    /// Display order.
    pub install_links: Vec<InstallLink>,
}

impl ClientDescription {
    pub fn supports(&self, link: &SafeLink) -> bool {
        (self.link_support)(link)
    }

    pub fn runs_on(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }

    /// Install links for any of `platforms` (all of them when empty), in display order.
    pub fn install_links_for<'a>(
        &'a self,
        platforms: &'a [Platform],
    ) -> impl Iterator<Item = &'a InstallLink> {
        self.install_links
            .iter()
            .filter(move |install| platforms.is_empty() || platforms.contains(&install.platform()))
    }
}

/// A client that can be opened directly with a link to the resource.
#[derive(Debug, Clone)]
pub struct LinkedClient {
    pub description: ClientDescription,
    pub to_url: UrlBuilder,
}

impl LinkedClient {
    /// Only meaningful for links accepted by `link_support`.
    pub fn to_url(&self, link: &SafeLink) -> Url {
        (self.to_url)(link)
    }
}

/// A client that can only be given instructions for reaching the resource.
#[derive(Debug, Clone)]
pub struct TextClient {
    pub description: ClientDescription,
    pub to_invite_string: InviteBuilder,
    pub copy_string: CopyBuilder,
}

impl TextClient {
    pub fn to_invite_string(&self, link: &SafeLink) -> InviteMarkup {
        (self.to_invite_string)(link)
    }

    /// Plain-text counterpart of the invite, suitable for the clipboard.
    pub fn copy_string(&self, link: &SafeLink) -> String {
        (self.copy_string)(link)
    }
}

#[derive(Debug, Clone)]
pub enum Client {
    Linked(LinkedClient),
    Text(TextClient),
}

impl Client {
    pub fn kind(&self) -> ClientKind {
        match self {
            Client::Linked(_) => ClientKind::LinkedClient,
            Client::Text(_) => ClientKind::TextClient,
        }
    }

    pub fn description(&self) -> &ClientDescription {
        match self {
            Client::Linked(client) => &client.description,
            Client::Text(client) => &client.description,
        }
    }

    pub fn id(&self) -> ClientId {
        self.description().client_id
    }

    pub fn name(&self) -> &str {
        &self.description().name
    }

    pub fn link_support(&self, link: &SafeLink) -> bool {
        self.description().supports(link)
    }

    pub fn as_linked(&self) -> Option<&LinkedClient> {
        match self {
            Client::Linked(client) => Some(client),
            Client::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextClient> {
        match self {
            Client::Text(client) => Some(client),
            Client::Linked(_) => None,
        }
    }
}

impl From<LinkedClient> for Client {
    fn from(client: LinkedClient) -> Self {
        Client::Linked(client)
    }
}

impl From<TextClient> for Client {
    fn from(client: TextClient) -> Self {
        Client::Text(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::safe_link::LinkKind;

    fn only_rooms(link: &SafeLink) -> bool {
        link.kind.is_room()
    }

    fn description() -> ClientDescription {
        ClientDescription {
            name: "Test".to_string(),
            author: "Tester".to_string(),
            homepage: "https://example.org".to_string(),
            logo: "test.svg".to_string(),
            description: "A test client.".to_string(),
            platforms: vec![Platform::Desktop],
            maturity: Maturity::Beta,
            client_id: ClientId::Nheko,
            experimental: false,
            link_support: only_rooms,
            install_links: vec![
                InstallLink::play_store("org.example.app"),
                InstallLink::fdroid("org.example.app"),
                InstallLink::apple_store("Example", "id1"),
            ],
        }
    }

    #[test]
    fn client_id_round_trips_through_str() {
        for id in ClientId::ALL {
            assert_eq!(id.as_str().parse::<ClientId>(), Ok(id));
        }
        assert!("riot.im".parse::<ClientId>().is_err());
    }

    #[test]
    fn ids_and_kinds_use_wire_strings_in_serde() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Row {
            client: ClientId,
            kind: ClientKind,
        }

        let row: Row = toml::from_str("client = \"develop.element.io\"\nkind = \"LINKED_CLIENT\"")
            .expect("valid row");
        assert_eq!(
            row,
            Row {
                client: ClientId::ElementDevelop,
                kind: ClientKind::LinkedClient,
            }
        );

        for client in ClientId::ALL {
            for kind in [ClientKind::LinkedClient, ClientKind::TextClient] {
                let row = Row { client, kind };
                let raw = toml::to_string(&row).expect("row serializes");
                assert!(raw.contains(&format!("client = \"{client}\"")), "{raw}");
                assert!(raw.contains(&format!("kind = \"{kind}\"")), "{raw}");
                assert_eq!(toml::from_str::<Row>(&raw).expect("row parses"), row);
            }
        }
    }

    #[test]
    fn kind_selects_exactly_one_contract() {
        let text = Client::from(TextClient {
            description: description(),
            to_invite_string: |link| InviteMarkup::new().code(&link.identifier),
            copy_string: |link| link.identifier.clone(),
        });

        assert_eq!(text.kind(), ClientKind::TextClient);
        assert!(text.as_text().is_some());
        assert!(text.as_linked().is_none());
    }

    #[test]
    fn link_support_delegates_to_predicate() {
        let client = Client::from(TextClient {
            description: description(),
            to_invite_string: |_| InviteMarkup::new(),
            copy_string: |_| String::new(),
        });

        let room = SafeLink::new(LinkKind::RoomId, "!abc:server", "https://matrix.to/#/!abc:server");
        let user = SafeLink::new(LinkKind::UserId, "@a:server", "https://matrix.to/#/@a:server");
        assert!(client.link_support(&room));
        assert!(!client.link_support(&user));
    }

    #[test]
    fn install_links_for_keeps_display_order() {
        let description = description();
        let android: Vec<&str> = description
            .install_links_for(&[Platform::Android])
            .map(InstallLink::channel_id)
            .collect();
        assert_eq!(android, vec!["play-store", "fdroid"]);
        assert_eq!(description.install_links_for(&[Platform::Desktop]).count(), 0);

        let mobile: Vec<&str> = description
            .install_links_for(&[Platform::Ios, Platform::Android])
            .map(InstallLink::channel_id)
            .collect();
        assert_eq!(mobile, vec!["play-store", "fdroid", "apple-app-store"]);
        assert_eq!(description.install_links_for(&[]).count(), 3);
    }
}
