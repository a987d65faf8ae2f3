use std::sync::LazyLock;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use url::Url;

use crate::model::client::{ClientDescription, ClientId, LinkedClient};
use crate::model::install_link::InstallLink;
use crate::model::platform::{Maturity, Platform};
use crate::model::safe_link::{LinkKind, SafeLink};

static ELEMENT_WEB: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://app.element.io/").expect("valid element web url"));
static ELEMENT_DEVELOP: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://develop.element.io/").expect("valid element develop url")
});

/// Characters that would end a route segment or start the route's query.
/// Event ids in newer room versions are base64 and may contain `/`.
const ROUTE_SEGMENT: &AsciiSet = &CONTROLS.add(b'/').add(b'?').add(b'%');

pub fn element() -> LinkedClient {
    LinkedClient {
        description: ClientDescription {
            name: "Element".to_string(),
            author: "Element".to_string(),
            homepage: "https://element.io".to_string(),
            logo: "element.svg".to_string(),
            description: "Fully-featured Matrix client, used by millions.".to_string(),
            platforms: vec![Platform::Desktop, Platform::Android, Platform::Ios],
            maturity: Maturity::Stable,
            client_id: ClientId::Element,
            experimental: false,
            link_support: supports_everything,
            install_links: vec![
                InstallLink::apple_store("vector", "id1083446067"),
                InstallLink::play_store("im.vector.app"),
                InstallLink::fdroid("im.vector.app"),
            ],
        },
        to_url: |link| web_deep_link(&ELEMENT_WEB, link),
    }
}

pub fn element_develop() -> LinkedClient {
    LinkedClient {
        description: ClientDescription {
            name: "Element Develop".to_string(),
            author: "Element".to_string(),
            homepage: "https://element.io".to_string(),
            logo: "element.svg".to_string(),
            description: "Element's development build, with the newest features and bugs."
                .to_string(),
            platforms: vec![Platform::Desktop],
            maturity: Maturity::Beta,
            client_id: ClientId::ElementDevelop,
            experimental: true,
            link_support: supports_everything,
            install_links: Vec::new(),
        },
        to_url: |link| web_deep_link(&ELEMENT_DEVELOP, link),
    }
}

fn supports_everything(_link: &SafeLink) -> bool {
    true
}

/// Element Web routes in the fragment: `#/room/<id>[/<event>]`, `#/user/<id>`,
/// `#/group/<id>`, each followed by the link's original query arguments.
fn web_deep_link(base: &Url, link: &SafeLink) -> Url {
    let identifier = segment(&link.identifier);
    let route = match (link.kind, link.event_id.as_deref()) {
        (LinkKind::Permalink, Some(event_id)) => {
            format!("/room/{identifier}/{}", segment(event_id))
        }
        (LinkKind::Alias | LinkKind::RoomId | LinkKind::Permalink, _) => {
            format!("/room/{identifier}")
        }
        (LinkKind::UserId, _) => format!("/user/{identifier}"),
        (LinkKind::GroupId, _) => format!("/group/{identifier}"),
    };

    let params = link.arguments.original_params();
    let fragment = if params.is_empty() {
        route
    } else {
        format!("{route}?{params}")
    };

    let mut url = base.clone();
    url.set_fragment(Some(&fragment));
    url
}

fn segment(value: &str) -> String {
    utf8_percent_encode(value, ROUTE_SEGMENT).to_string()
}
