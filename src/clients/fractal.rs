use crate::model::client::{ClientDescription, ClientId, TextClient};
use crate::model::invite::InviteMarkup;
use crate::model::platform::{Maturity, Platform};
use crate::model::safe_link::SafeLink;

pub fn fractal() -> TextClient {
    TextClient {
        description: ClientDescription {
            name: "Fractal".to_string(),
            author: "Daniel Garcia Moreno".to_string(),
            homepage: "https://gitlab.gnome.org/GNOME/fractal".to_string(),
            logo: "fractal.png".to_string(),
            description: "Fractal is a Matrix client written in Rust.".to_string(),
            platforms: vec![Platform::Desktop],
            maturity: Maturity::Beta,
            client_id: ClientId::Fractal,
            experimental: false,
            link_support: |link| link.kind.is_room(),
            install_links: Vec::new(),
        },
        to_invite_string,
        copy_string,
    }
}

fn to_invite_string(link: &SafeLink) -> InviteMarkup {
    InviteMarkup::new()
        .text("Click the \"+\" button in the top left corner, choose \"Join room\" and paste ")
        .code(&link.identifier)
}

fn copy_string(link: &SafeLink) -> String {
    link.identifier.clone()
}
