use crate::model::client::{ClientDescription, ClientId, TextClient};
use crate::model::invite::InviteMarkup;
use crate::model::platform::{Maturity, Platform};
use crate::model::safe_link::{LinkKind, SafeLink};

pub fn nheko() -> TextClient {
    TextClient {
        description: ClientDescription {
            name: "Nheko".to_string(),
            author: "mujx, red_sky, deepbluev7, Konstantinos Sideris".to_string(),
            homepage: "https://github.com/Nheko-Reborn/nheko".to_string(),
            logo: "nheko.svg".to_string(),
            description: "Native desktop app for Matrix that feels more like a mainstream chat app."
                .to_string(),
            platforms: vec![Platform::Desktop],
            maturity: Maturity::LateBeta,
            client_id: ClientId::Nheko,
            experimental: false,
            link_support: |link| link.kind.is_room() || link.kind == LinkKind::UserId,
            install_links: Vec::new(),
        },
        to_invite_string,
        copy_string,
    }
}

fn to_invite_string(link: &SafeLink) -> InviteMarkup {
    match link.kind {
        LinkKind::UserId => InviteMarkup::new()
            .text("Choose \"Start new chat\" from the menu and enter ")
            .code(&link.identifier),
        _ => InviteMarkup::new()
            .text("Type ")
            .code(&copy_string(link))
            .text(" in any room."),
    }
}

fn copy_string(link: &SafeLink) -> String {
    match link.kind {
        LinkKind::UserId => link.identifier.clone(),
        _ => format!("/join {}", link.identifier),
    }
}
