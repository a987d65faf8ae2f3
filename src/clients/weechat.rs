use crate::model::client::{ClientDescription, ClientId, TextClient};
use crate::model::invite::InviteMarkup;
use crate::model::platform::{Maturity, Platform};
use crate::model::safe_link::{LinkKind, SafeLink};

pub fn weechat() -> TextClient {
    TextClient {
        description: ClientDescription {
            name: "Weechat".to_string(),
            author: "Poljar".to_string(),
            homepage: "https://github.com/poljar/weechat-matrix".to_string(),
            logo: "weechat.svg".to_string(),
            description: "Command-line Matrix interface using Weechat.".to_string(),
            platforms: vec![Platform::Desktop],
            maturity: Maturity::LateBeta,
            client_id: ClientId::WeeChat,
            experimental: false,
            link_support: |link| link.kind.is_room() || link.kind == LinkKind::UserId,
            install_links: Vec::new(),
        },
        to_invite_string,
        copy_string: command,
    }
}

fn to_invite_string(link: &SafeLink) -> InviteMarkup {
    match link.kind {
        LinkKind::UserId => InviteMarkup::new()
            .text("From the room you want to invite them to, type ")
            .code(&command(link)),
        _ => InviteMarkup::new().text("Type ").code(&command(link)),
    }
}

fn command(link: &SafeLink) -> String {
    match link.kind {
        LinkKind::UserId => format!("/invite {}", link.identifier),
        _ => format!("/join {}", link.identifier),
    }
}
