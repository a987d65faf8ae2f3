//! Shape of a link that has already been parsed and validated upstream.
//!
//! Nothing in this crate parses or re-validates links; these types only carry
//! the parser's output to the formatters.

use std::fmt;

use url::form_urlencoded;

/// The kind of Matrix resource a link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// `#room:server`
    Alias,
    /// `!room:server`
    RoomId,
    /// `@user:server`
    UserId,
    /// `+group:server`
    GroupId,
    /// A room plus an event id.
    Permalink,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Alias => "alias",
            LinkKind::RoomId => "room-id",
            LinkKind::UserId => "user-id",
            LinkKind::GroupId => "group-id",
            LinkKind::Permalink => "permalink",
        }
    }

    /// Aliases, room ids and permalinks all resolve to a room.
    pub fn is_room(&self) -> bool {
        matches!(self, LinkKind::Alias | LinkKind::RoomId | LinkKind::Permalink)
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query arguments carried by a link (`?via=...&client=...&sharer=...`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkArguments {
    pub vias: Vec<String>,
    pub client: Option<String>,
    pub sharer: Option<String>,
}

impl LinkArguments {
    /// Re-encodes the arguments as a query string, in `via`, `client`,
    /// `sharer` order. Empty when there are no arguments.
    pub fn original_params(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for via in &self.vias {
            query.append_pair("via", via);
        }
        if let Some(client) = &self.client {
            query.append_pair("client", client);
        }
        if let Some(sharer) = &self.sharer {
            query.append_pair("sharer", sharer);
        }
        query.finish()
    }
}

/// A validated link handed over by the link parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeLink {
    pub kind: LinkKind,
    pub identifier: String,
    pub event_id: Option<String>,
    pub arguments: LinkArguments,
    /// The link exactly as the user supplied it.
    pub original_link: String,
}

impl SafeLink {
    pub fn new(
        kind: LinkKind,
        identifier: impl Into<String>,
        original_link: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            event_id: None,
            arguments: LinkArguments::default(),
            original_link: original_link.into(),
        }
    }

    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = Some(event_id.into());
        self
    }

    pub fn with_arguments(mut self, arguments: LinkArguments) -> Self {
        self.arguments = arguments;
        self
    }
}
