use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt::Write;
use std::path::PathBuf;

use matrixto_clients::{
    Catalog, Client, ClientFilter, LinkArguments, LinkKind, Platform, SafeLink,
};

#[derive(Debug, Parser)]
#[command(name = "matrixto-clients", version, about = "Show how a Matrix link opens in each known client")]
pub struct Cli {
    /// Config file to use instead of the user config.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every client in the catalog.
    List,
    /// Show deep links, instructions and install links for a validated link.
    Open(OpenArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Alias,
    RoomId,
    UserId,
    GroupId,
    Permalink,
}

impl From<KindArg> for LinkKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Alias => LinkKind::Alias,
            KindArg::RoomId => LinkKind::RoomId,
            KindArg::UserId => LinkKind::UserId,
            KindArg::GroupId => LinkKind::GroupId,
            KindArg::Permalink => LinkKind::Permalink,
        }
    }
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    #[arg(long, value_enum)]
    pub kind: KindArg,
    /// Resource identifier, e.g. `#room:example.org`.
    #[arg(long)]
    pub identifier: String,
    /// The link exactly as it was shared.
    #[arg(long)]
    pub link: String,
    #[arg(long)]
    pub event_id: Option<String>,
    #[arg(long = "via")]
    pub vias: Vec<String>,
    /// Preferred client id from the link, e.g. `element.io`.
    #[arg(long)]
    pub client: Option<String>,
    #[arg(long)]
    pub sharer: Option<String>,
    /// Only offer clients for these platforms (overrides config).
    #[arg(long = "platform")]
    pub platforms: Vec<Platform>,
    /// Include experimental clients (overrides config).
    #[arg(long)]
    pub experimental: bool,
}

impl OpenArgs {
    pub fn safe_link(&self) -> SafeLink {
        let link = SafeLink::new(self.kind.into(), &self.identifier, &self.link).with_arguments(
            LinkArguments {
                vias: self.vias.clone(),
                client: self.client.clone(),
                sharer: self.sharer.clone(),
            },
        );

        match &self.event_id {
            Some(event_id) => link.with_event_id(event_id),
            None => link,
        }
    }

    pub fn apply(&self, mut filter: ClientFilter) -> ClientFilter {
        if !self.platforms.is_empty() {
            filter.platforms = self.platforms.clone();
        }
        filter.show_experimental |= self.experimental;
        filter
    }
}

pub fn render_list(catalog: &Catalog) -> String {
    let mut out = String::new();
    for client in catalog.clients() {
        let description = client.description();
        let platforms: Vec<&str> = description.platforms.iter().map(Platform::as_str).collect();
        let channels: Vec<&str> = description
            .install_links
            .iter()
            .map(|install| install.channel_id())
            .collect();

        let _ = writeln!(
            out,
            "{} ({}) [{}] {} platforms={} channels={}{}",
            description.name,
            description.client_id,
            client.kind(),
            description.maturity,
            platforms.join(","),
            if channels.is_empty() {
                "-".to_string()
            } else {
                channels.join(",")
            },
            if description.experimental {
                " experimental"
            } else {
                ""
            }
        );
    }
    out
}

pub fn render_open(clients: &[&Client], link: &SafeLink, filter: &ClientFilter) -> String {
    let mut out = String::new();
    if clients.is_empty() {
        let _ = writeln!(out, "no client can open this {} link", link.kind);
        return out;
    }

    for client in clients {
        let description = client.description();
        let _ = writeln!(out, "{} ({})", description.name, description.homepage);

        match client {
            Client::Linked(linked) => {
                let _ = writeln!(out, "  open: {}", linked.to_url(link));
            }
            Client::Text(text) => {
                let _ = writeln!(out, "  instructions: {}", text.to_invite_string(link));
                let _ = writeln!(out, "  copy: {}", text.copy_string(link));
            }
        }

        for install in description.install_links_for(&filter.platforms) {
            let _ = writeln!(
                out,
                "  {}: {}",
                install.description(),
                install.create_install_url(link)
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_args_build_safe_link() {
        let cli = Cli::parse_from([
            "matrixto-clients",
            "open",
            "--kind",
            "permalink",
            "--identifier",
            "!abc:server",
            "--link",
            "https://matrix.to/#/!abc:server/$ev",
            "--event-id",
            "$ev",
            "--via",
            "server",
            "--platform",
            "android",
        ]);

        let Command::Open(args) = cli.command else {
            panic!("expected open command");
        };
        let link = args.safe_link();
        assert_eq!(link.kind, LinkKind::Permalink);
        assert_eq!(link.event_id.as_deref(), Some("$ev"));
        assert_eq!(link.arguments.vias, vec!["server".to_string()]);
        assert_eq!(args.apply(ClientFilter::default()).platforms, vec![Platform::Android]);
    }

    #[test]
    fn open_output_lists_android_install_links_only() {
        let link = SafeLink::new(LinkKind::Alias, "#room:server", "https://matrix.to/#/#room:server");
        let filter = ClientFilter {
            platforms: vec![Platform::Android],
            ..ClientFilter::default()
        };
        let catalog = Catalog::builtin();
        let out = render_open(&catalog.visible(&link, &filter), &link, &filter);

        assert!(out.contains("open: https://app.element.io/#/room/#room:server"));
        assert!(out.contains("Get it on F-Droid: https://f-droid.org/packages/im.vector.app"));
        assert!(!out.contains("apps.apple.com"));
    }

    #[test]
    fn open_output_without_platform_filter_lists_every_store() {
        let link = SafeLink::new(LinkKind::Alias, "#room:server", "https://matrix.to/#/#room:server");
        let filter = ClientFilter::default();
        let catalog = Catalog::builtin();
        let out = render_open(&catalog.visible(&link, &filter), &link, &filter);

        let stores: Vec<&str> = out
            .lines()
            .filter(|line| line.starts_with("  Download") || line.starts_with("  Get it"))
            .collect();
        assert_eq!(stores.len(), 3);
        assert!(stores[0].starts_with("  Download on the App Store: https://apps.apple.com/app/vector/id1083446067"));
    }

    #[test]
    fn list_marks_experimental_clients() {
        let out = render_list(Catalog::builtin());
        assert!(out.contains("Element Develop (develop.element.io) [LINKED_CLIENT] BETA"));
        assert!(out.lines().any(|line| line.starts_with("Element Develop") && line.ends_with("experimental")));
        assert!(out.contains("Weechat (weechat) [TEXT_CLIENT] LATE_BETA platforms=DESKTOP channels=-"));
    }
}
