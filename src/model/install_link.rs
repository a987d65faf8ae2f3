use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::model::platform::Platform;
use crate::model::safe_link::SafeLink;

/// Everything except the URI "unreserved" marks gets escaped, so a component
/// can never introduce `/`, `?`, `&`, `=` or `#` into the surrounding URL.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// A native distribution channel for a client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InstallLink {
    /// Apple App Store, addressed by developer org and `id<digits>` app id.
    AppleStore { org: String, app_id: String },
    /// Google Play, addressed by Android package name.
    PlayStore { app_id: String },
    /// F-Droid, addressed by Android package name.
    FDroid { app_id: String },
}

impl InstallLink {
    pub fn apple_store(org: impl Into<String>, app_id: impl Into<String>) -> Self {
        InstallLink::AppleStore {
            org: org.into(),
            app_id: app_id.into(),
        }
    }

    pub fn play_store(app_id: impl Into<String>) -> Self {
        InstallLink::PlayStore {
            app_id: app_id.into(),
        }
    }

    pub fn fdroid(app_id: impl Into<String>) -> Self {
        InstallLink::FDroid {
            app_id: app_id.into(),
        }
    }

    /// Builds the store URL for this channel.
    ///
    /// Only the Play Store variant uses the link: its original text is passed
    /// through as the install `referrer` so the app can pick it up after
    /// installation.
    pub fn create_install_url(&self, deep_link: &SafeLink) -> String {
        match self {
            InstallLink::AppleStore { org, app_id } => format!(
                "https://apps.apple.com/app/{}/{}",
                encode_component(org),
                encode_component(app_id)
            ),
            InstallLink::PlayStore { app_id } => format!(
                "https://play.google.com/store/apps/details?id={}&referrer={}",
                encode_component(app_id),
                encode_component(&deep_link.original_link)
            ),
            InstallLink::FDroid { app_id } => {
                format!("https://f-droid.org/packages/{}", encode_component(app_id))
            }
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            InstallLink::AppleStore { .. } => Platform::Ios,
            InstallLink::PlayStore { .. } | InstallLink::FDroid { .. } => Platform::Android,
        }
    }

    /// Stable key for the channel, unique within one client's install links.
    pub fn channel_id(&self) -> &'static str {
        match self {
            InstallLink::AppleStore { .. } => "apple-app-store",
            InstallLink::PlayStore { .. } => "play-store",
            InstallLink::FDroid { .. } => "fdroid",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InstallLink::AppleStore { .. } => "Download on the App Store",
            InstallLink::PlayStore { .. } => "Get it on Google Play",
            InstallLink::FDroid { .. } => "Get it on F-Droid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::safe_link::LinkKind;

    fn room_link() -> SafeLink {
        SafeLink::new(
            LinkKind::Alias,
            "#room:server",
            "https://matrix.to/#/#room:server",
        )
    }

    #[test]
    fn play_store_encodes_referrer() {
        let url = InstallLink::play_store("org.example.app").create_install_url(&room_link());
        assert_eq!(
            url,
            "https://play.google.com/store/apps/details?id=org.example.app&referrer=https%3A%2F%2Fmatrix.to%2F%23%2F%23room%3Aserver"
        );
    }

    #[test]
    fn play_store_referrer_cannot_inject_parameters() {
        let link = SafeLink::new(LinkKind::UserId, "@a:b", "x&id=evil#frag");
        let url = InstallLink::play_store("org.example.app").create_install_url(&link);
        assert!(url.ends_with("&referrer=x%26id%3Devil%23frag"));
        assert_eq!(url.matches('&').count(), 1);
    }

    #[test]
    fn apple_store_encodes_org() {
        let url = InstallLink::apple_store("Example Org", "id123456").create_install_url(&room_link());
        assert_eq!(url, "https://apps.apple.com/app/Example%20Org/id123456");
    }

    #[test]
    fn fdroid_ignores_link() {
        let store = InstallLink::fdroid("org.example.app");
        let other = SafeLink::new(LinkKind::UserId, "@bob:server", "https://matrix.to/#/@bob:server");
        assert_eq!(
            store.create_install_url(&room_link()),
            "https://f-droid.org/packages/org.example.app"
        );
        assert_eq!(
            store.create_install_url(&room_link()),
            store.create_install_url(&other)
        );
    }

    #[test]
    fn unreserved_marks_pass_through() {
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
        assert_eq!(encode_component("é/?"), "%C3%A9%2F%3F");
    }
}
