use std::{collections::HashMap, fs, path::Path};

use anyhow::{anyhow, bail, Context};
use url::Url;

pub const DEFAULT_SETTINGS_FILE: &str = "digital_world.toml";

const LOCAL_NETWORK_URL: &str = "http://127.0.0.1:4943";
const MAINNET_NETWORK_URL: &str = "https://icp-api.io";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub network_url: String,
    pub canister_id: String,
    pub log_filter: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            network_url: LOCAL_NETWORK_URL.into(),
            canister_id: "bkyz2-fmaaa-aaaaa-qaaaq-cai".into(),
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then the settings file (if readable), then the environment.
pub fn load_settings(path: Option<&Path>) -> ClientSettings {
    let mut settings = ClientSettings::default();

    let path = path.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));
    if let Ok(raw) = fs::read_to_string(path) {
        settings.apply_file(&raw);
    }

    settings.apply_env(|name| std::env::var(name).ok());
    settings
}

impl ClientSettings {
    fn apply_file(&mut self, raw: &str) {
        let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
            return;
        };
        if let Some(v) = file_cfg.get("network_url") {
            self.network_url = v.clone();
        }
        if let Some(v) = file_cfg.get("canister_id") {
            self.canister_id = v.clone();
        }
        if let Some(v) = file_cfg.get("log_filter") {
            self.log_filter = v.clone();
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        match lookup("DFX_NETWORK").as_deref() {
            Some("ic") => self.network_url = MAINNET_NETWORK_URL.into(),
            Some("local") => self.network_url = LOCAL_NETWORK_URL.into(),
            _ => {}
        }
        if let Some(v) = lookup("APP__NETWORK_URL") {
            self.network_url = v;
        }

        if let Some(v) = lookup("CANISTER_ID_DIGITAL_WORLD_BACKEND") {
            self.canister_id = v;
        }
        if let Some(v) = lookup("APP__CANISTER_ID") {
            self.canister_id = v;
        }

        if let Some(v) = lookup("RUST_LOG") {
            self.log_filter = v;
        }
    }

    /// Full URL that actor calls are posted to.
    pub fn call_endpoint(&self) -> anyhow::Result<Url> {
        let canister_id = self.canister_id.trim();
        if canister_id.is_empty() {
            bail!("canister id must not be empty");
        }

        let mut endpoint = Url::parse(self.network_url.trim())
            .with_context(|| format!("invalid network url '{}'", self.network_url))?;
        {
            let mut segments = endpoint
                .path_segments_mut()
                .map_err(|()| anyhow!("network url '{}' cannot be a base", self.network_url))?;
            segments
                .pop_if_empty()
                .extend(["api", "canister", canister_id, "call"]);
        }

        Ok(endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_point_at_local_replica() {
        let settings = ClientSettings::default();
        assert_eq!(
            settings.call_endpoint().expect("endpoint").as_str(),
            "http://127.0.0.1:4943/api/canister/bkyz2-fmaaa-aaaaa-qaaaq-cai/call"
        );
    }

    #[test]
    fn file_values_override_defaults() {
        let mut settings = ClientSettings::default();
        settings.apply_file(
            r#"
network_url = "http://10.0.0.5:8000"
canister_id = "rrkah-fqaaa-aaaaa-aaaaq-cai"
log_filter = "debug"
"#,
        );
        assert_eq!(settings.network_url, "http://10.0.0.5:8000");
        assert_eq!(settings.canister_id, "rrkah-fqaaa-aaaaa-aaaaq-cai");
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn malformed_file_is_ignored() {
        let mut settings = ClientSettings::default();
        settings.apply_file("network_url = [1, 2");
        assert_eq!(settings, ClientSettings::default());
    }

    #[test]
    fn app_prefixed_env_wins_over_dfx_env() {
        let mut settings = ClientSettings::default();
        settings.apply_env(env_from(&[
            ("DFX_NETWORK", "ic"),
            ("CANISTER_ID_DIGITAL_WORLD_BACKEND", "from-dfx"),
            ("APP__CANISTER_ID", "from-app"),
        ]));
        assert_eq!(settings.network_url, MAINNET_NETWORK_URL);
        assert_eq!(settings.canister_id, "from-app");

        settings.apply_env(env_from(&[("APP__NETWORK_URL", "http://gateway.local")]));
        assert_eq!(settings.network_url, "http://gateway.local");
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let settings = ClientSettings {
            network_url: "http://gateway.local/prefix/".into(),
            canister_id: "abc".into(),
            ..ClientSettings::default()
        };
        assert_eq!(
            settings.call_endpoint().expect("endpoint").as_str(),
            "http://gateway.local/prefix/api/canister/abc/call"
        );
    }

    #[test]
    fn endpoint_rejects_bad_settings() {
        let blank_id = ClientSettings {
            canister_id: "  ".into(),
            ..ClientSettings::default()
        };
        assert!(blank_id.call_endpoint().is_err());

        let bad_url = ClientSettings {
            network_url: "not a url".into(),
            ..ClientSettings::default()
        };
        let err = bad_url.call_endpoint().expect_err("invalid url");
        assert!(err.to_string().contains("invalid network url"));

        let opaque = ClientSettings {
            network_url: "mailto:ops@example.com".into(),
            ..ClientSettings::default()
        };
        assert!(opaque.call_endpoint().is_err());
    }
}
