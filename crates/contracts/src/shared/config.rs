use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub email: EmailConfig,
}

/// Settings for the transactional-email endpoint used by the contact form.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EmailConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_TIMEOUT_MS: u32 = 15_000;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u32 {
    DEFAULT_TIMEOUT_MS
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Default configuration embedded in the binary.
/// Credentials are never stored here; see [`CredentialOverrides`].
const DEFAULT_CONFIG: &str = r#"
[email]
endpoint = "https://api.emailjs.com/api/v1.0/email/send"
timeout_ms = 15000
"#;

/// Email credentials captured from the build environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CredentialOverrides {
    pub service_id: Option<&'static str>,
    pub template_id: Option<&'static str>,
    pub public_key: Option<&'static str>,
}

impl CredentialOverrides {
    /// Reads `PORTFOLIO_EMAILJS_*` at compile time, the same way a static
    /// site bakes in its public keys.
    pub fn build_time() -> Self {
        Self {
            service_id: option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
            template_id: option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
            public_key: option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
        }
    }
}

impl EmailConfig {
    pub fn with_overrides(mut self, overrides: CredentialOverrides) -> Self {
        if let Some(v) = overrides.service_id {
            self.service_id = v.to_string();
        }
        if let Some(v) = overrides.template_id {
            self.template_id = v.to_string();
        }
        if let Some(v) = overrides.public_key {
            self.public_key = v.to_string();
        }
        self
    }

    /// True when all three identifiers are present. Only used for a startup
    /// warning: sending is attempted either way and fails at the provider.
    pub fn has_credentials(&self) -> bool {
        !self.service_id.is_empty() && !self.template_id.is_empty() && !self.public_key.is_empty()
    }
}

/// Parse a configuration document and apply credential overrides.
pub fn parse_config(contents: &str, overrides: CredentialOverrides) -> Result<Config, ConfigError> {
    let mut config: Config = toml::from_str(contents)?;
    config.email = config.email.with_overrides(overrides);
    Ok(config)
}

/// Load the embedded configuration with build-time credentials applied.
pub fn load_config() -> Result<Config, ConfigError> {
    let config = parse_config(DEFAULT_CONFIG, CredentialOverrides::build_time())?;
    if !config.email.has_credentials() {
        log::warn!("Email credentials are not configured; contact form sends will fail");
    }
    Ok(config)
}
