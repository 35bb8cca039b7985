use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use url::Url;

/// Runtime configuration published to the console as `window.WARDEN_CONFIG`.
/// Every value ends up in a public script; never put secrets here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsoleSettings {
    pub api_base_url: String,
    pub app_name: String,
    pub organization_name: String,
    pub default_favicon: String,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            app_name: "app-built-in".to_string(),
            organization_name: "built-in".to_string(),
            default_favicon: "/favicon.ico".to_string(),
        }
    }
}

impl ConsoleSettings {
    /// Checks the API base URL when one is given; an empty value means
    /// same-origin requests.
    /// # Errors
    /// Returns an error if the URL does not parse or is not http(s)
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Ok(());
        }

        let parsed = Url::parse(&self.api_base_url)
            .with_context(|| format!("Invalid API base URL: {}", self.api_base_url))?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(anyhow!(
                "API base URL must use http or https, got {scheme}: {}",
                self.api_base_url
            )),
        }
    }

    /// Renders the settings as the script loaded before the console bundle.
    /// # Errors
    /// Returns an error if serialization fails
    pub fn to_script(&self) -> Result<String> {
        let json = serde_json::to_string(self).context("Failed to encode console settings")?;
        Ok(format!("window.WARDEN_CONFIG = {json};\n"))
    }
}
