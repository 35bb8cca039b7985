//! Build-time configuration for the identity API with an optional runtime
//! override. The runtime config is read from `window.WARDEN_CONFIG` (written by
//! the host's `/config.js`) so static deployments can change endpoints without
//! rebuilding. Configuration values are public; do not store secrets here.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub app_name: String,
    pub organization_name: String,
    pub default_favicon: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            app_name: "app-built-in".to_string(),
            organization_name: BUILT_IN_ORGANIZATION.to_string(),
            default_favicon: "/favicon.ico".to_string(),
        }
    }
}

/// Organization whose members are console administrators.
pub const BUILT_IN_ORGANIZATION: &str = "built-in";

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let defaults = Self::default();
        let mut config = Self {
            api_base_url: option_env!("WARDEN_API_BASE_URL")
                .unwrap_or_default()
                .to_string(),
            app_name: option_env!("WARDEN_APP_NAME")
                .map_or(defaults.app_name, str::to_string),
            organization_name: option_env!("WARDEN_ORGANIZATION")
                .map_or(defaults.organization_name, str::to_string),
            default_favicon: option_env!("WARDEN_DEFAULT_FAVICON")
                .map_or(defaults.default_favicon, str::to_string),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Builds a request URL from the configured API base URL and a path.
    pub fn endpoint(&self, path: &str) -> String {
        build_url_with_base(&self.api_base_url, path)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    app_name: Option<String>,
    organization_name: Option<String>,
    default_favicon: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.app_name {
        config.app_name = value;
    }
    if let Some(value) = runtime.organization_name {
        config.organization_name = value;
    }
    if let Some(value) = runtime.default_favicon {
        config.default_favicon = value;
    }
}

/// Joins a base URL and a path; an empty base keeps the path same-origin.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("WARDEN_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        app_name: read_runtime_value(&object, "app_name"),
        organization_name: read_runtime_value(&object, "organization_name"),
        default_favicon: read_runtime_value(&object, "default_favicon"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        apply_runtime_overrides, build_url_with_base, normalize_runtime_value, AppConfig,
        RuntimeConfig,
    };

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "https://id.default".to_string(),
            app_name: "app-default".to_string(),
            organization_name: "default-org".to_string(),
            default_favicon: "/default.ico".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://id.example.com "),
            Some("https://id.example.com".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            app_name: normalize_runtime_value("  "),
            organization_name: normalize_runtime_value(""),
            default_favicon: normalize_runtime_value("  "),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config, defaults());
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://id.override"),
            app_name: normalize_runtime_value("app-override"),
            organization_name: normalize_runtime_value("override-org"),
            default_favicon: normalize_runtime_value("/override.ico"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://id.override");
        assert_eq!(config.app_name, "app-override");
        assert_eq!(config.organization_name, "override-org");
        assert_eq!(config.default_favicon, "/override.ico");
    }

    #[test]
    fn build_url_with_base_joins_paths() {
        assert_eq!(
            build_url_with_base("", "/api/get-account"),
            "/api/get-account"
        );
        assert_eq!(
            build_url_with_base("https://id.example.com/", "/api/logout"),
            "https://id.example.com/api/logout"
        );
        assert_eq!(
            build_url_with_base(" https://id.example.com ", "api/login?clientId=a"),
            "https://id.example.com/api/login?clientId=a"
        );
    }

    #[test]
    fn load_without_runtime_config_uses_build_values() {
        let config = AppConfig::load();
        assert!(!config.app_name.is_empty());
        assert!(!config.organization_name.is_empty());
        assert!(config.endpoint("/api/logout").ends_with("/api/logout"));
    }
}
