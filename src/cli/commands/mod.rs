use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("warden")
        .about("Identity console host")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("WARDEN_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("dist")
                .short('d')
                .long("dist")
                .help("Directory with the compiled console (index.html and assets)")
                .default_value("apps/web/dist")
                .env("WARDEN_DIST"),
        )
        .arg(
            Arg::new("api-base-url")
                .long("api-base-url")
                .help("Base URL of the identity API, empty for same-origin requests")
                .default_value("")
                .env("WARDEN_API_BASE_URL"),
        )
        .arg(
            Arg::new("app-name")
                .long("app-name")
                .help("Application the console signs in to")
                .default_value("app-built-in")
                .env("WARDEN_APP_NAME"),
        )
        .arg(
            Arg::new("organization")
                .long("organization")
                .help("Organization the console application belongs to")
                .default_value("built-in")
                .env("WARDEN_ORGANIZATION"),
        )
        .arg(
            Arg::new("default-favicon")
                .long("default-favicon")
                .help("Favicon shown before an organization is known")
                .default_value("/favicon.ico")
                .env("WARDEN_DEFAULT_FAVICON"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .help("Emit logs as JSON lines")
                .env("WARDEN_LOG_JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("WARDEN_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "warden");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Identity console host"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("WARDEN_PORT", None::<&str>),
                ("WARDEN_DIST", None),
                ("WARDEN_API_BASE_URL", None),
                ("WARDEN_APP_NAME", None),
                ("WARDEN_ORGANIZATION", None),
                ("WARDEN_DEFAULT_FAVICON", None),
                ("WARDEN_LOG_JSON", None),
            ],
            || {
                let matches = new().get_matches_from(vec!["warden"]);
                assert_eq!(matches.get_one::<u16>("port").copied(), Some(8080));
                assert_eq!(
                    matches.get_one::<String>("dist").map(String::as_str),
                    Some("apps/web/dist")
                );
                assert_eq!(
                    matches.get_one::<String>("api-base-url").map(String::as_str),
                    Some("")
                );
                assert_eq!(
                    matches.get_one::<String>("app-name").map(String::as_str),
                    Some("app-built-in")
                );
                assert_eq!(
                    matches.get_one::<String>("organization").map(String::as_str),
                    Some("built-in")
                );
                assert!(!matches.get_flag("log-json"));
            },
        );
    }

    #[test]
    fn test_check_port_and_dist() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "warden",
            "--port",
            "9090",
            "--dist",
            "/srv/console",
            "--api-base-url",
            "https://id.example.com",
            "--log-json",
        ]);

        assert_eq!(matches.get_one::<u16>("port").copied(), Some(9090));
        assert_eq!(
            matches.get_one::<String>("dist").map(String::as_str),
            Some("/srv/console")
        );
        assert_eq!(
            matches.get_one::<String>("api-base-url").map(String::as_str),
            Some("https://id.example.com")
        );
        assert!(matches.get_flag("log-json"));
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("WARDEN_PORT", Some("443")),
                ("WARDEN_DIST", Some("/srv/console")),
                ("WARDEN_API_BASE_URL", Some("https://id.example.com")),
                ("WARDEN_APP_NAME", Some("app-acme")),
                ("WARDEN_ORGANIZATION", Some("acme")),
                ("WARDEN_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["warden"]);
                assert_eq!(matches.get_one::<u16>("port").copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>("dist").map(String::as_str),
                    Some("/srv/console")
                );
                assert_eq!(
                    matches.get_one::<String>("app-name").map(String::as_str),
                    Some("app-acme")
                );
                assert_eq!(
                    matches.get_one::<String>("organization").map(String::as_str),
                    Some("acme")
                );
                assert_eq!(matches.get_one::<u8>("verbosity").copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("WARDEN_LOG_LEVEL", Some(level))], || {
                let command = new();
                let matches = command.get_matches_from(vec!["warden"]);
                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("WARDEN_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["warden".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>("verbosity").copied(),
                    Some(index as u8)
                );
            });
        }
    }
}
