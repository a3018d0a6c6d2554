use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
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

    Command::new("ensaluti")
        .about("Sign-in form client")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .help("Base URL of the authentication service")
                .default_value("http://localhost:3000")
                .env("ENSALUTI_URL"),
        )
        .arg(
            // not required: a missing email must reach the form as an
            // empty field so the schema reports it, not clap
            Arg::new("email")
                .short('e')
                .long("email")
                .help("Email address to sign in with")
                .env("ENSALUTI_EMAIL"),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .help("Password to sign in with")
                .env("ENSALUTI_PASSWORD"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("ENSALUTI_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "ensaluti");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Sign-in form client"
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
                ("ENSALUTI_URL", None::<&str>),
                ("ENSALUTI_EMAIL", None),
                ("ENSALUTI_PASSWORD", None),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["ensaluti"]);

                assert_eq!(
                    matches.get_one::<String>("url").map(String::as_str),
                    Some("http://localhost:3000")
                );
                assert_eq!(matches.get_one::<String>("email"), None);
                assert_eq!(matches.get_one::<String>("password"), None);
            },
        );
    }

    #[test]
    fn test_check_url_email_and_password() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "ensaluti",
            "--url",
            "http://localhost:8000",
            "--email",
            "user@example.com",
            "--password",
            "secret",
        ]);

        assert_eq!(
            matches.get_one::<String>("url").map(String::as_str),
            Some("http://localhost:8000")
        );
        assert_eq!(
            matches.get_one::<String>("email").map(String::as_str),
            Some("user@example.com")
        );
        assert_eq!(
            matches.get_one::<String>("password").map(String::as_str),
            Some("secret")
        );
    }

    #[test]
    fn test_args_from_env() {
        temp_env::with_vars(
            [
                ("ENSALUTI_URL", Some("http://auth.example.com")),
                ("ENSALUTI_EMAIL", Some("user@example.com")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["ensaluti"]);

                assert_eq!(
                    matches.get_one::<String>("url").map(String::as_str),
                    Some("http://auth.example.com")
                );
                assert_eq!(
                    matches.get_one::<String>("email").map(String::as_str),
                    Some("user@example.com")
                );
            },
        );
    }
}
