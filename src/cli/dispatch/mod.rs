use crate::cli::actions::Action;
use anyhow::Result;
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    // Missing fields stay empty: the form schema reports them, not clap
    Ok(Action::Signin {
        email: matches
            .get_one("email")
            .map(|s: &String| s.to_string())
            .unwrap_or_default(),
        password: matches
            .get_one("password")
            .map(|s: &String| SecretString::from(s.to_string()))
            .unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn test_handler() {
        let matches = commands::new().get_matches_from(vec![
            "ensaluti",
            "--email",
            "user@example.com",
            "--password",
            "secret",
        ]);

        let Ok(Action::Signin { email, password }) = handler(&matches) else {
            panic!("expected signin action");
        };

        assert_eq!(email, "user@example.com");
        assert_eq!(password.expose_secret(), "secret");
    }

    #[test]
    fn test_handler_defaults_to_empty_fields() {
        temp_env::with_vars(
            [("ENSALUTI_EMAIL", None::<&str>), ("ENSALUTI_PASSWORD", None)],
            || {
                let matches = commands::new().get_matches_from(vec!["ensaluti"]);

                let Ok(Action::Signin { email, password }) = handler(&matches) else {
                    panic!("expected signin action");
                };

                assert_eq!(email, "");
                assert_eq!(password.expose_secret(), "");
            },
        );
    }
}
