use crate::cli::{actions::Action, globals::GlobalArgs};
use crate::form::schema;
use crate::form::{Field, FormController};
use crate::signin::{self, alert::Alert};
use anyhow::{anyhow, Result};
use secrecy::ExposeSecret;
use tracing::debug;

/// Handle the signin action
pub async fn handle(action: Action, globals: &GlobalArgs) -> Result<()> {
    match action {
        Action::Signin { email, password } => {
            let mut form = FormController::new();
            form.set_field(Field::Email, &email);
            form.set_field(Field::Password, password.expose_secret());

            // submission is gated on validation: an invalid form never
            // reaches the network
            let Some(request) =
                form.submit(|credentials| signin::signin(&globals.signin_url, credentials))
            else {
                for (field, kind) in form.errors() {
                    eprintln!("{field}: {}", schema::message(*field, *kind));
                }
                return Err(anyhow!("sign-in form is invalid"));
            };

            if let Err(err) = request.await {
                // detail stays in the logs; the user gets the fixed alert
                debug!("signin failed: {err:?}");
                eprintln!("{}", Alert::signin_failure());
                return Err(anyhow!("sign-in failed"));
            }

            Ok(())
        }
    }
}
