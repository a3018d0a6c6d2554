pub mod signin;

use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Signin {
        email: String,
        password: SecretString,
    },
}
