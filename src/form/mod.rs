pub mod controller;
pub mod schema;

pub use self::controller::FormController;
pub use self::schema::{Credentials, ErrorKind, Field};
