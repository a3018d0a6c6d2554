#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub signin_url: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(url: String) -> Self {
        Self { signin_url: url }
    }
}
