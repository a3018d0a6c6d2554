use anyhow::Result;
use ensaluti::cli::{actions, actions::Action, start};

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Start the program
    let (action, globals) = start()?;

    // Handle the action
    match action {
        Action::Signin { .. } => actions::signin::handle(action, &globals).await?,
    }

    Ok(())
}
