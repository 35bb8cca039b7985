use crate::cli::actions::Action;
use crate::host::new;
use anyhow::Result;
use tracing::warn;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            dist,
            console,
        } => {
            if !dist.join("index.html").is_file() {
                warn!(
                    "No index.html found in {}; client routes will return 404",
                    dist.display()
                );
            }

            new(port, dist, console).await?;
        }
    }

    Ok(())
}
