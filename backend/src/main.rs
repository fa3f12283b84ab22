//! Backend entry-point: loads settings, wires the in-memory core and seeds
//! the bootstrap user.

use std::sync::Arc;

use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};

use todo_backend::domain::Error;
use todo_backend::domain::ports::Authenticator;
use todo_backend::settings::TrackerSettings;
use todo_backend::telemetry;
use todo_backend::wiring::TrackerComponents;

/// Application bootstrap.
fn main() -> std::io::Result<()> {
    let settings = TrackerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    telemetry::init(settings.log_format());

    let components = TrackerComponents::in_memory(Arc::new(DefaultClock));

    if let Some((username, password)) = settings.bootstrap_credentials() {
        match components.authenticator().create_user(username, password) {
            Ok(user_id) => info!(%user_id, "bootstrap user registered"),
            Err(Error::UserAlreadyExists { .. }) => info!("bootstrap user already present"),
            Err(e) => {
                warn!(error = %e, "bootstrap user rejected");
                return Err(std::io::Error::other(e.to_string()));
            }
        }
    }

    info!(users = components.users().len(), "task tracker core ready");
    Ok(())
}
