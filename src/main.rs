use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use backend::{BackendResult, Live, Offline, SharedBackend};
use tokio::net::TcpListener;
use tracing::warn;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let backend = connect_backend().await;
    let router = api::serve(backend, "Config.toml").await?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000));
    let listener = TcpListener::bind(&address).await?;
    Ok(axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?)
}

/// A missing `DATABASE_URL` in Secrets.toml and a database that cannot
/// be reached are treated the same: the process still serves, with the
/// offline stub making every fetch fall back to the built-in content
/// and keeping the admin surface signed out. Neither is fatal.
async fn connect_backend() -> SharedBackend {
    let database_url = util::load_env().ok().and_then(|secrets| {
        secrets
            .get("DATABASE_URL")
            .and_then(|v| v.as_str())
            .map(str::to_string)
    });

    let Some(database_url) = database_url else {
        warn!("DATABASE_URL is not configured, serving fallback content");
        return Arc::new(Offline);
    };

    fallback_on_error(Live::connect(&database_url).await)
}

fn fallback_on_error(connected: BackendResult<Live>) -> SharedBackend {
    match connected {
        Ok(live) => Arc::new(live),
        Err(error) => {
            warn!(
                "failed to connect to the content backend, serving \
                 fallback content: {}",
                error
            );
            Arc::new(Offline)
        }
    }
}

#[cfg(test)]
mod test {
    use backend::{Backend as _, BackendError};

    use super::*;

    #[tokio::test]
    async fn connect_failure_degrades_to_offline() {
        // Arrange
        let connected = Err(BackendError::NotConfigured);

        // Act
        let backend = fallback_on_error(connected);

        // Assert
        assert_eq!(format!("{:?}", backend), "Offline");
        assert!(backend.published_posts().await.is_err());
        assert_eq!(backend.session("any-token").await.unwrap(), None);
    }
}
