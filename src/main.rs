use std::net::TcpListener;
use std::sync::Arc;

use raizup_api::configuration::{StorageBackend, get_configuration};
use raizup_api::startup::run;
use raizup_api::storage::{MemoryStorage, PostgresStorage, Storage};
use raizup_api::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(
        "raizup-api".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let config = get_configuration()
        .expect("Failed to read config file");
    let address = format!(
        "{address}:{port}",
        address = config.application.host,
        port = config.application.port
    );
    let listener = TcpListener::bind(address)?;

    let storage: Arc<dyn Storage> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(MemoryStorage::new()),
        StorageBackend::Postgres => Arc::new(
            PostgresStorage::connect(&config.database)
                .await
                .expect("Failed to connect to DB"),
        ),
    };

    run(listener, storage)?.await
}
