use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use actix_web::dev::Server;

use crate::routes;
use crate::storage::Storage;
use tracing_actix_web::TracingLogger;
use actix_web::web::Data;

pub fn run(
    listener: TcpListener,
    storage: Arc<dyn Storage>,
) -> Result<Server, std::io::Error> {
    let storage: Data<dyn Storage> = Data::from(storage);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(routes::health_check::health_check))
            .route("/api/contact", web::post().to(routes::contact::submit_contact))
            .route("/api/newsletter", web::post().to(routes::newsletter::subscribe))
            .app_data(storage.clone())
    })
        .listen(listener)?
        .run();
    Ok(server)
}
