use crate::{handlers, settings::Settings};
use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use launch_stats::DatasetStore;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub fn configure_routes(service_config: &mut web::ServiceConfig) {
    service_config
        .route("/health", web::get().to(handlers::status))
        .service(
            web::scope("/api/v1")
                .route("/dashboard", web::get().to(handlers::dashboard))
                .service(
                    web::scope("/charts")
                        .route("/success-summary", web::get().to(handlers::success_summary))
                        .route("/payload-outcome", web::get().to(handlers::payload_outcome)),
                ),
        );
}

pub fn run(settings: Settings) -> Result<Server, anyhow::Error> {
    let mut store = DatasetStore::from_csv_path(&settings.dataset.path).with_context(|| {
        format!(
            "failed to load launch records from {}",
            settings.dataset.path.display()
        )
    })?;
    if let Some(sites) = settings.dataset.known_sites {
        store = store.with_known_sites(sites);
    }
    let store = web::Data::new(store);

    tracing::info!(addr = %settings.server.addr, "launch stats server is starting");
    let listener =
        TcpListener::bind(settings.server.addr).context("failed to bind server address")?;
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(store.clone())
            .configure(configure_routes)
    })
    .listen(listener)?
    .run();
    Ok(server)
}
