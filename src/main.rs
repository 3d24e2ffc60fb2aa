use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use fsr_api::config::Config;
use fsr_api::models::requests::NewReadingRequest;
use fsr_api::models::responses::{LatestReading, ReadingCreated, ReadingResponse};
use fsr_api::repository::readings::MongoReadingRepository;
use fsr_api::routes;
use fsr_api::services::reading_service::ReadingService;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::root,
        routes::readings::submit_reading,
        routes::readings::submit_reading_device,
        routes::readings::get_readings,
        routes::latest::get_latest_reading,
        routes::test::test_status,
        routes::test::test_echo,
    ),
    components(schemas(NewReadingRequest, ReadingCreated, ReadingResponse, LatestReading)),
    tags(
        (name = "Readings", description = "Ingestion and query endpoints"),
        (name = "API", description = "Connectivity test endpoints")
    ),
    info(
        title = "FSR Readings API",
        version = "1.0.0",
        description = "Ingests force-sensitive resistor readings from embedded devices and serves them to a polling dashboard"
    )
)]
struct ApiDoc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // The connection string is the one required setting; a missing or
    // unreadable configuration is fatal before the server binds.
    let config = Config::load().expect("Failed to load configuration");
    let server_address = config.server_address();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("Starting FSR readings API server...");
    println!("API endpoints:");
    println!("  - POST /readings, /api/readings - Submit a reading");
    println!("  - GET /api/readings - Latest 100 readings");
    println!("  - GET /api/latest - Most recent reading with status");
    println!("  - GET /swagger-ui/ - Swagger UI documentation");
    println!("Server address: {}", server_address);

    let repository = MongoReadingRepository::new(config.database.clone());
    let service = Arc::new(ReadingService::new(Arc::new(repository)));

    HttpServer::new(move || {
        App::new()
            .wrap(routes::cors())
            .app_data(routes::json_config())
            .app_data(web::Data::new(service.clone()))
            .service(routes::root)
            .service(routes::readings::submit_reading)
            .service(routes::readings::submit_reading_device)
            .service(routes::readings::get_readings)
            .service(routes::latest::get_latest_reading)
            .service(routes::test::test_status)
            .service(routes::test::test_echo)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_address)?
    .run()
    .await
}
