use std::net::TcpListener;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::commerce_client::CommerceClient;
use crate::configuration::{CheckoutSettings, Settings};
use crate::gateway_client::PaymentGatewayClient;
use crate::pending_checkout::{PendingCheckoutStore, RedisCheckoutStore};
use crate::redis::RedisClient;
use crate::routes::main_route;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let commerce_timeout = configuration.commerce.timeout();
        let commerce_client = CommerceClient::new(
            configuration.commerce.base_url,
            configuration.commerce.authorization_token,
            commerce_timeout,
        );
        let gateway_timeout = configuration.gateway.timeout();
        let gateway_client = PaymentGatewayClient::new(
            configuration.gateway.base_url,
            configuration.gateway.authorization_token,
            gateway_timeout,
        );
        let redis_client = RedisClient::new(configuration.redis).await?;
        let pending_store: Arc<dyn PendingCheckoutStore> =
            Arc::new(RedisCheckoutStore::new(redis_client));

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        println!("Listening {}", address);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr().unwrap().port();
        let server = run(
            listener,
            commerce_client,
            gateway_client,
            pending_store,
            configuration.checkout,
            configuration.application.cors_origins,
        )
        .await?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn build_cors(origins: &[String]) -> Cors {
    if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
        return Cors::permissive();
    }
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);
    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

async fn run(
    listener: TcpListener,
    commerce_client: CommerceClient,
    gateway_client: PaymentGatewayClient,
    pending_store: Arc<dyn PendingCheckoutStore>,
    checkout_settings: CheckoutSettings,
    cors_origins: Vec<String>,
) -> Result<Server, anyhow::Error> {
    let commerce_client = web::Data::new(commerce_client);
    let gateway_client = web::Data::new(gateway_client);
    let pending_store: web::Data<dyn PendingCheckoutStore> = web::Data::from(pending_store);
    let checkout_settings = web::Data::new(checkout_settings);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(build_cors(&cors_origins))
            .app_data(commerce_client.clone())
            .app_data(gateway_client.clone())
            .app_data(pending_store.clone())
            .app_data(checkout_settings.clone())
            .configure(main_route)
    })
    .workers(4)
    .listen(listener)?
    .run();

    Ok(server)
}
