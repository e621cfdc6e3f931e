//! API routes module

pub mod health;
pub mod products;

use axum::Router;
use axum_helpers::{create_router, health_router};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// API routes without the `/api` prefix; `create_router` adds it.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest(domain_products::entity::Model::URL, products::router(state))
}

/// Full application: `/api` routes, docs, middleware, `/health` and `/ready`.
pub fn app(state: &AppState) -> io::Result<Router> {
    let router = create_router::<ApiDoc>(routes(state))?;

    Ok(router
        .merge(health_router(state.config.app))
        .merge(health::router(state.db.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use core_config::server::ServerConfig;
    use database::postgres::PostgresConfig;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value as DbValue};
    use serde_json::{Value, json};
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    fn state(db: MockDatabase) -> AppState {
        AppState {
            config: Config {
                app: core_config::app_info!(),
                database: PostgresConfig::new("postgresql://localhost/products"),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db: db.into_connection(),
        }
    }

    fn build(db: MockDatabase) -> Router {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("http://localhost:3000"), || {
            app(&state(db)).unwrap()
        })
    }

    fn product_row(id: i32, name: &str) -> BTreeMap<&'static str, DbValue> {
        [
            ("id", id.into()),
            ("name", name.into()),
            ("price", 1.5f64.into()),
            ("quantity", 10i32.into()),
        ]
        .into_iter()
        .collect()
    }

    async fn json_body(body: Body) -> Value {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_products_under_api_prefix() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![product_row(1, "Apple")]]);

        let response = build(db)
            .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response.into_body()).await,
            json!([{"id": 1, "name": "Apple", "price": 1.5, "quantity": 10}])
        );
    }

    #[tokio::test]
    async fn test_create_sets_full_location() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![product_row(1, "Apple")]]);

        let response = build(db)
            .oneshot(
                Request::post("/api/products")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({"name": "Apple", "price": 1.5, "quantity": 10}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/api/products/1");
    }

    #[tokio::test]
    async fn test_health_and_unknown_route() {
        let app = build(MockDatabase::new(DatabaseBackend::Postgres));

        let response = app
            .clone()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response.into_body()).await["error"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_ready_reports_database_state() {
        let row: BTreeMap<&str, DbValue> = [("?column?", 1i32.into())].into_iter().collect();
        let up = MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![row]]);
        let response = build(up)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let down = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())]);
        let response = build(down)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response.into_body()).await["database"], "disconnected");
    }
}
