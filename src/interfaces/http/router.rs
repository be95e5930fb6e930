//! API router with Swagger UI
//!
//! One flat route table under `/v1`, a single Bearer middleware over it
//! (signup and login are allow-listed inside the middleware), and a
//! greeting fallback for everything unmatched.

use std::sync::Arc;

use axum::{
    extract::FromRef,
    middleware,
    routing::{get, post},
    Json, Router,
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::services::{
    CommunityService, InhabitantService, OrderService, UserService,
};
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::database::repositories::{
    CommunityRepository, InhabitantRepository, OrderRepository, UserRepository,
};
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{auth, communities, inhabitants, orders, users};

use auth::AuthHandlerState;
use communities::CommunityHandlerState;
use inhabitants::InhabitantHandlerState;
use orders::OrderHandlerState;
use users::UserHandlerState;

/// Unified state for every route. Axum extracts the specific handler
/// state via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<UserRepository>>,
    pub community_service: Arc<CommunityService<CommunityRepository, InhabitantRepository>>,
    pub inhabitant_service: Arc<InhabitantService<InhabitantRepository, CommunityRepository>>,
    pub order_service:
        Arc<OrderService<OrderRepository, UserRepository, InhabitantRepository, CommunityRepository>>,
    pub auth: AuthState,
}

impl AppState {
    /// Wire every service onto one database connection.
    pub fn new(db: DatabaseConnection, jwt_config: JwtConfig, bcrypt_cost: u32) -> Self {
        let user_repo = Arc::new(UserRepository::new(db.clone()));
        let community_repo = Arc::new(CommunityRepository::new(db.clone()));
        let inhabitant_repo = Arc::new(InhabitantRepository::new(db.clone()));
        let order_repo = Arc::new(OrderRepository::new(db));

        Self {
            user_service: Arc::new(UserService::new(
                user_repo.clone(),
                jwt_config.clone(),
                bcrypt_cost,
            )),
            community_service: Arc::new(CommunityService::new(
                community_repo.clone(),
                inhabitant_repo.clone(),
            )),
            inhabitant_service: Arc::new(InhabitantService::new(
                inhabitant_repo.clone(),
                community_repo.clone(),
            )),
            order_service: Arc::new(OrderService::new(
                order_repo,
                user_repo,
                inhabitant_repo,
                community_repo,
            )),
            auth: AuthState { jwt_config },
        }
    }
}

// -- FromRef implementations so each handler keeps its own State<T> extractor --

impl FromRef<AppState> for UserHandlerState {
    fn from_ref(s: &AppState) -> Self {
        UserHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<AppState> for AuthHandlerState {
    fn from_ref(s: &AppState) -> Self {
        AuthHandlerState {
            user_service: Arc::clone(&s.user_service),
        }
    }
}

impl FromRef<AppState> for CommunityHandlerState {
    fn from_ref(s: &AppState) -> Self {
        CommunityHandlerState {
            community_service: Arc::clone(&s.community_service),
        }
    }
}

impl FromRef<AppState> for InhabitantHandlerState {
    fn from_ref(s: &AppState) -> Self {
        InhabitantHandlerState {
            inhabitant_service: Arc::clone(&s.inhabitant_service),
        }
    }
}

impl FromRef<AppState> for OrderHandlerState {
    fn from_ref(s: &AppState) -> Self {
        OrderHandlerState {
            order_service: Arc::clone(&s.order_service),
        }
    }
}

impl FromRef<AppState> for AuthState {
    fn from_ref(s: &AppState) -> Self {
        s.auth.clone()
    }
}

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::login,
        // Users
        users::handlers::create_user,
        users::handlers::list_users,
        users::handlers::get_user_by_email,
        users::handlers::update_user,
        users::handlers::delete_user,
        // Communities
        communities::handlers::create_community,
        communities::handlers::list_communities,
        communities::handlers::get_community,
        communities::handlers::get_community_by_name,
        communities::handlers::update_community,
        communities::handlers::delete_community,
        // Inhabitants
        inhabitants::handlers::create_inhabitant,
        inhabitants::handlers::list_inhabitants,
        inhabitants::handlers::get_inhabitant_by_cpf,
        inhabitants::handlers::update_inhabitant,
        inhabitants::handlers::delete_inhabitant,
        // Orders
        orders::handlers::create_order,
        orders::handlers::list_orders,
        orders::handlers::get_processed_orders,
        orders::handlers::get_orders_with_community,
        orders::handlers::get_order,
        orders::handlers::update_order,
        orders::handlers::delete_order,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            // Users
            users::UserDto,
            users::CreateUserRequest,
            users::UpdateUserRequest,
            users::DeletedUserResponse,
            // Communities
            communities::CommunityDto,
            communities::CreateCommunityRequest,
            communities::CreatedCommunityResponse,
            // Inhabitants
            inhabitants::AddressDto,
            inhabitants::InhabitantDto,
            inhabitants::InhabitantListItemDto,
            inhabitants::SavedInhabitantResponse,
            inhabitants::CreateInhabitantRequest,
            // Orders
            orders::OrderDto,
            orders::CreateOrderRequest,
            orders::UpdateOrderRequest,
            orders::ProcessedOrderDto,
            orders::CommunityOrderDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Caseworker login (JWT)"),
        (name = "Users", description = "Caseworker account management"),
        (name = "Communities", description = "Community registry"),
        (name = "Inhabitants", description = "Beneficiary registry with CPF validation"),
        (name = "Orders", description = "Assistance requests and reports"),
    ),
    info(
        title = "Social Assistance API",
        version = "1.0.0",
        description = "REST API for municipal social-assistance record keeping",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Unmatched routes answer with a fixed greeting, not a 404.
async fn greeting() -> Json<serde_json::Value> {
    Json(json!({ "message": "Hello, world!" }))
}

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection, jwt_config: JwtConfig, bcrypt_cost: u32) -> Router {
    let state = AppState::new(db, jwt_config, bcrypt_cost);
    let auth_state = state.auth.clone();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Auth
        .route("/v1/auth/login", post(auth::handlers::login))
        // Users (signup is public via the middleware allowlist)
        .route(
            "/v1/user",
            post(users::handlers::create_user).get(users::handlers::list_users),
        )
        // GET takes an email, PATCH/DELETE take an id; the segment is
        // opaque to the router either way.
        .route(
            "/v1/user/{key}",
            get(users::handlers::get_user_by_email)
                .patch(users::handlers::update_user)
                .delete(users::handlers::delete_user),
        )
        // Communities
        .route(
            "/v1/community",
            post(communities::handlers::create_community)
                .get(communities::handlers::list_communities),
        )
        .route(
            "/v1/community/query/name",
            get(communities::handlers::get_community_by_name),
        )
        .route(
            "/v1/community/{id}",
            get(communities::handlers::get_community)
                .put(communities::handlers::update_community)
                .delete(communities::handlers::delete_community),
        )
        // Inhabitants
        .route(
            "/v1/inhabitant",
            post(inhabitants::handlers::create_inhabitant)
                .get(inhabitants::handlers::list_inhabitants),
        )
        // GET takes a CPF, PUT/DELETE take an id; one registration, since
        // two captures in the same position may not carry different names.
        .route(
            "/v1/inhabitant/{key}",
            get(inhabitants::handlers::get_inhabitant_by_cpf)
                .put(inhabitants::handlers::update_inhabitant)
                .delete(inhabitants::handlers::delete_inhabitant),
        )
        // Orders
        .route(
            "/v1/order",
            post(orders::handlers::create_order).get(orders::handlers::list_orders),
        )
        .route(
            "/v1/order/data/view",
            get(orders::handlers::get_processed_orders),
        )
        .route(
            "/v1/order/with/community",
            get(orders::handlers::get_orders_with_community),
        )
        .route(
            "/v1/order/{id}",
            get(orders::handlers::get_order)
                .put(orders::handlers::update_order)
                .delete(orders::handlers::delete_order),
        )
        // Bearer middleware only fires on matched routes, so the greeting
        // fallback below stays reachable without a token.
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(api_routes)
        .fallback(greeting)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::infrastructure::database::migrator::Migrator;

    async fn test_router() -> Router {
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1);
        let db = Database::connect(options).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        create_api_router(db, JwtConfig::default(), 4)
    }

    fn json_request(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn signup_and_login(router: &Router) -> (String, String) {
        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/v1/user",
                None,
                serde_json::json!({
                    "name": "Ana Caseworker",
                    "email": "ana@city.gov",
                    "password": "secret1",
                    "userType": "Bolsa Família"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let user = body_json(response).await;

        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/v1/auth/login",
                None,
                serde_json::json!({ "email": "ana@city.gov", "password": "secret1" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let login = body_json(response).await;

        (
            user["id"].as_str().unwrap().to_string(),
            login["token"].as_str().unwrap().to_string(),
        )
    }

    #[tokio::test]
    async fn unmatched_routes_answer_with_the_greeting() {
        let router = test_router().await;
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/no/such/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "Hello, world!");
    }

    #[tokio::test]
    async fn protected_routes_require_a_token() {
        let router = test_router().await;

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/v1/user")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Token not provided");

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/v1/user")
                    .header(header::AUTHORIZATION, "Bearer not-a-jwt")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Token invalid");
    }

    #[tokio::test]
    async fn signup_login_and_authenticated_crud() {
        let router = test_router().await;
        let (user_id, token) = signup_and_login(&router).await;

        // Community
        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/v1/community",
                Some(&token),
                serde_json::json!({ "name": "Centro" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let community = body_json(response).await;
        let community_id = community["community"]["id"].as_str().unwrap().to_string();

        // Inhabitant
        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/v1/inhabitant",
                Some(&token),
                serde_json::json!({
                    "name": "Maria da Silva",
                    "cpf": "529.982.247-25",
                    "street": "Rua das Flores",
                    "number": "42",
                    "communityID": community_id
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["inhabitant"]["cpf"], "52998224725");
        assert_eq!(created["message"], "Inhabitant created successfully");
        let inhabitant_id = created["inhabitant"]["id"].as_str().unwrap().to_string();

        // Order
        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/v1/order",
                Some(&token),
                serde_json::json!({
                    "content": "Cesta básica",
                    "userID": user_id,
                    "inhabitantID": inhabitant_id
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let order = body_json(response).await;
        assert_eq!(order["status"], "Pendente");

        // Current-year community projection
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/v1/order/with/community")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let rows = body_json(response).await;
        assert_eq!(rows[0]["community"], "Centro");
    }

    #[tokio::test]
    async fn inhabitant_lookup_update_and_delete_share_one_route() {
        let router = test_router().await;
        let (_, token) = signup_and_login(&router).await;

        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/v1/community",
                Some(&token),
                serde_json::json!({ "name": "Centro" }),
            ))
            .await
            .unwrap();
        let community = body_json(response).await;
        let community_id = community["community"]["id"].as_str().unwrap().to_string();

        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/v1/inhabitant",
                Some(&token),
                serde_json::json!({
                    "name": "Maria da Silva",
                    "cpf": "52998224725",
                    "street": "Rua das Flores",
                    "number": "42",
                    "communityID": community_id
                }),
            ))
            .await
            .unwrap();
        let created = body_json(response).await;
        let inhabitant_id = created["inhabitant"]["id"].as_str().unwrap().to_string();

        // GET addresses the record by CPF.
        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/v1/inhabitant/529.982.247-25")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id"], inhabitant_id.as_str());

        // PUT and DELETE address it by id.
        let response = router
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/v1/inhabitant/{}", inhabitant_id),
                Some(&token),
                serde_json::json!({
                    "name": "Maria dos Santos",
                    "cpf": "52998224725",
                    "street": "Rua das Flores",
                    "number": "42",
                    "communityID": community["community"]["id"]
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let updated = body_json(response).await;
        assert_eq!(updated["inhabitant"]["name"], "Maria dos Santos");
        assert_eq!(updated["message"], "Inhabitant updated successfully");

        let response = router
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/v1/inhabitant/{}", inhabitant_id))
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn oversized_order_content_is_rejected_with_violations() {
        let router = test_router().await;
        let (user_id, token) = signup_and_login(&router).await;

        let response = router
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/v1/order",
                Some(&token),
                serde_json::json!({
                    "content": "x".repeat(256),
                    "userID": user_id,
                    "inhabitantID": "any"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errors"][0]["property"], "content");

        // Nothing was persisted.
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/v1/order")
                    .header(header::AUTHORIZATION, format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn login_with_bad_credentials_is_a_400() {
        let router = test_router().await;
        signup_and_login(&router).await;

        let response = router
            .oneshot(json_request(
                Method::POST,
                "/v1/auth/login",
                None,
                serde_json::json!({ "email": "ana@city.gov", "password": "wrong" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid e-mail or password");
    }
}
