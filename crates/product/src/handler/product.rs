use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{CreateProductRequest, FindProductsByPriceRange},
        response::{api::ApiResponse, product::ProductResponse},
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
};
use shared::errors::{ErrorResponse, HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses(
        (status = 200, description = "List of products", body = ApiResponse<Vec<ProductResponse>>),
        (status = 500, description = "Products could not be retrieved", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/products",
    tag = "Product",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    Json(body): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_product(&body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Product",
    params(("id" = String, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Blank product ID", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_product(Some(&id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/products/name/{name}",
    tag = "Product",
    params(("name" = String, Path, description = "Exact product name")),
    responses(
        (status = 200, description = "Products with the given name", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, description = "Blank name", body = ErrorResponse),
        (status = 404, description = "No product matched", body = ErrorResponse)
    )
)]
pub async fn get_products_by_name(
    Extension(service): Extension<DynProductQueryService>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_name(Some(&name)).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/color/{color}",
    tag = "Product",
    params(("color" = String, Path, description = "Exact product color")),
    responses(
        (status = 200, description = "Products with the given color", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, description = "Blank color", body = ErrorResponse),
        (status = 404, description = "No product matched", body = ErrorResponse)
    )
)]
pub async fn get_products_by_color(
    Extension(service): Extension<DynProductQueryService>,
    Path(color): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_color(Some(&color)).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/products/price",
    tag = "Product",
    params(FindProductsByPriceRange),
    responses(
        (status = 200, description = "Products within the inclusive price range", body = ApiResponse<Vec<ProductResponse>>),
        (status = 400, description = "Invalid price range", body = ErrorResponse),
        (status = 404, description = "No product matched", body = ErrorResponse)
    )
)]
pub async fn get_products_by_price_range(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindProductsByPriceRange>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_price_range(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/products", get(get_products).post(create_product))
        .route("/products/{id}", delete(delete_product))
        .route("/products/name/{name}", get(get_products_by_name))
        .route("/products/color/{color}", get(get_products_by_color))
        .route("/products/price", get(get_products_by_price_range))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
}
