use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::FindProductsByPriceRange,
        response::{api::ApiResponse, product::ProductResponse},
    },
    errors::{NotFoundKey, ServiceError},
    model::product::Product as ProductModel,
    validation::{ValidationError, validate_color, validate_name, validate_price_range},
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::RepositoryError,
    utils::{Method, Metrics, OperationTracer, TracingContext},
};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    tracer: OperationTracer,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_query_service", "ProductQueryService");

        Self {
            query,
            tracer: OperationTracer::new("product-query-service", metrics),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        self.tracer.metrics()
    }

    fn reject(&self, tracing_ctx: &TracingContext, reason: ValidationError) -> ServiceError {
        error!("❌ Invalid lookup input: {reason}");
        self.tracer
            .complete_error(tracing_ctx, Method::Get, &reason.to_string());
        ServiceError::from(reason)
    }

    /// Turns a repository lookup into the response, treating an empty
    /// result as `NotFound` for `key`.
    fn collect_matches(
        &self,
        tracing_ctx: &TracingContext,
        result: Result<Vec<ProductModel>, RepositoryError>,
        key: NotFoundKey,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = match result {
            Ok(products) if products.is_empty() => {
                let err = ServiceError::NotFound(key);
                error!("❌ {err}");
                self.tracer
                    .complete_error(tracing_ctx, Method::Get, &err.to_string());
                return Err(err);
            }
            Ok(products) => products,
            Err(e) => {
                error!("❌ Database error while looking up products ({key:?}): {e:?}");
                self.tracer
                    .complete_error(tracing_ctx, Method::Get, "Database error");
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ Found {} products matching {key:?}", products.len());
        self.tracer
            .complete_success(tracing_ctx, Method::Get, "Products retrieved from DB");

        let data = products.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponse::success("Products retrieved successfully", data))
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        info!("🔍 Finding all products");

        let tracing_ctx = self.tracer.start(
            "product_find_all",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_all"),
            ],
        );

        let products = match self.query.find_all().await {
            Ok(products) => {
                info!("✅ Retrieved {} products from DB", products.len());
                self.tracer.complete_success(
                    &tracing_ctx,
                    Method::Get,
                    "Products retrieved from DB",
                );
                products
            }
            Err(e) => {
                let msg = format!("❌ Failed to fetch all products: {e:?}");
                error!("{msg}");
                self.tracer.complete_error(&tracing_ctx, Method::Get, &msg);
                return Err(ServiceError::RetrievalFailed(e));
            }
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        Ok(ApiResponse::success("Products retrieved successfully", data))
    }

    async fn find_by_name(
        &self,
        name: Option<&str>,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        info!("🔍 Finding products by name: {name:?}");

        let tracing_ctx = self.tracer.start(
            "product_find_by_name",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_name"),
                KeyValue::new("product.name", name.unwrap_or_default().to_string()),
            ],
        );

        let name = validate_name(name).map_err(|reason| self.reject(&tracing_ctx, reason))?;

        let result = self.query.find_by_name(name).await;

        self.collect_matches(&tracing_ctx, result, NotFoundKey::Name(name.to_string()))
    }

    async fn find_by_price_range(
        &self,
        req: &FindProductsByPriceRange,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        info!(
            "💰 Finding products priced between {} and {}",
            req.min_price, req.max_price
        );

        let tracing_ctx = self.tracer.start(
            "product_find_by_price_range",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_price_range"),
                KeyValue::new("product.min_price", req.min_price.to_string()),
                KeyValue::new("product.max_price", req.max_price.to_string()),
            ],
        );

        let (min, max) = validate_price_range(req.min_price, req.max_price)
            .map_err(|reason| self.reject(&tracing_ctx, reason))?;

        let result = self.query.find_by_price_between(min, max).await;

        self.collect_matches(&tracing_ctx, result, NotFoundKey::PriceRange { min, max })
    }

    async fn find_by_color(
        &self,
        color: Option<&str>,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        info!("🎨 Finding products by color: {color:?}");

        let tracing_ctx = self.tracer.start(
            "product_find_by_color",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "find_by_color"),
                KeyValue::new("product.color", color.unwrap_or_default().to_string()),
            ],
        );

        let color = validate_color(color).map_err(|reason| self.reject(&tracing_ctx, reason))?;

        let result = self.query.find_by_color(color).await;

        self.collect_matches(&tracing_ctx, result, NotFoundKey::Color(color.to_string()))
    }
}
