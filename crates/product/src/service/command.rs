use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::CreateProductRequest,
        response::{api::ApiResponse, product::ProductResponse},
    },
    errors::{NotFoundKey, ServiceError},
    model::product::Product as ProductModel,
    validation::validate_id,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::RepositoryError,
    utils::{Method, Metrics, OperationTracer},
};
use tracing::{error, info, warn};

/// Create and delete. Holds the query repository as well, for the
/// existence check that precedes every delete.
#[derive(Clone)]
pub struct ProductCommandService {
    pub query: DynProductQueryRepository,
    pub command: DynProductCommandRepository,
    tracer: OperationTracer,
}

impl ProductCommandService {
    pub fn new(
        query: DynProductQueryRepository,
        command: DynProductCommandRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_command_service", "ProductCommandService");

        Self {
            query,
            command,
            tracer: OperationTracer::new("product-command-service", metrics),
        }
    }

    pub fn metrics(&self) -> &Metrics {
        self.tracer.metrics()
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating new Product: {:?}", req.name);

        let method = Method::Post;
        let tracing_ctx = self.tracer.start(
            "CreateProduct",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "create"),
                KeyValue::new("product.name", req.name.clone().unwrap_or_default()),
                KeyValue::new("product.price", req.price.to_string()),
                KeyValue::new("product.stock_quantity", req.stock_quantity.to_string()),
            ],
        );

        let new_product = match ProductModel::try_from(req) {
            Ok(product) => product,
            Err(reason) => {
                error!("❌ Rejected product input: {reason}");
                self.tracer
                    .complete_error(&tracing_ctx, method, &reason.to_string());
                return Err(ServiceError::from(reason));
            }
        };

        let product_model = match self.command.save(&new_product).await {
            Ok(product) if product.id.as_deref().is_some_and(|id| !id.is_empty()) => product,
            Ok(product) => {
                error!("❌ Repository saved '{}' without an ID", product.name);
                self.tracer
                    .complete_error(&tracing_ctx, method, "Repository did not assign an ID");
                return Err(ServiceError::Repo(RepositoryError::Custom(
                    "repository did not assign an id".to_string(),
                )));
            }
            Err(err) => {
                error!("❌ Failed to create product: {err:?}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to create product");
                return Err(ServiceError::Repo(err));
            }
        };

        self.tracer
            .complete_success(&tracing_ctx, method, "Product created successfully");

        let response = ProductResponse::from(product_model);

        info!(
            "✅ Product created successfully: {} (ID: {})",
            response.name, response.id,
        );

        Ok(ApiResponse::success("Product created successfully", response))
    }

    async fn delete_product(&self, id: Option<&str>) -> Result<ApiResponse<()>, ServiceError> {
        info!("💀 Deleting Product with ID: {id:?}");

        let method = Method::Delete;
        let tracing_ctx = self.tracer.start(
            "delete_product",
            vec![
                KeyValue::new("component", "product"),
                KeyValue::new("operation", "delete"),
                KeyValue::new("product.id", id.unwrap_or_default().to_string()),
            ],
        );

        let id = match validate_id(id) {
            Ok(id) => id,
            Err(reason) => {
                error!("❌ Rejected delete: {reason}");
                self.tracer
                    .complete_error(&tracing_ctx, method, &reason.to_string());
                return Err(ServiceError::from(reason));
            }
        };

        match self.query.exists_by_id(id).await {
            Ok(true) => {}
            Ok(false) => {
                let err = ServiceError::NotFound(NotFoundKey::Id(id.to_string()));
                error!("❌ {err}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Product not found");
                return Err(err);
            }
            Err(err) => {
                error!("❌ Failed to check existence of Product ID {id}: {err:?}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Database error");
                return Err(ServiceError::Repo(err));
            }
        }

        // The existence check and the delete are not atomic; a concurrent
        // delete in between surfaces as the repository's NotFound.
        match self.command.delete_by_id(id).await {
            Ok(()) => {
                self.tracer
                    .complete_success(&tracing_ctx, method, "Product deleted permanently");
            }
            Err(RepositoryError::NotFound) => {
                warn!("⚠️ Product ID {id} disappeared between existence check and delete");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Product not found");
                return Err(ServiceError::NotFound(NotFoundKey::Id(id.to_string())));
            }
            Err(err) => {
                error!("❌ Failed to delete Product ID {id}: {err:?}");
                self.tracer
                    .complete_error(&tracing_ctx, method, "Failed to delete product");
                return Err(ServiceError::Repo(err));
            }
        }

        info!("✅ Product permanently deleted: {id}");

        Ok(ApiResponse::success("Product deleted permanently", ()))
    }
}
