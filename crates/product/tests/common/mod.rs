#![allow(dead_code)]

use async_trait::async_trait;
use product::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    di::DependenciesInjectDeps,
    domain::requests::product::CreateProductRequest,
    model::product::Product,
    service::{command::ProductCommandService, query::ProductQueryService},
};
use prometheus_client::registry::Registry;
use shared::errors::RepositoryError;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// A repository call as observed by the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FindAll,
    ExistsById(String),
    FindByName(String),
    FindByPriceBetween(f64, f64),
    FindByColor(String),
    Save(Product),
    DeleteById(String),
}

/// In-memory store that records every call made against it.
#[derive(Default)]
pub struct RecordingRepository {
    products: Mutex<Vec<Product>>,
    calls: Mutex<Vec<Call>>,
    next_id: AtomicUsize,
    fail_reads: AtomicBool,
    exists_override: Mutex<Option<bool>>,
}

impl RecordingRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_products(products: Vec<Product>) -> Arc<Self> {
        let repo = Self::default();
        *repo.products.lock().unwrap() = products;
        Arc::new(repo)
    }

    /// Every read answers with an error, as an unreachable database would.
    pub fn failing() -> Arc<Self> {
        let repo = Self::default();
        repo.fail_reads.store(true, Ordering::SeqCst);
        Arc::new(repo)
    }

    /// Forces `exists_by_id` to answer `answer` regardless of the contents.
    pub fn answer_exists(&self, answer: bool) {
        *self.exists_override.lock().unwrap() = Some(answer);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| matches(c)).count()
    }

    pub fn saves(&self) -> usize {
        self.count(|c| matches!(c, Call::Save(_)))
    }

    pub fn deletes(&self) -> usize {
        self.count(|c| matches!(c, Call::DeleteById(_)))
    }

    pub fn stored(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn read_guard(&self) -> Result<(), RepositoryError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(RepositoryError::Custom("connection refused".into()));
        }
        Ok(())
    }

    fn matching(&self, keep: impl Fn(&Product) -> bool) -> Vec<Product> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| keep(p))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for RecordingRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        self.record(Call::FindAll);
        self.read_guard()?;
        Ok(self.stored())
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool, RepositoryError> {
        self.record(Call::ExistsById(id.to_string()));
        self.read_guard()?;
        if let Some(answer) = *self.exists_override.lock().unwrap() {
            return Ok(answer);
        }
        Ok(!self.matching(|p| p.id.as_deref() == Some(id)).is_empty())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError> {
        self.record(Call::FindByName(name.to_string()));
        self.read_guard()?;
        Ok(self.matching(|p| p.name == name))
    }

    async fn find_by_price_between(
        &self,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<Product>, RepositoryError> {
        self.record(Call::FindByPriceBetween(min_price, max_price));
        self.read_guard()?;
        Ok(self.matching(|p| p.price >= min_price && p.price <= max_price))
    }

    async fn find_by_color(&self, color: &str) -> Result<Vec<Product>, RepositoryError> {
        self.record(Call::FindByColor(color.to_string()));
        self.read_guard()?;
        Ok(self.matching(|p| p.color.as_deref() == Some(color)))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for RecordingRepository {
    async fn save(&self, product: &Product) -> Result<Product, RepositoryError> {
        self.record(Call::Save(product.clone()));

        let mut saved = product.clone();
        if saved.id.is_none() {
            let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            saved.id = Some(format!("generated-{n}"));
        }

        self.products.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), RepositoryError> {
        self.record(Call::DeleteById(id.to_string()));

        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id.as_deref() != Some(id));

        if products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

pub fn deps(repo: &Arc<RecordingRepository>) -> DependenciesInjectDeps {
    DependenciesInjectDeps {
        query_repo: repo.clone(),
        command_repo: repo.clone(),
    }
}

pub fn query_service(repo: &Arc<RecordingRepository>) -> ProductQueryService {
    ProductQueryService::new(repo.clone(), &mut Registry::default())
}

pub fn command_service(repo: &Arc<RecordingRepository>) -> ProductCommandService {
    ProductCommandService::new(repo.clone(), repo.clone(), &mut Registry::default())
}

pub fn product(id: &str, name: &str, color: &str, price: f64, stock_quantity: i32) -> Product {
    Product {
        id: Some(id.to_string()),
        name: name.to_string(),
        description: Some(format!("{name} description")),
        color: Some(color.to_string()),
        price,
        stock_quantity,
    }
}

pub fn create_request(
    name: Option<&str>,
    color: &str,
    price: f64,
    stock_quantity: i32,
) -> CreateProductRequest {
    CreateProductRequest {
        name: name.map(str::to_string),
        description: Some("Test Description".to_string()),
        color: Some(color.to_string()),
        price,
        stock_quantity,
    }
}

pub fn catalog() -> Vec<Product> {
    vec![
        product("p-1", "Product A", "Red", 10.0, 100),
        product("p-2", "Product B", "Blue", 20.0, 200),
        product("p-3", "Product C", "Red", 30.99, 300),
        product("p-4", "Product A", "Green", 55.5, 0),
    ]
}
