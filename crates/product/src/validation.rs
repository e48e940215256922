//! Input checks applied before any repository call.
//!
//! Each rule is a pure function returning the checked value or the
//! [`ValidationError`] naming why it was rejected. The `Display` text of a
//! reason is the message shown to API clients.

use crate::domain::requests::product::CreateProductRequest;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Product name cannot be null or empty.")]
    NameRequired,

    #[error("Product price cannot be negative.")]
    NegativePrice,

    #[error("Stock quantity cannot be negative.")]
    NegativeStockQuantity,

    #[error("Product ID cannot be null or empty.")]
    IdRequired,

    #[error("Product color cannot be null or empty.")]
    ColorRequired,

    #[error("Price values cannot be negative.")]
    NegativePriceRange,

    #[error("minPrice cannot be greater than maxPrice.")]
    InvertedPriceRange,
}

impl ValidationError {
    /// Name of the input field the reason refers to, as clients spell it.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "name",
            ValidationError::NegativePrice => "price",
            ValidationError::NegativeStockQuantity => "stockQuantity",
            ValidationError::IdRequired => "id",
            ValidationError::ColorRequired => "color",
            ValidationError::NegativePriceRange | ValidationError::InvertedPriceRange => {
                "priceRange"
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn validate_name(name: Option<&str>) -> Result<&str, ValidationError> {
    non_blank(name).ok_or(ValidationError::NameRequired)
}

// NaN fails the `>=` comparison and is rejected with the negative reasons.
pub fn validate_price(price: f64) -> Result<f64, ValidationError> {
    if price >= 0.0 {
        Ok(price)
    } else {
        Err(ValidationError::NegativePrice)
    }
}

pub fn validate_stock_quantity(stock_quantity: i32) -> Result<i32, ValidationError> {
    if stock_quantity < 0 {
        return Err(ValidationError::NegativeStockQuantity);
    }
    Ok(stock_quantity)
}

pub fn validate_id(id: Option<&str>) -> Result<&str, ValidationError> {
    non_blank(id).ok_or(ValidationError::IdRequired)
}

pub fn validate_color(color: Option<&str>) -> Result<&str, ValidationError> {
    non_blank(color).ok_or(ValidationError::ColorRequired)
}

pub fn validate_price_range(min_price: f64, max_price: f64) -> Result<(f64, f64), ValidationError> {
    if !(min_price >= 0.0 && max_price >= 0.0) {
        return Err(ValidationError::NegativePriceRange);
    }
    if min_price > max_price {
        return Err(ValidationError::InvertedPriceRange);
    }
    Ok((min_price, max_price))
}

/// Checks name, then price, then stock quantity; the first failure wins.
pub fn validate_create_request(req: &CreateProductRequest) -> Result<(), ValidationError> {
    validate_name(req.name.as_deref())?;
    validate_price(req.price)?;
    validate_stock_quantity(req.stock_quantity)?;
    Ok(())
}
