//! # salecard-client
//!
//! Typed async client for the sale card catalog service: the record model,
//! the multipart write shape and the four CRUD endpoints.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | List | `GET` | `/api/getSaleCard` |
//! | Create | `POST` (multipart) | `/api/salecard` |
//! | Update | `PATCH` (multipart) | `/sale-cardupdate/{id}` |
//! | Delete | `DELETE` | `/card-delete/{id}` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//! - **`test-utils`**: Export [`MemoryCatalog`], an in-memory [`CatalogApi`] for tests.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use salecard_client::{CardForm, CatalogApi, Category, ClientConfig, HttpCatalogClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpCatalogClient::new(ClientConfig::default())?;
//!
//!     let form = CardForm {
//!         title: "Dune".to_string(),
//!         description: "Sci-fi".to_string(),
//!         category: Category::English.to_string(),
//!         price: 10.0,
//!         sale_price: 8.0,
//!         image: None,
//!     };
//!     client.create_card(&form).await?;
//!
//!     for card in client.list_cards().await? {
//!         println!("{} {} ${}", card.id, card.title, card.price);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError):
//!
//! - [`ClientError::NetworkError`] / [`ClientError::Timeout`]: no response received
//! - [`ClientError::Api`]: non-2xx response; carries the server `message` when the
//!   body is `{ "error": <truthy>, "message": "..." }`
//! - [`ClientError::ParseError`]: the list body is not the expected `{ data: [...] }`
//!
//! Nothing is retried automatically.

mod client;
mod error;
mod http_client;
mod traits;
mod types;

#[cfg(any(test, feature = "test-utils"))]
mod memory;

pub use client::{ClientConfig, DEFAULT_BASE_URL, HttpCatalogClient};
pub use error::{ClientError, Result};
pub use http_client::truncate_for_log;
pub use traits::CatalogApi;
pub use types::{
    ApiErrorBody, CardForm, CardId, Category, ImageUpload, ListResponse, SaleCard,
    UnknownCategory, format_amount,
};

#[cfg(any(test, feature = "test-utils"))]
pub use memory::{MemoryCatalog, Operation};
