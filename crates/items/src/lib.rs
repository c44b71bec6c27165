//! # Recovr Items (`items`)
//!
//! Item records reported to the lost-and-found service and the storage seam
//! the matcher reads them through.
//!
//! ## Core Types
//!
//! - [`Item`]: a reported item snapshot (name, description, category,
//!   location, timestamps, coordinates, reporter, status).
//! - [`ItemStatus`]: lifecycle flag; matching pairs `Lost` against `Found`.
//! - [`ItemCategory`]: well-known category labels plus free-form ones.
//! - [`ItemStore`]: lookup capability consumed by the matcher
//!   (by id, by reporter, by status).
//! - [`InMemoryItemStore`]: `RwLock`-guarded store, optionally seeded from a
//!   JSON file.
//!
//! ## Example
//!
//! ```
//! use items::{InMemoryItemStore, ItemStatus, ItemStore, NewItem, UserId};
//!
//! let store = InMemoryItemStore::new();
//! let item = store
//!     .insert(NewItem::new("Black wallet", ItemStatus::Lost).reported_by(UserId(7)))
//!     .expect("insert");
//!
//! let lost = store.find_by_status(ItemStatus::Lost).expect("scan");
//! assert_eq!(lost.len(), 1);
//! assert_eq!(lost[0].id, item.id);
//! ```

pub mod error;
pub mod store;
pub mod types;

pub use crate::error::StoreError;
pub use crate::store::{InMemoryItemStore, ItemStore, StoreConfig};
pub use crate::types::{Item, ItemCategory, ItemId, ItemStatus, NewItem, UserId};
