// model = "claude-opus-4-5"
// created = "2026-08-04"
// modified = "2026-08-05"
// driver = "Isaac Clayton"

//! Orderly - a generic ordering engine for semi-structured values.
//!
//! # Quick Start
//!
//! ```
//! use orderly::Order;
//! use orderly::Value;
//!
//! // Collections arrive as JSON from somewhere upstream
//! let posts = Value::from(serde_json::json!([
//!     { "title": "Second post", "likes": 4 },
//!     { "title": "First post", "likes": 9 },
//! ]));
//!
//! // Most liked first
//! let popular = Order::by("likes").reversed(true).apply(&posts);
//! assert_eq!(popular, Value::from(serde_json::json!([
//!     { "title": "First post", "likes": 9 },
//!     { "title": "Second post", "likes": 4 },
//! ])));
//! ```

pub mod compare;
pub mod order;
pub mod path;
pub mod value;

pub use crate::order::Directive;
pub use crate::order::Order;
pub use crate::order::order;
pub use crate::value::Value;
