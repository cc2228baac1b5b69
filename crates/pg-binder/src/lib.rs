//! # pg-binder
//!
//! Rewrites SQL statement text that references named parameters (`:name`)
//! into text using sequential positional placeholders (`$1`, `$2`, ...),
//! together with the ordered list of values matching those positions.
//!
//! The crate is a pure text transformation: it never executes SQL and never
//! validates SQL syntax beyond what is needed to locate a `VALUES` clause.
//! The resulting `{text, values}` pair is meant to be handed to a database
//! client that understands positional parameters.
//!
//! ## Binding a statement
//!
//! ```rust
//! use pg_binder::{bind_query, BindParams, BindValue};
//!
//! let params = BindParams::new().with("id", 1_i64).with("user_name", "kek");
//! let bound = bind_query(
//!     "INSERT INTO foo (id, name) VALUES (:id, :user_name)",
//!     Some(&params),
//! ).unwrap();
//!
//! assert_eq!(bound.text, "INSERT INTO foo (id, name) VALUES ($1, $2)");
//! assert_eq!(bound.values, vec![BindValue::Int(1), BindValue::Text("kek".into())]);
//! ```
//!
//! Repeated occurrences of a name reuse the same index, and type-cast
//! markers (`::int`, `::text`) pass through untouched.
//!
//! ## Expanding a multi-row INSERT
//!
//! ```rust
//! use pg_binder::{bind_insert_query, BindParams};
//!
//! let rows = vec![
//!     BindParams::new().with("id", 1_i64).with("name", "kek"),
//!     BindParams::new().with("id", 2_i64).with("name", "lol"),
//! ];
//! let bound = bind_insert_query(
//!     "INSERT INTO foo (id, name, age) VALUES (:id, :name, 123)",
//!     rows,
//! ).unwrap();
//!
//! assert_eq!(
//!     bound.text,
//!     "INSERT INTO foo (id, name, age) VALUES ($1, $2, 123), ($3, $4, 123)",
//! );
//! ```
//!
//! ## Known limitations
//!
//! - Parameter-like tokens inside string literals are rewritten like any
//!   other token; skipping quoted regions is explicitly unsupported.
//! - The `VALUES` row template must not contain nested parentheses; the
//!   expander does no balancing and will splice at the first qualifying
//!   closing parenthesis.
//! - A name present in the text but absent from the substitutions binds
//!   [`BindValue::Null`] rather than failing. Callers wanting strict
//!   validation must check for it themselves.

pub mod error;
pub mod insert;
pub mod params;
pub mod query;
mod scanner;
pub mod value;

pub use error::{BindError, Result};
pub use insert::bind_insert_query;
pub use params::{BindParams, Records};
pub use query::{bind_query, bind_query_from, BoundQuery};
pub use value::{BindValue, ToBindValue};
