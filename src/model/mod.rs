//! Model types as seen by enum registration.
//!
//! # Architecture
//!
//! - **Record**: [`Record`] attribute access, with the in-memory [`Row`]
//! - **Methods**: [`Method`] and [`ClassMethod`] table entries
//! - **Model type**: [`ModelType`], which owns the tables, the storage binding
//!   and the `enums` reflection registry

pub mod method;
#[doc(inline)]
pub use method::{ClassMethod, HostFn, Method};

pub mod record;
#[doc(inline)]
pub use record::{Record, Row};

pub mod model_type;
#[doc(inline)]
pub use model_type::ModelType;
