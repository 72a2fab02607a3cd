//! Typed values passed into and out of the coercion utilities.
//!
//! # Design Principles
//!
//! 1. **Closed inputs**: a size specification is a [`SizeSpec`] sum type, not
//!    a loosely typed value compared against magic strings.
//!
//! 2. **Unevaluated outputs**: positions are [`LayoutExpr`] trees anchored to
//!    a parent [`NodeId`]; resolving them is the layout engine's job.
//!
//! 3. **Strict kinds**: [`Kind`] never treats a number as a bool or an
//!    integer as a float.
//!
//! # Example
//!
//! ```
//! use layout_coerce::model::{ExportSize, LayoutExpr, NodeId, SizeSpec};
//! use layout_coerce::parsers::parse_size;
//!
//! assert_eq!(parse_size(&SizeSpec::from("50%")).unwrap(), ExportSize::Fraction(0.5));
//!
//! let left = LayoutExpr::x(NodeId::new(1)) + LayoutExpr::const_value(20.0);
//! assert_eq!(left.to_string(), "x(1) + 20");
//! ```

mod expr;
mod ids;
mod kind;
mod size;

// Re-export core types for convenient access
pub use expr::{Axis, LayoutExpr};
pub use ids::NodeId;
pub use kind::{Kind, ValueKind};
pub use size::{ExportSize, SizeSpec, AUTO_TOKEN};
