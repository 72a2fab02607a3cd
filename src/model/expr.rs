//! Unevaluated layout expressions.
//!
//! Positions are not numbers at parse time: they depend on where the parent
//! node ends up. The parsers therefore emit a small expression tree that the
//! layout engine resolves once the parent's frame is known.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use super::NodeId;

/// One axis of a node's coordinate frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Maps the `is_x` flag used by the position parsers to an axis.
    #[inline]
    pub fn from_is_x(is_x: bool) -> Self {
        if is_x {
            Axis::X
        } else {
            Axis::Y
        }
    }
}

/// An additive layout expression over node coordinates and constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LayoutExpr {
    ConstValue { value: f64 },
    X { node_id: NodeId },
    Y { node_id: NodeId },
    Sum { expressions: Vec<LayoutExpr> },
}

impl LayoutExpr {
    pub fn const_value(value: f64) -> Self {
        LayoutExpr::ConstValue { value }
    }

    pub fn x(node_id: NodeId) -> Self {
        LayoutExpr::X { node_id }
    }

    pub fn y(node_id: NodeId) -> Self {
        LayoutExpr::Y { node_id }
    }

    /// The coordinate of `node_id` along `axis`.
    pub fn axis(node_id: NodeId, axis: Axis) -> Self {
        match axis {
            Axis::X => Self::x(node_id),
            Axis::Y => Self::y(node_id),
        }
    }
}

impl Add for LayoutExpr {
    type Output = LayoutExpr;

    /// Sums are flattened so `a + b + c` stays a single `Sum` node.
    fn add(self, rhs: LayoutExpr) -> LayoutExpr {
        let mut expressions = match self {
            LayoutExpr::Sum { expressions } => expressions,
            other => vec![other],
        };
        match rhs {
            LayoutExpr::Sum { expressions: rest } => expressions.extend(rest),
            other => expressions.push(other),
        }
        LayoutExpr::Sum { expressions }
    }
}

impl fmt::Display for LayoutExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutExpr::ConstValue { value } => write!(f, "{}", value),
            LayoutExpr::X { node_id } => write!(f, "x({})", node_id),
            LayoutExpr::Y { node_id } => write!(f, "y({})", node_id),
            LayoutExpr::Sum { expressions } => {
                for (i, expr) in expressions.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}", expr)?;
                }
                Ok(())
            }
        }
    }
}
