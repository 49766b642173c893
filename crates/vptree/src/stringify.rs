//! Compact text rendering of tree nodes.
//!
//! The format is JSON without quoted keys and without empty children:
//!
//! ```text
//! Node   := '{' 'i:' int (',m:' num ',M:' num ',mu:' num)? (',L:' Child)? (',R:' Child)? '}'
//! Child  := Bucket | Node
//! Bucket := '[' int (',' int)* ']'
//! ```
//!
//! An empty tree renders as `null`. Non-finite bounds render as `Infinity`,
//! `-Infinity` and `NaN`.

use std::fmt;

use crate::node::{Node, VantagePoint};

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Empty => f.write_str("null"),
            Node::Leaf(bucket) => write_bucket(f, bucket),
            Node::Vantage(vp) => write_vantage(f, vp),
        }
    }
}

fn write_bucket(f: &mut fmt::Formatter<'_>, bucket: &[usize]) -> fmt::Result {
    f.write_str("[")?;
    for (i, index) in bucket.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{index}")?;
    }
    f.write_str("]")
}

fn write_vantage(f: &mut fmt::Formatter<'_>, vp: &VantagePoint) -> fmt::Result {
    write!(f, "{{i:{}", vp.index)?;
    if let Some(split) = &vp.split {
        f.write_str(",m:")?;
        write_num(f, split.min)?;
        f.write_str(",M:")?;
        write_num(f, split.max)?;
        f.write_str(",mu:")?;
        write_num(f, split.median)?;
        for (key, child) in [("L", &split.left), ("R", &split.right)] {
            if !child.is_empty() {
                write!(f, ",{key}:{child}")?;
            }
        }
    }
    f.write_str("}")
}

fn write_num(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        f.write_str("NaN")
    } else if x == f64::INFINITY {
        f.write_str("Infinity")
    } else if x == f64::NEG_INFINITY {
        f.write_str("-Infinity")
    } else {
        write!(f, "{x}")
    }
}
