//! Comparison output types.
//!
//! All types implement `Debug, Clone, Serialize, PartialEq`. Values carried by
//! the chain are owned clones of the compared inputs (cheap, `Arc`-backed), so
//! a result outlives the inputs it was computed from.

use crate::value::Value;
use serde::Serialize;

/// Tag of a [`DivergenceInfo`] payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DivergenceInfoKind {
    Type,
    CollectionSize,
    ArrayIndex,
    MapValue,
    Set,
    Primitive,
}

impl DivergenceInfoKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DivergenceInfoKind::Type => "Type",
            DivergenceInfoKind::CollectionSize => "CollectionSize",
            DivergenceInfoKind::ArrayIndex => "ArrayIndex",
            DivergenceInfoKind::MapValue => "MapValue",
            DivergenceInfoKind::Set => "Set",
            DivergenceInfoKind::Primitive => "Primitive",
        }
    }
}

/// Why two values diverge at one comparison step.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind")]
pub enum DivergenceInfo {
    /// Structural kinds, or primitive sub-kinds, differ.
    Type {
        expected_type: String,
        actual_type: String,
    },
    /// Same-kind collections with different element or entry counts.
    CollectionSize {
        expected_size: usize,
        actual_size: usize,
    },
    /// Equal-length arrays differing first at `index`.
    ArrayIndex { index: usize },
    /// Both maps hold `key` but its values differ.
    MapValue {
        key: Value,
        expected_value: Value,
        actual_value: Value,
    },
    /// Membership mismatch of a set, or of a map's key set when
    /// `is_map_keys` is true.
    Set {
        /// Present in `actual`, absent from `expected`
        missing_expected: Vec<Value>,
        /// Present in `expected`, absent from `actual`
        missing_actual: Vec<Value>,
        is_map_keys: bool,
    },
    /// Two primitives of the same sub-kind that are not equal.
    Primitive,
}

impl DivergenceInfo {
    pub fn kind(&self) -> DivergenceInfoKind {
        match self {
            DivergenceInfo::Type { .. } => DivergenceInfoKind::Type,
            DivergenceInfo::CollectionSize { .. } => DivergenceInfoKind::CollectionSize,
            DivergenceInfo::ArrayIndex { .. } => DivergenceInfoKind::ArrayIndex,
            DivergenceInfo::MapValue { .. } => DivergenceInfoKind::MapValue,
            DivergenceInfo::Set { .. } => DivergenceInfoKind::Set,
            DivergenceInfo::Primitive => DivergenceInfoKind::Primitive,
        }
    }
}

/// One step of the parallel walk over `expected` and `actual`.
///
/// A node without `info` is an equal step. A failing chain runs from the
/// top-level mismatch down to the leaf that actually differs; each node
/// exclusively owns the next one.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComparisonNode {
    pub expected: Value,
    pub actual: Value,
    /// Atomic comparisons performed at this step, excluding `next`
    pub assertion_count: u32,
    pub info: Option<DivergenceInfo>,
    pub next: Option<Box<ComparisonNode>>,
}

impl ComparisonNode {
    /// An equal step with no divergence.
    pub fn equal(expected: &Value, actual: &Value, assertion_count: u32) -> Self {
        Self {
            expected: expected.clone(),
            actual: actual.clone(),
            assertion_count,
            info: None,
            next: None,
        }
    }

    /// A divergent step that ends the chain.
    pub fn diverged(
        expected: &Value,
        actual: &Value,
        assertion_count: u32,
        info: DivergenceInfo,
    ) -> Self {
        Self {
            expected: expected.clone(),
            actual: actual.clone(),
            assertion_count,
            info: Some(info),
            next: None,
        }
    }

    /// A divergent step that narrows into a failing sub-chain.
    pub fn wrapping(
        expected: &Value,
        actual: &Value,
        assertion_count: u32,
        info: DivergenceInfo,
        next: ComparisonNode,
    ) -> Self {
        Self {
            expected: expected.clone(),
            actual: actual.clone(),
            assertion_count,
            info: Some(info),
            next: Some(Box::new(next)),
        }
    }

    pub fn is_equal(&self) -> bool {
        self.iter().all(|n| n.info.is_none())
    }

    /// Iterate the chain from this node to its tail.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter { current: Some(self) }
    }

    /// The deepest node of the chain.
    pub fn leaf(&self) -> &ComparisonNode {
        let mut node = self;
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        node
    }

    pub fn depth(&self) -> usize {
        self.iter().count()
    }

    /// Assertion count of the whole chain starting here.
    pub fn total_assertions(&self) -> u32 {
        self.iter().map(|n| n.assertion_count).sum()
    }
}

/// Head-to-tail iterator over a comparison chain.
pub struct ChainIter<'a> {
    current: Option<&'a ComparisonNode>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a ComparisonNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.current?;
        self.current = node.next.as_deref();
        Some(node)
    }
}

/// Outcome of one `compare` call.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EqualityResult {
    /// True iff no node in the chain carries divergence info
    pub is_success: bool,
    /// Atomic comparisons performed across the whole walk (always >= 1)
    pub assertion_count: u32,
    /// Head of the comparison chain
    pub comparison_node: ComparisonNode,
}

impl EqualityResult {
    pub fn from_chain(comparison_node: ComparisonNode) -> Self {
        Self {
            is_success: comparison_node.is_equal(),
            assertion_count: comparison_node.total_assertions(),
            comparison_node,
        }
    }

    /// Divergence at the deepest node, i.e. the actual cause of a failure.
    pub fn divergence(&self) -> Option<&DivergenceInfo> {
        self.comparison_node.leaf().info.as_ref()
    }

    /// Divergence kinds from the head down, one per failing step.
    pub fn divergence_path(&self) -> Vec<DivergenceInfoKind> {
        self.comparison_node
            .iter()
            .filter_map(|n| n.info.as_ref().map(DivergenceInfo::kind))
            .collect()
    }
}
