use std::fmt::{Display, Formatter};

/// Payload of a tree node: a symbol for a leaf, two owned children otherwise.
/// A node with a single child cannot be expressed.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData<S> {
    Kids(Box<Node<S>>, Box<Node<S>>),
    Leaf(S),
}

/// One node of the merge tree.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node<S> {
    /// Occurrence count for a leaf, sum of the children for an internal node
    pub weight: u64,
    /// Height of the subtree below this node (0 for a leaf)
    pub depth: u32,
    pub node_data: NodeData<S>,
}

impl<S> Node<S> {
    /// Create a leaf holding `symbol`
    pub fn leaf(symbol: S, weight: u64) -> Node<S> {
        Node {
            weight,
            depth: 0,
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Join two subtrees under a new internal node. `left` takes the 0 edge.
    pub fn merge(left: Node<S>, right: Node<S>) -> Node<S> {
        Node {
            weight: left.weight + right.weight,
            depth: left.depth.max(right.depth) + 1,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// The symbol of a leaf, None for an internal node.
    pub fn symbol(&self) -> Option<&S> {
        match &self.node_data {
            NodeData::Leaf(sym) => Some(sym),
            NodeData::Kids(..) => None,
        }
    }

    /// Left and right children of an internal node, None for a leaf.
    pub fn children(&self) -> Option<(&Node<S>, &Node<S>)> {
        match &self.node_data {
            NodeData::Kids(left, right) => Some((left, right)),
            NodeData::Leaf(_) => None,
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
            NodeData::Leaf(_) => 1,
        }
    }

    /// Follow a path of '0' (left) and '1' (right) edges from this node and return
    /// the symbol of the leaf it ends on. Returns None if the path stops on an
    /// internal node, runs past a leaf, or holds anything other than '0' and '1'.
    pub fn leaf_at(&self, code: &str) -> Option<&S> {
        let mut node = self;
        for bit in code.chars() {
            node = match (&node.node_data, bit) {
                (NodeData::Kids(left, _), '0') => left,
                (NodeData::Kids(_, right), '1') => right,
                _ => return None,
            };
        }
        node.symbol()
    }

    /// Check weight conservation and recorded depths over the whole subtree.
    pub fn is_well_formed(&self) -> bool {
        match &self.node_data {
            NodeData::Leaf(_) => self.depth == 0,
            NodeData::Kids(left, right) => {
                self.weight == left.weight + right.weight
                    && self.depth == left.depth.max(right.depth) + 1
                    && left.is_well_formed()
                    && right.is_well_formed()
            }
        }
    }
}

impl<S: Display> Display for Node<S> {
    /// `symbol,weight` for a leaf, `*,weight` for an internal node
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.node_data {
            NodeData::Leaf(sym) => write!(f, "{},{}", sym, self.weight),
            NodeData::Kids(..) => write!(f, "*,{}", self.weight),
        }
    }
}
