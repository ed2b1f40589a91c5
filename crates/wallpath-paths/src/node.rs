// ---------------------------------------------------------------------------
// Internal search node and open-set entry for A*
// ---------------------------------------------------------------------------

/// Sentinel `g` for nodes no route has reached yet.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Sentinel parent meaning "no predecessor".
pub(crate) const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeState {
    Unseen,
    Open,
    Closed,
}

/// Per-cell search state. The cell position is implied by its flat index.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: usize,
    pub(crate) state: NodeState,
}

impl Node {
    pub(crate) fn new(h: i32) -> Self {
        Self {
            g: UNREACHABLE,
            h,
            parent: NO_PARENT,
            state: NodeState::Unseen,
        }
    }

    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g.saturating_add(self.h)
    }
}

/// Open-set entry, ordered for `BinaryHeap` so that the smallest `f` pops
/// first, then the smallest `h`, then the earliest pushed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    pub(crate) h: i32,
    pub(crate) seq: u32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .cmp(&self.f)
            .then(other.h.cmp(&self.h))
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    fn entry(idx: usize, f: i32, h: i32, seq: u32) -> NodeRef {
        NodeRef { idx, f, h, seq }
    }

    #[test]
    fn heap_pops_lowest_f_then_h_then_oldest() {
        let mut open = BinaryHeap::new();
        open.push(entry(0, 40, 20, 0));
        open.push(entry(1, 30, 20, 1));
        open.push(entry(2, 30, 10, 2));
        open.push(entry(3, 30, 10, 3));
        open.push(entry(4, 50, 0, 4));

        let order: Vec<usize> = std::iter::from_fn(|| open.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![2, 3, 1, 0, 4]);
    }

    #[test]
    fn unseen_node_f_does_not_overflow() {
        let n = Node::new(30);
        assert_eq!(n.state, NodeState::Unseen);
        assert_eq!(n.parent, NO_PARENT);
        assert_eq!(n.f(), i32::MAX);
    }
}
