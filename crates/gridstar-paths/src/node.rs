use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gridstar_core::{Coord, Cost};

/// Shared handle to a search node. The visited cache owns one handle per
/// position; the open queue and child nodes hold further clones.
pub(crate) type NodeRef<C> = Rc<SearchNode<C>>;

// ---------------------------------------------------------------------------
// SearchNode
// ---------------------------------------------------------------------------

/// Best known way to reach one position during one search.
///
/// Costs and the parent link are interior-mutable so a node can be reparented
/// while other handles to it sit in the open queue; a popped handle always
/// reflects the node's latest cost.
pub(crate) struct SearchNode<C> {
    position: Coord,
    /// Cost of entering `position`. Independent of the parent.
    position_cost: C,
    /// Accumulated real cost from the start node.
    known_cost: Cell<C>,
    /// `known_cost` plus the heuristic estimate; the open-queue key.
    total_cost: Cell<C>,
    parent: RefCell<Option<NodeRef<C>>>,
    can_reparent: Cell<bool>,
}

impl<C: Cost> SearchNode<C> {
    /// Node for the start position.
    pub(crate) fn root(position: Coord, heuristic_remaining: C) -> NodeRef<C> {
        Rc::new(Self {
            position,
            position_cost: C::ZERO,
            known_cost: Cell::new(C::ZERO),
            total_cost: Cell::new(heuristic_remaining),
            parent: RefCell::new(None),
            can_reparent: Cell::new(true),
        })
    }

    /// Node entered from `parent` at real cost `cost`.
    pub(crate) fn child(
        position: Coord,
        cost: C,
        heuristic_remaining: C,
        parent: &NodeRef<C>,
    ) -> NodeRef<C> {
        let node = Self {
            position,
            position_cost: cost,
            known_cost: Cell::new(C::ZERO),
            total_cost: Cell::new(C::ZERO),
            parent: RefCell::new(Some(Rc::clone(parent))),
            can_reparent: Cell::new(true),
        };
        node.set_costs(parent.known_cost(), heuristic_remaining);
        Rc::new(node)
    }

    #[inline]
    pub(crate) fn position(&self) -> Coord {
        self.position
    }

    #[inline]
    pub(crate) fn known_cost(&self) -> C {
        self.known_cost.get()
    }

    #[inline]
    pub(crate) fn total_cost(&self) -> C {
        self.total_cost.get()
    }

    #[inline]
    pub(crate) fn is_locked(&self) -> bool {
        !self.can_reparent.get()
    }

    pub(crate) fn parent(&self) -> Option<NodeRef<C>> {
        self.parent.borrow().clone()
    }

    /// Move this node under `new_parent` if that yields a strictly lower
    /// total cost.
    ///
    /// Returns the node itself when it changed, `None` when it is locked or
    /// the route is not cheaper.
    pub(crate) fn reparent_if_cheaper(
        self: &Rc<Self>,
        heuristic_remaining: C,
        new_parent: &NodeRef<C>,
    ) -> Option<NodeRef<C>> {
        if !self.can_reparent.get() {
            return None;
        }
        let candidate = heuristic_remaining + self.position_cost + new_parent.known_cost();
        if candidate < self.total_cost.get() {
            *self.parent.borrow_mut() = Some(Rc::clone(new_parent));
            self.set_costs(new_parent.known_cost(), heuristic_remaining);
            return Some(Rc::clone(self));
        }
        None
    }

    /// Freeze cost and parent for the rest of the search. Idempotent.
    #[inline]
    pub(crate) fn lock(&self) {
        self.can_reparent.set(false);
    }

    /// Positions from the start node to this one, inclusive.
    pub(crate) fn path(&self) -> Vec<Coord> {
        let mut path = vec![self.position];
        let mut next = self.parent();
        while let Some(node) = next {
            path.push(node.position);
            next = node.parent();
        }
        path.reverse();
        path
    }

    fn set_costs(&self, parent_known_cost: C, heuristic_remaining: C) {
        let known = self.position_cost + parent_known_cost;
        self.known_cost.set(known);
        self.total_cost.set(known + heuristic_remaining);
    }
}

impl<C> Drop for SearchNode<C> {
    // Unlink the parent chain iteratively so dropping the last handle to a
    // long path does not recurse once per node.
    fn drop(&mut self) {
        let mut next = self.parent.get_mut().take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut owned) => owned.parent.get_mut().take(),
                Err(_) => None,
            };
        }
    }
}
