use crate::emitter::{Binding, Statement};

/// Bookkeeping shared by the whole walk of one document.
pub(crate) struct Ctx {
    /// Statements still target `s` until the first child element is created.
    pub(crate) still_at_root: bool,
    pub(crate) declared_parent: bool,
    pub(crate) declared_element: bool,
    /// Depth of the element `e` refers to. Meaningless while `still_at_root` is set.
    pub(crate) bound_depth: usize,
}

impl Ctx {
    pub(crate) fn new() -> Self {
        Self {
            still_at_root: true,
            declared_parent: false,
            declared_element: false,
            bound_depth: 0,
        }
    }

    /// Variable holding the element at `depth`.
    ///
    /// After a subtree has been walked, `e` still points into it,
    /// so it is moved back up before being used for a shallower element.
    pub(crate) fn target<'s>(&mut self, depth: usize, out: &mut Vec<Statement<'s>>) -> Binding {
        if self.still_at_root {
            return Binding::Root;
        }
        while self.bound_depth > depth {
            out.push(Statement::Ascend);
            self.bound_depth -= 1;
        }
        Binding::Element
    }

    pub(crate) fn declare_parent(&mut self) -> bool {
        !std::mem::replace(&mut self.declared_parent, true)
    }

    pub(crate) fn declare_element(&mut self) -> bool {
        !std::mem::replace(&mut self.declared_element, true)
    }

    pub(crate) fn descend(&mut self, depth: usize) {
        self.still_at_root = false;
        self.bound_depth = depth;
    }
}
