#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct State {
    /// Nesting level of the element being walked; the root is 0.
    pub(crate) depth: usize,
}

impl State {
    pub(crate) fn child(self) -> Self {
        Self {
            depth: self.depth + 1,
        }
    }
}
