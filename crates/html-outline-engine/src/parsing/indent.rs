/// Indent levels entered through outline markers within one sibling scope.
///
/// The base level is fixed for the life of the stack; a return marker can
/// never pop below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentStack {
    base: usize,
    entered: Vec<usize>,
}

impl IndentStack {
    pub fn new(base: usize) -> Self {
        Self {
            base,
            entered: Vec::new(),
        }
    }

    pub fn base(&self) -> usize {
        self.base
    }

    /// The current running level.
    pub fn top(&self) -> usize {
        self.entered.last().copied().unwrap_or(self.base)
    }

    /// Number of levels held, the base included.
    pub fn depth(&self) -> usize {
        self.entered.len() + 1
    }

    /// Enters a level one deeper than the current top and returns it.
    pub fn descend(&mut self) -> usize {
        let level = self.top() + 1;
        self.entered.push(level);
        level
    }

    /// Leaves the most recently entered level and returns it. With nothing
    /// entered this is a no-op returning the base.
    pub fn return_to_parent(&mut self) -> usize {
        self.entered.pop().unwrap_or(self.base)
    }
}
