/// A last-in, first-out container.
///
/// The converter uses a `Stack<Token>` for pending operators and brackets,
/// the evaluator a `Stack<f64>` for intermediate values. Each phase owns its
/// own stack; no stack outlives the call that created it.
///
/// # Example
/// ```
/// use rpncalc::interpreter::stack::Stack;
///
/// let mut values = Stack::new();
/// values.push(1.0);
/// values.push(2.0);
/// assert_eq!(values.peek(), Some(&2.0));
/// assert_eq!(values.pop(), Some(2.0));
/// assert_eq!(values.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item, or `None` when empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top item without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
