use std::ops::{Deref, DerefMut};

use super::{OpType, Ops};

/// Open scope on an [`Ops`] buffer.
///
/// Created by [`Ops::push`], which writes a Push record. Dropping the guard
/// writes the matching Pop record, so the scope closes exactly once on every
/// exit path: normal return, `?` propagation, or a panic unwinding through it.
///
/// The guard borrows the buffer mutably and derefs to it; records inside the
/// scope are written through the guard.
///
/// ```
/// use pigment_ops::ops::Ops;
/// use pigment_ops::paint::{fill, Color};
///
/// let mut ops = Ops::new();
/// {
///     let mut scope = ops.push();
///     fill(&mut scope, Color::BLACK);
/// }
/// assert_eq!(ops.depth(), 0);
/// ```
#[must_use = "dropping the guard immediately closes the scope"]
pub struct StackGuard<'a> {
    ops: &'a mut Ops,
}

impl Ops {
    /// Opens a scope. See [`StackGuard`].
    pub fn push(&mut self) -> StackGuard<'_> {
        self.write(OpType::Push);
        self.depth += 1;
        StackGuard { ops: self }
    }
}

impl Deref for StackGuard<'_> {
    type Target = Ops;

    #[inline]
    fn deref(&self) -> &Ops {
        self.ops
    }
}

impl DerefMut for StackGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Ops {
        self.ops
    }
}

impl Drop for StackGuard<'_> {
    fn drop(&mut self) {
        debug_assert!(self.ops.depth > 0, "scope closed on a buffer with no open scope");
        self.ops.write(OpType::Pop);
        self.ops.depth = self.ops.depth.saturating_sub(1);
    }
}
