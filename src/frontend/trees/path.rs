use std::fmt;

use bumpalo::Bump;

/// A path locates a subterm of the arguments of a rule's left-hand side. The
/// first index selects the top-level argument, and every following index
/// selects an argument of the constructor found there. All indices are zero
/// based and count dot arguments as well.
///
/// In the rule `plus (S x) y --> ...`, the path of `x` is `[0, 0]` and the
/// path of `y` is `[1]`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Path<'a>(&'a [usize]);

impl<'a> Path<'a> {
    pub fn new(indices: &'a [usize]) -> Self {
        Self(indices)
    }

    /// The path of a top-level argument.
    pub fn root(alloc: &'a Bump, index: usize) -> Self {
        Self(alloc.alloc_slice_copy(&[index]))
    }

    /// The path of the `index`th argument of the node at this path.
    pub fn child(&self, alloc: &'a Bump, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(self.0);
        indices.push(index);
        Self(alloc.alloc_slice_copy(&indices))
    }

    pub fn indices(&self) -> &'a [usize] {
        self.0
    }

    /// The number of indices in this path; top-level arguments have depth one.
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut indices = self.0.iter();
        if let Some(first) = indices.next() {
            write!(f, "{first}")?;
        }

        for index in indices {
            write!(f, ".{index}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::Bump;

    use super::Path;

    #[test]
    fn children_extend_their_parent() {
        let alloc = Bump::new();
        let root = Path::root(&alloc, 1);
        let child = root.child(&alloc, 0);
        let grandchild = child.child(&alloc, 2);

        assert_eq!(&[1], root.indices());
        assert_eq!(&[1, 0], child.indices());
        assert_eq!(&[1, 0, 2], grandchild.indices());
        assert_eq!(3, grandchild.depth());
        assert_eq!("1.0.2", grandchild.to_string());
    }
}
