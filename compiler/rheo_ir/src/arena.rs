//! Arena that owns every AST node of one compilation unit.
//!
//! Nodes are bump-allocated and released together when the context is
//! dropped. Nothing is freed individually, so node types must not need
//! `Drop`: their destructors would never run.

use bumpalo::Bump;

/// Bump arena for AST nodes, strings, and node lists.
///
/// References handed out borrow the context, which is what ties an AST's
/// `'ast` lifetime to the arena.
#[derive(Debug, Default)]
pub struct AstContext {
    bump: Bump,
}

impl AstContext {
    pub fn new() -> Self {
        AstContext::default()
    }

    /// Create a context that pre-allocates `bytes` of backing storage.
    pub fn with_capacity(bytes: usize) -> Self {
        AstContext {
            bump: Bump::with_capacity(bytes),
        }
    }

    /// Allocate one node and return a reference valid for the arena's
    /// lifetime.
    #[inline]
    pub fn create<T>(&self, node: T) -> &T {
        debug_assert!(
            !std::mem::needs_drop::<T>(),
            "arena node types must not need Drop"
        );
        self.bump.alloc(node)
    }

    /// Copy a string into the arena so it outlives its source buffer.
    #[inline]
    pub fn save(&self, text: &str) -> &str {
        self.bump.alloc_str(text)
    }

    /// Copy a slice of plain values into contiguous arena storage.
    #[inline]
    pub fn copy_array<T: Copy>(&self, items: &[T]) -> &[T] {
        self.bump.alloc_slice_copy(items)
    }

    /// Move the items of an exact-size iterator into contiguous arena
    /// storage.
    pub fn alloc_from_iter<T, I>(&self, items: I) -> &[T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        debug_assert!(
            !std::mem::needs_drop::<T>(),
            "arena node types must not need Drop"
        );
        self.bump.alloc_slice_fill_iter(items)
    }

    /// Total bytes of backing storage currently held by the arena.
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}
