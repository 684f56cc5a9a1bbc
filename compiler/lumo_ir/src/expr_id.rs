//! Handles into an [`ExprArena`](crate::ExprArena).
//!
//! Nodes refer to children by `ExprId` rather than `Box<Expr>`. Argument
//! lists and lambda parameter lists are `(start, len)` windows into the
//! arena's flat backing vectors.

/// Index of one node in its arena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

macro_rules! slice_range {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            pub(crate) const fn bounds(&self) -> (usize, usize) {
                let start = self.start as usize;
                (start, start + self.len as usize)
            }
        }
    };
}

slice_range! {
    /// Application arguments, in call order.
    ExprRange
}

slice_range! {
    /// Lambda parameter names, in binding order.
    ParamRange
}
