use crate::TypeRef;
use std::fmt;

/// A type after modifiers were applied: list and non-null wrappers around a
/// named leaf.
///
/// Renders in SDL notation, e.g. `[String!]!`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WrappedType {
    Named(TypeRef),
    List(Box<WrappedType>),
    NonNull(Box<WrappedType>),
}

impl WrappedType {
    pub fn named(ty: impl Into<TypeRef>) -> Self {
        Self::Named(ty.into())
    }

    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self::List(Box::new(inner))
    }

    /// Wraps `inner` as non-null. Already non-null types are returned as is.
    #[must_use]
    pub fn non_null(inner: Self) -> Self {
        if inner.is_non_null() {
            inner
        } else {
            Self::NonNull(Box::new(inner))
        }
    }

    /// Whether the outermost wrapper is non-null.
    #[must_use]
    pub const fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Whether the outermost wrapper is a list, ignoring a non-null wrapper.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self.nullable_type(), Self::List(_))
    }

    /// The type one wrapper down, or `None` for a named leaf.
    #[must_use]
    pub fn of_type(&self) -> Option<&Self> {
        match self {
            Self::Named(_) => None,
            Self::List(inner) | Self::NonNull(inner) => Some(&**inner),
        }
    }

    /// Strips an outer non-null wrapper, if any.
    #[must_use]
    pub fn nullable_type(&self) -> &Self {
        match self {
            Self::NonNull(inner) => &**inner,
            other => other,
        }
    }

    /// Number of list wrappers between the outside and the leaf.
    #[must_use]
    pub fn list_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(inner) = current.of_type() {
            if matches!(current, Self::List(_)) {
                depth += 1;
            }
            current = inner;
        }
        depth
    }

    /// The innermost list item type, including its non-null wrapper.
    ///
    /// Returns `self` when the type is not a list.
    #[must_use]
    pub fn innermost_item(&self) -> &Self {
        let mut item = self;
        let mut current = self;
        while let Some(inner) = current.of_type() {
            if matches!(current, Self::List(_)) {
                item = inner;
            }
            current = inner;
        }
        item
    }

    /// The named type at the bottom of the wrapper tree.
    #[must_use]
    pub fn leaf(&self) -> &TypeRef {
        let mut current = self;
        loop {
            match current {
                Self::Named(ty) => return ty,
                Self::List(inner) | Self::NonNull(inner) => current = &**inner,
            }
        }
    }
}

impl From<TypeRef> for WrappedType {
    fn from(ty: TypeRef) -> Self {
        Self::Named(ty)
    }
}

impl fmt::Display for WrappedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(ty) => write!(f, "{ty}"),
            Self::List(inner) => write!(f, "[{inner}]"),
            Self::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}
