//! Error types for uaos.
//!
//! OS inference itself never fails: heuristics degrade to an under-populated
//! [`OsInfo`](crate::OsInfo) instead. Errors only show up at the edges, e.g.
//! when parsing an [`Engine`](crate::Engine) tag or when reading input in the cli.

use std::{
    error::Error as StdError,
    fmt::{self, Debug, Display},
};

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// A type-erased error, used where the exact cause matters
/// less than the fact that something went wrong.
pub struct OpaqueError(BoxError);

impl OpaqueError {
    /// Create an [`OpaqueError`] from a displayable message.
    pub fn from_display(msg: impl Display + Send + Sync + 'static) -> Self {
        Self(Box::new(DisplayError(msg)))
    }

    /// Create an [`OpaqueError`] from a std error.
    pub fn from_std(error: impl StdError + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }

    /// Wrap this error with the given context.
    #[must_use]
    pub fn context(self, context: impl Display + Send + Sync + 'static) -> Self {
        Self::from_std(ContextError {
            context,
            error: self,
        })
    }
}

impl Debug for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl StdError for OpaqueError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.0.as_ref())
    }
}

/// Extends the `Result` and `Option` types with methods for adding context to errors.
///
/// # Examples
///
/// ```
/// use uaos::error::ErrorContext;
///
/// let result = "hello".parse::<i32>().context("parse integer");
/// assert_eq!("parse integer: invalid digit found in string", result.unwrap_err().to_string());
/// ```
pub trait ErrorContext: private::Sealed {
    /// The resulting context type after adding context to the contained error.
    type Context;

    /// Add a static context to the contained error.
    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Send + Sync + 'static;

    /// Lazily add a context to the contained error, if it exists.
    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    type Context = Result<T, OpaqueError>;

    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Send + Sync + 'static,
    {
        self.map_err(|error| OpaqueError::from_std(ContextError { context, error }))
    }

    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| {
            OpaqueError::from_std(ContextError {
                context: context(),
                error,
            })
        })
    }
}

impl<T> ErrorContext for Option<T> {
    type Context = Result<T, OpaqueError>;

    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| OpaqueError::from_display("Option is None").context(context))
    }

    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| OpaqueError::from_display("Option is None").context(context()))
    }
}

mod private {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> where E: std::error::Error + Send + Sync + 'static {}
    impl<T> Sealed for Option<T> {}
}

#[repr(transparent)]
struct DisplayError<M>(M);

impl<M: Display> Debug for DisplayError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<M: Display> Display for DisplayError<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<M: Display> StdError for DisplayError<M> {}

struct ContextError<C, E> {
    context: C,
    error: E,
}

impl<C: Display, E: Display> Debug for ContextError<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.error)
    }
}

impl<C: Display, E: Display> Display for ContextError<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.error)
    }
}

impl<C, E> StdError for ContextError<C, E>
where
    C: Display,
    E: StdError + 'static,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}
