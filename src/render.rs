//! Render: the display capability containers require from their element,
//! key, and value types.
//!
//! Output is terminal-oriented text, not a serialization format. Numbers
//! print as plain decimal, booleans as `true`/`false`, chars in single
//! quotes, strings in double quotes (without escaping). Containers
//! implement [`Render`] themselves, so nesting composes: a map holding
//! sequences renders each sequence with the element type's own renderer.

use core::fmt;

/// Writes a value's display form into a text sink.
///
/// Scalar and string types get the default strategies below; structured
/// types implement this trait with their own format.
pub trait Render {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Adapt to [`fmt::Display`] for `format!`/`println!`.
    fn rendered(&self) -> Rendered<'_, Self> {
        Rendered(self)
    }
}

/// [`fmt::Display`] adapter over any [`Render`] value.
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        (**self).render(out)
    }
}

macro_rules! render_as_decimal {
    ($($t:ty)*) => {$(
        impl Render for $t {
            fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
                write!(out, "{}", self)
            }
        }
    )*};
}

// `{}` already prints `true`/`false` for bool.
render_as_decimal!(bool i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);

impl Render for char {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "'{}'", self)
    }
}

impl Render for str {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "\"{}\"", self)
    }
}

impl Render for String {
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.as_str().render(out)
    }
}
