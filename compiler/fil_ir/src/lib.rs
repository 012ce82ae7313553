//! Filament IR - shared front-end types
//!
//! This crate contains the data shared between the pattern engine, the
//! lexer and whatever parser gets built on top of them:
//! - Spans for source locations
//! - `TokenKind` and its static metadata table (names, symbols, spacing)
//!
//! Everything here is plain data: `Copy`, `Eq`, `Hash`, `Debug`.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::Span;
pub use token::TokenKind;
