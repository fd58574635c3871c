/// Re-exports each listed crate both as a module and by its items, so that
/// a category crate documents its members inline.
///
/// ```ignore
/// inner::doc_inline_reexport! { scc }
/// // expands to `#[doc(inline)] pub use scc::{self, *};`
/// ```
#[macro_export]
macro_rules! doc_inline_reexport {
    ( $($lib:ident),* $(,)? ) => { $(
        #[doc(inline)]
        pub use $lib::{self, *};
    )* };
}
