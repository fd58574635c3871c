//! Algorithms built on top of the graph crates.

inner::doc_inline_reexport! {
    twosat,
}
