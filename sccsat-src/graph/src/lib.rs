//! Directed graph algorithms.

inner::doc_inline_reexport! {
    scc,
}
