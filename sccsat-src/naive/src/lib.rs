//! Slow but obviously-correct counterparts of the real algorithms.

inner::doc_inline_reexport! {
    reach_scc,
    brute_twosat,
}
