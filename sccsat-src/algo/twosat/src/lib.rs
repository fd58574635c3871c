use std::{
    cell::OnceCell,
    cmp::Ordering::{Equal, Greater, Less},
};

use scc::{Scc, SccGraph};

/// 2-SAT over the variables `0..len`, by reduction to an implication graph.
///
/// Vertex `2 * x` stands for the literal $x$ and vertex `2 * x + 1` for
/// $\lnot x$, so negating a literal flips the lowest bit of its vertex.
/// The clause $a \lor b$ becomes the two edges $\lnot a \to b$ and
/// $\lnot b \to a$. The instance is unsatisfiable iff some $x$ and
/// $\lnot x$ fall into the same strongly connected component.
///
/// Clauses can only be added before the first query. The components are
/// computed once and then reused by every later query.
///
/// # Examples
/// ```
/// use twosat::TwoSat;
///
/// // (x0 | x1) & (!x0 | x1) & (!x1 | !x1)
/// let mut ts = TwoSat::new(2);
/// ts.add_clause(0, 1, false, false);
/// ts.add_clause(0, 1, true, false);
/// ts.add_clause(1, 1, true, true);
/// assert!(!ts.satisfiable());
/// assert_eq!(ts.assignment(), None);
/// ```
pub struct TwoSat {
    len: usize,
    g: SccGraph,
    scc: OnceCell<Scc<usize, fn(&usize) -> usize>>,
}

fn literal(index: usize, not: bool) -> usize { 2 * index + not as usize }
fn negate(v: usize) -> usize { v ^ 1 }

impl TwoSat {
    pub fn new(len: usize) -> Self {
        assert!(len <= usize::MAX / 2, "`len` too large: {len}");
        Self { len, g: SccGraph::new(2 * len), scc: OnceCell::new() }
    }

    /// Number of variables.
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Adds the clause $a \lor b$, where $a$ is `x` or $\lnot$`x` according
    /// to `not_x`, and likewise for $b$.
    ///
    /// # Panics
    /// Panics if `x` or `y` is out of range, or if a query has already been
    /// made.
    pub fn add_clause(
        &mut self,
        x: usize,
        y: usize,
        not_x: bool,
        not_y: bool,
    ) {
        let len = self.len;
        assert!(x < len, "`x` out of range: {x} >= {len}");
        assert!(y < len, "`y` out of range: {y} >= {len}");
        assert!(self.scc.get().is_none(), "clause added after a query");

        let (a, b) = (literal(x, not_x), literal(y, not_y));
        self.g.add_edge(negate(a), b);
        self.g.add_edge(negate(b), a);
    }

    fn scc(&self) -> &Scc<usize, fn(&usize) -> usize> {
        self.scc.get_or_init(|| self.g.scc())
    }

    pub fn satisfiable(&self) -> bool {
        let scc = self.scc();
        (0..self.len).all(|x| {
            scc.comp_id(&literal(x, false)) != scc.comp_id(&literal(x, true))
        })
    }

    /// Returns a satisfying assignment, if any.
    ///
    /// Each variable takes the literal whose component comes later in the
    /// topological order of the condensation, i.e. the one closed first.
    pub fn assignment(&self) -> Option<Vec<bool>> {
        let scc = self.scc();
        (0..self.len)
            .map(|x| {
                let pos = scc.comp_id(&literal(x, false));
                let neg = scc.comp_id(&literal(x, true));
                match pos.cmp(&neg) {
                    Less => Some(true),
                    Equal => None,
                    Greater => Some(false),
                }
            })
            .collect()
    }
}

/// Solves 2-SAT for clauses given as `[(x, not_x), (y, not_y)]`.
pub fn twosat(
    len: usize,
    cnf: impl IntoIterator<Item = [(usize, bool); 2]>,
) -> Option<Vec<bool>> {
    let mut ts = TwoSat::new(len);
    for [(x, not_x), (y, not_y)] in cnf {
        ts.add_clause(x, y, not_x, not_y);
    }
    ts.assignment()
}
