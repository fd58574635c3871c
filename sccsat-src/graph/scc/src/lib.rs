use std::fmt;

/// Strongly connected components, by Tarjan's algorithm.
///
/// Component ids are numbered in the order the components are closed, which
/// is a reverse topological order of the condensation: for each edge
/// `u -> v` whose endpoints lie in distinct components,
/// `comp_id(u) > comp_id(v)`.
///
/// The depth-first search runs on its own frame stack, so a path of
/// `10^6` vertices is fine.
///
/// # Examples
/// ```
/// use scc::Scc;
///
/// // 0 <> 1 -> 2
/// let g = vec![vec![1], vec![0, 2], vec![]];
/// let len = g.len();
/// let index = |&v: &usize| v;
/// let delta = |&v: &usize| g[v].iter().copied();
/// let scc = Scc::new(0..len, len, index, delta);
///
/// assert_eq!(scc.len(), 2);
/// assert_eq!(scc.comp_id(&0), scc.comp_id(&1));
/// assert!(scc.comp_id(&1) > scc.comp_id(&2));
/// assert_eq!(scc.comp(scc.comp_id(&0)), [0, 1]);
/// ```
pub struct Scc<V, I> {
    comp_id: Vec<Option<usize>>,
    comp: Vec<Vec<V>>,
    index: I,
}

struct State<V> {
    ord: Vec<Option<usize>>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<(usize, V)>,
    comp_id: Vec<Option<usize>>,
    comp: Vec<Vec<V>>,
    index: usize,
}

impl<V> State<V> {
    fn new(len: usize) -> Self {
        Self {
            ord: vec![None; len],
            low: vec![0; len],
            on_stack: vec![false; len],
            stack: vec![],
            comp_id: vec![None; len],
            comp: vec![],
            index: 0,
        }
    }

    fn visit(&mut self, vi: usize, v: V) {
        self.ord[vi] = Some(self.index);
        self.low[vi] = self.index;
        self.index += 1;
        self.on_stack[vi] = true;
        self.stack.push((vi, v));
    }

    // `vi` is the root; everything above it on the stack belongs to its
    // component.
    fn close(&mut self, vi: usize) {
        let id = self.comp.len();
        let mut tmp = vec![];
        while let Some((nvi, nv)) = self.stack.pop() {
            self.on_stack[nvi] = false;
            self.comp_id[nvi] = Some(id);
            tmp.push(nv);
            if nvi == vi {
                break;
            }
        }
        tmp.reverse();
        self.comp.push(tmp);
    }
}

impl<V, I> Scc<V, I>
where
    I: Fn(&V) -> usize,
{
    pub fn new<D, J>(
        vertices: impl IntoIterator<Item = V>,
        len: usize,
        index: I,
        delta: D,
    ) -> Self
    where
        D: Fn(&V) -> J,
        J: Iterator<Item = V>,
    {
        let mut state = State::new(len);
        // (vertex, its successors not yet examined)
        let mut frames: Vec<(usize, J)> = vec![];

        for v in vertices {
            let vi = index(&v);
            assert!(vi < len, "vertex index out of range: {vi} >= {len}");
            if state.ord[vi].is_some() {
                continue;
            }
            frames.push((vi, delta(&v)));
            state.visit(vi, v);

            while let Some((vi, succ)) = frames.last_mut() {
                let vi = *vi;
                if let Some(nv) = succ.next() {
                    let nvi = index(&nv);
                    match state.ord[nvi] {
                        None => {
                            frames.push((nvi, delta(&nv)));
                            state.visit(nvi, nv);
                        }
                        Some(ord) if state.on_stack[nvi] => {
                            state.low[vi] = state.low[vi].min(ord);
                        }
                        // already in a closed component
                        Some(_) => {}
                    }
                    continue;
                }

                frames.pop();
                if let Some(&(pi, _)) = frames.last() {
                    state.low[pi] = state.low[pi].min(state.low[vi]);
                }
                if state.ord[vi] == Some(state.low[vi]) {
                    state.close(vi);
                }
            }
        }

        let State { comp_id, comp, .. } = state;
        Self { comp_id, comp, index }
    }

    /// Returns the id of the component containing `v`.
    ///
    /// # Panics
    /// Panics if `v` was not reached from the vertices given to
    /// [`Scc::new`].
    pub fn comp_id(&self, v: &V) -> usize {
        let vi = (self.index)(v);
        match self.comp_id[vi] {
            Some(id) => id,
            None => panic!("vertex {vi} was not reached"),
        }
    }

    /// Component ids indexed by vertex index.
    ///
    /// # Panics
    /// Panics if some vertex index in `0..len` was not reached.
    pub fn comp_ids(&self) -> Vec<usize> {
        self.comp_id
            .iter()
            .enumerate()
            .map(|(vi, id)| match id {
                Some(id) => *id,
                None => panic!("vertex {vi} was not reached"),
            })
            .collect()
    }

    /// Members of the `i`-th component, in the order they were discovered.
    pub fn comp(&self, i: usize) -> &[V] { &self.comp[i] }

    /// Number of components.
    pub fn len(&self) -> usize { self.comp.len() }
    pub fn is_empty(&self) -> bool { self.comp.is_empty() }
}

struct AsSet<'a, V>(&'a [V]);
impl<V: fmt::Debug> fmt::Debug for AsSet<'_, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_set().entries(self.0.iter()).finish()
    }
}

impl<V: fmt::Debug, I> fmt::Debug for Scc<V, I> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.comp.iter().map(|c| AsSet(c))).finish()
    }
}

/// A directed graph on the vertices `0..n`, built edge by edge and then
/// decomposed.
///
/// ```
/// use scc::SccGraph;
///
/// let mut g = SccGraph::new(4);
/// g.add_edge(0, 1);
/// g.add_edge(1, 2);
/// g.add_edge(2, 1);
/// g.add_edge(2, 3);
/// assert_eq!(g.find_sccs(), [2, 1, 1, 0]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SccGraph {
    g: Vec<Vec<usize>>,
}

fn identity(&v: &usize) -> usize { v }

impl SccGraph {
    pub fn new(n: usize) -> Self { Self { g: vec![vec![]; n] } }

    pub fn len(&self) -> usize { self.g.len() }
    pub fn is_empty(&self) -> bool { self.g.is_empty() }

    pub fn add_edge(&mut self, from: usize, to: usize) {
        let n = self.len();
        assert!(from < n, "`from` out of range: {from} >= {n}");
        assert!(to < n, "`to` out of range: {to} >= {n}");
        self.g[from].push(to);
    }

    /// Successors of `v`, in insertion order.
    pub fn neighbors(&self, v: usize) -> &[usize] { &self.g[v] }

    pub fn scc(&self) -> Scc<usize, fn(&usize) -> usize> {
        let len = self.len();
        let delta = |&v: &usize| self.g[v].iter().copied();
        Scc::new(0..len, len, identity as fn(&usize) -> usize, delta)
    }

    /// Component id of every vertex; see [`Scc`] for the numbering.
    pub fn find_sccs(&self) -> Vec<usize> { self.scc().comp_ids() }
}
