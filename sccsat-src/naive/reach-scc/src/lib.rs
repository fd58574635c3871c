use std::collections::VecDeque;

pub struct ReachScc(Vec<Vec<bool>>);

impl ReachScc {
    pub fn new(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut g = vec![vec![]; n];
        for &(u, v) in edges {
            g[u].push(v);
        }
        let reach = (0..n)
            .map(|s| {
                let mut seen = vec![false; n];
                seen[s] = true;
                let mut q = VecDeque::from([s]);
                while let Some(u) = q.pop_front() {
                    for &v in &g[u] {
                        if !seen[v] {
                            seen[v] = true;
                            q.push_back(v);
                        }
                    }
                }
                seen
            })
            .collect();
        Self(reach)
    }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn reachable(&self, u: usize, v: usize) -> bool { self.0[u][v] }
    pub fn same_comp(&self, u: usize, v: usize) -> bool {
        self.reachable(u, v) && self.reachable(v, u)
    }
    pub fn comp_count(&self) -> usize {
        let n = self.len();
        (0..n).filter(|&u| (0..u).all(|v| !self.same_comp(u, v))).count()
    }
}

#[test]
fn sanity_check() {
    // 0 -> 1 -> 2 -> 0, 2 -> 3
    let rs = ReachScc::new(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
    assert!(rs.same_comp(0, 2));
    assert!(rs.reachable(0, 3));
    assert!(!rs.reachable(3, 0));
    assert!(!rs.same_comp(1, 3));
    assert_eq!(rs.comp_count(), 2);
}
