pub fn eval(assignment: &[bool], cnf: &[[(usize, bool); 2]]) -> bool {
    cnf.iter().all(|clause| {
        clause.iter().any(|&(index, not)| assignment[index] != not)
    })
}

pub fn brute_twosat(
    len: usize,
    cnf: &[[(usize, bool); 2]],
) -> Option<Vec<bool>> {
    assert!(len < 32, "`len` too large to enumerate");
    (0_u32..1 << len)
        .map(|bits| (0..len).map(|i| bits >> i & 1 != 0).collect::<Vec<_>>())
        .find(|assignment| eval(assignment, cnf))
}

#[test]
fn sanity_check() {
    // (x0 | x1) & (!x0 | x1) & (x0 | !x1)
    let cnf = [
        [(0, false), (1, false)],
        [(0, true), (1, false)],
        [(0, false), (1, true)],
    ];
    assert_eq!(brute_twosat(2, &cnf), Some(vec![true, true]));

    let cnf = [[(0, false), (0, false)], [(0, true), (0, true)]];
    assert_eq!(brute_twosat(1, &cnf), None);
    assert_eq!(brute_twosat(0, &[]), Some(vec![]));
}
