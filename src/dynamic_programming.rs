//!
//! Bottom-up dynamic programming
//!
//! * lcs: longest common subsequence
//! * rod_cut: rod cutting
//! * knapsack: 0/1 knapsack
//!
use itertools::Itertools;
use log::debug;

///
/// Where the value of a cell of the LCS table came from
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    UpLeft,
    Up,
    Left,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcs<T> {
    pub length: usize,
    pub sequence: Vec<T>,
}

///
/// Longest common subsequence of `x` and `y`
///
/// On ties between dropping from `x` (up) and from `y` (left), up is preferred.
///
pub fn lcs<T: PartialEq + Clone>(x: &[T], y: &[T]) -> Lcs<T> {
    let (n, m) = (x.len(), y.len());
    // c[i][j] = (length of LCS of x[..i] and y[..j], direction)
    let mut c = vec![vec![(0usize, Direction::Up); m + 1]; n + 1];

    for i in 1..=n {
        for j in 1..=m {
            c[i][j] = if x[i - 1] == y[j - 1] {
                (c[i - 1][j - 1].0 + 1, Direction::UpLeft)
            } else if c[i - 1][j].0 >= c[i][j - 1].0 {
                (c[i - 1][j].0, Direction::Up)
            } else {
                (c[i][j - 1].0, Direction::Left)
            };
        }
    }

    // traceback from the bottom-right corner
    let mut sequence = Vec::new();
    let (mut i, mut j) = (n, m);
    while i > 0 && j > 0 {
        match c[i][j].1 {
            Direction::UpLeft => {
                sequence.push(x[i - 1].clone());
                i -= 1;
                j -= 1;
            }
            Direction::Up => i -= 1,
            Direction::Left => j -= 1,
        }
    }
    sequence.reverse();

    Lcs {
        length: c[n][m].0,
        sequence,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RodCut {
    /// `revenue[i]` = maximum revenue for a rod of length i
    pub revenue: Vec<i64>,
    /// `first_cut[i]` = size of the first piece in an optimal cutting of length i
    pub first_cut: Vec<usize>,
    /// piece sizes of an optimal cutting of the whole rod
    pub pieces: Vec<usize>,
}

///
/// Cut a rod of length `length` into pieces maximizing the total price.
///
/// `prices[i]` is the price of a piece of length i (`prices[0]` is ignored).
/// Pieces longer than the price table are not for sale.
///
pub fn rod_cut(prices: &[i64], length: usize) -> RodCut {
    let mut revenue = vec![0i64; length + 1];
    let mut first_cut = vec![0usize; length + 1];

    for i in 1..=length {
        let mut best: Option<(i64, usize)> = None;
        for j in 1..=i.min(prices.len().saturating_sub(1)) {
            let q = prices[j] + revenue[i - j];
            if best.map_or(true, |(b, _)| b < q) {
                best = Some((q, j));
            }
        }
        if let Some((q, j)) = best {
            revenue[i] = q;
            first_cut[i] = j;
        }
    }
    debug!("rod revenue={:?} first_cut={:?}", revenue, first_cut);

    let mut pieces = Vec::new();
    let mut n = length;
    while n > 0 && first_cut[n] > 0 {
        pieces.push(first_cut[n]);
        n -= first_cut[n];
    }

    RodCut {
        revenue,
        first_cut,
        pieces,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack {
    pub value: i64,
    /// indices of the chosen items in increasing order
    pub items: Vec<usize>,
}

///
/// 0/1 knapsack: choose items `(weight, value)` of total weight at most `capacity`
/// maximizing the total value.
///
pub fn knapsack(items: &[(usize, i64)], capacity: usize) -> Knapsack {
    let n = items.len();
    // t[i][c] = best value using the first i items within capacity c
    let mut t = vec![vec![0i64; capacity + 1]; n + 1];
    for (i, &(weight, value)) in items.iter().enumerate() {
        for c in 0..=capacity {
            t[i + 1][c] = t[i][c];
            if weight <= c {
                t[i + 1][c] = t[i + 1][c].max(t[i][c - weight] + value);
            }
        }
    }

    let mut chosen = Vec::new();
    let mut c = capacity;
    for i in (1..=n).rev() {
        if t[i][c] != t[i - 1][c] {
            chosen.push(i - 1);
            c -= items[i - 1].0;
        }
    }
    chosen.reverse();
    debug!("knapsack chose [{}]", chosen.iter().join(", "));

    Knapsack {
        value: t[n][capacity],
        items: chosen,
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn lcs_stone_longest() {
        let r = lcs(&chars("stone"), &chars("longest"));
        assert_eq!(r.length, 3);
        assert_eq!(r.sequence.iter().collect::<String>(), "one");
    }

    #[test]
    fn lcs_clrs() {
        // Introduction to algorithms Figure 15.8
        let r = lcs(&chars("ABCBDAB"), &chars("BDCABA"));
        assert_eq!(r.length, 4);
        assert_eq!(r.sequence.iter().collect::<String>(), "BCBA");

        let r = lcs(&chars(""), &chars("abc"));
        assert_eq!(r, Lcs { length: 0, sequence: vec![] });
        let r = lcs(&[1, 2, 3], &[4, 5]);
        assert_eq!(r.length, 0);
    }

    #[test]
    fn rod_cut_clrs() {
        let p = [0, 1, 5, 8, 9, 10, 17, 17, 20, 24, 30];
        let r = rod_cut(&p, 10);
        assert_eq!(r.revenue, vec![0, 1, 5, 8, 10, 13, 17, 18, 22, 25, 30]);
        assert_eq!(r.first_cut, vec![0, 1, 2, 3, 2, 2, 6, 1, 2, 3, 10]);
        assert_eq!(r.pieces, vec![10]);

        let r = rod_cut(&p, 7);
        assert_eq!(r.revenue[7], 18);
        assert_eq!(r.pieces, vec![1, 6]);
    }

    #[test]
    fn rod_cut_longer_than_prices() {
        let r = rod_cut(&[0, 1, 5], 5);
        // 2 + 2 + 1
        assert_eq!(r.revenue[5], 11);
        assert_eq!(r.pieces.iter().sum::<usize>(), 5);

        let r = rod_cut(&[0], 3);
        assert_eq!(r.revenue, vec![0, 0, 0, 0]);
        assert!(r.pieces.is_empty());
    }

    #[test]
    fn knapsack_classic() {
        let items = [(10, 60), (20, 100), (30, 120)];
        let k = knapsack(&items, 50);
        assert_eq!(k.value, 220);
        assert_eq!(k.items, vec![1, 2]);

        let k = knapsack(&items, 5);
        assert_eq!(k, Knapsack { value: 0, items: vec![] });
        assert_eq!(knapsack(&[], 10).value, 0);
    }
}
