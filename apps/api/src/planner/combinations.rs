/// Lexicographic k-combination index iterator over `0..n`.
///
/// Enumeration order is load-bearing: the engine's ranking breaks ties by
/// enumeration order, so this must yield combinations in strictly
/// lexicographic order of their index vectors.
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    done: bool,
}

/// All k-element index combinations of `0..n`, lexicographically.
/// `k == 0` or `k > n` yields nothing.
pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        k,
        indices: (0..k).collect(),
        done: k == 0 || k > n,
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Advance: find the rightmost index that can still move up.
        let mut i = self.k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] != i + self.n - self.k {
                self.indices[i] += 1;
                for j in i + 1..self.k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_of_four_in_lexicographic_order() {
        let combos: Vec<Vec<usize>> = combinations(4, 2).collect();
        assert_eq!(
            combos,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
    }

    #[test]
    fn test_triples_of_four() {
        let combos: Vec<Vec<usize>> = combinations(4, 3).collect();
        assert_eq!(
            combos,
            vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]
        );
    }

    #[test]
    fn test_full_width_combination_is_single() {
        let combos: Vec<Vec<usize>> = combinations(3, 3).collect();
        assert_eq!(combos, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_k_larger_than_n_is_empty() {
        assert_eq!(combinations(2, 3).count(), 0);
    }

    #[test]
    fn test_k_zero_is_empty() {
        assert_eq!(combinations(5, 0).count(), 0);
    }

    #[test]
    fn test_count_matches_binomial() {
        // C(6, 2) = 15, C(6, 4) = 15
        assert_eq!(combinations(6, 2).count(), 15);
        assert_eq!(combinations(6, 4).count(), 15);
    }
}
