use crate::array2::Array2;
use crate::visibility::UNREACHABLE;
use crate::V;
use log::{debug, trace};

/// Result of the all-pairs solve.
///
/// `via[(i, j)]` is not a predecessor. It holds the last intermediate vertex
/// `k` whose relaxation improved the pair, so the shortest i-j path is the
/// shortest i-k path followed by the shortest k-j path. `None` means the
/// direct edge is used, or that there is no path at all; `dist` tells the two
/// apart.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    pub dist: Array2<f64>,
    pub via: Array2<Option<V>>,
}

impl ShortestPaths {
    /* solve:
     * Given a VxV symmetric weighted adjacency matrix, compute the shortest
     * distance between every pair of vertices. Only the upper triangle is
     * scanned; both cells of a pair are written together, so the result stays
     * symmetric. Only strict improvements are recorded: among intermediates
     * giving equal lengths, the one visited first is kept.
     */
    pub fn solve(weights: &Array2<f64>) -> Self {
        let n = weights.rows;
        assert_eq!(n, weights.cols, "adjacency matrix must be square");
        let mut dist = weights.clone();
        let mut via: Array2<Option<V>> = Array2::new(n, n);
        let mut relaxations: usize = 0;

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[(i, k)];
                if d_ik == UNREACHABLE {
                    continue;
                }
                for j in i + 1..n {
                    let through_k = d_ik + dist[(k, j)];
                    if dist[(i, j)] > through_k {
                        trace!("v{} -- v{} via v{}: {} -> {}", i, j, k, dist[(i, j)], through_k);
                        dist.set_symmetric(i, j, through_k);
                        via.set_symmetric(i, j, Some(k as V));
                        relaxations += 1;
                    }
                }
            }
        }

        debug!("shortest paths: {} vertices, {} relaxations", n, relaxations);
        ShortestPaths { dist, via }
    }

    pub fn num_verts(&self) -> usize {
        self.dist.rows
    }

    pub fn distance(&self, i: V, j: V) -> f64 {
        self.dist[(i as usize, j as usize)]
    }

    pub fn is_reachable(&self, i: V, j: V) -> bool {
        self.distance(i, j) != UNREACHABLE
    }

    pub fn via(&self, i: V, j: V) -> Option<V> {
        self.via[(i as usize, j as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(n: usize, edges: &[(usize, usize, f64)]) -> Array2<f64> {
        let mut w = Array2::square(n, UNREACHABLE, 0.0);
        for &(i, j, d) in edges {
            w.set_symmetric(i, j, d);
        }
        w
    }

    #[test]
    fn chain() {
        // 0 - 1 - 2 - 3
        let sp = ShortestPaths::solve(&matrix(4, &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0)]));
        assert_eq!(sp.distance(0, 3), 6.0);
        assert_eq!(sp.distance(3, 0), 6.0);
        assert_eq!(sp.distance(1, 3), 5.0);
        assert_eq!(sp.via(0, 1), None);
        // the last improvement of (0, 3) came through k = 2
        assert_eq!(sp.via(0, 3), Some(2));
        assert_eq!(sp.via(0, 2), Some(1));
    }

    #[test]
    fn shortcut_beats_direct_edge() {
        let sp = ShortestPaths::solve(&matrix(3, &[(0, 2, 10.0), (0, 1, 3.0), (1, 2, 3.0)]));
        assert_eq!(sp.distance(0, 2), 6.0);
        assert_eq!(sp.via(2, 0), Some(1));
    }

    #[test]
    fn ties_keep_the_first_intermediate() {
        // two routes of length 2 between 0 and 3: via 1 and via 2
        let sp = ShortestPaths::solve(&matrix(
            4,
            &[(0, 1, 1.0), (1, 3, 1.0), (0, 2, 1.0), (2, 3, 1.0)],
        ));
        assert_eq!(sp.distance(0, 3), 2.0);
        assert_eq!(sp.via(0, 3), Some(1));
    }

    #[test]
    fn disconnected_pairs_stay_unreachable() {
        let sp = ShortestPaths::solve(&matrix(4, &[(0, 1, 1.0), (2, 3, 1.0)]));
        assert!(sp.is_reachable(0, 1));
        assert!(!sp.is_reachable(0, 2));
        assert_eq!(sp.distance(1, 3), UNREACHABLE);
        assert_eq!(sp.via(1, 3), None);
        for v in 0..4 {
            assert_eq!(sp.distance(v, v), 0.0);
        }
    }

    #[test]
    fn empty() {
        let sp = ShortestPaths::solve(&Array2::square(0, UNREACHABLE, 0.0));
        assert_eq!(sp.num_verts(), 0);
    }
}
