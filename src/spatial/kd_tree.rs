use crate::math::Point3;

/// Nearest-neighbour query result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index of the matched point in the slice the tree was built from.
    pub index: usize,
    /// Euclidean distance from the query point.
    pub distance: f64,
}

#[derive(Debug, Clone)]
struct KdNode {
    point: Point3,
    index: usize,
    split: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// A static 3-D k-d tree over a set of points.
///
/// Nodes live in a flat arena and refer to their children by position. The
/// tree is balanced at construction by splitting on the median of the
/// cycling axis and is never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct KdTree {
    nodes: Vec<KdNode>,
    root: Option<usize>,
}

impl KdTree {
    /// Builds a tree over `points`; entries are keyed by slice index.
    #[must_use]
    pub fn build(points: &[Point3]) -> Self {
        let mut order: Vec<usize> = (0..points.len()).collect();
        let mut nodes = Vec::with_capacity(points.len());
        let root = build_subtree(&mut nodes, points, &mut order, 0);
        Self { nodes, root }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds the point closest to `query`, or `None` for an empty tree.
    #[must_use]
    pub fn nearest(&self, query: &Point3) -> Option<Neighbor> {
        self.nearest_where(query, |_| true)
    }

    /// Finds the point closest to `query` other than the entry `exclude`.
    #[must_use]
    pub fn nearest_excluding(&self, query: &Point3, exclude: usize) -> Option<Neighbor> {
        self.nearest_where(query, |index| index != exclude)
    }

    /// Finds the closest point whose index passes `accept`.
    #[must_use]
    pub fn nearest_where<F>(&self, query: &Point3, accept: F) -> Option<Neighbor>
    where
        F: Fn(usize) -> bool,
    {
        let mut best: Option<(usize, f64)> = None;
        if let Some(root) = self.root {
            self.search(root, query, &accept, &mut best);
        }
        best.map(|(index, dist_sq)| Neighbor {
            index,
            distance: dist_sq.sqrt(),
        })
    }

    fn search<F>(&self, id: usize, query: &Point3, accept: &F, best: &mut Option<(usize, f64)>)
    where
        F: Fn(usize) -> bool,
    {
        let node = &self.nodes[id];

        if accept(node.index) {
            let dist_sq = (node.point - query).norm_squared();
            if best.is_none_or(|(_, b)| dist_sq < b) {
                *best = Some((node.index, dist_sq));
            }
        }

        let diff = query[node.split] - node.point[node.split];
        let (near, far) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(near) = near {
            self.search(near, query, accept, best);
        }
        // The far side can only help if the splitting plane is closer than
        // the best match so far.
        if let Some(far) = far {
            if best.is_none_or(|(_, b)| diff * diff < b) {
                self.search(far, query, accept, best);
            }
        }
    }
}

fn build_subtree(
    nodes: &mut Vec<KdNode>,
    points: &[Point3],
    order: &mut [usize],
    depth: usize,
) -> Option<usize> {
    if order.is_empty() {
        return None;
    }

    let split = depth % 3;
    let mid = order.len() / 2;
    order.select_nth_unstable_by(mid, |&a, &b| points[a][split].total_cmp(&points[b][split]));

    let index = order[mid];
    let id = nodes.len();
    nodes.push(KdNode {
        point: points[index],
        index,
        split,
        left: None,
        right: None,
    });

    let (lower, rest) = order.split_at_mut(mid);
    let left = build_subtree(nodes, points, lower, depth + 1);
    let right = build_subtree(nodes, points, &mut rest[1..], depth + 1);
    nodes[id].left = left;
    nodes[id].right = right;
    Some(id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Deterministic pseudo-random cloud (LCG), good enough to shake out
    /// pruning bugs.
    fn cloud(n: usize, seed: u64) -> Vec<Point3> {
        let mut state = seed;
        let mut next = move || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            #[allow(clippy::cast_precision_loss)]
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            unit * 2.0 - 1.0
        };
        (0..n).map(|_| Point3::new(next(), next(), next())).collect()
    }

    fn brute_force(points: &[Point3], query: &Point3, exclude: Option<usize>) -> Option<f64> {
        points
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != exclude)
            .map(|(_, p)| (p - query).norm())
            .min_by(f64::total_cmp)
    }

    #[test]
    fn empty_tree_has_no_neighbor() {
        let tree = KdTree::build(&[]);
        assert!(tree.is_empty());
        assert!(tree.nearest(&Point3::origin()).is_none());
    }

    #[test]
    fn single_point() {
        let tree = KdTree::build(&[Point3::new(1.0, 0.0, 0.0)]);
        let hit = tree.nearest(&Point3::new(-1.0, 0.0, 0.0)).unwrap();
        assert_eq!(hit.index, 0);
        assert_relative_eq!(hit.distance, 2.0);
        assert!(tree.nearest_excluding(&Point3::origin(), 0).is_none());
    }

    #[test]
    fn exact_hit_has_zero_distance() {
        let points = cloud(64, 7);
        let tree = KdTree::build(&points);
        assert_eq!(tree.len(), 64);
        for (i, p) in points.iter().enumerate() {
            let hit = tree.nearest(p).unwrap();
            assert_eq!(hit.index, i);
            assert_relative_eq!(hit.distance, 0.0);
        }
    }

    #[test]
    fn matches_brute_force() {
        let points = cloud(500, 42);
        let tree = KdTree::build(&points);
        for query in cloud(200, 1234) {
            let hit = tree.nearest(&query).unwrap();
            let expected = brute_force(&points, &query, None).unwrap();
            assert_relative_eq!(hit.distance, expected);
            assert_relative_eq!((points[hit.index] - query).norm(), expected);
        }
    }

    #[test]
    fn excluding_skips_only_that_entry() {
        let points = cloud(300, 99);
        let tree = KdTree::build(&points);
        for (i, p) in points.iter().enumerate().take(50) {
            let hit = tree.nearest_excluding(p, i).unwrap();
            assert_ne!(hit.index, i);
            let expected = brute_force(&points, p, Some(i)).unwrap();
            assert_relative_eq!(hit.distance, expected);
        }
    }

    #[test]
    fn duplicate_points_are_all_reachable() {
        let points = vec![Point3::new(0.5, 0.5, 0.5); 8];
        let tree = KdTree::build(&points);
        let hit = tree
            .nearest_where(&Point3::origin(), |i| i == 5)
            .unwrap();
        assert_eq!(hit.index, 5);
    }
}
