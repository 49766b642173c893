//! End-to-end scenarios on small, hand-checkable datasets.

use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use vantage_vptree::{Node, SearchConfig, TreeConfig, VpTree};

const LINE: [f64; 5] = [0.0, 1.0, 2.0, 3.0, 4.0];

fn abs_diff(a: &f64, b: &f64) -> f64 {
    (a - b).abs()
}

fn max_bucket(node: &Node) -> usize {
    match node {
        Node::Empty => 0,
        Node::Leaf(bucket) => bucket.len(),
        Node::Vantage(vp) => vp
            .split
            .as_ref()
            .map_or(0, |s| max_bucket(&s.left).max(max_bucket(&s.right))),
    }
}

/// Two nearest to 2.5 on a line are the tied points 2 and 3, whatever tree
/// the seed produces.
#[test]
fn line_two_nearest_without_buckets() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let tree = VpTree::build(&LINE, abs_diff, &TreeConfig::new(), &mut rng);
        let result = tree.search(&2.5, &SearchConfig::nearest(2));

        let mut indices = result.indices();
        indices.sort_unstable();
        assert_eq!(indices, vec![2, 3], "seed {seed}");
        for n in result.neighbors() {
            assert_abs_diff_eq!(n.distance, 0.5, epsilon = 1e-12);
        }
    }
}

/// Bucketed tree over the same line returns everything, sorted.
#[test]
fn line_all_with_buckets() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = TreeConfig::new().with_bucket_size(3);
        let tree = VpTree::build(&LINE, abs_diff, &config, &mut rng);
        assert!(max_bucket(tree.root()) <= 3);

        let result = tree.search(
            &0.8,
            &SearchConfig::nearest(5).with_max_distance(f64::INFINITY),
        );
        assert_eq!(result.indices(), vec![1, 0, 2, 3, 4], "seed {seed}");
        let distances: Vec<f64> = result.neighbors().iter().map(|n| n.distance).collect();
        for (got, want) in distances.iter().zip([0.2, 0.8, 1.2, 2.2, 3.2]) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
        }
    }
}

/// An empty dataset yields an empty tree and empty results.
#[test]
fn empty_dataset() {
    let mut rng = StdRng::seed_from_u64(0);
    let metric = |a: &usize, b: &usize| a.abs_diff(*b) as f64;
    let tree = VpTree::build_indexed(0, metric, &TreeConfig::new(), &mut rng);
    assert_eq!(tree.root(), &Node::Empty);
    for limit in [0, 1, 10] {
        let result = tree.search(&3_usize, &SearchConfig::nearest(limit));
        assert!(result.is_empty());
    }
}

/// When the bucket covers the whole dataset the root is a single leaf.
#[test]
fn bucket_larger_than_dataset() {
    let mut rng = StdRng::seed_from_u64(0);
    let config = TreeConfig::new().with_bucket_size(10);
    let tree = VpTree::build(&LINE, abs_diff, &config, &mut rng);
    assert_eq!(tree.stringify(), "[0,1,2,3,4]");
}

/// Implicit index datasets: the metric looks elements up itself.
#[test]
fn implicit_indices_with_external_lookup() {
    let heights: [f64; 6] = [1.80, 1.62, 1.75, 1.91, 1.55, 1.72];
    let metric = move |a: &usize, b: &usize| (heights[*a] - heights[*b]).abs();
    let mut rng = StdRng::seed_from_u64(8);
    let tree = VpTree::build_indexed(heights.len(), metric, &TreeConfig::new(), &mut rng);

    // Closest to person 2 (1.75) besides themselves: 5 (1.72) then 0 (1.80)
    let not_self = |&i: &usize| i != 2;
    let result = tree.search_with(&2_usize, &SearchConfig::nearest(2), tree.metric(), not_self);
    assert_eq!(result.indices(), vec![5, 0]);
}

/// Non-vector data: strings under edit distance.
#[test]
fn strings_under_edit_distance() {
    fn levenshtein(a: &&str, b: &&str) -> f64 {
        let b: Vec<char> = b.chars().collect();
        let mut row: Vec<usize> = (0..=b.len()).collect();
        for (i, ca) in a.chars().enumerate() {
            let mut prev = row[0];
            row[0] = i + 1;
            for (j, &cb) in b.iter().enumerate() {
                let cur = row[j + 1];
                row[j + 1] = if ca == cb {
                    prev
                } else {
                    1 + prev.min(row[j]).min(row[j + 1])
                };
                prev = cur;
            }
        }
        row[b.len()] as f64
    }

    let words = [
        "kitten", "sitting", "mitten", "fitting", "smitten", "bitten", "kitchen", "written",
    ];
    let mut rng = StdRng::seed_from_u64(3);
    let tree = VpTree::build(&words, levenshtein, &TreeConfig::new(), &mut rng);
    let result = tree.search(&"kitten", &SearchConfig::new().with_max_distance(1.5));

    let mut found: Vec<&str> = result.indices().iter().map(|&i| words[i]).collect();
    found.sort_unstable();
    assert_eq!(found, vec!["bitten", "kitten", "mitten"]);
}
