//! Structural invariants of built and loaded trees.

use rand::SeedableRng;
use rand::rngs::StdRng;
use vantage_vptree::{Node, SearchConfig, Split, TreeConfig, VpTree};

fn abs_diff(a: &usize, b: &usize) -> f64 {
    a.abs_diff(*b) as f64
}

/// Every index 0..n appears exactly once, for any n and bucket size.
#[test]
fn every_index_exactly_once() {
    for n in 0..64 {
        for bucket_size in 0..8 {
            let mut rng = StdRng::seed_from_u64((n * 31 + bucket_size) as u64);
            let config = TreeConfig::new().with_bucket_size(bucket_size);
            let tree = VpTree::build_indexed(n, abs_diff, &config, &mut rng);
            let mut indices = tree.root().indices();
            indices.sort_unstable();
            assert_eq!(
                indices,
                (0..n).collect::<Vec<_>>(),
                "n {n}, bucket {bucket_size}"
            );
        }
    }
}

/// Without buckets every node is a vantage point.
#[test]
fn no_leaves_without_buckets() {
    fn has_leaf(node: &Node) -> bool {
        match node {
            Node::Empty => false,
            Node::Leaf(_) => true,
            Node::Vantage(vp) => vp
                .split
                .as_ref()
                .is_some_and(|s| has_leaf(&s.left) || has_leaf(&s.right)),
        }
    }

    let mut rng = StdRng::seed_from_u64(5);
    let tree = VpTree::build_indexed(100, abs_diff, &TreeConfig::new(), &mut rng);
    assert!(!has_leaf(tree.root()));
}

/// Loading hands back the exact structure and searches it as given.
#[test]
fn load_is_idempotent() {
    let items = [0.0, 10.0, 20.0, 30.0];
    let root = Node::vantage(
        1,
        Some(Split {
            min: 10.0,
            max: 20.0,
            median: 10.0,
            left: Node::vantage(0, None),
            right: Node::leaf(vec![2, 3]),
        }),
    );
    let metric = |a: &f64, b: &f64| (a - b).abs();
    let tree = VpTree::load(&items, metric, root.clone());
    assert_eq!(tree.root(), &root);

    let result = tree.search(&19.0, &SearchConfig::nearest(2));
    assert_eq!(result.indices(), vec![2, 1]);
}

/// A built tree survives a load round trip unchanged.
#[test]
fn rebuild_free_restore() {
    let mut rng = StdRng::seed_from_u64(13);
    let config = TreeConfig::new().with_bucket_size(2);
    let built = VpTree::build_indexed(40, abs_diff, &config, &mut rng);
    let text = built.stringify();
    let restored = VpTree::load_indexed(40, abs_diff, built.into_root());
    assert_eq!(restored.stringify(), text);

    let result = restored.search(&17_usize, &SearchConfig::nearest(3));
    let mut indices = result.indices();
    indices.sort_unstable();
    assert_eq!(indices, vec![16, 17, 18]);
}

/// The compact text form names every index once.
#[test]
fn stringify_mentions_every_index() {
    let mut rng = StdRng::seed_from_u64(21);
    let tree = VpTree::build_indexed(25, abs_diff, &TreeConfig::new(), &mut rng);
    let text = tree.stringify();
    assert!(text.starts_with("{i:"));
    assert_eq!(text.matches("i:").count(), 25);
    assert_eq!(text.matches('{').count(), text.matches('}').count());
    assert!(!text.contains("null"));
}
