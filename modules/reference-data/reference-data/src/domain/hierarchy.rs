//! Parent-link trees: cycle detection and parents-first ordering.
//!
//! Foreign keys guarantee that a parent exists but cannot forbid cycles, so
//! every tree-shaped table (`state_region`, `commodity_code`, `industry_code`,
//! timezone alias links) is checked here before it is written.

use std::collections::HashMap;
use std::hash::Hash;

/// Why a set of parent links is not a forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError<K> {
    /// A node names itself as parent.
    SelfLoop(K),
    /// Following parent links from this node returns to it.
    Cycle(K),
}

/// Depth of every node relative to the given set.
///
/// A node whose parent is `None`, or whose parent is not part of `nodes`
/// (already stored elsewhere), has depth 0.
///
/// # Errors
///
/// Returns `HierarchyError` on the first self-loop or cycle found.
pub fn depths<K>(nodes: &[(K, Option<K>)]) -> Result<Vec<usize>, HierarchyError<K>>
where
    K: Eq + Hash + Clone,
{
    let index: HashMap<&K, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, (key, _))| (key, i))
        .collect();
    let mut depth: Vec<Option<usize>> = vec![None; nodes.len()];

    for start in 0..nodes.len() {
        if depth[start].is_some() {
            continue;
        }

        // Walk up until a node with a known depth, a root, or an outside parent.
        let mut path = vec![start];
        let mut resolved = 0;
        while let Some(&cur) = path.last() {
            let (key, parent) = &nodes[cur];
            let Some(parent) = parent else {
                resolved = 0;
                break;
            };
            if parent == key {
                return Err(HierarchyError::SelfLoop(key.clone()));
            }
            let Some(&pi) = index.get(parent) else {
                resolved = 0;
                break;
            };
            if let Some(d) = depth[pi] {
                resolved = d + 1;
                break;
            }
            if path.contains(&pi) {
                return Err(HierarchyError::Cycle(nodes[pi].0.clone()));
            }
            path.push(pi);
        }

        let mut d = resolved;
        let mut walk = path.iter().rev();
        if let Some(&top) = walk.next() {
            depth[top] = Some(d);
        }
        for &i in walk {
            d += 1;
            depth[i] = Some(d);
        }
    }

    Ok(depth.into_iter().map(|d| d.unwrap_or(0)).collect())
}

/// Indices of `nodes` ordered so that every parent precedes its children.
///
/// The sort is stable: siblings keep their input order.
///
/// # Errors
///
/// Returns `HierarchyError` on the first self-loop or cycle found.
pub fn parents_first<K>(nodes: &[(K, Option<K>)]) -> Result<Vec<usize>, HierarchyError<K>>
where
    K: Eq + Hash + Clone,
{
    let depth = depths(nodes)?;
    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by_key(|&i| depth[i]);
    Ok(order)
}

/// Reorders `items` according to `order` (a permutation of its indices).
#[must_use]
pub fn apply_order<T>(items: Vec<T>, order: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order.iter().filter_map(|&i| slots.get_mut(i).and_then(Option::take)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node<'a>(key: &'a str, parent: Option<&'a str>) -> (&'a str, Option<&'a str>) {
        (key, parent)
    }

    #[test]
    fn test_depths_of_simple_tree() {
        let nodes = vec![
            node("541511", Some("54151")),
            node("54", None),
            node("54151", Some("5415")),
            node("541", Some("54")),
            node("5415", Some("541")),
        ];
        assert_eq!(depths(&nodes).unwrap(), vec![4, 0, 3, 1, 2]);
    }

    #[test]
    fn test_parents_first_is_stable() {
        let nodes = vec![
            node("GB-LND", Some("GB-ENG")),
            node("GB-ENG", None),
            node("GB-EDH", Some("GB-SCT")),
            node("GB-SCT", None),
        ];
        let order = parents_first(&nodes).unwrap();
        assert_eq!(order, vec![1, 3, 0, 2]);

        let keys = apply_order(nodes.iter().map(|n| n.0).collect(), &order);
        assert_eq!(keys, vec!["GB-ENG", "GB-SCT", "GB-LND", "GB-EDH"]);
    }

    #[test]
    fn test_outside_parent_counts_as_root() {
        let nodes = vec![node("0111", Some("011")), node("0112", Some("011"))];
        assert_eq!(depths(&nodes).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_self_loop_detected() {
        let nodes = vec![node("SA-01", Some("SA-01"))];
        assert_eq!(depths(&nodes), Err(HierarchyError::SelfLoop("SA-01")));
    }

    #[test]
    fn test_cycle_detected() {
        let nodes = vec![
            node("a", Some("b")),
            node("b", Some("c")),
            node("c", Some("a")),
            node("d", None),
        ];
        assert!(matches!(depths(&nodes), Err(HierarchyError::Cycle(_))));
    }

    #[test]
    fn test_tail_into_cycle_detected() {
        let nodes = vec![node("x", Some("a")), node("a", Some("b")), node("b", Some("a"))];
        assert!(matches!(depths(&nodes), Err(HierarchyError::Cycle(_))));
    }

    #[test]
    fn test_composite_keys() {
        let nodes = vec![
            (("isic", "01"), Some(("isic", "A"))),
            (("isic", "A"), None),
            (("naics", "11"), None),
        ];
        assert_eq!(depths(&nodes).unwrap(), vec![1, 0, 0]);
    }
}
