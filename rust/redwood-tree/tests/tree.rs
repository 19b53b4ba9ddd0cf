use anyhow::{Result, anyhow};
use pretty_assertions::assert_eq;
use redwood_tree::{Lookup, NodeId, Tree};

fn values<T: Copy>(tree: &Tree<T>) -> Vec<T> {
    tree.iter().copied().collect()
}

#[test]
fn find_then_insert_builds_an_ordered_set() -> Result<()> {
    let mut tree = Tree::new();
    for value in [5, 3, 8, 1, 4] {
        match tree.find(&value, None) {
            Lookup::Found(_) => return Err(anyhow!("{value} was already present")),
            Lookup::Vacant(position) => {
                tree.insert(position, value);
            }
        }
    }

    assert_eq!(tree.len(), 5);
    assert_eq!(values(&tree), vec![1, 3, 4, 5, 8]);
    tree.validate()?;

    assert_eq!(tree.remove(&3), Some(3));
    assert_eq!(values(&tree), vec![1, 4, 5, 8]);
    assert_eq!(tree.len(), 4);
    tree.validate()?;

    Ok(())
}

#[test]
fn find_then_insert_never_duplicates() -> Result<()> {
    let mut tree = Tree::new();
    for value in [7, 7, 3, 7, 3, 9] {
        if let Lookup::Vacant(position) = tree.find(&value, None) {
            tree.insert(position, value);
        }
    }

    assert_eq!(tree.len(), 3);
    assert_eq!(values(&tree), vec![3, 7, 9]);
    tree.validate()?;

    Ok(())
}

#[test]
fn cursor_walks_forward_and_backward() -> Result<()> {
    let tree: Tree<u32> = [40, 10, 30, 20, 50].into_iter().collect();

    let mut forward = Vec::new();
    let mut cursor = tree.begin();
    while cursor != tree.end() {
        forward.push(*cursor.get().ok_or_else(|| anyhow!("cursor lost its value"))?);
        cursor.move_next();
    }
    assert_eq!(forward, vec![10, 20, 30, 40, 50]);
    assert_eq!(forward.len(), tree.len());

    let mut backward = Vec::new();
    let mut cursor = tree.end();
    cursor.move_prev();
    loop {
        backward.push(*cursor.get().ok_or_else(|| anyhow!("cursor lost its value"))?);
        if cursor == tree.begin() {
            break;
        }
        cursor.move_prev();
    }
    forward.reverse();
    assert_eq!(backward, forward);

    Ok(())
}

#[test]
fn cursors_are_tied_to_their_tree() -> Result<()> {
    let first: Tree<u32> = (1..=3).collect();
    let second: Tree<u32> = (1..=3).collect();

    assert_eq!(values(&first), values(&second));
    assert_eq!(first, second);
    assert!(first.begin() != second.begin());
    assert!(first.end() != second.end());
    assert!(first.begin() == first.cursor_at(first.minimal_node(None).unwrap()));

    Ok(())
}

#[test]
fn tiers_of_seven_ascending_values() -> Result<()> {
    let tree: Tree<i64> = (1..=7).collect();
    let root = tree
        .root_value()
        .copied()
        .ok_or_else(|| anyhow!("tree has no root"))?;

    assert_eq!(tree.sum_one_tier(0), root);
    assert_eq!(tree.sum_one_tier(tree.height()), 0);
    assert_eq!(tree.sum_one_tier(tree.height() + 10), 0);

    let total: i64 = (0..tree.height()).map(|tier| tree.sum_one_tier(tier)).sum();
    assert_eq!(total, 28);

    Ok(())
}

#[test]
fn clear_is_idempotent() -> Result<()> {
    let mut tree = Tree::<u32>::new();
    tree.clear();
    assert_eq!(tree.len(), 0);

    tree.extend([3, 1, 2]);
    tree.clear();
    tree.clear();
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.begin(), tree.end());
    tree.validate()?;

    tree.extend([4, 5]);
    assert_eq!(values(&tree), vec![4, 5]);
    tree.validate()?;

    Ok(())
}

#[test]
fn removed_handles_are_not_live() -> Result<()> {
    let mut tree: Tree<u32> = (0..10).collect();
    let five = tree
        .find(&5, None)
        .found()
        .ok_or_else(|| anyhow!("5 is missing"))?;

    tree.remove(&5);
    assert!(tree.node(five).is_none() || tree.value(five) != Some(&5));
    assert!(!tree.contains(&5));
    assert!(tree.node(NodeId::HEADER).is_none());

    Ok(())
}

#[test]
fn large_shuffled_workload_stays_balanced() -> Result<()> {
    // A fixed permutation of 0..1000: 7919 is prime, so it is coprime with 1000
    let order: Vec<u32> = (0..1000).map(|i| (i * 7919) % 1000).collect();
    let mut tree: Tree<u32> = order.iter().copied().collect();
    assert_eq!(tree.len(), 1000);
    let black_height = tree.validate()?;
    assert!(black_height >= 1);

    for value in order.iter().filter(|value| *value % 3 == 0) {
        assert_eq!(tree.remove(value), Some(*value));
    }
    tree.validate()?;
    assert_eq!(
        values(&tree),
        (0..1000).filter(|value| value % 3 != 0).collect::<Vec<_>>()
    );

    Ok(())
}
