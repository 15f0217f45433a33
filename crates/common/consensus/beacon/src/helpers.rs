/// Return the depth of the smallest binary subtree that holds ``leaf_count``
/// leaves.
pub fn subtree_merkle_depth(leaf_count: usize) -> u64 {
    u64::from(leaf_count.next_power_of_two().ilog2())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtree_merkle_depth() {
        assert_eq!(subtree_merkle_depth(1), 0);
        assert_eq!(subtree_merkle_depth(2), 1);
        assert_eq!(subtree_merkle_depth(14), 4);
        assert_eq!(subtree_merkle_depth(16), 4);
        assert_eq!(subtree_merkle_depth(17), 5);
    }
}
