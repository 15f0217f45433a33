//! https://ethereum.github.io/consensus-specs/ssz/merkle-proofs

use alloy_primitives::B256;
use anyhow::ensure;

mod hash;
mod index;

use hash::hash_concat;
pub use index::{concat_generalized_indices, generalized_index_from_leaf_index};
use index::{generalized_index_child, get_generalized_index_bit, get_subtree_index};

pub fn merkle_tree(leaves: &[B256], depth: u64) -> anyhow::Result<Vec<B256>> {
    let num_of_leaves = leaves.len();
    let bottom_length = 1 << depth;
    ensure!(
        num_of_leaves <= bottom_length,
        "Number of leaves is greater than the bottom length (depth too small)"
    );

    let mut tree = vec![B256::ZERO; bottom_length];
    tree.extend(leaves);
    tree.extend(vec![B256::ZERO; bottom_length - num_of_leaves]);

    for i in (1..bottom_length).rev() {
        let left = tree[i * 2].as_slice();
        let right = tree[i * 2 + 1].as_slice();
        tree[i] = hash_concat(left, right);
    }

    Ok(tree)
}

pub fn generate_proof(tree: &[B256], index: u64, depth: u64) -> anyhow::Result<Vec<B256>> {
    let bottom_length = 1 << depth;
    ensure!(index < bottom_length, "Index out of bounds");

    let mut proof = vec![];
    let mut current_index = 1;
    let mut current_depth = depth;

    while current_depth > 0 {
        let (left_child_index, right_child_index) = (
            generalized_index_child(current_index, false),
            generalized_index_child(current_index, true),
        );

        if get_generalized_index_bit(index, current_depth - 1) {
            proof.push(tree[left_child_index as usize]);
            current_index = right_child_index;
        } else {
            proof.push(tree[right_child_index as usize]);
            current_index = left_child_index;
        }

        current_depth -= 1;
    }

    proof.reverse();

    Ok(proof)
}

pub fn is_valid_merkle_branch(
    leaf: B256,
    branch: &[B256],
    depth: u64,
    index: u64,
    root: B256,
) -> bool {
    let mut value = leaf;
    for i in 0..depth {
        if get_generalized_index_bit(index, i) {
            value = hash_concat(branch[i as usize].as_slice(), value.as_slice());
        } else {
            value = hash_concat(value.as_slice(), branch[i as usize].as_slice());
        }
    }
    value == root
}

pub fn is_valid_normalized_merkle_branch(
    leaf: B256,
    branch: &[B256],
    generalized_index: u64,
    root: B256,
) -> bool {
    let depth = (generalized_index as f64).log2().floor() as u64;
    let index = get_subtree_index(generalized_index);
    let num_extra = branch.len() - depth as usize;
    for node in branch[..num_extra].iter() {
        if *node != B256::ZERO {
            return false;
        }
    }
    is_valid_merkle_branch(leaf, &branch[num_extra..], depth, index, root)
}
