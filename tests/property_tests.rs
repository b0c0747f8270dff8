use std::collections::HashMap;

use prefixcode::{FrequencyTable, NodeInfo, Tree};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_roundtrip(text in prop::collection::vec(any::<u8>(), 1..500)) {
        let table = FrequencyTable::count(text.iter().copied());
        let tree = Tree::build(&table).unwrap();
        let (encoder, decoder) = tree.into_encoder_decoder_pair();

        let bits = encoder.encode(text.iter().copied()).unwrap();
        prop_assert_eq!(decoder.decode(&bits).unwrap(), text);
    }

    #[test]
    fn test_codes_are_prefix_free(text in prop::collection::vec(any::<u8>(), 1..500)) {
        let table = FrequencyTable::count(text.iter().copied());
        let tree = Tree::build(&table).unwrap();
        let codes: Vec<_> = tree.codes().into_values().collect();

        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a));
                }
            }
        }
    }

    #[test]
    fn test_weight_invariant(text in prop::collection::vec(any::<u8>(), 1..500)) {
        let table = FrequencyTable::count(text.iter().copied());
        let tree = Tree::build(&table).unwrap();

        prop_assert_eq!(tree.total_weight(), text.len() as u64);

        let nodes = tree.nodes();
        let by_id: HashMap<u32, &NodeInfo> = nodes.iter().map(|n| (n.id, n)).collect();
        for node in &nodes {
            if let (Some(left), Some(right)) = (node.left, node.right) {
                prop_assert_eq!(node.weight, by_id[&left].weight + by_id[&right].weight);
            }
        }
    }
}
