//! Property-based tests for the multi-index enumeration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::multi_index::cmp_graded_lex;
    use crate::ordering::IndexSpace;

    // Strategy for a space plus a valid position inside it.
    fn space_and_position() -> impl Strategy<Value = (IndexSpace, usize)> {
        (1usize..=5, 0u32..=6).prop_flat_map(|(dimension, degree)| {
            let space = IndexSpace::new(dimension, degree);
            let count = space.count();
            (Just(space), 0..count)
        })
    }

    proptest! {
        #[test]
        fn position_roundtrip((space, position) in space_and_position()) {
            let index = space.multi_index_of(position).unwrap();
            prop_assert_eq!(space.position_of(&index).unwrap(), position);
        }

        #[test]
        fn enumeration_respects_degree_bound((space, position) in space_and_position()) {
            let index = space.multi_index_of(position).unwrap();
            prop_assert!(index.total_degree() <= space.degree());
            prop_assert_eq!(index.len(), space.dimension());
        }

        #[test]
        fn enumeration_is_strictly_increasing(
            (space, position) in space_and_position()
        ) {
            prop_assume!(position + 1 < space.count());
            let here = space.multi_index_of(position).unwrap();
            let next = space.multi_index_of(position + 1).unwrap();
            prop_assert_eq!(cmp_graded_lex(&here, &next), std::cmp::Ordering::Less);
        }
    }
}
