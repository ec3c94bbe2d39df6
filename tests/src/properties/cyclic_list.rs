//! # CyclicList Properties
//!
//! Wrapped lookups agree with `items[position mod len]` for any position.

#[cfg(test)]
mod tests {
    use cyclic_int::CyclicList;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn get_matches_modulo(base in prop::collection::vec(any::<i32>(), 1..64), position in any::<isize>()) {
            let list = CyclicList::from(base.clone());
            let len = base.len() as isize;
            let expected = &base[position.rem_euclid(len) as usize];

            prop_assert_eq!(list.get(position), Some(expected));
            prop_assert_eq!(&list[position], expected);
        }

        #[test]
        fn cursor_lookup_matches_position(base in prop::collection::vec(any::<u8>(), 1..32), start in -1_000isize..1_000, step in -1_000i64..1_000) {
            let list = CyclicList::from(base);
            let mut cursor = list.cursor(start).unwrap();
            cursor += step;

            let position = start as i64 + step;
            prop_assert_eq!(list.get_cyclic(&cursor), list.get(position as isize));
        }

        #[test]
        fn set_then_get_round_trips(base in prop::collection::vec(any::<i32>(), 1..32), position in -500isize..500, value in any::<i32>()) {
            let mut list = CyclicList::from(base.clone());
            let previous = list.set(position, value).unwrap();

            prop_assert_eq!(previous, base[position.rem_euclid(base.len() as isize) as usize]);
            prop_assert_eq!(list[position], value);
            prop_assert_eq!(list.len(), base.len());
        }
    }
}
