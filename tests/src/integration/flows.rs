//! # Integration Flows
//!
//! Scenarios that combine the pieces of `cyclic-int`:
//!
//! 1. **Clock arithmetic**: a 24-hour clock loaded from configuration
//! 2. **Ring buffer walk**: a cursor stepping around a `CyclicList`
//! 3. **Rejected operands**: failures leave state untouched, with logging on

#[cfg(test)]
mod tests {
    use crate::init_tracing;
    use cyclic_int::{CyclicInt, CyclicIntError, CyclicList, Interval, IntervalConfig};
    use std::collections::HashMap;

    // =========================================================================
    // CLOCK ARITHMETIC
    // =========================================================================

    #[test]
    fn test_clock_from_config() {
        let hours: Interval = serde_json::from_str(r#"{ "right": 24 }"#).unwrap();
        let mut now = CyclicInt::in_interval(22, hours).unwrap();

        now += 5;
        assert_eq!(now, 3);

        let shift_start = now - 8;
        assert_eq!(shift_start, 19);
        assert_eq!(now, 3);

        // hours until midnight
        assert_eq!(24 - now, 21);
    }

    #[test]
    fn test_invalid_config_never_builds_interval() {
        let raw: IntervalConfig = serde_json::from_str(r#"{ "left": 10, "right": 5 }"#).unwrap();
        assert_eq!(
            Interval::try_from(raw),
            Err(CyclicIntError::InvalidInterval { left: 10, right: 5 })
        );
    }

    #[test]
    fn test_signed_interval_walk() {
        let _span = tracing::info_span!("signed_interval_walk").entered();
        init_tracing();

        // [-1, 2): span 3
        let mut x = CyclicInt::with_bounds(0, -1, 2).unwrap();
        x += 1;
        assert_eq!(x, 1);
        x += 2;
        assert_eq!(x, 0);
        x -= 2;
        assert_eq!(x, 1);
        assert_eq!(-x, -1);
    }

    #[test]
    fn test_cyclic_keys_interchangeable_with_integers() {
        let mut names: HashMap<CyclicInt, &str> = HashMap::new();
        names.insert(CyclicInt::new(3, 10).unwrap(), "three");
        names.insert(CyclicInt::new(13, 100).unwrap(), "thirteen");

        assert_eq!(names.get(&3i64), Some(&"three"));
        assert_eq!(names.get(&CyclicInt::new(23, 10).unwrap()), Some(&"three"));
        assert_eq!(names.get(&13i64), Some(&"thirteen"));
        assert_eq!(names.get(&4i64), None);
    }

    // =========================================================================
    // RING BUFFER WALK
    // =========================================================================

    #[test]
    fn test_round_robin_over_list() {
        let workers: CyclicList<&str> = vec!["a", "b", "c"].into();
        let mut cursor = workers.cursor(0).unwrap();

        let mut order = Vec::new();
        for _ in 0..7 {
            order.push(*workers.get_cyclic(&cursor).unwrap());
            cursor += 1;
        }
        assert_eq!(order, vec!["a", "b", "c", "a", "b", "c", "a"]);

        cursor -= 2;
        assert_eq!(workers[cursor.value() as isize], "c");
        assert_eq!(workers.as_slice()[cursor.as_index().unwrap()], "c");
    }

    #[test]
    fn test_list_edit_keeps_wrapping() {
        let mut ring: CyclicList<i32> = (1..=4).collect();
        ring.insert(-1, 99);
        assert_eq!(ring, vec![1, 2, 3, 99, 4]);

        assert_eq!(ring.remove(7), Some(3));
        ring[-1] = 40;
        assert_eq!(ring.into_vec(), vec![1, 2, 99, 40]);
    }

    // =========================================================================
    // REJECTED OPERANDS
    // =========================================================================

    #[test]
    fn test_rejections_leave_state_untouched() {
        init_tracing();

        let mut x = CyclicInt::new(4, 5).unwrap();
        let y = CyclicInt::new(4, 5).unwrap();

        assert_eq!(
            x.try_add_assign(y).unwrap_err(),
            CyclicIntError::UnsupportedOperand { operation: "add" }
        );
        assert!(matches!(
            x.try_sub_assign(u128::MAX),
            Err(CyclicIntError::Coercion(_))
        ));
        assert_eq!(x, 4);

        assert!(CyclicInt::with_bounds(0, 3, 3).is_err());
        assert!(CyclicList::<i32>::new().cursor(0).is_err());
    }
}
