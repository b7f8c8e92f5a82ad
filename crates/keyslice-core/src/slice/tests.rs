use crate::{
    slice::{
        BoundingMode, CompareOp, ComponentEquality, ComponentPredicate, Direction, EqualityPair,
        KeyTuple, MarkerRange, PartitionKeyError, RangeIndices, RangePredicate, RangeShapeError,
        SliceQuery, SliceQueryError, TupleSide, boundary_components, fixed_components,
        resolve_slice, validate_range,
    },
    value::{ComponentTypeError, Value, ValueEnum},
};
use keyslice_primitives::ComponentKind;
use proptest::prelude::*;

// ---- helpers -----------------------------------------------------------

fn query(start: KeyTuple, end: KeyTuple, order: Direction) -> SliceQuery {
    SliceQuery::builder(start, end)
        .order(order)
        .build()
        .expect("well-formed slice query")
}

fn int(v: i64) -> Value {
    Value::Int(v)
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

// ---- validation --------------------------------------------------------

#[test]
fn accepts_ascending_single_component_range() {
    let q = query(
        key_tuple!("id"; 11_i64, "a"),
        key_tuple!("id"; 11_i64, "b"),
        Direction::Asc,
    );

    assert_eq!(validate_range(&q), Ok(RangeIndices { start: 1, end: 1 }));
}

#[test]
fn missing_partition_component_is_a_partition_error() {
    let q = query(
        key_tuple!("id"; null, "a"),
        key_tuple!("id"; 11_i64, "b"),
        Direction::Asc,
    );

    assert_eq!(
        validate_range(&q),
        Err(SliceQueryError::PartitionKey(PartitionKeyError::Missing {
            side: TupleSide::Start,
            index: 0,
        }))
    );
}

#[test]
fn differing_partition_component_is_a_partition_error() {
    let q = query(
        key_tuple!("id"; 11_i64, "a"),
        key_tuple!("id"; 12_i64, "b"),
        Direction::Asc,
    );

    assert_eq!(
        validate_range(&q),
        Err(SliceQueryError::PartitionKey(PartitionKeyError::Mismatch {
            index: 0
        }))
    );
}

#[test]
fn multi_component_partition_must_be_fully_set() {
    let q = SliceQuery::builder(
        key_tuple!("id"; 1_i64, 2_i64, "a"),
        key_tuple!("id"; 1_i64, null, null),
    )
    .partition_len(2)
    .build()
    .expect("well-formed slice query");

    assert_eq!(
        validate_range(&q),
        Err(SliceQueryError::PartitionKey(PartitionKeyError::Missing {
            side: TupleSide::End,
            index: 1,
        }))
    );
}

#[test]
fn hole_in_clustering_components_is_rejected() {
    let q = query(
        key_tuple!("id"; 11_i64, null, 3_i64),
        key_tuple!("id"; 11_i64, 2_i64, 3_i64),
        Direction::Asc,
    );

    assert_eq!(
        validate_range(&q),
        Err(SliceQueryError::HoleInKeyTuple {
            owner: "id".to_string(),
            index: 2,
        })
    );
}

#[test]
fn more_than_one_component_of_difference_is_rejected() {
    let q = query(
        key_tuple!("id"; 11_i64, null, null),
        key_tuple!("id"; 11_i64, 2_i64, 3_i64),
        Direction::Asc,
    );

    let err = validate_range(&q).unwrap_err();
    assert_eq!(
        err,
        SliceQueryError::RangeShape(RangeShapeError::ComponentCountDivergence { start: 0, end: 2 })
    );
    assert!(err.to_string().starts_with(
        "no more than one component of difference is allowed between the start and end of a range"
    ));
}

#[test]
fn clustering_prefix_must_match_before_the_last_component() {
    let q = query(
        key_tuple!("id"; 11_i64, 1_i64, 5_i64),
        key_tuple!("id"; 11_i64, 2_i64, 6_i64),
        Direction::Asc,
    );

    let err = validate_range(&q).unwrap_err();
    assert_eq!(
        err,
        SliceQueryError::RangeShape(RangeShapeError::PrefixMismatch { index: 1 })
    );
    assert_eq!(
        err.to_string(),
        "component 1 must be identical between start and end"
    );
}

#[test]
fn prefix_mismatch_is_detected_when_lengths_differ_by_one() {
    let q = query(
        key_tuple!("id"; 11_i64, 1_i64, null),
        key_tuple!("id"; 11_i64, 2_i64, 6_i64),
        Direction::Asc,
    );

    assert_eq!(
        validate_range(&q),
        Err(SliceQueryError::RangeShape(RangeShapeError::PrefixMismatch {
            index: 1
        }))
    );
}

#[test]
fn ascending_requires_start_not_after_end() {
    let q = query(
        key_tuple!("id"; 11_i64, 15_i64),
        key_tuple!("id"; 11_i64, 12_i64),
        Direction::Asc,
    );

    assert_eq!(
        validate_range(&q),
        Err(SliceQueryError::Ordering {
            index: 1,
            direction: Direction::Asc,
        })
    );
}

#[test]
fn descending_accepts_start_after_end() {
    let q = query(
        key_tuple!("id"; 11_i64, 15_i64),
        key_tuple!("id"; 11_i64, 12_i64),
        Direction::Desc,
    );

    assert_eq!(validate_range(&q), Ok(RangeIndices { start: 1, end: 1 }));
}

#[test]
fn descending_rejects_start_before_end() {
    let q = query(
        key_tuple!("id"; 11_i64, 12_i64),
        key_tuple!("id"; 11_i64, 15_i64),
        Direction::Desc,
    );

    assert_eq!(
        validate_range(&q),
        Err(SliceQueryError::Ordering {
            index: 1,
            direction: Direction::Desc,
        })
    );
}

#[test]
fn unorderable_trailing_component_is_a_type_error() {
    let start = KeyTuple::new("id", vec![Some(int(11)), Some(Value::List(vec![int(1)]))]);
    let end = KeyTuple::new("id", vec![Some(int(11)), Some(Value::List(vec![int(2)]))]);
    let q = query(start, end, Direction::Asc);

    assert_eq!(
        validate_range(&q),
        Err(SliceQueryError::ComponentType(ComponentTypeError::Unordered {
            kind: ComponentKind::List,
        }))
    );
}

#[test]
fn mixed_kind_trailing_component_is_a_type_error() {
    let q = query(
        key_tuple!("id"; 11_i64, 1_i64),
        key_tuple!("id"; 11_i64, "z"),
        Direction::Asc,
    );

    assert!(matches!(
        validate_range(&q),
        Err(SliceQueryError::ComponentType(
            ComponentTypeError::KindMismatch { .. }
        ))
    ));
}

#[test]
fn unorderable_partition_component_still_allows_equality_lookup() {
    let tags = Value::List(vec![int(1)]);
    let tuple = || KeyTuple::new("id", vec![Some(int(11)), Some(tags.clone())]);
    let q = SliceQuery::builder(tuple(), tuple())
        .partition_len(2)
        .build()
        .expect("well-formed slice query");

    let range = resolve_slice(&q).expect("partition-only lookup");
    assert_eq!(range.fixed(), &[int(11), tags]);
    assert!(range.is_equality_lookup());
}

#[test]
fn unorderable_lone_end_bound_is_a_type_error() {
    let q = query(
        KeyTuple::new("id", vec![Some(int(11)), None]),
        KeyTuple::new("id", vec![Some(int(11)), Some(Value::List(vec![int(1)]))]),
        Direction::Asc,
    );

    assert_eq!(
        validate_range(&q),
        Err(SliceQueryError::ComponentType(ComponentTypeError::Unordered {
            kind: ComponentKind::List,
        }))
    );
}

#[test]
fn unorderable_lone_start_bound_is_a_type_error() {
    let q = query(
        KeyTuple::new("id", vec![Some(int(11)), Some(Value::List(vec![int(1)]))]),
        KeyTuple::new("id", vec![Some(int(11)), None]),
        Direction::Desc,
    );

    assert!(matches!(
        resolve_slice(&q),
        Err(SliceQueryError::ComponentType(
            ComponentTypeError::Unordered { .. }
        ))
    ));
}

// ---- resolution --------------------------------------------------------

#[test]
fn single_bounded_component_splits_prefix_and_bounds() {
    let q = query(
        key_tuple!("id"; 11_i64, 12_i32),
        key_tuple!("id"; 11_i64, 13_i32),
        Direction::Asc,
    );
    let range = resolve_slice(&q).expect("valid slice");

    assert_eq!(range.fixed(), &[int(11)]);
    assert_eq!(range.last_start(), Some(&int(12)));
    assert_eq!(range.last_end(), Some(&int(13)));
    assert_eq!(range.boundary_position(), 1);
    assert!(!range.is_equality_lookup());
}

#[test]
fn identical_tuples_degenerate_to_equality_lookup() {
    let q = query(
        key_tuple!("id"; 11_i64, 12_i64),
        key_tuple!("id"; 11_i64, 12_i64),
        Direction::Asc,
    );
    let range = resolve_slice(&q).expect("valid slice");

    assert_eq!(range.fixed(), &[int(11), int(12)]);
    assert_eq!(range.last_start(), None);
    assert_eq!(range.last_end(), None);
    assert!(range.is_equality_lookup());
}

#[test]
fn shorter_start_is_open_below() {
    let q = query(
        key_tuple!("id"; 11_i64, "a", null),
        key_tuple!("id"; 11_i64, "a", 7_i64),
        Direction::Asc,
    );
    let indices = validate_range(&q).expect("valid slice");

    assert_eq!(indices, RangeIndices { start: 1, end: 2 });
    assert_eq!(fixed_components(&q, indices), vec![int(11), text("a")]);
    assert_eq!(boundary_components(&q, indices), (None, Some(int(7))));
}

#[test]
fn shorter_end_is_open_above() {
    let q = query(
        key_tuple!("id"; 11_i64, "a", 7_i64),
        key_tuple!("id"; 11_i64, "a", null),
        Direction::Asc,
    );
    let indices = validate_range(&q).expect("valid slice");

    assert_eq!(indices, RangeIndices { start: 2, end: 1 });
    assert_eq!(fixed_components(&q, indices), vec![int(11), text("a")]);
    assert_eq!(boundary_components(&q, indices), (Some(int(7)), None));
}

#[test]
fn partition_only_bounds_open_the_whole_partition_side() {
    let q = query(
        key_tuple!("id"; 11_i64, null),
        key_tuple!("id"; 11_i64, 9_i64),
        Direction::Asc,
    );
    let range = resolve_slice(&q).expect("valid slice");

    assert_eq!(range.fixed(), &[int(11)]);
    assert_eq!(range.last_start(), None);
    assert_eq!(range.last_end(), Some(&int(9)));
}

#[test]
fn loose_and_typed_enums_with_same_label_share_the_prefix() {
    let typed = Value::Enum(ValueEnum::new("Open", Some("Status")));
    let loose = Value::Enum(ValueEnum::loose("Open"));
    let start = KeyTuple::new("id", vec![Some(int(1)), Some(typed.clone()), Some(int(3))]);
    let end = KeyTuple::new("id", vec![Some(int(1)), Some(loose), Some(int(4))]);
    let range = resolve_slice(&query(start, end, Direction::Asc)).expect("valid slice");

    assert_eq!(range.fixed(), &[int(1), typed]);
    assert_eq!(range.boundary_position(), 2);
    assert_eq!(range.last_start(), Some(&int(3)));
}

// ---- equality-mode table -----------------------------------------------

#[test]
fn equality_table_matches_every_row() {
    use ComponentEquality::{Equal, GreaterOrEqual, LessOrEqual};

    let rows = [
        (BoundingMode::InclusiveBounds, (Equal, GreaterOrEqual), (GreaterOrEqual, Equal)),
        (
            BoundingMode::ExclusiveBounds,
            (GreaterOrEqual, LessOrEqual),
            (LessOrEqual, GreaterOrEqual),
        ),
        (
            BoundingMode::InclusiveStartOnly,
            (Equal, LessOrEqual),
            (GreaterOrEqual, GreaterOrEqual),
        ),
        (
            BoundingMode::InclusiveEndOnly,
            (GreaterOrEqual, GreaterOrEqual),
            (LessOrEqual, Equal),
        ),
    ];

    for (bounding, (asc_start, asc_end), (desc_start, desc_end)) in rows {
        assert_eq!(
            EqualityPair::resolve(bounding, Direction::Asc),
            EqualityPair::new(asc_start, asc_end),
            "{bounding:?} ascending"
        );
        assert_eq!(
            EqualityPair::resolve(bounding, Direction::Desc),
            EqualityPair::new(desc_start, desc_end),
            "{bounding:?} descending"
        );
    }
}

#[test]
fn descending_pair_is_mirrored_ascending_pair_swapped() {
    for bounding in BoundingMode::ALL {
        assert_eq!(
            EqualityPair::resolve(bounding, Direction::Desc),
            EqualityPair::resolve(bounding.mirrored(), Direction::Asc).swapped(),
            "{bounding:?}"
        );
    }
}

#[test]
fn mode_enums_serialize_by_variant_name() {
    let json = serde_json::to_string(&(BoundingMode::InclusiveStartOnly, Direction::Desc))
        .expect("serialize modes");
    assert_eq!(json, r#"["InclusiveStartOnly","Desc"]"#);

    let pair: EqualityPair =
        serde_json::from_str(r#"{"start":"Equal","end":"LessOrEqual"}"#).expect("deserialize");
    assert_eq!(
        pair,
        EqualityPair::resolve(BoundingMode::InclusiveStartOnly, Direction::Asc)
    );
}

// ---- adapters ----------------------------------------------------------

#[test]
fn marker_range_appends_boundaries_to_the_fixed_prefix() {
    let q = SliceQuery::builder(
        key_tuple!("id"; 11_i64, 12_i64),
        key_tuple!("id"; 11_i64, 13_i64),
    )
    .bounding(BoundingMode::ExclusiveBounds)
    .limit(10)
    .build()
    .expect("well-formed slice query");
    let range = resolve_slice(&q).expect("valid slice");
    let markers = MarkerRange::from_resolved(&range, &q);

    assert_eq!(markers.start.components, vec![int(11), int(12)]);
    assert_eq!(markers.start.equality, ComponentEquality::GreaterOrEqual);
    assert_eq!(markers.end.components, vec![int(11), int(13)]);
    assert_eq!(markers.end.equality, ComponentEquality::LessOrEqual);
    assert!(!markers.reversed);
    assert_eq!(markers.limit, 10);
}

#[test]
fn marker_range_for_open_start_uses_prefix_only() {
    let q = SliceQuery::builder(
        key_tuple!("id"; 11_i64, null),
        key_tuple!("id"; 11_i64, 13_i64),
    )
    .order(Direction::Desc)
    .build()
    .expect("well-formed slice query");
    let range = resolve_slice(&q).expect("valid slice");
    let markers = MarkerRange::from_resolved(&range, &q);

    assert_eq!(markers.start.components, vec![int(11)]);
    assert_eq!(markers.end.components, vec![int(11), int(13)]);
    assert!(markers.reversed);
}

#[test]
fn range_predicate_ascending_inclusive() {
    let q = query(
        key_tuple!("id"; 11_i64, 12_i64),
        key_tuple!("id"; 11_i64, 13_i64),
        Direction::Asc,
    );
    let range = resolve_slice(&q).expect("valid slice");
    let predicate =
        RangePredicate::from_resolved(&range, &q, &["user_id", "seq"]).expect("columns cover key");

    assert_eq!(
        predicate.predicates,
        vec![
            ComponentPredicate {
                column: "user_id".to_string(),
                op: CompareOp::Eq,
                value: int(11),
            },
            ComponentPredicate {
                column: "seq".to_string(),
                op: CompareOp::Gte,
                value: int(12),
            },
            ComponentPredicate {
                column: "seq".to_string(),
                op: CompareOp::Lte,
                value: int(13),
            },
        ]
    );
    assert_eq!(predicate.order, Direction::Asc);
}

#[test]
fn range_predicate_descending_puts_start_on_the_upper_side() {
    let q = SliceQuery::builder(
        key_tuple!("id"; 11_i64, 15_i64),
        key_tuple!("id"; 11_i64, 12_i64),
    )
    .order(Direction::Desc)
    .bounding(BoundingMode::InclusiveStartOnly)
    .build()
    .expect("well-formed slice query");
    let range = resolve_slice(&q).expect("valid slice");
    let predicate =
        RangePredicate::from_resolved(&range, &q, &["user_id", "seq"]).expect("columns cover key");

    let ops: Vec<_> = predicate
        .predicates
        .iter()
        .map(|p| (p.op, p.value.clone()))
        .collect();
    assert_eq!(
        ops,
        vec![
            (CompareOp::Eq, int(11)),
            (CompareOp::Lte, int(15)),
            (CompareOp::Gt, int(12)),
        ]
    );
}

#[test]
fn range_predicate_for_equality_lookup_has_no_comparisons() {
    let q = query(
        key_tuple!("id"; 11_i64, 12_i64),
        key_tuple!("id"; 11_i64, 12_i64),
        Direction::Asc,
    );
    let range = resolve_slice(&q).expect("valid slice");
    let predicate =
        RangePredicate::from_resolved(&range, &q, &["user_id", "seq"]).expect("columns cover key");

    assert!(predicate.predicates.iter().all(|p| p.op == CompareOp::Eq));
    assert_eq!(predicate.predicates.len(), 2);
}

#[test]
fn range_predicate_requires_a_column_per_used_position() {
    let q = query(
        key_tuple!("id"; 11_i64, 12_i64),
        key_tuple!("id"; 11_i64, 13_i64),
        Direction::Asc,
    );
    let range = resolve_slice(&q).expect("valid slice");

    assert_eq!(
        RangePredicate::from_resolved(&range, &q, &["user_id"]),
        Err(crate::slice::AdapterError::MissingColumn {
            position: 1,
            available: 1,
        })
    );
}

// ---- properties --------------------------------------------------------

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Asc), Just(Direction::Desc)]
}

fn arb_bounding() -> impl Strategy<Value = BoundingMode> {
    prop_oneof![
        Just(BoundingMode::InclusiveBounds),
        Just(BoundingMode::ExclusiveBounds),
        Just(BoundingMode::InclusiveStartOnly),
        Just(BoundingMode::InclusiveEndOnly),
    ]
}

// Tuples over a 3-component key (1 partition + 2 clustering), with a random
// number of trailing absent components.
fn arb_tuple() -> impl Strategy<Value = KeyTuple> {
    (0_i64..3, 0_i64..3, 0_usize..3).prop_map(|(a, b, absent)| {
        let mut components = vec![Some(int(11)), Some(int(a)), Some(int(b))];
        for slot in components.iter_mut().rev().take(absent) {
            *slot = None;
        }
        KeyTuple::new("id", components)
    })
}

proptest! {
    #[test]
    fn resolution_is_idempotent(
        start in arb_tuple(),
        end in arb_tuple(),
        order in arb_direction(),
        bounding in arb_bounding(),
    ) {
        let q = SliceQuery::builder(start, end)
            .order(order)
            .bounding(bounding)
            .build()
            .expect("well-formed slice query");

        prop_assert_eq!(resolve_slice(&q), resolve_slice(&q));
    }

    #[test]
    fn resolved_ranges_bound_at_most_the_next_position(
        start in arb_tuple(),
        end in arb_tuple(),
        order in arb_direction(),
    ) {
        let q = query(start, end, order);

        if let Ok(range) = resolve_slice(&q) {
            let position = range.boundary_position();
            prop_assert!(position <= 3);
            prop_assert!(range.fixed().len() >= q.partition_len());

            if let Some(value) = range.last_start() {
                prop_assert_eq!(q.start().component(position), Some(value));
            }
            if let Some(value) = range.last_end() {
                prop_assert_eq!(q.end().component(position), Some(value));
            }
        }
    }
}
