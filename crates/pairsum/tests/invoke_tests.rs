// Validation coverage for the dynamic entry points
use pairsum::error::type_name;
use pairsum::*;
use pretty_assertions::assert_eq;

fn pair_value(i: usize, j: usize) -> Value {
    Value::vec(vec![Value::Usize(i), Value::Usize(j)])
}

// ═══════════════════════════════════════════════════════════════════════
// Successful Calls
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_args_documented_cases() {
    let cases: Vec<(Vec<i64>, i64, Value)> = vec![
        (vec![], 7, Value::vec(vec![])),
        (vec![5], 10, Value::vec(vec![])),
        (vec![2, 7, 11, 15], 9, pair_value(0, 1)),
        (vec![3, 2, 4], 6, pair_value(1, 2)),
        (vec![3, 3], 6, pair_value(0, 1)),
    ];

    for (seq, target, expected) in cases {
        let out = find_pair_args(&[Value::ints(&seq), Value::I64(target)]);
        assert_eq!(out, Ok(expected));
    }
}

#[test]
fn test_tuple_and_array_sequences() {
    let tuple = Value::tuple(vec![Value::I32(1), Value::I32(9)]);
    let array = Value::array(vec![Value::U16(4), Value::U16(6)]);
    assert_eq!(
        find_pair_value(&tuple, &Value::I32(10)),
        Ok(Some(Pair::new(0, 1)))
    );
    assert_eq!(
        find_pair_value(&array, &Value::U16(10)),
        Ok(Some(Pair::new(0, 1)))
    );
}

#[test]
fn test_wide_values_beyond_i64() {
    let seq = Value::vec(vec![Value::U64(u64::MAX), Value::U64(u64::MAX)]);
    let target = Value::I128(2 * u64::MAX as i128);
    assert_eq!(find_pair_value(&seq, &target), Ok(Some(Pair::new(0, 1))));
}

#[test]
fn test_result_renders_like_a_list() {
    let out = find_pair_args(&[Value::ints(&[2, 7]), Value::I64(9)]);
    assert_eq!(out.map(|v| v.to_string()), Ok("[0, 1]".to_string()));
}

#[test]
fn test_result_indices_address_the_input() {
    let seq = vec![8i64, -3, 5, 11];
    let out = find_pair_args(&[Value::ints(&seq), Value::I64(16)]).unwrap();
    assert!(out.is_sequence());

    let indices: Vec<usize> = out
        .as_slice()
        .unwrap()
        .iter()
        .map(|v| v.as_usize().unwrap())
        .collect();
    assert_eq!(indices, vec![2, 3]);
    assert_eq!(seq[indices[0]] + seq[indices[1]], 16);
}

// ═══════════════════════════════════════════════════════════════════════
// Rejected Calls
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_arity_errors() {
    for args in [
        vec![],
        vec![Value::ints(&[1, 2])],
        vec![Value::ints(&[1, 2]), Value::I64(3), Value::I64(4)],
    ] {
        let got = args.len();
        assert_eq!(
            find_pair_args(&args),
            Err(PairSumError::ArityError { expected: 2, got })
        );
    }
}

#[test]
fn test_non_sequence_inputs() {
    for bad in [Value::Unit, Value::string("1,2"), Value::Bool(true)] {
        let err = find_pair_value(&bad, &Value::I64(0)).unwrap_err();
        assert_eq!(
            err,
            PairSumError::TypeError {
                expected: "sequence of integers".to_string(),
                got: type_name(&bad).to_string(),
            }
        );
    }
}

#[test]
fn test_non_integer_element_reports_position() {
    let seq = Value::vec(vec![Value::I64(1), Value::I64(2), Value::string("3")]);
    let err = find_pair_value(&seq, &Value::I64(3)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Type error: expected integer for element 2, got String"
    );
}

#[test]
fn test_nested_sequence_element_rejected() {
    let seq = Value::vec(vec![Value::ints(&[1]), Value::I64(2)]);
    assert!(matches!(
        find_pair_value(&seq, &Value::I64(3)),
        Err(PairSumError::TypeError { .. })
    ));
}

#[test]
fn test_validation_happens_before_scan() {
    // The pair (0, 1) exists, but the bad element after it still fails the call
    let seq = Value::vec(vec![Value::I64(1), Value::I64(2), Value::F32(0.5)]);
    assert!(find_pair_value(&seq, &Value::I64(3)).is_err());
}

#[test]
fn test_bad_target() {
    let seq = Value::ints(&[1, 2]);
    let err = find_pair_value(&seq, &Value::F64(3.0)).unwrap_err();
    assert_eq!(
        err,
        PairSumError::TypeError {
            expected: "integer for target".to_string(),
            got: "f64".to_string(),
        }
    );
}

#[test]
fn test_out_of_range_target() {
    let seq = Value::ints(&[1, 2]);
    let err = find_pair_value(&seq, &Value::U128(u128::MAX)).unwrap_err();
    assert!(err.to_string().starts_with("Value error: target"));
}
