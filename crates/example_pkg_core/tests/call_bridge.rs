use example_pkg_core::{module, ArgumentDecodeError, CallError, Value};

fn call(name: &str, args: &[Value]) -> (Result<Value, CallError>, String) {
    let mut out = Vec::new();
    let result = module().call_with_output(name, args, &mut out);
    let printed = String::from_utf8(out).expect("output should be UTF-8");
    (result, printed)
}

fn decode_error(result: Result<Value, CallError>) -> ArgumentDecodeError {
    match result {
        Err(CallError::Decode(err)) => err,
        other => panic!("expected argument decode error, got {other:?}"),
    }
}

#[test]
fn echo_hello_prints_and_returns_42() {
    let (result, printed) = call("echo", &[Value::from("hello")]);
    assert_eq!(result.expect("echo should succeed"), Value::Int(42));
    assert_eq!(printed, "hello\n");
}

#[test]
fn echo_writes_exactly_message_and_newline_for_varied_strings() {
    for message in ["", " ", "multi\nline", "tab\tand spaces  ", "日本語", "42"] {
        let (result, printed) = call("echo", &[Value::from(message)]);
        assert_eq!(result.expect("echo should succeed"), Value::Int(42));
        assert_eq!(printed, format!("{message}\n"));
    }
}

#[test]
fn echo_rejects_wrong_arity() {
    let (result, printed) = call("echo", &[]);
    let err = decode_error(result);
    assert_eq!(err.to_string(), "echo() takes exactly 1 argument (0 given)");
    assert!(printed.is_empty());

    let (result, printed) = call("echo", &[Value::from("a"), Value::from("b")]);
    let err = decode_error(result);
    assert!(matches!(err, ArgumentDecodeError::Arity { given: 2, .. }));
    assert!(printed.is_empty());
}

#[test]
fn echo_rejects_non_string_argument() {
    let (result, printed) = call("echo", &[Value::Int(5)]);
    let err = decode_error(result);
    assert_eq!(err.to_string(), "echo() argument 1 must be str, not int");
    assert!(printed.is_empty());

    for value in [Value::None, Value::Float(1.0), Value::Bytes(b"x".to_vec())] {
        let (result, _) = call("echo", &[value]);
        assert!(matches!(
            decode_error(result),
            ArgumentDecodeError::Type { .. }
        ));
    }
}

#[test]
fn sum_scenarios() {
    let (result, _) = call("example_sum", &[Value::Int(2), Value::Int(3)]);
    assert_eq!(result.expect("sum"), Value::Int(5));

    let (result, _) = call("example_sum", &[Value::Int(-7), Value::Int(7)]);
    assert_eq!(result.expect("sum"), Value::Int(0));

    let (result, _) = call("example_sum", &[Value::Bool(true), Value::Int(2)]);
    assert_eq!(result.expect("bool counts as int"), Value::Int(3));
}

#[test]
fn sum_wraps_at_c_int_width() {
    let max = Value::Int(i64::from(i32::MAX));
    let (result, _) = call("example_sum", &[max, Value::Int(1)]);
    assert_eq!(result.expect("sum"), Value::Int(i64::from(i32::MIN)));
}

#[test]
fn sum_rejects_wrong_arity_and_types() {
    let (result, _) = call("example_sum", &[Value::Int(1)]);
    assert!(matches!(
        decode_error(result),
        ArgumentDecodeError::Arity {
            expected: 2,
            given: 1,
            ..
        }
    ));

    let (result, _) = call(
        "example_sum",
        &[Value::Int(1), Value::Int(2), Value::Int(3)],
    );
    assert!(matches!(
        decode_error(result),
        ArgumentDecodeError::Arity { given: 3, .. }
    ));

    let (result, _) = call("example_sum", &[Value::from("2"), Value::Int(3)]);
    assert_eq!(
        decode_error(result).to_string(),
        "example_sum() argument 1 must be int, not str"
    );

    let (result, _) = call("example_sum", &[Value::Int(2), Value::Float(3.0)]);
    assert!(matches!(
        decode_error(result),
        ArgumentDecodeError::Type { position: 2, .. }
    ));
}

#[test]
fn sum_rejects_values_beyond_native_width() {
    let (result, _) = call("example_sum", &[Value::Int(1_i64 << 32), Value::Int(0)]);
    assert!(matches!(
        decode_error(result),
        ArgumentDecodeError::OutOfRange {
            position: 1,
            value: 4_294_967_296,
            ..
        }
    ));
}

#[test]
fn calls_are_independent_and_repeatable() {
    for _ in 0..3 {
        let (result, printed) = call("echo", &[Value::from("again")]);
        assert_eq!(result.expect("echo"), Value::Int(42));
        assert_eq!(printed, "again\n");
        let (result, _) = call("example_sum", &[Value::Int(20), Value::Int(22)]);
        assert_eq!(result.expect("sum"), Value::Int(42));
    }
}

#[test]
fn unknown_function_is_reported_by_name() {
    let (result, _) = call("missing", &[]);
    let err = result.expect_err("unknown function must fail");
    assert_eq!(err.code(), "unknown_function");
}

#[test]
fn stdout_call_returns_42() {
    let value = module()
        .call("echo", &[Value::from("stdout smoke")])
        .expect("echo to stdout");
    assert_eq!(value, Value::Int(42));
}

#[test]
fn typed_helpers_match_table_behaviour() {
    assert_eq!(example_pkg_core::echo("typed stdout smoke").expect("echo"), 42);
    assert_eq!(example_pkg_core::example_sum(2, 3), 5);
}
