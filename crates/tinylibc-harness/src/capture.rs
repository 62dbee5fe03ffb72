//! Fixture capture: record host libc behavior as reference data.
//!
//! Each family has a built-in input grid. Capturing runs the grid through
//! the execution adapter and stores the host output as the expected
//! output, so `verify` later replays the implementation against recorded
//! host behavior. Known impl/host divergences (the bare `0x` end-pointer
//! case) are excluded from the grids and covered by unit tests instead.

use serde_json::{Value, json};
use tinylibc_conformance::execute_fixture_case;

use crate::fixtures::{FixtureCase, FixtureSet};
use crate::HarnessError;

const FIXTURE_VERSION: &str = "v1";

struct GridCase {
    name: String,
    function: &'static str,
    spec_section: &'static str,
    inputs: Value,
}

fn grid(name: &str, function: &'static str, spec_section: &'static str, inputs: Value) -> GridCase {
    GridCase {
        name: name.to_string(),
        function,
        spec_section,
        inputs,
    }
}

fn string_grid() -> Vec<GridCase> {
    let overlap_buf: Vec<u8> = (0..13).collect();
    vec![
        grid(
            "memcmp_equal",
            "memcmp",
            "C17 7.24.4.1",
            json!({"a": [1, 2, 3], "b": [1, 2, 3], "n": 3}),
        ),
        grid(
            "memcmp_less",
            "memcmp",
            "C17 7.24.4.1",
            json!({"a": [1, 2, 3], "b": [1, 2, 4], "n": 3}),
        ),
        grid(
            "memcmp_greater_unsigned",
            "memcmp",
            "C17 7.24.4.1",
            json!({"a": [255], "b": [1], "n": 1}),
        ),
        grid(
            "memcmp_zero_length",
            "memcmp",
            "C17 7.24.4.1",
            json!({"a": [9], "b": [7], "n": 0}),
        ),
        grid(
            "memchr_found",
            "memchr",
            "C17 7.24.5.1",
            json!({"buf": [104, 101, 108, 108, 111], "c": 108, "n": 5}),
        ),
        grid(
            "memchr_missing",
            "memchr",
            "C17 7.24.5.1",
            json!({"buf": [104, 101, 108, 108, 111], "c": 122, "n": 5}),
        ),
        grid(
            "memchr_zero_length",
            "memchr",
            "C17 7.24.5.1",
            json!({"buf": [104], "c": 104, "n": 0}),
        ),
        grid(
            "memchr_bounded",
            "memchr",
            "C17 7.24.5.1",
            json!({"buf": [104, 101, 108, 108, 111], "c": 111, "n": 4}),
        ),
        grid(
            "memrchr_last_occurrence",
            "memrchr",
            "glibc memrchr(3)",
            json!({"buf": [104, 101, 108, 108, 111], "c": 108, "n": 5}),
        ),
        grid(
            "memmove_forward_overlap",
            "memmove",
            "C17 7.24.2.2",
            json!({"buf": &overlap_buf, "dest": 0, "src": 3, "n": 10}),
        ),
        grid(
            "memmove_backward_overlap",
            "memmove",
            "C17 7.24.2.2",
            json!({"buf": &overlap_buf, "dest": 3, "src": 0, "n": 10}),
        ),
        grid(
            "memmove_disjoint",
            "memmove",
            "C17 7.24.2.2",
            json!({"buf": [1, 1, 1, 1, 2, 2, 2, 2], "dest": 0, "src": 4, "n": 4}),
        ),
        grid(
            "strlen_basic",
            "strlen",
            "C17 7.24.6.3",
            json!({"s": [104, 101, 108, 108, 111, 0]}),
        ),
        grid(
            "strnlen_within_bound",
            "strnlen",
            "POSIX strnlen",
            json!({"s": [104, 105, 0], "n": 3}),
        ),
        grid(
            "strnlen_unterminated",
            "strnlen",
            "POSIX strnlen",
            json!({"s": [104, 105, 106], "n": 3}),
        ),
        grid(
            "strchr_found",
            "strchr",
            "C17 7.24.5.2",
            json!({"s": [104, 101, 108, 108, 111, 0], "c": 108}),
        ),
        grid(
            "strchr_terminator",
            "strchr",
            "C17 7.24.5.2",
            json!({"s": [104, 101, 108, 108, 111, 0], "c": 0}),
        ),
        grid(
            "strchr_missing",
            "strchr",
            "C17 7.24.5.2",
            json!({"s": [104, 101, 108, 108, 111, 0], "c": 122}),
        ),
        grid(
            "strrchr_last_occurrence",
            "strrchr",
            "C17 7.24.5.5",
            json!({"s": [104, 101, 108, 108, 111, 0], "c": 108}),
        ),
        grid(
            "strrchr_terminator",
            "strrchr",
            "C17 7.24.5.5",
            json!({"s": [104, 101, 108, 108, 111, 0], "c": 0}),
        ),
    ]
}

fn ctype_grid() -> Vec<GridCase> {
    // Boundary values adjacent to every classifier range, plus EOF.
    let probes: &[i32] = &[
        -1, 0, 8, 9, 10, 11, 12, 13, 14, 32, 47, 48, 57, 58, 64, 65, 90, 91, 96, 97, 122, 123,
        127, 128, 255,
    ];
    let mut cases = Vec::new();
    for function in ["isdigit", "isalpha", "isupper", "isspace"] {
        for &c in probes {
            cases.push(grid(
                &format!("{function}_{c}"),
                function,
                "C17 7.4.1",
                json!({"c": c}),
            ));
        }
    }
    cases
}

fn stdlib_grid() -> Vec<GridCase> {
    fn cstr(s: &str) -> Value {
        let mut bytes = s.as_bytes().to_vec();
        bytes.push(0);
        json!(bytes)
    }
    vec![
        grid(
            "strtoul_decimal",
            "strtoul",
            "C17 7.22.1.4",
            json!({"s": cstr("12345"), "base": 10}),
        ),
        grid(
            "strtoul_stops_at_non_digit",
            "strtoul",
            "C17 7.22.1.4",
            json!({"s": cstr("42abc"), "base": 10}),
        ),
        grid(
            "strtoul_whitespace_and_plus",
            "strtoul",
            "C17 7.22.1.4",
            json!({"s": cstr(" \t+99"), "base": 10}),
        ),
        grid(
            "strtoul_negated_hex_auto",
            "strtoul",
            "C17 7.22.1.4",
            json!({"s": cstr("  -0x1F"), "base": 0}),
        ),
        grid(
            "strtoul_octal_auto",
            "strtoul",
            "C17 7.22.1.4",
            json!({"s": cstr("010"), "base": 0}),
        ),
        grid(
            "strtoul_base36",
            "strtoul",
            "C17 7.22.1.4",
            json!({"s": cstr("z"), "base": 36}),
        ),
        grid(
            "strtoul_overflow_clamps",
            "strtoul",
            "C17 7.22.1.4",
            json!({"s": cstr("99999999999999999999"), "base": 10}),
        ),
        grid(
            "strtoul_no_digits",
            "strtoul",
            "C17 7.22.1.4",
            json!({"s": cstr("abc"), "base": 10}),
        ),
    ]
}

/// Captures host behavior for one fixture family.
pub fn capture_family(family: &str, timestamp: &str) -> Result<FixtureSet, HarnessError> {
    let grid_cases = match family {
        "string" => string_grid(),
        "ctype" => ctype_grid(),
        "stdlib" => stdlib_grid(),
        other => return Err(HarnessError::UnknownFamily(other.to_string())),
    };

    let mut cases = Vec::with_capacity(grid_cases.len());
    for gc in grid_cases {
        let run = execute_fixture_case(gc.function, &gc.inputs)?;
        cases.push(FixtureCase {
            name: gc.name,
            function: gc.function.to_string(),
            spec_section: gc.spec_section.to_string(),
            inputs: gc.inputs,
            expected_output: run.host_output,
        });
    }

    Ok(FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        family: family.to_string(),
        captured_at: timestamp.to_string(),
        cases,
    })
}
