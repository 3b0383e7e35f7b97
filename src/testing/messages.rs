use std::fmt::{Debug, Display};

/// Readable message for two values that do not match
pub fn mismatch_error(function_name: &str, expected: impl Debug, got: impl Debug) -> String {
    format!(
        "{} did not return expected results.\nExpected\n{:#?}\ngot\n{:#?}",
        function_name, expected, got
    )
}

/// Message for a function that should have returned an error
pub fn expected_error(function_name: &str) -> String {
    format!("{} should have returned an error", function_name)
}

/// Message for a function that returned an error it should not have
pub fn unexpected_error(function_name: &str, err: impl Display) -> String {
    format!("{} returned unexpected error {}", function_name, err)
}
