/// Asserts that a numerical value is strictly greater than zero and panics
/// with a helpful message if not
///
/// `NaN` is rejected as well.
///
/// ### Example
/// ```should_panic
/// let rows = 0usize;
/// gridviz::assert_positive!(rows);
/// ```
/// This will panic with the message "Invalid value for \`rows\`. Must be positive, got 0."
#[macro_export]
macro_rules! assert_positive {
    ($var:expr) => {
        assert!(
            $var > ::core::default::Default::default(),
            "Invalid value for `{}`. Must be positive, got {}.",
            stringify!($var),
            $var,
        );
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn positive_values_pass() {
        let rows = 3usize;
        let width = 0.5f64;
        crate::assert_positive!(rows);
        crate::assert_positive!(width);
    }

    #[test]
    #[should_panic(expected = "Invalid value for `cols`")]
    fn zero_panics() {
        let cols = 0usize;
        crate::assert_positive!(cols);
    }

    #[test]
    #[should_panic(expected = "Must be positive")]
    fn nan_panics() {
        let height = f64::NAN;
        crate::assert_positive!(height);
    }
}
