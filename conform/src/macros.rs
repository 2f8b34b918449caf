/// Unwraps the expected variant of a [Value](crate::Value), returning
/// a type mismatch for the enclosing validation otherwise.
///
/// `check_type!(value, String => String)` reads as "a `Value::String`,
/// reported as kind `string`".
macro_rules! check_type {
    ($value:expr, $variant:ident => $kind:ident) => {
        match $value {
            $crate::value::Value::$variant(inner) => inner,
            other => {
                return Err($crate::errors::Error::invalid_type(
                    other,
                    $crate::value::Kind::$kind,
                ))
            }
        }
    };
}
