// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! invalid_id {
    // Early-return shorthand for a token that is not an integer.
    ($field:expr, $token:expr) => {
        return ::std::result::Result::Err($crate::error::FixtureError::InvalidId {
            field: $field,
            token: ::std::string::String::from($token),
        })
    };
}
