//! Macros for declaring workflow state keys.

/// Declare a module of state key constants plus an ordered `ALL` slice.
///
/// Each constant's value is its own name, and `ALL` lists them in
/// declaration order, ready for [`crate::StateMachineBuilder::states`].
///
/// # Example
///
/// ```
/// use issueflow::state_keys;
///
/// state_keys! {
///     pub mod status {
///         OPEN,
///         CONFIRMED,
///         RESOLVED,
///         CLOSED,
///     }
/// }
///
/// assert_eq!(status::OPEN, "OPEN");
/// assert_eq!(status::ALL, &["OPEN", "CONFIRMED", "RESOLVED", "CLOSED"]);
/// ```
#[macro_export]
macro_rules! state_keys {
    (
        $(#[$meta:meta])*
        $vis:vis mod $name:ident {
            $(
                $(#[$key_meta:meta])*
                $key:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[allow(non_upper_case_globals)]
        $vis mod $name {
            $(
                $(#[$key_meta])*
                pub const $key: &str = stringify!($key);
            )*

            /// Every key above, in declaration order.
            pub const ALL: &[&str] = &[$($key),*];
        }
    };
}
