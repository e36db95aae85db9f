//! Macros for ergonomic configuration construction.

/// Declare a [`Configuration`](crate::core::Configuration) inline.
///
/// State and event names are written as identifiers and stored as their
/// string form. Names that are not valid identifiers need the builder API.
///
/// # Example
///
/// ```
/// use rewind::fsm;
/// use rewind::machine::StateMachine;
///
/// let config = fsm! {
///     initial: idle,
///     states: {
///         idle => { start => running },
///         running => { stop => idle, pause => paused },
///         paused => { resume => running },
///     }
/// };
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.current_state(), "running");
/// ```
#[macro_export]
macro_rules! fsm {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => {
                    $( $event:ident => $target:ident ),* $(,)?
                }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::core::Configuration::new(stringify!($initial))
            $(
                .with_state(
                    stringify!($state),
                    $crate::core::StateDef::new()
                        $( .on(stringify!($event), stringify!($target)) )*,
                )
            )*
    };
}
