//! The `chain!` macro for left-to-right monadic sequencing.

/// Threads a monadic value through a series of steps from left to right.
///
/// `chain!(x, f, g, h)` is `x.flat_map(f).flat_map(g).flat_map(h)`, for any
/// type implementing [`Monad`](crate::typeclass::Monad). It is the generic
/// counterpart of the `|` operator on [`Maybe`](crate::control::Maybe).
///
/// # Syntax
///
/// - `chain!(x)` - Returns `x` unchanged
/// - `chain!(x, f)` - Returns `x.flat_map(f)`
/// - `chain!(x, f, g, ...)` - Returns `x.flat_map(f).flat_map(g)...`
///
/// # Examples
///
/// ## Short-circuiting pipeline
///
/// ```
/// use monadic::chain;
/// use monadic::control::Maybe;
///
/// fn half(value: i32) -> Maybe<i32> {
///     if value == 0 { Maybe::Absent } else { Maybe::Present(value / 2) }
/// }
///
/// // 10 -> 5 -> 2 -> 1 -> 0 -> Absent
/// let result = chain!(Maybe::Present(10), half, half, half, half, half);
/// assert_eq!(result, Maybe::Absent);
/// ```
///
/// ## Any monad
///
/// ```
/// use monadic::chain;
/// use monadic::typeclass::Identity;
///
/// let result = chain!(
///     Identity::new(3),
///     |n: i32| Identity::new(n + 1),
///     |n: i32| Identity::new(n.to_string()),
/// );
/// assert_eq!(result, Identity::new("4".to_string()));
/// ```
#[macro_export]
macro_rules! chain {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Single step: bind it
    ($value:expr, $step:expr $(,)?) => {
        $crate::typeclass::Monad::flat_map($value, $step)
    };

    // Multiple steps: bind left to right recursively
    ($value:expr, $step:expr, $($remaining_steps:expr),+ $(,)?) => {
        $crate::chain!($crate::typeclass::Monad::flat_map($value, $step), $($remaining_steps),+)
    };
}
