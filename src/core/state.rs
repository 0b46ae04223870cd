//! State traits for step machines.
//!
//! A step machine moves through an ordered list of states. `State` describes
//! a single position; `Sequential` adds the ordering that forward and
//! backward navigation relies on.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for step machine states.
///
/// All methods are pure. States are small immutable values describing the
/// current position in a machine.
///
/// # Required Traits
///
/// - `Clone`: states are copied into navigation history
/// - `PartialEq`: requirement tables are looked up by state
/// - `Debug`: diagnostics and tracing
/// - `Serialize` + `Deserialize`: states are written into checkpoints
///
/// # Example
///
/// ```rust
/// use onboarding::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Checkout {
///     Cart,
///     Payment,
///     Done,
/// }
///
/// impl State for Checkout {
///     fn name(&self) -> &str {
///         match self {
///             Self::Cart => "Cart",
///             Self::Payment => "Payment",
///             Self::Done => "Done",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
///
/// assert!(Checkout::Done.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Whether this is the last state of the machine.
    ///
    /// A machine never advances past a final state. Default is `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// A state drawn from a fixed, totally ordered sequence.
///
/// `next` and `previous` return `None` at the ends of the sequence, which
/// is what makes advancing from the last state and retreating from the
/// first state no-ops.
pub trait Sequential: State {
    /// The state every machine starts in.
    fn first() -> Self;

    /// The state after this one, if any.
    fn next(&self) -> Option<Self>;

    /// The state before this one, if any.
    fn previous(&self) -> Option<Self>;
}
