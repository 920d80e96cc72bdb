//! Macros for ergonomic graph construction.

/// Declare a state enum and implement [`State`](crate::core::State) for it.
///
/// Unit, tuple and struct variants are supported. `name()` returns the
/// variant identifier regardless of payload.
///
/// The enum also derives `Serialize` and `Deserialize` through this crate's
/// own serde, so callers need no serde dependency of their own. Payload
/// types must still implement both traits.
///
/// # Example
///
/// ```
/// use stategraph::core::State;
/// use stategraph::state_enum;
///
/// state_enum! {
///     pub enum TurnstileState {
///         Locked { credit: u32 },
///         Unlocked,
///         Broken(Box<TurnstileState>),
///     }
/// }
///
/// assert_eq!(TurnstileState::Locked { credit: 10 }.name(), "Locked");
/// assert_eq!(TurnstileState::Broken(Box::new(TurnstileState::Unlocked)).name(), "Broken");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( ( $($tuple:ty),* $(,)? ) )?
                $( { $($field:ident : $field_ty:ty),* $(,)? } )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            PartialEq,
            Debug,
            $crate::__serde::Serialize,
            $crate::__serde::Deserialize
        )]
        #[serde(crate = "stategraph::__serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $( ( $($tuple),* ) )?
                $( { $($field : $field_ty),* } )?
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant)),*
                }
            }
        }
    };
}

/// Build a [`Matcher`](crate::core::Matcher) from a pattern.
///
/// `matcher!(Pattern)` accepts values that match `Pattern`;
/// `matcher!(Pattern if guard)` additionally requires the guard, with the
/// pattern's bindings in scope. The matched type is inferred from context,
/// so a standalone binding needs an annotation.
///
/// # Example
///
/// ```
/// use stategraph::core::Matcher;
/// use stategraph::matcher;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Event {
///     InsertCoin(u32),
///     AdmitPerson,
/// }
///
/// let any_coin: Matcher<Event> = matcher!(Event::InsertCoin(_));
/// let big_coin: Matcher<Event> = matcher!(Event::InsertCoin(value) if *value >= 50);
///
/// assert!(any_coin.matches(&Event::InsertCoin(5)));
/// assert!(!any_coin.matches(&Event::AdmitPerson));
/// assert!(big_coin.matches(&Event::InsertCoin(50)));
/// assert!(!big_coin.matches(&Event::InsertCoin(5)));
/// ```
#[macro_export]
macro_rules! matcher {
    ($pattern:pat $(if $guard:expr)? $(,)?) => {
        $crate::core::Matcher::new(|value| matches!(value, $pattern $(if $guard)?))
    };
}
