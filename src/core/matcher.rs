//! Predicate matchers for selecting state definitions and event handlers.
//!
//! A matcher pairs a variant test with any number of guard predicates. It
//! matches a candidate only when every predicate holds.

/// Boxed predicate over a candidate value.
type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Decides whether a runtime value belongs to a declared variant and
/// satisfies its guards.
///
/// Predicates are evaluated in registration order and evaluation stops at
/// the first one that fails. Matchers are never compared with each other:
/// two matchers built from the same closures are still distinct entries in a
/// graph.
///
/// # Example
///
/// ```rust
/// use stategraph::core::Matcher;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Event {
///     InsertCoin(u32),
///     Push,
/// }
///
/// let large_coin = Matcher::new(|e: &Event| matches!(e, Event::InsertCoin(_)))
///     .when(|e| matches!(e, Event::InsertCoin(v) if *v >= 25));
///
/// assert!(large_coin.matches(&Event::InsertCoin(50)));
/// assert!(!large_coin.matches(&Event::InsertCoin(10)));
/// assert!(!large_coin.matches(&Event::Push));
/// ```
pub struct Matcher<T> {
    predicates: Vec<Predicate<T>>,
}

impl<T: 'static> Matcher<T> {
    /// Create a matcher from a variant test.
    ///
    /// The test is usually a `matches!` over one enum variant; the
    /// [`matcher!`](crate::matcher) macro writes it for you.
    pub fn new<F>(tag: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Matcher {
            predicates: vec![Box::new(tag)],
        }
    }

    /// Create a matcher that accepts every value.
    pub fn any() -> Self {
        Matcher {
            predicates: Vec::new(),
        }
    }

    /// Create a matcher that accepts exactly `value`.
    pub fn eq(value: T) -> Self
    where
        T: PartialEq + Send + Sync,
    {
        Self::new(move |candidate| *candidate == value)
    }

    /// Attach one more guard predicate.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Check whether `value` satisfies every predicate.
    pub fn matches(&self, value: &T) -> bool {
        self.predicates.iter().all(|predicate| predicate(value))
    }
}
