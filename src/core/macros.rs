//! Macros for declaring transition tables.

/// Generate a `lookup` method from a transition table.
///
/// Each state lists the events it handles and the state each one leads to.
/// Pairs that are not listed produce `None`.
///
/// # Example
///
/// ```
/// use mousetrap::transition_table;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Light { Red, Green }
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Signal { Go, Stop }
///
/// transition_table! {
///     Light on Signal {
///         Red { Go => Green }
///         Green { Stop => Red }
///     }
/// }
///
/// assert_eq!(Light::Red.lookup(Signal::Go), Some(Light::Green));
/// assert_eq!(Light::Red.lookup(Signal::Stop), None);
/// ```
#[macro_export]
macro_rules! transition_table {
    (
        $state:ident on $event:ident {
            $(
                $from:ident { $( $on:ident => $to:ident ),* $(,)? }
            )*
        }
    ) => {
        impl $state {
            /// Target of `event` from this state, or `None` when the table
            /// has no entry for the pair.
            #[allow(unreachable_patterns)]
            pub fn lookup(&self, event: $event) -> ::core::option::Option<$state> {
                match (self, event) {
                    $( $( ($state::$from, $event::$on) => ::core::option::Option::Some($state::$to), )* )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Door {
        Open,
        Closed,
        Locked,
    }

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Action {
        Push,
        Pull,
        Lock,
        Unlock,
    }

    transition_table! {
        Door on Action {
            Open { Push => Closed }
            Closed { Pull => Open, Lock => Locked }
            Locked { Unlock => Closed, }
        }
    }

    #[test]
    fn listed_pairs_resolve() {
        assert_eq!(Door::Open.lookup(Action::Push), Some(Door::Closed));
        assert_eq!(Door::Closed.lookup(Action::Pull), Some(Door::Open));
        assert_eq!(Door::Closed.lookup(Action::Lock), Some(Door::Locked));
        assert_eq!(Door::Locked.lookup(Action::Unlock), Some(Door::Closed));
    }

    #[test]
    fn unlisted_pairs_are_none() {
        assert_eq!(Door::Open.lookup(Action::Pull), None);
        assert_eq!(Door::Locked.lookup(Action::Push), None);
        assert_eq!(Door::Closed.lookup(Action::Unlock), None);
    }

    #[test]
    fn state_with_empty_row_handles_nothing() {
        #[derive(Clone, Copy, PartialEq, Debug)]
        enum Sink {
            Drain,
        }

        transition_table! {
            Sink on Action {
                Drain {}
            }
        }

        assert_eq!(Sink::Drain.lookup(Action::Push), None);
    }
}
