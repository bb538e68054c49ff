//! Macros for ergonomic configuration construction.

/// Build a [`crate::MachineConfig`] from literal map syntax.
///
/// Expands to [`crate::builder::ConfigBuilder`] calls, so the same
/// validation applies: the macro panics at use time if the initial state is
/// missing from the state set.
///
/// # Example
///
/// ```
/// use statewalk::machine_config;
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "run" => "busy" },
///         "busy" => { "stop" => "idle", "crash" => "broken" },
///         "broken" => {},
///     }
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states["busy"].transitions.len(), 2);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
            ),* $(,)?
        }
    ) => {{
        let builder = $crate::builder::ConfigBuilder::new().initial($initial);
        $(
            let builder = builder.state($state);
            $(
                let builder = builder.transition($state, $event, $target);
            )*
        )*
        builder
            .build()
            .expect("machine_config! produced an invalid configuration")
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macro_builds_working_config() {
        let config = machine_config! {
            initial: "idle",
            states: {
                "idle" => { "run" => "busy" },
                "busy" => { "stop" => "idle" },
            }
        };

        assert_eq!(config.initial, "idle");
        assert_eq!(
            config.states["idle"].transitions.get("run").map(String::as_str),
            Some("busy")
        );
    }

    #[test]
    fn macro_allows_stateless_entries_and_trailing_commas() {
        let config = machine_config! {
            initial: "done",
            states: {
                "done" => {},
            }
        };

        assert!(config.states["done"].transitions.is_empty());
    }

    #[test]
    #[should_panic(expected = "invalid configuration")]
    fn macro_panics_on_undefined_initial() {
        let _ = machine_config! {
            initial: "ghost",
            states: {
                "idle" => {},
            }
        };
    }
}
