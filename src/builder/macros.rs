//! Macros for declarative configuration construction.

/// Declare a machine configuration literally.
///
/// Expands to [`MachineConfigBuilder`](crate::builder::MachineConfigBuilder)
/// calls and yields `Result<MachineConfig, BuildError>`, so dangling
/// transition targets and other construction mistakes are caught at build
/// time.
///
/// # Example
///
/// ```
/// use waypoint::machine_config;
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle" },
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.target_for("idle", "start"), Some("running"));
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $( $state:expr => { $( $event:expr => $target:expr ),* $(,)? } ),* $(,)?
        }
    ) => {{
        #[allow(unused_mut)]
        let mut builder = $crate::builder::MachineConfigBuilder::new().initial($initial);
        $(
            builder = builder.state($state);
            $(
                builder = builder.transition($state, $event, $target);
            )*
        )*
        builder.build()
    }};
}
