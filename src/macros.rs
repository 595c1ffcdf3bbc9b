//! Call-site capture macros.

/// Resolves the enclosing function's path at compile time.
///
/// Yields a `&'static str` such as `my_app::server::handle`. Inside a
/// closure the enclosing function's path is reported, with the closure
/// suffix trimmed.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = name.strip_suffix("::f").unwrap_or(name);
        name.trim_end_matches("::{{closure}}")
    }};
}

/// Traces the enclosing function: emits an entry line now and the matching
/// exit line when the function returns, on every path out including early
/// returns and unwinding.
///
/// Invoke it as the first statement of the function body. An optional
/// `format!`-style argument list becomes the free-form description rendered
/// inside `>>name(...)`.
///
/// ```no_run
/// fn resize(width: u32, height: u32) {
///     tracelog::trace_call!("{width}x{height}");
///     // ...
/// }
/// ```
///
/// Uses the global logger; entry and exit lines are emitted only while the
/// severity gate is at `Info` or above.
#[macro_export]
macro_rules! trace_call {
    () => {
        let _call_scope = $crate::Logger::global().trace_call(
            $crate::function_name!(),
            ::std::format_args!(""),
            ::std::file!(),
            ::std::line!(),
        );
    };
    ($($args:tt)+) => {
        let _call_scope = $crate::Logger::global().trace_call(
            $crate::function_name!(),
            ::std::format_args!($($args)+),
            ::std::file!(),
            ::std::line!(),
        );
    };
}
