//! The `step!` declaration macro.

/// Build a [`StepCall`](crate::step::StepCall) from a method call on a test
/// object type.
///
/// Arguments are written as `name = value`, using the method's parameter
/// names; those names are what generated titles and example-header matching
/// see. A name starting with `_` is hidden from generated titles. Prefix the
/// call with `async` for methods returning a future.
///
/// A bare type name is written `Konto::einzahlen(..)`. Path-qualified or
/// generic test objects go in angle brackets, as in
/// `<bank::Konto>::einzahlen(..)` or `<Speicher<u8>>::ablegen(..)`.
///
/// Argument values are evaluated once, when the macro runs, and cloned into
/// every invocation of the step.
///
/// ```
/// use gegeben::step;
///
/// struct Konto;
///
/// impl Konto {
///     fn einzahlen(&mut self, betrag: u32) {}
///     async fn abheben(&mut self, betrag: u32) -> Result<(), String> {
///         Ok(())
///     }
/// }
///
/// let sync_call = step!(Konto::einzahlen(betrag = 20));
/// let async_call = step!(async Konto::abheben(betrag = 5));
/// assert_eq!(sync_call.descriptor().name(), "einzahlen");
/// assert_eq!(async_call.descriptor().parameters(), ["betrag"]);
///
/// mod bank {
///     pub struct Depot<T>(pub Vec<T>);
///
///     impl<T> Depot<T> {
///         pub fn ablegen(&mut self, stueck: T) {
///             self.0.push(stueck);
///         }
///     }
/// }
///
/// let qualified = step!(<bank::Depot<u8>>::ablegen(stueck = 3));
/// assert_eq!(qualified.descriptor().name(), "ablegen");
/// ```
#[macro_export]
macro_rules! step {
    (async < $ty:ty > :: $method:ident ( $($param:ident = $value:expr),* $(,)? )) => {{
        $(let $param = $value;)*
        $crate::step::StepCall::<$ty>::declared(
            $crate::step::ActionDescriptor::declared(
                ::core::stringify!($method),
                &[$(::core::stringify!($param)),*],
            ),
            ::std::vec![$($crate::step::ToArgValue::to_arg_value(&$param)),*],
            $crate::step::StepAction::<$ty>::from_async(move |target: &mut $ty| {
                $(let $param = ::core::clone::Clone::clone(&$param);)*
                let future: $crate::step::StepFuture<'_> = ::std::boxed::Box::pin(async move {
                    $crate::step::IntoStepOutcome::into_outcome(target.$method($($param),*).await)
                });
                future
            }),
        )
    }};
    (async $ty:ident :: $method:ident ( $($param:ident = $value:expr),* $(,)? )) => {
        $crate::step!(async <$ty>::$method($($param = $value),*))
    };
    (< $ty:ty > :: $method:ident ( $($param:ident = $value:expr),* $(,)? )) => {{
        $(let $param = $value;)*
        $crate::step::StepCall::<$ty>::declared(
            $crate::step::ActionDescriptor::declared(
                ::core::stringify!($method),
                &[$(::core::stringify!($param)),*],
            ),
            ::std::vec![$($crate::step::ToArgValue::to_arg_value(&$param)),*],
            $crate::step::StepAction::<$ty>::from_sync(move |target: &mut $ty| {
                target.$method($(::core::clone::Clone::clone(&$param)),*)
            }),
        )
    }};
    ($ty:ident :: $method:ident ( $($param:ident = $value:expr),* $(,)? )) => {
        $crate::step!(<$ty>::$method($($param = $value),*))
    };
}
