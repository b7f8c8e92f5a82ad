// key_tuple
/// Build a [`KeyTuple`](crate::slice::KeyTuple) from an owner name and a
/// component list; `null` marks an absent component.
///
/// `key_tuple!("user_id"; 11_i64, "name", null)`
#[macro_export]
macro_rules! key_tuple {
    (@components [$($out:expr,)*]) => {
        ::std::vec![$($out),*]
    };
    (@components [$($out:expr,)*] null $(, $($rest:tt)*)?) => {
        $crate::key_tuple!(@components [$($out,)* ::std::option::Option::None,] $($($rest)*)?)
    };
    (@components [$($out:expr,)*] $component:expr $(, $($rest:tt)*)?) => {
        $crate::key_tuple!(
            @components [
                $($out,)*
                ::std::option::Option::Some($crate::value::KeyComponent::to_value(&$component)),
            ]
            $($($rest)*)?
        )
    };
    ($owner:expr $(;)?) => {
        $crate::slice::KeyTuple::new($owner, ::std::vec::Vec::new())
    };
    ($owner:expr; $($rest:tt)*) => {
        $crate::slice::KeyTuple::new($owner, $crate::key_tuple!(@components [] $($rest)*))
    };
}
