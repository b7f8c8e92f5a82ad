#[macro_export]
macro_rules! component_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Blob, "Blob", ordering = Native),
            (Bool, "Bool", ordering = Native),
            (Enum, "Enum", ordering = Label),
            (Float32, "Float32", ordering = Native),
            (Float64, "Float64", ordering = Native),
            (Int, "Int", ordering = Native),
            (List, "List", ordering = Unordered),
            (Text, "Text", ordering = Native),
            (Uint, "Uint", ordering = Native),
            (Ulid, "Ulid", ordering = Native),
        }
    };
}

#[macro_export]
macro_rules! component_kind_registry {
    ($macro:ident) => {
        $crate::component_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::component_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($component:ident, $label:literal, ordering = $ordering:ident) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ComponentKind::$component => $crate::ComponentMetadata {
                    label: $label,
                    ordering: $crate::OrderingRule::$ordering,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($component:ident, $label:literal, ordering = $ordering:ident) ),* $(,)? ) => {
        [ $( $crate::ComponentKind::$component ),* ]
    };
}
