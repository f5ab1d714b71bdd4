//! Opt-in macros for user-defined wire shapes.

/// Declares bitwise-copyable records as the POD wire shape: a `{pod, size}`
/// header followed by the record's raw bytes.
///
/// The types must be `#[repr(C)]`, padding-free, and derive
/// `zerocopy::{IntoBytes, FromBytes, Immutable}` along with `Default` and
/// `Copy`:
///
/// ```
/// use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};
///
/// #[repr(C)]
/// #[derive(IntoBytes, FromBytes, Immutable, KnownLayout, Clone, Copy, Default, PartialEq, Debug)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// bytepack::pod_wire!(Point);
///
/// let mut buf = Vec::new();
/// let mut w = bytepack::VecSink::new(&mut buf);
/// bytepack::encode(&mut w, &Point { x: 3, y: -4 });
/// assert_eq!(buf.len(), 5 + 8);
/// ```
#[macro_export]
macro_rules! pod_wire {
    ($($t:ty),+ $(,)?) => {$(
        impl $crate::Wire for $t {
            const WIRE_TYPE: $crate::WireType = $crate::WireType::Pod;
        }

        impl $crate::Ser for $t {
            fn encoded_len(&self) -> usize {
                $crate::DataHeader::WIRE_SIZE + ::core::mem::size_of::<$t>()
            }

            fn ser<W: $crate::Sink>(&self, w: &mut W) {
                $crate::DataHeader::new(
                    $crate::WireType::Pod,
                    $crate::WireType::Empty,
                    ::core::mem::size_of::<$t>() as u32,
                )
                .write_to(w);
                $crate::Sink::put_fixed(w, $crate::export::zerocopy::IntoBytes::as_bytes(self));
            }
        }

        impl $crate::Deser for $t {
            fn deser<R: $crate::Source>(r: &mut R) -> Self {
                let header = match $crate::DataHeader::read_from(r) {
                    Some(h) => h,
                    None => return <$t as ::core::default::Default>::default(),
                };
                if (header.length as usize) < ::core::mem::size_of::<$t>() {
                    return <$t as ::core::default::Default>::default();
                }
                match $crate::Source::take(r, ::core::mem::size_of::<$t>()) {
                    Some(bytes) => {
                        <$t as $crate::export::zerocopy::FromBytes>::read_from_bytes(bytes)
                            .unwrap_or_default()
                    }
                    None => <$t as ::core::default::Default>::default(),
                }
            }
        }
    )+};
}

/// Declares a tagged union: an enum whose variants each carry exactly one
/// field, with explicit zero-based alternative indices. The wire form is a
/// `{variant, sub = active's category, alternative count}` header, a `u32`
/// index, then the active alternative's body. Indices are written out by hand
/// for the same reason the wire category codes are: they are format, and must
/// not shift when the declaration is edited.
///
/// ```
/// bytepack::variant_wire! {
///     #[derive(PartialEq, Debug)]
///     pub enum Field {
///         Num(i32) = 0,
///         Label(String) = 1,
///     }
/// }
///
/// let v = Field::Label(String::from("hi"));
/// assert_eq!(v.index(), 1);
/// ```
///
/// The first alternative's default value is the enum's default, which is also
/// what structurally incompatible streams decode to.
#[macro_export]
macro_rules! variant_wire {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $fvar:ident($fty:ty) = $fidx:literal
            $(, $var:ident($ty:ty) = $idx:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $fvar($fty),
            $($var($ty),)*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::$fvar(::core::default::Default::default())
            }
        }

        impl $name {
            const ALT_COUNT: u32 = [$fidx $(, $idx)*].len() as u32;

            /// Zero-based index of the active alternative.
            pub fn index(&self) -> u32 {
                match self {
                    Self::$fvar(_) => $fidx,
                    $(Self::$var(_) => $idx,)*
                }
            }
        }

        impl $crate::Wire for $name {
            const WIRE_TYPE: $crate::WireType = $crate::WireType::Variant;
        }

        impl $crate::Ser for $name {
            fn encoded_len(&self) -> usize {
                let body = match self {
                    Self::$fvar(v) => $crate::Ser::encoded_len(v),
                    $(Self::$var(v) => $crate::Ser::encoded_len(v),)*
                };
                $crate::DataHeader::WIRE_SIZE + ::core::mem::size_of::<u32>() + body
            }

            fn ser<W: $crate::Sink>(&self, w: &mut W) {
                let sub = match self {
                    Self::$fvar(_) => <$fty as $crate::Wire>::WIRE_TYPE,
                    $(Self::$var(_) => <$ty as $crate::Wire>::WIRE_TYPE,)*
                };
                $crate::DataHeader::new($crate::WireType::Variant, sub, Self::ALT_COUNT)
                    .write_to(w);
                $crate::Ser::ser(&self.index(), w);
                match self {
                    Self::$fvar(v) => $crate::Ser::ser(v, w),
                    $(Self::$var(v) => $crate::Ser::ser(v, w),)*
                }
            }
        }

        impl $crate::Deser for $name {
            fn deser<R: $crate::Source>(r: &mut R) -> Self {
                let header = match $crate::DataHeader::read_from(r) {
                    Some(h) => h,
                    None => return <Self as ::core::default::Default>::default(),
                };
                if header.length != Self::ALT_COUNT {
                    return <Self as ::core::default::Default>::default();
                }
                let index = <u32 as $crate::Deser>::deser(r);
                if index >= header.length {
                    return <Self as ::core::default::Default>::default();
                }
                match index {
                    $fidx => Self::$fvar(<$fty as $crate::Deser>::deser(r)),
                    $($idx => Self::$var(<$ty as $crate::Deser>::deser(r)),)*
                    _ => <Self as ::core::default::Default>::default(),
                }
            }
        }
    };
}
