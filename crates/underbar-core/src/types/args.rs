//! Argument lists and their canonical cache keys.
//!
//! Memoized functions take their arguments as a tuple. Every element must be
//! a [`Primitive`]: a plain value with no identity of its own. The tuple is
//! rendered as a compact JSON array, so `(1, "a", true)` becomes
//! `[1,"a",true]`. Equal tuples always render to the same key.

use serde_json::{json, Value};

/// A value type that can take part in a cache key.
pub trait Primitive {
    /// JSON representation used inside the cache key
    fn to_key_value(&self) -> Value;
}

macro_rules! impl_primitive_via_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                fn to_key_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_primitive_via_from!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Primitive for f64 {
    fn to_key_value(&self) -> Value {
        // Non-finite values get a tagged object; no other primitive renders as one
        if !self.is_finite() {
            let tag = if self.is_nan() {
                "nan"
            } else if self.is_sign_positive() {
                "inf"
            } else {
                "-inf"
            };
            json!({ "f64": tag })
        } else if *self == 0.0 {
            // -0.0 == 0.0, so both share a key
            Value::from(0.0)
        } else {
            Value::from(*self)
        }
    }
}

impl Primitive for f32 {
    fn to_key_value(&self) -> Value {
        f64::from(*self).to_key_value()
    }
}

impl Primitive for char {
    fn to_key_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Primitive for str {
    fn to_key_value(&self) -> Value {
        Value::from(self)
    }
}

impl Primitive for String {
    fn to_key_value(&self) -> Value {
        Value::from(self.as_str())
    }
}

impl Primitive for () {
    fn to_key_value(&self) -> Value {
        Value::Null
    }
}

/// `None` is `[]` and `Some(x)` is `[x]`, so nested options stay distinct.
impl<P: Primitive> Primitive for Option<P> {
    fn to_key_value(&self) -> Value {
        Value::Array(self.iter().map(Primitive::to_key_value).collect())
    }
}

impl<P: Primitive + ?Sized> Primitive for &P {
    fn to_key_value(&self) -> Value {
        (**self).to_key_value()
    }
}

/// An argument tuple whose elements are all primitives.
pub trait ArgList {
    /// Key values of each argument, in call order
    fn key_values(&self) -> Vec<Value>;

    /// Canonical cache key for this argument list
    fn cache_key(&self) -> String {
        Value::Array(self.key_values()).to_string()
    }
}

impl ArgList for () {
    fn key_values(&self) -> Vec<Value> {
        Vec::new()
    }
}

macro_rules! impl_arg_list {
    ($($name:ident),+) => {
        impl<$($name: Primitive),+> ArgList for ($($name,)+) {
            #[allow(non_snake_case)]
            fn key_values(&self) -> Vec<Value> {
                let ($($name,)+) = self;
                vec![$($name.to_key_value()),+]
            }
        }
    };
}

impl_arg_list!(A);
impl_arg_list!(A, B);
impl_arg_list!(A, B, C);
impl_arg_list!(A, B, C, D);
impl_arg_list!(A, B, C, D, E);
impl_arg_list!(A, B, C, D, E, F);
impl_arg_list!(A, B, C, D, E, F, G);
impl_arg_list!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cache_key_format() {
        assert_eq!(().cache_key(), "[]");
        assert_eq!((1,).cache_key(), "[1]");
        assert_eq!((1, "a", true).cache_key(), r#"[1,"a",true]"#);
        assert_eq!((Some(2u8), None::<u8>, ()).cache_key(), "[[2],[],null]");
        assert_eq!(('x', String::from("y")).cache_key(), r#"["x","y"]"#);
    }

    #[test]
    fn test_float_keys() {
        assert_eq!((0.0f64,).cache_key(), (-0.0f64,).cache_key());
        assert_eq!((f64::NAN,).cache_key(), r#"[{"f64":"nan"}]"#);
        assert_eq!((f64::INFINITY,).cache_key(), r#"[{"f64":"inf"}]"#);
        assert_eq!((f32::NEG_INFINITY,).cache_key(), r#"[{"f64":"-inf"}]"#);
        assert_ne!((1.5f64,).cache_key(), (2.5f64,).cache_key());
    }

    #[test]
    fn test_non_finite_floats_are_distinct() {
        let keys = [f64::INFINITY, f64::NEG_INFINITY, f64::NAN, f64::MAX, 0.0]
            .map(|x| (x,).cache_key());
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
        // Tagged values never look like the string a caller might pass
        assert_ne!((f64::INFINITY,).cache_key(), ("inf",).cache_key());
    }

    #[test]
    fn test_option_keys() {
        assert_ne!((Some(()),).cache_key(), (None::<()>,).cache_key());
        assert_ne!((Some(None::<u8>),).cache_key(), (None::<Option<u8>>,).cache_key());
        assert_ne!((Some(Some(1u8)),).cache_key(), (Some(1u8),).cache_key());
        assert_eq!((Some("a"),).cache_key(), r#"[["a"]]"#);
    }

    #[test]
    fn test_strings_are_escaped() {
        // A comma inside a string must not look like two arguments
        assert_ne!(("a,b",).cache_key(), ("a", "b").cache_key());
        assert_ne!(("1",).cache_key(), (1,).cache_key());
    }

    #[test]
    fn test_order_matters() {
        assert_ne!((1, 2).cache_key(), (2, 1).cache_key());
    }

    // Equal argument lists always share a key
    proptest! {
        #[test]
        fn equal_args_equal_keys(a in any::<i64>(), b in ".*", c in any::<bool>()) {
            let first = (a, b.clone(), c);
            let second = (a, b, c);
            prop_assert_eq!(first.cache_key(), second.cache_key());
        }
    }

    // Distinct argument lists never collide
    proptest! {
        #[test]
        fn distinct_args_distinct_keys(a in ".*", b in ".*") {
            prop_assume!(a != b);
            prop_assert_ne!((a.as_str(), 1).cache_key(), (b.as_str(), 1).cache_key());
        }

        #[test]
        fn distinct_floats_distinct_keys(a in any::<f64>(), b in any::<f64>()) {
            // Equal values (including 0.0 and -0.0) share a key; NaNs share one key
            prop_assume!(a != b && !(a.is_nan() && b.is_nan()));
            prop_assert_ne!((a,).cache_key(), (b,).cache_key());
        }

        #[test]
        fn distinct_options_distinct_keys(
            a in proptest::option::of(proptest::option::of(any::<i32>())),
            b in proptest::option::of(proptest::option::of(any::<i32>())),
        ) {
            prop_assume!(a != b);
            prop_assert_ne!((a,).cache_key(), (b,).cache_key());
        }
    }
}
