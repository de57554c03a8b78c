//! Utility macros.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($op:ident, $method:ident, $t:ty, $to:ty, |$this:ident| $body:block) => {
        impl ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

/// The body mutates the components in place and is responsible for
/// invalidating the magnitude cache.
macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements exact componentwise equality and lexicographic ordering on
/// the listed components, ignoring the magnitude cache.
macro_rules! impl_component_cmp {
    ($t:ty, $first:ident $(, $rest:ident)*) => {
        impl ::std::cmp::PartialEq for $t {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.$first == other.$first $(&& self.$rest == other.$rest)*
            }
        }

        impl ::std::cmp::PartialOrd for $t {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                let ordering = self.$first.partial_cmp(&other.$first)?;
                $(
                    if ordering != ::std::cmp::Ordering::Equal {
                        return Some(ordering);
                    }
                    let ordering = self.$rest.partial_cmp(&other.$rest)?;
                )*
                Some(ordering)
            }
        }
    };
}

/// Implements the `approx` comparison traits by comparing the listed `f32`
/// fields.
macro_rules! impl_approx_eq {
    ($t:ty, $($field:tt),+) => {
        impl ::approx::AbsDiffEq for $t {
            type Epsilon = f32;

            fn default_epsilon() -> Self::Epsilon {
                <f32 as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(<f32 as ::approx::AbsDiffEq>::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }

        impl ::approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <f32 as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(<f32 as ::approx::RelativeEq>::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))&&+
            }
        }
    };
}
