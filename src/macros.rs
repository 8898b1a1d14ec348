// \file src/macros.rs
//! forwarding macros for operator impls

macro_rules! forward_binop_to_ref_ref {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: $res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, &rhs)
            }
        }

        impl<'a> $imp<&'a $res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: &$res) -> $res {
                // forward to ref-ref
                $imp::$method(&self, rhs)
            }
        }

        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, rhs: $res) -> $res {
                // forward to ref-ref
                $imp::$method(self, &rhs)
            }
        }
    };
}
