//! Coefficient iteration.
//!
//! Ascending iterators walk from the constant term up to the leading
//! coefficient; descending iterators walk the other way. All of them cover
//! the trimmed sequence only, so the zero polynomial yields nothing.

use std::iter::{FusedIterator, Rev};
use std::{slice, vec};

use crate::coeff::Coefficient;
use crate::dense::Polynomial;

/// Defines a wrapper iterator that forwards to an inner iterator.
macro_rules! wrap_iter {
    ($(#[$doc:meta])* $name:ident<$($lt:lifetime,)? $T:ident>, $inner:ty, $item:ty) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name<$($lt,)? $T> {
            inner: $inner,
        }

        impl<$($lt,)? $T> Iterator for $name<$($lt,)? $T> {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$($lt,)? $T> DoubleEndedIterator for $name<$($lt,)? $T> {
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back()
            }
        }

        impl<$($lt,)? $T> ExactSizeIterator for $name<$($lt,)? $T> {}

        impl<$($lt,)? $T> FusedIterator for $name<$($lt,)? $T> {}
    };
}

wrap_iter!(
    /// Coefficients by ascending degree.
    Ascending<'a, T>, slice::Iter<'a, T>, &'a T
);
wrap_iter!(
    /// Coefficients by descending degree.
    Descending<'a, T>, Rev<slice::Iter<'a, T>>, &'a T
);
wrap_iter!(
    /// Mutable coefficients by ascending degree.
    AscendingMut<'a, T>, slice::IterMut<'a, T>, &'a mut T
);
wrap_iter!(
    /// Mutable coefficients by descending degree.
    DescendingMut<'a, T>, Rev<slice::IterMut<'a, T>>, &'a mut T
);
wrap_iter!(
    /// Owned coefficients by ascending degree.
    IntoIter<T>, vec::IntoIter<T>, T
);

impl<T> Clone for Ascending<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Clone for Descending<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Mutable access to the coefficients of a polynomial.
///
/// Writing through this view may zero the leading coefficient; the
/// polynomial is trimmed again when the view is dropped.
#[derive(Debug)]
pub struct CoeffsMut<'a, T: Coefficient> {
    poly: &'a mut Polynomial<T>,
}

impl<T: Coefficient> CoeffsMut<'_, T> {
    /// Iterates mutably from the constant term upwards.
    pub fn ascending(&mut self) -> AscendingMut<'_, T> {
        AscendingMut {
            inner: self.poly.coeffs.iter_mut(),
        }
    }

    /// Iterates mutably from the leading coefficient downwards.
    pub fn descending(&mut self) -> DescendingMut<'_, T> {
        DescendingMut {
            inner: self.poly.coeffs.iter_mut().rev(),
        }
    }
}

impl<T: Coefficient> Drop for CoeffsMut<'_, T> {
    fn drop(&mut self) {
        self.poly.normalize();
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// Iterates coefficients from the constant term upwards.
    #[must_use]
    pub fn ascending(&self) -> Ascending<'_, T> {
        Ascending {
            inner: self.coeffs.iter(),
        }
    }

    /// Iterates coefficients from the leading coefficient downwards.
    #[must_use]
    pub fn descending(&self) -> Descending<'_, T> {
        Descending {
            inner: self.coeffs.iter().rev(),
        }
    }

    /// Returns a view for editing coefficients in place.
    ///
    /// The polynomial is normalized when the view is dropped.
    #[must_use]
    pub fn coeffs_mut(&mut self) -> CoeffsMut<'_, T> {
        CoeffsMut { poly: self }
    }
}

impl<'a, T: Coefficient> IntoIterator for &'a Polynomial<T> {
    type Item = &'a T;
    type IntoIter = Ascending<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ascending()
    }
}

impl<T: Coefficient> IntoIterator for Polynomial<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_coeffs().into_iter(),
        }
    }
}
