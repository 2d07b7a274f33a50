use std::ops::{BitAnd, BitOr};

use super::Option;

/// `a & b` is equivalent to [`a.and_(b)`](Option::and_).
impl<T, U> BitAnd<Option<U>> for Option<T> {
    type Output = Option<U>;

    fn bitand(self, rhs: Option<U>) -> Self::Output {
        self.and_(rhs)
    }
}

/// `a | b` is equivalent to [`a.or_(b)`](Option::or_).
impl<T> BitOr for Option<T> {
    type Output = Option<T>;

    fn bitor(self, rhs: Option<T>) -> Self::Output {
        self.or_(rhs)
    }
}
