use std::ops::{BitAnd, BitOr};

use super::Result;

/// `a & b` is equivalent to [`a.and_(b)`](Result::and_).
impl<T, U, E> BitAnd<Result<U, E>> for Result<T, E> {
    type Output = Result<U, E>;

    fn bitand(self, rhs: Result<U, E>) -> Self::Output {
        self.and_(rhs)
    }
}

/// `a | b` is equivalent to [`a.or_(b)`](Result::or_).
impl<T, E> BitOr for Result<T, E> {
    type Output = Result<T, E>;

    fn bitor(self, rhs: Result<T, E>) -> Self::Output {
        self.or_(rhs)
    }
}
