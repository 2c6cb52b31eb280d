use std::alloc;
use std::error::Error;

use super::error::TryReserveError;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}

pub(crate) trait ReserveResultExtension<T> {
    /// Resolves the result of a fallible allocation the way infallible collection methods should:
    /// capacity overflows panic with their message, while allocation failures are passed to
    /// [`alloc::handle_alloc_error`] as recommended, rather than panicking.
    ///
    /// # Panics
    /// Panics if the [`Result`] is a [`TryReserveError::CapacityOverflow`].
    fn or_handle(self) -> T;
}

impl<T> ReserveResultExtension<T> for Result<T, TryReserveError> {
    fn or_handle(self) -> T {
        match self {
            Ok(val) => val,
            Err(TryReserveError::CapacityOverflow(error)) => Err::<T, _>(error).throw(),
            Err(TryReserveError::AllocFailure(error)) => alloc::handle_alloc_error(error.layout),
        }
    }
}
