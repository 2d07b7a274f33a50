use std::error::Error;

/// An error which represents a logic error rather than a recoverable failure. Implementors are
/// raised by panicking with their own message, attributed to the caller's location.
pub(crate) trait Panic: Error {
    #[track_caller]
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "expression completed without panicking")
    };
    ($run:block, $msg:literal) => {
        let outcome = std::panic::catch_unwind(|| $run);
        assert!(outcome.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

#[cfg(test)]
pub use capture::*;

#[cfg(test)]
mod capture {
    use std::any::Any;
    use std::cell::RefCell;
    use std::panic::{self, UnwindSafe};
    use std::sync::{Mutex, PoisonError};

    /// Serializes tests which replace the process-wide panic hook.
    static HOOK_LOCK: Mutex<()> = Mutex::new(());

    thread_local! {
        static REPORTED: RefCell<Option<(String, u32)>> = const { RefCell::new(None) };
    }

    /// A panic caught by [`capture_panic`], along with the location the panic hook reported.
    pub struct CapturedPanic {
        pub file: String,
        pub line: u32,
        pub payload: Box<dyn Any + Send>,
    }

    impl CapturedPanic {
        /// The panic message, if the payload is a string.
        pub fn message(&self) -> Option<&str> {
            self.payload
                .downcast_ref::<String>()
                .map(String::as_str)
                .or_else(|| self.payload.downcast_ref::<&str>().copied())
        }
    }

    /// Runs `f`, which is expected to panic, recording the location passed to the panic hook.
    ///
    /// # Panics
    /// Panics if `f` returns normally.
    pub fn capture_panic<R>(f: impl FnOnce() -> R + UnwindSafe) -> CapturedPanic {
        let _guard = HOOK_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

        let previous = panic::take_hook();
        panic::set_hook(Box::new(|info| {
            let reported = info.location().map(|loc| (loc.file().to_owned(), loc.line()));
            REPORTED.with(|cell| *cell.borrow_mut() = reported);
        }));
        let outcome = panic::catch_unwind(f);
        panic::set_hook(previous);

        let payload = match outcome {
            Ok(_) => panic!("expression completed without panicking"),
            Err(payload) => payload,
        };
        let (file, line) = REPORTED
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_else(|| (String::new(), 0));

        CapturedPanic { file, line, payload }
    }
}
