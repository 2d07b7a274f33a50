use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times the closures it hands out have been invoked.
#[derive(Debug, Default, Clone)]
pub struct CallCount(Rc<Cell<usize>>);

impl CallCount {
    pub fn new() -> CallCount {
        CallCount::default()
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    /// Wraps `f` so that every call is recorded before `f` runs.
    pub fn wrap<A, R>(&self, f: impl FnOnce(A) -> R) -> impl FnOnce(A) -> R {
        let count = Rc::clone(&self.0);
        move |arg| {
            count.set(count.get() + 1);
            f(arg)
        }
    }

    /// As [`CallCount::wrap`], for closures taking no arguments.
    pub fn wrap_thunk<R>(&self, f: impl FnOnce() -> R) -> impl FnOnce() -> R {
        let count = Rc::clone(&self.0);
        move || {
            count.set(count.get() + 1);
            f()
        }
    }
}

/// Increments a shared counter when dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<Cell<usize>>);

impl CountedDrop {
    pub fn new(counter: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop(Rc::clone(counter))
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}
