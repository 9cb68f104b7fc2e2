use std::mem;
use std::sync::mpsc::{channel, Receiver, Sender};

enum State<RESOLVED, BLOCKED> {
    Resolved(RESOLVED),
    Blocked(BLOCKED),
}

/// The result of an asynchronous device request. Settles exactly once.
pub struct VrFuture<T>(State<T, Receiver<T>>);

/// The write end of a blocked future.
pub struct VrFutureResolver<T>(State<(), Sender<T>>);

impl<T> VrFuture<T> {
    /// A future that is already resolved.
    pub fn resolved(value: T) -> VrFuture<T> {
        VrFuture(State::Resolved(value))
    }

    /// A pair of a resolver and a blocked future.
    pub fn blocked() -> (VrFutureResolver<T>, VrFuture<T>) {
        let (sender, receiver) = channel();
        let future = VrFuture(State::Blocked(receiver));
        let resolver = VrFutureResolver(State::Blocked(sender));
        (resolver, future)
    }

    /// Blocks the thread until the value is available.
    pub fn block(self) -> T {
        match self {
            VrFuture(State::Resolved(value)) => value,
            VrFuture(State::Blocked(receiver)) => {
                receiver.recv().expect("Failed to get future value")
            }
        }
    }
}

impl<T> VrFutureResolver<T> {
    /// Resolves the future, if it hasn't been resolved already.
    pub fn resolve(&mut self, value: T) -> Result<(), ()> {
        match mem::replace(&mut self.0, State::Resolved(())) {
            State::Resolved(()) => Err(()),
            State::Blocked(sender) => {
                sender.send(value).expect("Failed to resolve future");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VrFuture;

    #[test]
    fn resolved_future_returns_value() {
        let future = VrFuture::resolved(42);
        assert_eq!(future.block(), 42);
    }

    #[test]
    fn blocked_future_receives_resolved_value() {
        let (mut resolver, future) = VrFuture::blocked();
        assert!(resolver.resolve("ready").is_ok());
        assert_eq!(future.block(), "ready");
    }

    #[test]
    fn future_resolves_at_most_once() {
        let (mut resolver, future) = VrFuture::blocked();
        assert!(resolver.resolve(1).is_ok());
        assert!(resolver.resolve(2).is_err());
        assert_eq!(future.block(), 1);
    }

    #[test]
    fn blocked_future_resolved_from_another_thread() {
        let (mut resolver, future) = VrFuture::blocked();
        let handle = std::thread::spawn(move || {
            resolver.resolve(7_u32).unwrap();
        });
        assert_eq!(future.block(), 7);
        handle.join().unwrap();
    }
}
