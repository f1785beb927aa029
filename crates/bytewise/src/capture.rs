//! Scoped capture of echoed output.
//!
//! [`echo`] (and the [`echo!`](crate::echo) macro) write to the innermost
//! active [`capture`] on the current thread, or to standard output when no
//! capture is active. Captures nest: an inner capture collects only what is
//! echoed while its closure runs.
//!
//! ```rust
//! use bytewise::{capture::capture, echo};
//!
//! let out = capture(|| {
//!     echo!("hello, ");
//!     echo!(b"world");
//!     Ok::<_, ()>(())
//! });
//! assert_eq!(out.unwrap(), "hello, world");
//! ```

use std::{cell::RefCell, io::Write, vec::Vec};

use bstr::BString;

std::thread_local! {
    static SINKS: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
}

/// Write `bytes` to the innermost active capture, or to standard output.
///
/// Errors writing to standard output are ignored.
pub fn echo(bytes: impl AsRef<[u8]>) {
    let bytes = bytes.as_ref();
    let captured = SINKS.with(|sinks| match sinks.borrow_mut().last_mut() {
        Some(sink) => {
            sink.extend_from_slice(bytes);
            true
        }
        None => false,
    });
    if !captured {
        let _ = std::io::stdout().lock().write_all(bytes);
    }
}

/// Echo each argument in turn, see [`capture::echo`](crate::capture::echo).
///
/// Arguments may be anything that implements `AsRef<[u8]>`.
#[macro_export]
macro_rules! echo {
    ($($part:expr),+ $(,)?) => {
        $( $crate::capture::echo($part); )+
    };
}

/// Pops the sink it pushed, on every way out of [`capture`].
struct SinkGuard {
    depth: usize,
}

impl SinkGuard {
    fn push() -> Self {
        let depth = SINKS.with(|sinks| {
            let mut sinks = sinks.borrow_mut();
            sinks.push(Vec::new());
            sinks.len()
        });
        tracing::trace!(depth, "capture started");
        Self { depth }
    }

    fn finish(self) -> Vec<u8> {
        let out = SINKS.with(|sinks| {
            sinks
                .borrow_mut()
                .last_mut()
                .map(core::mem::take)
                .unwrap_or_default()
        });
        drop(self);
        out
    }
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        SINKS.with(|sinks| sinks.borrow_mut().truncate(self.depth - 1));
        tracing::trace!(depth = self.depth, "capture ended");
    }
}

/// Run `f`, returning everything it echoes instead of writing it out.
///
/// The previous destination is restored when `f` returns, fails or panics.
///
/// # Errors
///
/// Returns the error from `f`; whatever it echoed before failing is
/// discarded.
pub fn capture<F, E>(f: F) -> Result<BString, E>
where
    F: FnOnce() -> Result<(), E>,
{
    let guard = SinkGuard::push();
    f()?;
    Ok(guard.finish().into())
}
