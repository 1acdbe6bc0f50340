//! Cursor drain adapter
//!
//! Query and history cursors are handed to exactly one operation, drained
//! to a materialized `Vec` inside it, and released exactly once before the
//! operation returns — on the success path and on every failure path.
//! [`drain_cursor`] owns that contract so the operations never touch a
//! cursor directly.
//!
//! The guard releases explicitly once the cursor is exhausted; early exits
//! (advance failure, step failure) release through `Drop` while the
//! original error propagates. A release failure during that cleanup is
//! logged and swallowed — the first error wins.

use civreg_core::{Cursor, Result};
use tracing::debug;

/// Scoped ownership of a boxed cursor with release-exactly-once semantics.
struct CursorGuard<T> {
    cursor: Box<dyn Cursor<Item = T>>,
    released: bool,
}

impl<T> CursorGuard<T> {
    fn new(cursor: Box<dyn Cursor<Item = T>>) -> Self {
        Self {
            cursor,
            released: false,
        }
    }

    fn advance(&mut self) -> Result<Option<T>> {
        self.cursor.advance()
    }

    /// Release on the success path. Consumes the guard; `Drop` sees the
    /// flag and stays out of it.
    fn release(mut self) -> Result<()> {
        self.released = true;
        self.cursor.release()
    }
}

impl<T> Drop for CursorGuard<T> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(err) = self.cursor.release() {
            debug!(target: "civreg::registry", cause = %err, "cursor release failed during cleanup");
        }
    }
}

/// Drain a cursor into a `Vec`, mapping each item through `step`.
///
/// `step` may drop an item by returning `Ok(None)` and may fail; its error
/// aborts the drain. Whatever happens, the cursor is released exactly once
/// before this function returns.
///
/// # Errors
/// Propagates the first failure from `advance`, `step`, or the success-path
/// release.
pub(crate) fn drain_cursor<T, U, F>(cursor: Box<dyn Cursor<Item = T>>, mut step: F) -> Result<Vec<U>>
where
    F: FnMut(T) -> Result<Option<U>>,
{
    let mut guard = CursorGuard::new(cursor);
    let mut out = Vec::new();
    while let Some(item) = guard.advance()? {
        if let Some(mapped) = step(item)? {
            out.push(mapped);
        }
    }
    guard.release()?;
    Ok(out)
}
