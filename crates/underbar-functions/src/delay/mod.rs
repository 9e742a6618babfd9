//! Deferred, fire-and-forget invocation on the tokio timer

use std::fmt::Display;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, error, trace};
use underbar_core::{UnderbarError, UnderbarResult};

/// Call `func(args)` once, no earlier than `wait_ms` milliseconds from now.
///
/// The call runs on a task of the current tokio runtime and is never made on
/// the caller's stack, even for a zero wait. Nothing is returned to await or
/// cancel; the result of `func` is discarded. Fails with
/// [`UnderbarError::NoRuntime`] when called outside a runtime.
pub fn delay<F, A, R>(func: F, wait_ms: u64, args: A) -> UnderbarResult<()>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: 'static,
{
    let handle = Handle::try_current().map_err(|_| UnderbarError::NoRuntime)?;
    delay_on(&handle, func, wait_ms, args);
    Ok(())
}

/// Like [`delay`], scheduling on an explicit runtime handle
pub fn delay_on<F, A, R>(handle: &Handle, func: F, wait_ms: u64, args: A)
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: 'static,
{
    debug!(wait_ms, "scheduling deferred call");
    handle.spawn(async move {
        tokio::time::sleep(Duration::from_millis(wait_ms)).await;
        trace!(wait_ms, "firing deferred call");
        drop(func(args));
    });
}

/// Like [`delay`] for functions that can fail.
///
/// An error from the deferred call has no caller left to receive it, so it
/// is reported through `tracing` and dropped.
pub fn delay_fallible<F, A, E>(func: F, wait_ms: u64, args: A) -> UnderbarResult<()>
where
    F: FnOnce(A) -> Result<(), E> + Send + 'static,
    A: Send + 'static,
    E: Display + 'static,
{
    delay(
        move |args| {
            if let Err(e) = func(args) {
                error!(error = %e, "deferred call failed");
            }
        },
        wait_ms,
        args,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::sync::oneshot;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_forwards_arguments_after_wait() {
        let (tx, rx) = oneshot::channel();
        let start = Instant::now();

        delay(
            move |(a, b): (&str, &str)| tx.send(format!("{a}{b}")),
            500,
            ("a", "b"),
        )
        .unwrap();

        assert_eq!(rx.await.unwrap(), "ab");
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_fired_before_wait_elapses() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        delay(move |()| flag.store(true, Ordering::SeqCst), 100, ()).unwrap();

        tokio::time::sleep(Duration::from_millis(99)).await;
        assert!(!fired.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_zero_wait_is_still_asynchronous() {
        let (tx, mut rx) = oneshot::channel();

        delay(move |x: i32| tx.send(x), 0, 7).unwrap();

        assert!(rx.try_recv().is_err());
        assert_eq!(rx.await.unwrap(), 7);
    }

    #[test]
    fn test_requires_runtime() {
        let result = delay(|()| (), 10, ());
        assert!(matches!(result, Err(UnderbarError::NoRuntime)));
    }

    #[test]
    fn test_delay_on_explicit_handle() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .unwrap();
        let (tx, rx) = oneshot::channel();

        delay_on(rt.handle(), move |n: u8| tx.send(n * 2), 5, 21);

        assert_eq!(rt.block_on(rx).unwrap(), 42);
    }

    #[tokio::test(start_paused = true)]
    async fn test_many_independent_calls() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        for (wait, label) in [(30, "c"), (10, "a"), (20, "b")] {
            let tx = tx.clone();
            delay(move |label: &'static str| tx.send(label), wait, label).unwrap();
        }
        drop(tx);

        let mut order = Vec::new();
        while let Some(label) = rx.recv().await {
            order.push(label);
        }
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallible_call_runs_and_error_is_absorbed() {
        let (tx, rx) = oneshot::channel();

        delay_fallible(
            move |attempt: u32| {
                let _ = tx.send(attempt);
                Err(format!("attempt {attempt} failed"))
            },
            50,
            1,
        )
        .unwrap();

        assert_eq!(rx.await.unwrap(), 1);
    }
}
