//! Debounced, cancelable wrapper around an async operation
//!
//! Coalesces rapid repeated triggers into a single call using only the most
//! recent arguments. Queued (not-yet-fired) triggers are coalesced; an
//! in-flight operation is never superseded. A trigger arriving while one is
//! running queues behind it with its deadline counted from the trigger, so
//! it fires as soon as the running call resolves if that deadline has
//! already passed. At most one operation runs per coordinator at a time.

use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

/// Default debounce window.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Boxed future returned by a coordinated operation.
pub type OpFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;
type SuccessCallback<T> = Box<dyn Fn(&T) + Send + Sync>;
type ErrorCallback<E> = Box<dyn Fn(&E) + Send + Sync>;

/// Options for a [`DebounceCoordinator`].
pub struct DebounceOptions<T, E> {
    /// Debounce window; each trigger restarts it from zero.
    pub delay: Duration,

    /// When false, triggers record pending arguments but nothing fires.
    /// Flipping back to true does not fire by itself; the next trigger
    /// resumes. This mirrors the consuming view's behaviour and is a
    /// documented limitation, not an oversight.
    pub enabled: bool,

    /// Invoked after a resolution has been stored, with no internal lock
    /// held, so callbacks may call the coordinator's accessors.
    pub on_success: Option<SuccessCallback<T>>,
    pub on_error: Option<ErrorCallback<E>>,
}

impl<T, E> Default for DebounceOptions<T, E> {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            enabled: true,
            on_success: None,
            on_error: None,
        }
    }
}

enum Command<Args> {
    Trigger(Args),
    Reset,
    SetEnabled(bool),
    Dispose,
}

struct State<T> {
    result: Option<T>,
    error: Option<String>,
    is_loading: bool,
    /// Bumped on reset/dispose, under the same lock that guards the rest of
    /// the state, so a stale in-flight resolution is ignored. Completions
    /// re-check it inside the lock before writing.
    epoch: u64,
}

impl<T> Default for State<T> {
    fn default() -> Self {
        Self {
            result: None,
            error: None,
            is_loading: false,
            epoch: 0,
        }
    }
}

struct Shared<T> {
    state: Mutex<State<T>>,
    /// Liveness flag tied to the consumer's lifetime. Once cleared, any
    /// eventual resolution is discarded without mutating state or invoking
    /// callbacks.
    alive: AtomicBool,
}

/// Debounced request coordinator over an arbitrary async operation.
pub struct DebounceCoordinator<Args, T> {
    shared: Arc<Shared<T>>,
    tx: mpsc::UnboundedSender<Command<Args>>,
}

impl<Args, T> DebounceCoordinator<Args, T>
where
    Args: Send + 'static,
    T: Clone + Send + 'static,
{
    /// Create a coordinator and spawn its worker task.
    pub fn new<Op, E>(op: Op, options: DebounceOptions<T, E>) -> Self
    where
        Op: Fn(Args) -> OpFuture<T, E> + Send + Sync + 'static,
        E: Display + Send + 'static,
    {
        let shared = Arc::new(Shared {
            state: Mutex::new(State::default()),
            alive: AtomicBool::new(true),
        });

        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(worker(
            rx,
            Arc::clone(&shared),
            Arc::new(op),
            options,
        ));

        Self { shared, tx }
    }
}

impl<Args, T> DebounceCoordinator<Args, T> {
    /// Record `args` as the latest pending call and restart the debounce
    /// timer from zero.
    pub fn trigger(&self, args: Args) {
        let _ = self.tx.send(Command::Trigger(args));
    }

    /// Clear result, error, loading, and any pending or in-flight trigger
    /// state back to idle.
    pub fn reset(&self) {
        {
            let mut state = self.shared.state.lock().unwrap();
            state.epoch += 1;
            state.result = None;
            state.error = None;
            state.is_loading = false;
        }
        let _ = self.tx.send(Command::Reset);
    }

    /// Enable or disable firing. Disabling keeps pending arguments but
    /// silences the timer.
    pub fn set_enabled(&self, enabled: bool) {
        let _ = self.tx.send(Command::SetEnabled(enabled));
    }

    /// Mark the coordinator dead. A pending timer never fires afterwards
    /// and an in-flight resolution is silently discarded.
    pub fn dispose(&self) {
        self.shared.alive.store(false, Ordering::SeqCst);
        self.shared.state.lock().unwrap().epoch += 1;
        let _ = self.tx.send(Command::Dispose);
    }

    pub fn is_loading(&self) -> bool {
        self.shared.state.lock().unwrap().is_loading
    }

    pub fn error_message(&self) -> Option<String> {
        self.shared.state.lock().unwrap().error.clone()
    }
}

impl<Args, T: Clone> DebounceCoordinator<Args, T> {
    pub fn result(&self) -> Option<T> {
        self.shared.state.lock().unwrap().result.clone()
    }
}

impl<Args, T> Drop for DebounceCoordinator<Args, T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

async fn worker<Args, T, E, Op>(
    mut rx: mpsc::UnboundedReceiver<Command<Args>>,
    shared: Arc<Shared<T>>,
    op: Arc<Op>,
    options: DebounceOptions<T, E>,
) where
    Args: Send + 'static,
    T: Clone + Send + 'static,
    E: Display + Send + 'static,
    Op: Fn(Args) -> OpFuture<T, E> + Send + Sync + 'static,
{
    let DebounceOptions {
        delay,
        mut enabled,
        on_success,
        on_error,
    } = options;

    let callbacks = Arc::new((on_success, on_error));

    let mut pending: Option<Args> = None;
    let mut deadline: Option<Instant> = None;
    let mut in_flight = false;

    // Completion signals from spawned operations.
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<()>();

    loop {
        tokio::select! {
            // Queued commands win over an expired timer, so a reset that
            // arrived before the deadline always cancels the pending call.
            biased;

            cmd = rx.recv() => match cmd {
                Some(Command::Trigger(args)) => {
                    pending = Some(args);
                    if enabled {
                        deadline = Some(Instant::now() + delay);
                    }
                }
                Some(Command::Reset) => {
                    pending = None;
                    deadline = None;
                    // Handle state was already cleared; the epoch bump
                    // invalidates whatever is still in flight.
                }
                Some(Command::SetEnabled(value)) => {
                    enabled = value;
                    if !enabled {
                        deadline = None;
                    }
                }
                Some(Command::Dispose) | None => break,
            },
            Some(()) = done_rx.recv() => {
                in_flight = false;
            }
            _ = tokio::time::sleep_until(deadline.unwrap_or_else(Instant::now)),
                if enabled && !in_flight && deadline.is_some() && pending.is_some() =>
            {
                deadline = None;
                let args = pending.take().expect("guarded by pending.is_some()");

                if !shared.alive.load(Ordering::SeqCst) {
                    break;
                }

                in_flight = true;
                // Epoch capture and the loading flag share one lock
                // acquisition, so a concurrent reset either lands wholly
                // before (we fire in the new epoch) or wholly after (it
                // clears the flag and the completion is discarded).
                let epoch = {
                    let mut state = shared.state.lock().unwrap();
                    state.is_loading = true;
                    state.error = None;
                    state.epoch
                };

                let fut = op(args);
                let shared = Arc::clone(&shared);
                let callbacks = Arc::clone(&callbacks);
                let done_tx = done_tx.clone();

                tokio::spawn(async move {
                    let outcome = fut.await;

                    let live = {
                        let mut state = shared.state.lock().unwrap();
                        let live = shared.alive.load(Ordering::SeqCst)
                            && state.epoch == epoch;
                        if live {
                            state.is_loading = false;
                            match &outcome {
                                Ok(value) => {
                                    state.result = Some(value.clone());
                                    state.error = None;
                                }
                                Err(err) => {
                                    // Prior result stays visible alongside
                                    // the error until the next successful
                                    // call.
                                    state.error = Some(err.to_string());
                                }
                            }
                        }
                        live
                    };

                    // Lock released; callbacks may re-enter the accessors.
                    if live {
                        match &outcome {
                            Ok(value) => {
                                if let Some(cb) = callbacks.0.as_ref() {
                                    cb(value);
                                }
                            }
                            Err(err) => {
                                if let Some(cb) = callbacks.1.as_ref() {
                                    cb(err);
                                }
                            }
                        }
                    }

                    let _ = done_tx.send(());
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_op(
        calls: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<u32>>>,
    ) -> impl Fn(u32) -> OpFuture<u32, String> + Send + Sync + 'static {
        move |arg: u32| {
            calls.fetch_add(1, Ordering::SeqCst);
            seen.lock().unwrap().push(arg);
            Box::pin(async move { Ok(arg * 10) })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn coalesces_rapid_triggers_into_one_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let coordinator = DebounceCoordinator::new(
            counting_op(Arc::clone(&calls), Arc::clone(&seen)),
            DebounceOptions::default(),
        );

        coordinator.trigger(1);
        tokio::time::sleep(Duration::from_millis(100)).await;
        coordinator.trigger(2);
        tokio::time::sleep(Duration::from_millis(100)).await;
        coordinator.trigger(3);

        // Debounce window restarts from the last trigger at t=200.
        tokio::time::sleep(Duration::from_millis(499)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), vec![3]);
        assert_eq!(coordinator.result(), Some(30));
        assert!(!coordinator.is_loading());
        assert!(coordinator.error_message().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn error_keeps_prior_result_visible() {
        let fail_next = Arc::new(AtomicBool::new(false));
        let fail = Arc::clone(&fail_next);
        let coordinator: DebounceCoordinator<u32, u32> = DebounceCoordinator::new(
            move |arg: u32| {
                let fail = Arc::clone(&fail);
                Box::pin(async move {
                    if fail.load(Ordering::SeqCst) {
                        Err("boom".to_string())
                    } else {
                        Ok(arg)
                    }
                }) as OpFuture<u32, String>
            },
            DebounceOptions::default(),
        );

        coordinator.trigger(7);
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(coordinator.result(), Some(7));

        fail_next.store(true, Ordering::SeqCst);
        coordinator.trigger(8);
        tokio::time::sleep(Duration::from_millis(600)).await;

        // Stale-but-visible: the old result survives alongside the error.
        assert_eq!(coordinator.result(), Some(7));
        assert_eq!(coordinator.error_message(), Some("boom".to_string()));
        assert!(!coordinator.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_returns_to_idle_from_any_state() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let coordinator = DebounceCoordinator::new(
            counting_op(Arc::clone(&calls), Arc::clone(&seen)),
            DebounceOptions::default(),
        );

        // Reset while pending: timer never fires.
        coordinator.trigger(1);
        coordinator.reset();
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(coordinator.result(), None);
        assert!(coordinator.error_message().is_none());
        assert!(!coordinator.is_loading());

        // Reset after a completed call clears the result.
        coordinator.trigger(2);
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(coordinator.result(), Some(20));
        coordinator.reset();
        assert_eq!(coordinator.result(), None);
        assert!(!coordinator.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_mid_flight_clears_loading_and_discards_resolution() {
        let completions = Arc::new(AtomicUsize::new(0));
        let cb_completions = Arc::clone(&completions);
        let coordinator: DebounceCoordinator<u32, u32> = DebounceCoordinator::new(
            move |arg: u32| {
                Box::pin(async move {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                    Ok(arg)
                }) as OpFuture<u32, String>
            },
            DebounceOptions {
                on_success: Some(Box::new(move |_: &u32| {
                    cb_completions.fetch_add(1, Ordering::SeqCst);
                })),
                ..Default::default()
            },
        );

        coordinator.trigger(5);
        tokio::time::sleep(Duration::from_millis(550)).await;
        assert!(coordinator.is_loading());

        // Idle means idle, immediately and permanently: the in-flight
        // resolution must neither flip is_loading back nor surface a result.
        coordinator.reset();
        assert!(!coordinator.is_loading());

        tokio::time::sleep(Duration::from_millis(1_000)).await;
        assert!(!coordinator.is_loading());
        assert_eq!(coordinator.result(), None);
        assert_eq!(completions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_discards_pending_and_in_flight_work() {
        let calls = Arc::new(AtomicUsize::new(0));
        let completions = Arc::new(AtomicUsize::new(0));
        let calls_op = Arc::clone(&calls);
        let coordinator: DebounceCoordinator<u32, u32> = DebounceCoordinator::new(
            move |arg: u32| {
                calls_op.fetch_add(1, Ordering::SeqCst);
                Box::pin(async move {
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    Ok(arg)
                }) as OpFuture<u32, String>
            },
            DebounceOptions {
                on_success: Some(Box::new({
                    let completions = Arc::clone(&completions);
                    move |_: &u32| {
                        completions.fetch_add(1, Ordering::SeqCst);
                    }
                })),
                ..Default::default()
            },
        );

        // Tear down before the timer fires: the op never runs.
        coordinator.trigger(1);
        tokio::time::sleep(Duration::from_millis(100)).await;
        coordinator.dispose();
        tokio::time::sleep(Duration::from_millis(1_000)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(completions.load(Ordering::SeqCst), 0);
        assert_eq!(coordinator.result(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_mid_flight_discards_resolution_silently() {
        let completions = Arc::new(AtomicUsize::new(0));
        let coordinator: DebounceCoordinator<u32, u32> = DebounceCoordinator::new(
            move |arg: u32| {
                Box::pin(async move {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                    Ok(arg)
                }) as OpFuture<u32, String>
            },
            DebounceOptions {
                on_success: Some(Box::new({
                    let completions = Arc::clone(&completions);
                    move |_: &u32| {
                        completions.fetch_add(1, Ordering::SeqCst);
                    }
                })),
                ..Default::default()
            },
        );

        coordinator.trigger(5);
        tokio::time::sleep(Duration::from_millis(550)).await;
        assert!(coordinator.is_loading());

        coordinator.dispose();
        tokio::time::sleep(Duration::from_millis(1_000)).await;

        assert_eq!(completions.load(Ordering::SeqCst), 0);
        assert_eq!(coordinator.result(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_coordinator_records_but_never_fires() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let coordinator = DebounceCoordinator::new(
            counting_op(Arc::clone(&calls), Arc::clone(&seen)),
            DebounceOptions {
                enabled: false,
                ..Default::default()
            },
        );

        coordinator.trigger(1);
        tokio::time::sleep(Duration::from_millis(2_000)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        // Enabling alone does not fire; the next trigger resumes.
        coordinator.set_enabled(true);
        tokio::time::sleep(Duration::from_millis(2_000)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        coordinator.trigger(2);
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock().unwrap(), vec![2]);
    }

    #[tokio::test(start_paused = true)]
    async fn trigger_during_flight_queues_behind_without_duplication() {
        let active = Arc::new(AtomicUsize::new(0));
        let max_active = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let op_active = Arc::clone(&active);
        let op_max = Arc::clone(&max_active);
        let op_seen = Arc::clone(&seen);
        let coordinator: DebounceCoordinator<u32, u32> = DebounceCoordinator::new(
            move |arg: u32| {
                let active = Arc::clone(&op_active);
                let max_active = Arc::clone(&op_max);
                op_seen.lock().unwrap().push(arg);
                Box::pin(async move {
                    let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                    max_active.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(400)).await;
                    active.fetch_sub(1, Ordering::SeqCst);
                    Ok(arg)
                }) as OpFuture<u32, String>
            },
            DebounceOptions::default(),
        );

        coordinator.trigger(1);
        // First op starts at t=500 and runs until t=900.
        tokio::time::sleep(Duration::from_millis(600)).await;
        coordinator.trigger(2);
        tokio::time::sleep(Duration::from_millis(2_000)).await;

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
        assert_eq!(max_active.load(Ordering::SeqCst), 1);
        assert_eq!(coordinator.result(), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn queued_trigger_fires_at_completion_once_its_deadline_passed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_op = Arc::clone(&calls);
        let coordinator: DebounceCoordinator<u32, u32> = DebounceCoordinator::new(
            move |arg: u32| {
                calls_op.fetch_add(1, Ordering::SeqCst);
                Box::pin(async move {
                    tokio::time::sleep(Duration::from_millis(800)).await;
                    Ok(arg)
                }) as OpFuture<u32, String>
            },
            DebounceOptions::default(),
        );

        // First op runs t=500..1300; the queued trigger's deadline (t=1100)
        // expires while it is still in flight.
        coordinator.trigger(1);
        tokio::time::sleep(Duration::from_millis(600)).await;
        coordinator.trigger(2);

        tokio::time::sleep(Duration::from_millis(690)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // The deadline is counted from the trigger, not from the first
        // op's completion, so the queued call starts right at t=1300.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn success_callback_may_reenter_accessors() {
        let slot: Arc<Mutex<Option<Arc<DebounceCoordinator<u32, u32>>>>> =
            Arc::new(Mutex::new(None));
        let observed: Arc<Mutex<Option<(bool, Option<u32>)>>> = Arc::new(Mutex::new(None));

        let cb_slot = Arc::clone(&slot);
        let cb_observed = Arc::clone(&observed);
        let coordinator = Arc::new(DebounceCoordinator::new(
            |arg: u32| Box::pin(async move { Ok(arg) }) as OpFuture<u32, String>,
            DebounceOptions {
                on_success: Some(Box::new(move |_: &u32| {
                    // Consumers refresh their view from inside the callback;
                    // accessors must be callable here and see settled state.
                    let coordinator = cb_slot
                        .lock()
                        .unwrap()
                        .clone()
                        .expect("slot filled before trigger");
                    *cb_observed.lock().unwrap() =
                        Some((coordinator.is_loading(), coordinator.result()));
                })),
                ..Default::default()
            },
        ));
        *slot.lock().unwrap() = Some(Arc::clone(&coordinator));

        coordinator.trigger(4);
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(coordinator.result(), Some(4));
        assert_eq!(*observed.lock().unwrap(), Some((false, Some(4))));
    }
}
