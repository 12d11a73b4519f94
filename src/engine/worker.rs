use {
    super::{messages::TickerCommand, ticker::apply_tick},
    crate::{config::SimulationConfig, domain::TokenRecord, models::TokenSnapshot},
    anyhow::{Context, Result},
    rand::{Rng, SeedableRng, rngs::StdRng},
    std::{
        sync::Arc,
        thread::{self, JoinHandle},
    },
    tokio::{
        runtime::Builder,
        sync::{mpsc, watch},
        time::{self, Instant, MissedTickBehavior},
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// The ticker loop. Publishes a new snapshot on `tx` every `cfg.interval`
/// until told to shut down, the command channel closes, or every receiver
/// of `tx` is gone.
pub async fn run_ticker<R: Rng>(
    initial: Arc<Vec<TokenRecord>>,
    tx: watch::Sender<TokenSnapshot>,
    mut commands: mpsc::UnboundedReceiver<TickerCommand>,
    mut rng: R,
    cfg: SimulationConfig,
) {
    let mut tokens = initial;
    let mut paused = false;

    // First update lands one full period after start, never immediately.
    let mut interval = time::interval_at(Instant::now() + cfg.interval, cfg.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                if paused {
                    continue;
                }
                let Some(outcome) = apply_tick(&tokens, &mut rng, &cfg) else {
                    continue;
                };

                #[cfg(debug_assertions)]
                if DF.log_ticker {
                    log::info!(
                        "TICK: {} {:.6} -> {:.6}",
                        outcome.change.token_id,
                        outcome.change.old_price,
                        outcome.change.new_price
                    );
                }

                tokens = Arc::new(outcome.tokens);
                let next = tx.borrow().next(tokens.clone(), Some(outcome.change));
                if tx.send(next).is_err() {
                    break;
                }
            }
            cmd = commands.recv() => match cmd {
                Some(TickerCommand::Reseed(list)) => {
                    tokens = list;
                    let next = tx.borrow().reseeded(tokens.clone());
                    if tx.send(next).is_err() {
                        break;
                    }
                    interval.reset();
                }
                Some(TickerCommand::Pause(p)) => paused = p,
                Some(TickerCommand::Shutdown) | None => break,
            },
            _ = tx.closed() => break,
        }
    }

    log::info!("Price ticker stopped");
}

/// Owner of a running ticker thread. Dropping it stops the ticker.
pub struct TickerHandle {
    commands: mpsc::UnboundedSender<TickerCommand>,
    thread: Option<JoinHandle<()>>,
}

impl TickerHandle {
    pub fn reseed(&self, tokens: Arc<Vec<TokenRecord>>) {
        self.send(TickerCommand::Reseed(tokens));
    }

    pub fn set_paused(&self, paused: bool) {
        self.send(TickerCommand::Pause(paused));
    }

    /// Stops the loop and waits for the thread. Safe to call more than once.
    pub fn stop(&mut self) {
        self.send(TickerCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("Price ticker thread panicked");
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn send(&self, cmd: TickerCommand) {
        // The loop may already have exited (all receivers dropped).
        let _ = self.commands.send(cmd);
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Starts the ticker on its own thread with a current-thread Tokio runtime.
/// Returns the handle plus a receiver already holding the version 0 snapshot.
pub fn spawn_ticker(
    tokens: Arc<Vec<TokenRecord>>,
    cfg: SimulationConfig,
    seed: Option<u64>,
) -> Result<(TickerHandle, watch::Receiver<TokenSnapshot>)> {
    let (tx, rx) = watch::channel(TokenSnapshot::initial(tokens.clone()));
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();

    let rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let rt = Builder::new_current_thread()
        .enable_time()
        .build()
        .context("Failed to build ticker runtime")?;

    let thread = thread::Builder::new()
        .name("price-ticker".into())
        .spawn(move || rt.block_on(run_ticker(tokens, tx, cmd_rx, rng, cfg)))
        .context("Failed to spawn ticker thread")?;

    log::info!(
        "Price ticker started ({} ms interval)",
        cfg.interval.as_millis()
    );

    Ok((
        TickerHandle {
            commands: cmd_tx,
            thread: Some(thread),
        },
        rx,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::TICKER, domain::Category};
    use std::time::Duration;

    fn tokens() -> Arc<Vec<TokenRecord>> {
        Arc::new(vec![
            TokenRecord::new("1", "Alpha", Category::New),
            TokenRecord::new("2", "Beta", Category::Stretch),
            TokenRecord::new("3", "Gamma", Category::Migrated),
        ])
    }

    fn start(
        list: Arc<Vec<TokenRecord>>,
    ) -> (
        tokio::task::JoinHandle<()>,
        watch::Receiver<TokenSnapshot>,
        mpsc::UnboundedSender<TickerCommand>,
    ) {
        let (tx, rx) = watch::channel(TokenSnapshot::initial(list.clone()));
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_ticker(
            list,
            tx,
            cmd_rx,
            StdRng::seed_from_u64(3),
            TICKER.simulation,
        ));
        (task, rx, cmd_tx)
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_one_change_per_interval() {
        let (task, mut rx, cmd) = start(tokens());
        let started = Instant::now();

        rx.changed().await.unwrap();
        let snap = rx.borrow_and_update().clone();
        assert_eq!(snap.version, 1);
        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert!(snap.last_change.is_some());

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().version, 2);
        assert!(started.elapsed() >= Duration::from_millis(4000));

        cmd.send(TickerCommand::Shutdown).unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_before_first_interval() {
        let (task, rx, cmd) = start(tokens());
        time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(rx.borrow().version, 0);
        assert!(!rx.has_changed().unwrap());
        cmd.send(TickerCommand::Shutdown).unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn exits_when_receivers_drop() {
        let (task, rx, _cmd) = start(tokens());
        drop(rx);
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn exits_when_commands_close() {
        let (task, _rx, cmd) = start(tokens());
        drop(cmd);
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn reseed_publishes_new_list() {
        let (task, mut rx, cmd) = start(tokens());
        let fresh = Arc::new(vec![TokenRecord::new("9", "Zeta", Category::New)]);
        cmd.send(TickerCommand::Reseed(fresh.clone())).unwrap();

        rx.changed().await.unwrap();
        let snap = rx.borrow_and_update().clone();
        assert_eq!(snap.version, 1);
        assert_eq!(snap.generation, 1);
        assert!(snap.last_change.is_none());
        assert_eq!(snap.tokens.len(), 1);
        assert_eq!(snap.tokens[0].id, "9");

        rx.changed().await.unwrap();
        let snap = rx.borrow().clone();
        assert_eq!(snap.last_change.map(|c| c.token_id).as_deref(), Some("9"));

        cmd.send(TickerCommand::Shutdown).unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn paused_ticker_publishes_nothing() {
        let (task, mut rx, cmd) = start(tokens());
        cmd.send(TickerCommand::Pause(true)).unwrap();
        time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(rx.borrow().version, 0);

        cmd.send(TickerCommand::Pause(false)).unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().version, 1);

        cmd.send(TickerCommand::Shutdown).unwrap();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn empty_list_never_publishes() {
        let (task, rx, cmd) = start(Arc::new(Vec::new()));
        time::sleep(Duration::from_millis(6_000)).await;
        assert_eq!(rx.borrow().version, 0);
        cmd.send(TickerCommand::Shutdown).unwrap();
        task.await.unwrap();
    }

    #[test]
    fn handle_stops_thread() {
        let (mut handle, rx) = spawn_ticker(tokens(), TICKER.simulation, Some(1)).unwrap();
        assert_eq!(rx.borrow().version, 0);
        handle.stop();
        assert!(!handle.is_running());
        handle.stop();
    }
}
