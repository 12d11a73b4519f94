use {
    anyhow::{Context as _, Result},
    eframe::{
        Frame, Storage,
        egui::{Context, Key},
    },
    poll_promise::Promise,
    std::{mem, sync::Arc, time::Duration},
    tokio::{runtime::Builder, sync::watch},
};

use crate::{
    AppSettings,
    app::{AppState, BootstrapState, RunningState},
    config::{DEMO, DF, PERSISTENCE, TICKER},
    data::{CachedTokenSource, MockTokenSource},
    domain::{Category, TokenRecord},
    engine::{TickerHandle, spawn_ticker},
    models::{DerivedView, TokenSnapshot, UiAction, UiStore},
    ui::{BootstrapAction, FlashTracker, TapeState, render_bootstrap, setup_custom_visuals},
    utils::AppInstant,
};

type FetchResult = Result<Arc<Vec<TokenRecord>>>;

pub struct App {
    /// Category and sort. Persists across sessions.
    pub(crate) store: UiStore,
    pub(crate) settings: AppSettings,
    source: Arc<CachedTokenSource>,
    fetch: Option<Promise<FetchResult>>,
    state: AppState,
    pub(crate) snapshot: Option<TokenSnapshot>,
    snapshot_rx: Option<watch::Receiver<TokenSnapshot>>,
    ticker: Option<TickerHandle>,
    pub(crate) view: DerivedView,
    pub(crate) flashes: FlashTracker,
    pub(crate) selected: Option<String>,
    pub(crate) tape: TapeState,
    /// Error from the last manual refresh, shown as a banner over the table.
    pub(crate) last_error: Option<String>,
    pub(crate) paused: bool,
    pub(crate) show_help: bool,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let mut store: UiStore = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, PERSISTENCE.app.store_key))
            .unwrap_or_default();
        store.reconcile(settings.columns);

        #[cfg(debug_assertions)]
        if DF.log_store {
            log::info!("📂 LOAD [App]: {:?}", store);
        }

        setup_custom_visuals(&cc.egui_ctx);

        let mut app = Self::with_settings(settings, store);
        app.start_fetch(false);
        app
    }

    fn with_settings(settings: AppSettings, store: UiStore) -> Self {
        let mock = MockTokenSource::new(settings.columns)
            .with_latency(settings.latency)
            .with_fail_rate(settings.fail_rate);

        Self {
            store,
            settings,
            source: Arc::new(CachedTokenSource::new(Arc::new(mock), DEMO.stale_time)),
            fetch: None,
            state: AppState::default(),
            snapshot: None,
            snapshot_rx: None,
            ticker: None,
            view: DerivedView::new(),
            flashes: FlashTracker::new(TICKER.flash_duration),
            selected: None,
            tape: TapeState::default(),
            last_error: None,
            paused: false,
            show_help: false,
        }
    }

    /// Kicks off a background fetch unless one is already running. `force`
    /// bypasses the query cache.
    pub(crate) fn start_fetch(&mut self, force: bool) {
        if self.fetch.is_some() {
            return;
        }

        #[cfg(debug_assertions)]
        if DF.log_fetch {
            log::info!("FETCH: starting (force = {})", force);
        }

        let source = self.source.clone();
        self.fetch = Some(Promise::spawn_thread("token-fetch", move || {
            let rt = Builder::new_current_thread()
                .enable_time()
                .build()
                .context("Failed to build fetch runtime")?;
            rt.block_on(async {
                if force {
                    source.refresh().await
                } else {
                    source.load().await
                }
            })
        }));
    }

    pub(crate) fn is_fetching(&self) -> bool {
        self.fetch.is_some()
    }

    /// Takes the fetch result once it is ready.
    fn poll_fetch(&mut self) -> Option<FetchResult> {
        let promise = self.fetch.take()?;
        match promise.try_take() {
            Ok(result) => Some(result),
            Err(pending) => {
                self.fetch = Some(pending);
                None
            }
        }
    }

    /// Opens the detail window for `token`.
    pub(crate) fn select_token(&mut self, token: &TokenRecord) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("SELECTION SET to {} ({})", token.id, token.name);
        }
        self.selected = Some(token.id.clone());
    }

    pub(crate) fn select_token_by_id(&mut self, id: &str) {
        let token = self.snapshot.as_ref().and_then(|s| s.find(id)).cloned();
        if let Some(token) = token {
            self.select_token(&token);
        }
    }

    pub(crate) fn close_detail(&mut self) {
        #[cfg(debug_assertions)]
        if DF.log_selection && self.selected.is_some() {
            log::info!("SELECTION CLEARED");
        }
        self.selected = None;
    }

    pub(crate) fn dispatch(&mut self, action: UiAction) -> bool {
        self.store.dispatch(action, self.settings.columns)
    }

    pub(crate) fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if let Some(ticker) = &self.ticker {
            ticker.set_paused(self.paused);
        }
        log::info!(
            "Price updates {}",
            if self.paused { "paused" } else { "resumed" }
        );
    }

    pub(crate) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let mut actions = Vec::new();
        let (escape, refresh, pause, help, clear_sort) = ctx.input(|i| {
            for (key, category) in [
                (Key::Num1, Category::New),
                (Key::Num2, Category::Stretch),
                (Key::Num3, Category::Migrated),
            ] {
                if i.key_pressed(key) {
                    actions.push(UiAction::SelectCategory(category));
                }
            }
            (
                i.key_pressed(Key::Escape),
                i.key_pressed(Key::R),
                i.key_pressed(Key::P),
                i.key_pressed(Key::H),
                i.key_pressed(Key::C),
            )
        });

        if clear_sort {
            actions.push(UiAction::ClearSort);
        }
        for action in actions {
            self.dispatch(action);
        }
        if escape {
            self.close_detail();
            self.show_help = false;
        }
        if refresh {
            self.start_fetch(true);
        }
        if pause {
            self.toggle_pause();
        }
        if help {
            self.show_help = !self.show_help;
        }
    }

    pub(crate) fn tick_bootstrap_state(
        &mut self,
        ctx: &Context,
        state: &mut BootstrapState,
    ) -> AppState {
        match self.poll_fetch() {
            Some(Ok(tokens)) => match self.start_running(tokens) {
                Ok(()) => return AppState::Running(RunningState),
                Err(e) => {
                    log::error!("Failed to start price ticker: {:#}", e);
                    state.error = Some(format!("{:#}", e));
                }
            },
            Some(Err(e)) => {
                log::error!("Initial token fetch failed: {:#}", e);
                state.error = Some(format!("{:#}", e));
            }
            None => {}
        }

        if render_bootstrap(ctx, state, self.settings.columns) == BootstrapAction::Retry {
            state.error = None;
            self.start_fetch(true);
        }
        if self.is_fetching() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        AppState::Bootstrapping(state.clone())
    }

    /// Hands the first full list to a new ticker. The ticker only ever
    /// starts from here, so it never runs ahead of the initial load.
    fn start_running(&mut self, tokens: Arc<Vec<TokenRecord>>) -> Result<()> {
        let (handle, rx) = spawn_ticker(tokens, self.settings.simulation, self.settings.seed)?;
        if self.paused {
            handle.set_paused(true);
        }

        let snapshot = rx.borrow().clone();
        self.flashes.reset();
        self.flashes.observe(&snapshot.tokens, AppInstant::now());
        self.tape.update_data(&snapshot.tokens);
        self.view.invalidate();

        self.snapshot = Some(snapshot);
        self.snapshot_rx = Some(rx);
        self.ticker = Some(handle);
        Ok(())
    }

    /// Pulls the newest snapshot from the ticker, if one was published.
    fn sync_snapshot(&mut self, now: AppInstant) {
        let Some(rx) = &mut self.snapshot_rx else {
            return;
        };
        if !rx.has_changed().unwrap_or(false) {
            return;
        }
        let snapshot = rx.borrow_and_update().clone();
        self.accept_snapshot(snapshot, now);
    }

    fn accept_snapshot(&mut self, snapshot: TokenSnapshot, now: AppInstant) {
        // A reloaded list is a new baseline, not a burst of price moves.
        if self
            .snapshot
            .as_ref()
            .is_some_and(|current| current.is_new_generation(&snapshot))
        {
            #[cfg(debug_assertions)]
            if DF.log_flash {
                log::info!("FLASH: reset for generation {}", snapshot.generation);
            }
            self.flashes.reset();
        }
        self.flashes.observe(&snapshot.tokens, now);
        self.tape.update_data(&snapshot.tokens);
        self.snapshot = Some(snapshot);
    }

    fn apply_refresh_result(&mut self) {
        match self.poll_fetch() {
            Some(Ok(tokens)) => {
                self.last_error = None;
                if let Some(ticker) = &self.ticker {
                    ticker.reseed(tokens);
                }
            }
            Some(Err(e)) => {
                log::warn!("Token refresh failed: {:#}", e);
                self.last_error = Some(format!("{:#}", e));
            }
            None => {}
        }
    }

    /// RUNNING PHASE MAIN LOOP
    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        let now = AppInstant::now();

        self.apply_refresh_result();
        self.sync_snapshot(now);
        self.flashes.prune(now);
        self.handle_global_shortcuts(ctx);

        if let Some(snapshot) = &self.snapshot {
            self.view.refresh(
                snapshot,
                self.store.active_category(),
                self.store.sort(),
            );
        }

        self.render_top_panel(ctx);
        self.render_ticker_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx, now);
        self.render_detail(ctx);
        self.render_help_panel(ctx);

        self.schedule_repaint(ctx, now);
    }

    fn schedule_repaint(&self, ctx: &Context, now: AppInstant) {
        if let Some(deadline) = self.flashes.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
        if self.is_fetching() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        ctx.request_repaint_after(self.settings.simulation.interval);
    }

    /// True once the ticker has been started and is no longer publishing.
    pub(crate) fn ticker_stopped(&self) -> bool {
        match &self.ticker {
            Some(ticker) => !ticker.is_running(),
            None => self.snapshot.is_some(),
        }
    }

    pub(crate) fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
        self.snapshot_rx = None;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let current = mem::take(&mut self.state);
        self.state = current.tick(self, ctx);
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        #[cfg(debug_assertions)]
        if DF.log_store {
            log::info!("💾 SAVE [App]: {:?}", self.store);
        }
        eframe::set_value(storage, PERSISTENCE.app.store_key, &self.store);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.stop_ticker();
    }
}
