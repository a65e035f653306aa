//! Dashboard use case: runs the reducer and executes its effects.
//!
//! Every event, whether it comes from the user or from a finished background
//! task, goes through [`DashboardUseCase::dispatch`], which holds the state
//! lock for the whole reduce + effect step. Transitions therefore never
//! interleave.
//!
//! Background work (a location request, the voice listening delay) runs in
//! spawned tasks that report back by sending a [`DashboardEvent`] on the
//! completion channel. The event loop feeds those events into `dispatch`.

use agrimitra_core::chart::ChartFeed;
use agrimitra_core::config::DashboardConfig;
use agrimitra_core::error::{AgriError, Result};
use agrimitra_core::geo::{GeolocationProvider, ImageryProvider, RequestId};
use agrimitra_core::language::Language;
use agrimitra_core::metrics::Advisor;
use agrimitra_core::notice::{Notice, NoticeKind};
use agrimitra_core::profile::ProfileField;
use agrimitra_core::state::{AppState, DashboardEvent, Effect, RecommendationAction, reduce};
use agrimitra_core::view::{ActiveTab, Layout, Screen, compose};
use agrimitra_core::voice::{Ticket, VoiceMode};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;

/// Number of notices kept for `recent_notices`.
const NOTICE_HISTORY: usize = 20;

/// Timing knobs taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeSettings {
    pub listen_delay: Duration,
    pub geolocation_timeout: Duration,
}

impl RuntimeSettings {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            listen_delay: config.voice.listen_delay(),
            geolocation_timeout: config.geolocation.timeout(),
        }
    }
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

/// External collaborators of the dashboard.
pub struct DashboardServices {
    pub geolocation: Arc<dyn GeolocationProvider>,
    pub imagery: Arc<dyn ImageryProvider>,
    pub advisor: Arc<dyn Advisor>,
    pub chart_feed: Arc<dyn ChartFeed>,
    /// Receives every notice as it is produced.
    pub notice_sender: Option<UnboundedSender<Notice>>,
}

struct DashboardInner {
    state: AppState,
    /// Outstanding listening delay and the ticket it will fire for.
    voice_delay: Option<(Ticket, CancellationToken)>,
    recent_notices: VecDeque<Notice>,
}

pub struct DashboardUseCase {
    inner: Mutex<DashboardInner>,
    services: DashboardServices,
    settings: RuntimeSettings,
    completions: UnboundedSender<DashboardEvent>,
}

impl DashboardUseCase {
    /// Builds the use case and starts its event loop.
    ///
    /// Must be called from within a tokio runtime. The loop stops once the
    /// returned handle (and every clone of it) is dropped.
    pub fn start(
        initial_state: AppState,
        settings: RuntimeSettings,
        services: DashboardServices,
    ) -> Arc<Self> {
        let (completions, receiver) = mpsc::unbounded_channel();
        let usecase = Arc::new(Self {
            inner: Mutex::new(DashboardInner {
                state: initial_state,
                voice_delay: None,
                recent_notices: VecDeque::with_capacity(NOTICE_HISTORY),
            }),
            services,
            settings,
            completions,
        });
        usecase.spawn_event_loop(receiver);
        tracing::info!("[DashboardUseCase] Started");
        usecase
    }

    /// Convenience constructor wiring state and timings from configuration.
    pub fn from_config(config: &DashboardConfig, services: DashboardServices) -> Arc<Self> {
        Self::start(
            AppState::from_config(config),
            RuntimeSettings::from_config(config),
            services,
        )
    }

    fn spawn_event_loop(self: &Arc<Self>, mut receiver: UnboundedReceiver<DashboardEvent>) {
        let usecase = Arc::downgrade(self);
        tokio::spawn(async move {
            while let Some(event) = receiver.recv().await {
                let Some(usecase) = usecase.upgrade() else {
                    break;
                };
                usecase.dispatch(event).await;
            }
            tracing::debug!("[DashboardUseCase] Event loop stopped");
        });
    }

    /// Applies one event and runs the resulting effects.
    ///
    /// Returns the notices the event produced.
    pub async fn dispatch(&self, event: DashboardEvent) -> Vec<Notice> {
        let mut inner = self.inner.lock().await;

        if let DashboardEvent::VoiceDelayFired { ticket } = event
            && matches!(inner.voice_delay, Some((pending, _)) if pending == ticket)
        {
            inner.voice_delay = None;
        }

        let effects = reduce(&mut inner.state, event);
        self.execute_effects(&mut inner, effects)
    }

    fn execute_effects(&self, inner: &mut DashboardInner, effects: Vec<Effect>) -> Vec<Notice> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::Notify(notice) => {
                    self.publish_notice(inner, notice.clone());
                    notices.push(notice);
                }
                Effect::RequestLocation { request_id } => self.spawn_location_request(request_id),
                Effect::ScheduleVoiceDelay { ticket } => self.schedule_voice_delay(inner, ticket),
                Effect::CancelVoiceDelay => {
                    if let Some((ticket, token)) = inner.voice_delay.take() {
                        tracing::debug!("[VoiceAssistant] Cancelling delay for ticket {}", ticket);
                        token.cancel();
                    }
                }
            }
        }
        notices
    }

    fn publish_notice(&self, inner: &mut DashboardInner, notice: Notice) {
        tracing::info!("[Notice] {:?}: {}", notice.kind, notice.message);
        if inner.recent_notices.len() == NOTICE_HISTORY {
            inner.recent_notices.pop_front();
        }
        inner.recent_notices.push_back(notice.clone());

        if let Some(sender) = &self.services.notice_sender
            && sender.send(notice).is_err()
        {
            tracing::debug!("[Notice] Receiver dropped; notice kept in history only");
        }
    }

    fn spawn_location_request(&self, request_id: RequestId) {
        let geolocation = Arc::clone(&self.services.geolocation);
        let imagery = Arc::clone(&self.services.imagery);
        let completions = self.completions.clone();
        let timeout = self.settings.geolocation_timeout;

        tokio::spawn(async move {
            let event =
                match tokio::time::timeout(timeout, geolocation.current_position()).await {
                    Ok(Ok(coordinates)) => {
                        let imagery_ref = match imagery
                            .lookup(coordinates.latitude, coordinates.longitude)
                            .await
                        {
                            Ok(url) => Some(url),
                            Err(e) => {
                                tracing::warn!(
                                    "[Geolocation] Imagery lookup failed for request {}: {}",
                                    request_id,
                                    e
                                );
                                None
                            }
                        };
                        DashboardEvent::GeoResolved {
                            request_id,
                            latitude: coordinates.latitude,
                            longitude: coordinates.longitude,
                            imagery_ref,
                        }
                    }
                    Ok(Err(error)) => DashboardEvent::GeoFailed { request_id, error },
                    Err(_) => DashboardEvent::GeoFailed {
                        request_id,
                        error: AgriError::LocationTimeout,
                    },
                };

            if completions.send(event).is_err() {
                tracing::debug!(
                    "[Geolocation] Dashboard gone before request {} completed",
                    request_id
                );
            }
        });
    }

    fn schedule_voice_delay(&self, inner: &mut DashboardInner, ticket: Ticket) {
        let token = CancellationToken::new();
        if let Some((stale, previous)) = inner.voice_delay.replace((ticket, token.clone())) {
            tracing::debug!("[VoiceAssistant] Replacing delay for ticket {}", stale);
            previous.cancel();
        }

        let completions = self.completions.clone();
        let delay = self.settings.listen_delay;
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    tracing::debug!("[VoiceAssistant] Delay for ticket {} cancelled", ticket);
                }
                _ = tokio::time::sleep(delay) => {
                    if completions.send(DashboardEvent::VoiceDelayFired { ticket }).is_err() {
                        tracing::debug!(
                            "[VoiceAssistant] Dashboard gone before delay for ticket {} fired",
                            ticket
                        );
                    }
                }
            }
        });
    }

    // ============================================================================
    // Operations
    // ============================================================================

    /// Submits the login form.
    ///
    /// # Errors
    ///
    /// `MissingCredentials` when either field is empty, whether or not the
    /// session is already open; a notice is also published.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let notices = self
            .dispatch(DashboardEvent::LoginSubmitted {
                username: username.to_string(),
                password: password.to_string(),
            })
            .await;

        if notices
            .iter()
            .any(|n| n.kind == NoticeKind::MissingCredentials)
        {
            Err(AgriError::MissingCredentials)
        } else {
            Ok(())
        }
    }

    pub async fn set_field(&self, field: ProfileField, value: impl Into<String>) {
        self.dispatch(DashboardEvent::FieldEdited {
            field,
            value: value.into(),
        })
        .await;
    }

    pub async fn select_language(&self, language: Language) {
        self.dispatch(DashboardEvent::LanguageSelected { language })
            .await;
    }

    /// Starts a location request without waiting for it.
    ///
    /// The outcome arrives later through the event loop. Calling this again
    /// while a request is in flight starts a second, independent request.
    ///
    /// # Errors
    ///
    /// - `SessionLocked` before login; nothing is issued or published
    /// - `CapabilityUnavailable` when the runtime cannot locate the device; a
    ///   notice is also published and no request is issued
    pub async fn request_location(&self) -> Result<()> {
        // The gate never closes again once open, so the check cannot go stale.
        if !self.inner.lock().await.state.session.authenticated {
            tracing::info!("[Geolocation] Request refused before login");
            return Err(AgriError::SessionLocked);
        }

        let capability_available = self.services.geolocation.is_available();
        self.dispatch(DashboardEvent::LocationRequested {
            capability_available,
        })
        .await;

        if capability_available {
            Ok(())
        } else {
            Err(AgriError::CapabilityUnavailable)
        }
    }

    /// Flips the voice assistant and returns the new mode.
    pub async fn toggle_voice(&self) -> VoiceMode {
        self.dispatch(DashboardEvent::VoiceToggled).await;
        self.inner.lock().await.state.voice.mode
    }

    pub async fn select_tab(&self, tab: ActiveTab) {
        self.dispatch(DashboardEvent::TabSelected { tab }).await;
    }

    pub async fn recommendation_action(&self, action: RecommendationAction) -> Vec<Notice> {
        self.dispatch(DashboardEvent::RecommendationAction { action })
            .await
    }

    // ============================================================================
    // Queries
    // ============================================================================

    /// Copy of the current state.
    pub async fn snapshot(&self) -> AppState {
        self.inner.lock().await.state.clone()
    }

    /// Screen for the given viewport class.
    pub async fn screen(&self, layout: Layout) -> Screen {
        let inner = self.inner.lock().await;
        compose(
            &inner.state,
            layout,
            self.services.advisor.as_ref(),
            self.services.chart_feed.as_ref(),
        )
    }

    /// Most recent notices, oldest first.
    pub async fn recent_notices(&self) -> Vec<Notice> {
        self.inner
            .lock()
            .await
            .recent_notices
            .iter()
            .cloned()
            .collect()
    }

    /// Whether a listening delay is still scheduled.
    pub async fn has_pending_voice_delay(&self) -> bool {
        self.inner.lock().await.voice_delay.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrimitra_core::geo::GeoStatus;
    use agrimitra_core::metrics::RuleBasedAdvisor;
    use agrimitra_core::view::PanelView;
    use agrimitra_core::voice::{DEFAULT_ADVISORY_TIP, LISTENING_MESSAGE, STOPPED_MESSAGE};
    use agrimitra_infrastructure::{
        FailingGeolocationProvider, FixedGeolocationProvider, PlaceholderImageryProvider,
        StaticChartFeed, UnavailableGeolocationProvider,
    };

    fn services(geolocation: Arc<dyn GeolocationProvider>) -> DashboardServices {
        DashboardServices {
            geolocation,
            imagery: Arc::new(PlaceholderImageryProvider::default()),
            advisor: Arc::new(RuleBasedAdvisor),
            chart_feed: Arc::new(StaticChartFeed),
            notice_sender: None,
        }
    }

    async fn logged_in(geolocation: Arc<dyn GeolocationProvider>) -> Arc<DashboardUseCase> {
        let usecase =
            DashboardUseCase::start(AppState::new(), RuntimeSettings::default(), services(geolocation));
        usecase.login("ramesh", "pw").await.unwrap();
        usecase
    }

    async fn settle(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_gate() {
        let usecase = DashboardUseCase::start(
            AppState::new(),
            RuntimeSettings::default(),
            services(Arc::new(UnavailableGeolocationProvider)),
        );

        assert!(matches!(usecase.screen(Layout::Wide).await, Screen::Login(_)));
        assert_eq!(
            usecase.login("", "pw").await,
            Err(AgriError::MissingCredentials)
        );
        assert_eq!(
            usecase.recent_notices().await[0].kind,
            NoticeKind::MissingCredentials
        );

        usecase.login("ramesh", "pw").await.unwrap();
        assert!(matches!(
            usecase.screen(Layout::Wide).await,
            Screen::Dashboard(_)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_contract_holds_on_open_session() {
        let usecase = logged_in(Arc::new(UnavailableGeolocationProvider)).await;

        assert_eq!(
            usecase.login("", "").await,
            Err(AgriError::MissingCredentials)
        );
        let notices = usecase.recent_notices().await;
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::MissingCredentials);

        assert_eq!(usecase.login("someone", "else").await, Ok(()));
        assert_eq!(usecase.snapshot().await.session.username, "ramesh");
    }

    #[tokio::test(start_paused = true)]
    async fn test_location_refused_before_login() {
        let usecase = DashboardUseCase::start(
            AppState::new(),
            RuntimeSettings::default(),
            services(Arc::new(FixedGeolocationProvider::new(12.34, 56.78))),
        );

        assert_eq!(
            usecase.request_location().await,
            Err(AgriError::SessionLocked)
        );
        settle(Duration::from_millis(10)).await;

        let geo = usecase.snapshot().await.geo;
        assert!(geo.in_flight.is_empty());
        assert!(geo.fix.is_none());
        assert!(usecase.recent_notices().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_voice_single_toggle_delivers_tip() {
        let usecase = logged_in(Arc::new(UnavailableGeolocationProvider)).await;

        assert_eq!(usecase.toggle_voice().await, VoiceMode::Listening);
        assert_eq!(usecase.snapshot().await.voice.message, LISTENING_MESSAGE);
        assert!(usecase.has_pending_voice_delay().await);

        settle(Duration::from_millis(3000)).await;

        let voice = usecase.snapshot().await.voice;
        assert_eq!(voice.mode, VoiceMode::Idle);
        assert_eq!(voice.message, DEFAULT_ADVISORY_TIP);
        assert!(!usecase.has_pending_voice_delay().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_voice_stop_cancels_pending_delay() {
        let usecase = logged_in(Arc::new(UnavailableGeolocationProvider)).await;

        usecase.toggle_voice().await;
        assert_eq!(usecase.toggle_voice().await, VoiceMode::Idle);
        assert!(!usecase.has_pending_voice_delay().await);

        settle(Duration::from_millis(5000)).await;

        let voice = usecase.snapshot().await.voice;
        assert_eq!(voice.mode, VoiceMode::Idle);
        assert_eq!(voice.message, STOPPED_MESSAGE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_voice_restart_is_not_ended_by_earlier_delay() {
        let usecase = logged_in(Arc::new(UnavailableGeolocationProvider)).await;

        usecase.toggle_voice().await;
        settle(Duration::from_millis(2000)).await;
        usecase.toggle_voice().await;
        usecase.toggle_voice().await;

        // First period's delay would have fired at 2500ms.
        settle(Duration::from_millis(1000)).await;
        let voice = usecase.snapshot().await.voice;
        assert_eq!(voice.mode, VoiceMode::Listening);
        assert_eq!(voice.message, LISTENING_MESSAGE);

        settle(Duration::from_millis(2000)).await;
        assert_eq!(usecase.snapshot().await.voice.message, DEFAULT_ADVISORY_TIP);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_delay_outlives_dropped_dashboard() {
        let usecase = logged_in(Arc::new(UnavailableGeolocationProvider)).await;
        usecase.toggle_voice().await;
        let weak = Arc::downgrade(&usecase);
        drop(usecase);

        // The delay fires after the dashboard is gone.
        settle(Duration::from_millis(6000)).await;
        assert!(weak.upgrade().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_location_success() {
        let usecase = logged_in(Arc::new(FixedGeolocationProvider::new(12.34, 56.78))).await;

        usecase.request_location().await.unwrap();
        settle(Duration::from_millis(10)).await;

        let geo = usecase.snapshot().await.geo;
        let fix = geo.fix.expect("fix published");
        assert_eq!((fix.latitude, fix.longitude), (12.34, 56.78));
        assert!(fix.imagery_ref.is_some_and(|url| !url.is_empty()));
        assert_eq!(geo.status, GeoStatus::Resolved);
    }

    struct BrokenImagery;

    #[async_trait::async_trait]
    impl ImageryProvider for BrokenImagery {
        async fn lookup(&self, _latitude: f64, _longitude: f64) -> Result<String> {
            Err(AgriError::imagery("tile server down"))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_imagery_failure_still_publishes_fix() {
        let mut services = services(Arc::new(FixedGeolocationProvider::new(12.34, 56.78)));
        services.imagery = Arc::new(BrokenImagery);
        let usecase =
            DashboardUseCase::start(AppState::new(), RuntimeSettings::default(), services);
        usecase.login("ramesh", "pw").await.unwrap();

        usecase.request_location().await.unwrap();
        settle(Duration::from_millis(10)).await;

        let fix = usecase.snapshot().await.geo.fix.expect("fix published");
        assert_eq!(fix.latitude, 12.34);
        assert!(fix.imagery_ref.is_none());
        assert!(usecase.recent_notices().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_location_denied() {
        let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();
        let mut services = services(Arc::new(FailingGeolocationProvider::denied("denied")));
        services.notice_sender = Some(notice_tx);
        let usecase =
            DashboardUseCase::start(AppState::new(), RuntimeSettings::default(), services);
        usecase.login("ramesh", "pw").await.unwrap();

        usecase.request_location().await.unwrap();
        settle(Duration::from_millis(10)).await;

        assert!(usecase.snapshot().await.geo.fix.is_none());
        let notice = notice_rx.try_recv().expect("notice sent");
        assert_eq!(notice.kind, NoticeKind::LocationFailed);
        assert!(notice.message.contains("denied"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_location_timeout() {
        let provider =
            FixedGeolocationProvider::new(1.0, 2.0).with_latency(Duration::from_secs(60));
        let usecase = logged_in(Arc::new(provider)).await;

        usecase.request_location().await.unwrap();
        settle(Duration::from_secs(11)).await;

        let geo = usecase.snapshot().await.geo;
        assert!(geo.fix.is_none());
        assert_eq!(
            geo.status,
            GeoStatus::Failed(AgriError::LocationTimeout.to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_location_capability_unavailable() {
        let usecase = logged_in(Arc::new(UnavailableGeolocationProvider)).await;

        assert_eq!(
            usecase.request_location().await,
            Err(AgriError::CapabilityUnavailable)
        );
        let snapshot = usecase.snapshot().await;
        assert_eq!(snapshot.geo.status, GeoStatus::Idle);
        assert_eq!(
            usecase.recent_notices().await.last().map(|n| n.kind),
            Some(NoticeKind::CapabilityUnavailable)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_location_requests_both_complete() {
        let usecase = logged_in(Arc::new(
            FixedGeolocationProvider::new(12.34, 56.78).with_latency(Duration::from_millis(100)),
        ))
        .await;

        usecase.request_location().await.unwrap();
        usecase.request_location().await.unwrap();
        assert_eq!(usecase.snapshot().await.geo.in_flight.len(), 2);

        settle(Duration::from_millis(200)).await;
        let geo = usecase.snapshot().await.geo;
        assert!(geo.in_flight.is_empty());
        assert!(geo.fix.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tab_selection_drives_narrow_screen() {
        let usecase = logged_in(Arc::new(UnavailableGeolocationProvider)).await;
        usecase.select_tab(ActiveTab::Recommend).await;
        usecase.set_field(ProfileField::Crop, "Rice").await;

        let Screen::Dashboard(view) = usecase.screen(Layout::Narrow).await else {
            panic!("expected dashboard");
        };
        assert_eq!(view.panels.len(), 1);
        let PanelView::Recommendations { items, .. } = &view.panels[0] else {
            panic!("expected recommendations");
        };
        assert_eq!(items[1], "Apply recommended fertilizers for Rice growth.");
    }
}
