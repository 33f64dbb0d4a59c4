//! Dashboard state machine: loading lifecycle, request fencing, chart selection
//! and the derived views (table, metric cards, chart).

use api::{FetchError, InputError, ResultBatch};
use tracing::{debug, info, warn};

use crate::charts::{build_chart, ChartKind, ChartSpec};
use crate::core::metrics::MetricCards;
use crate::core::rotation::{next_message_index, RotationHandle, LOADING_MESSAGES};
use crate::core::store::{RequestTicket, ResultStore};
use crate::results::table::ResultsTable;

#[derive(Debug, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        ticket: RequestTicket,
        message_index: usize,
        rotation: Option<RotationHandle>,
    },
    Results,
}

/// What a completed request did to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Results { rows: usize },
    Failed(String),
    /// A newer request was issued after this one; its outcome was discarded.
    Stale,
}

/// How many times each derived view has been rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Recomputations {
    pub table: usize,
    pub metrics: usize,
    pub chart: usize,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    phase: Phase,
    store: ResultStore,
    chart_kind: ChartKind,
    table: ResultsTable,
    metrics: MetricCards,
    chart: Option<ChartSpec>,
    notice: Option<String>,
    recomputations: Recomputations,
}

impl DashboardState {
    pub fn new(default_chart: ChartKind) -> Self {
        Self {
            chart_kind: default_chart,
            ..Self::default()
        }
    }

    /// Enter `Loading` for a new request. Any earlier request becomes stale and
    /// any running message rotation is stopped.
    pub fn begin_request(&mut self) -> RequestTicket {
        let ticket = self.store.issue();
        self.notice = None;
        self.phase = Phase::Loading {
            ticket,
            message_index: 0,
            rotation: None,
        };
        info!(generation = ticket.generation(), "optimization request started");
        ticket
    }

    /// Hand the rotation loop for `ticket` to the loading state. If that request is
    /// no longer loading the handle is dropped, which stops the loop.
    pub fn attach_rotation(&mut self, ticket: RequestTicket, handle: RotationHandle) {
        match &mut self.phase {
            Phase::Loading {
                ticket: current,
                rotation,
                ..
            } if *current == ticket => {
                *rotation = Some(handle);
            }
            _ => debug!(generation = ticket.generation(), "discarding rotation for finished request"),
        }
    }

    pub fn advance_message(&mut self, ticket: RequestTicket) {
        if let Phase::Loading {
            ticket: current,
            message_index,
            ..
        } = &mut self.phase
        {
            if *current == ticket {
                *message_index = next_message_index(*message_index);
            }
        }
    }

    /// Resolve a request. Stale outcomes are ignored; failures return to `Idle`
    /// with a notice and keep earlier results on screen.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<ResultBatch, FetchError>,
    ) -> Transition {
        if !self.store.is_current(ticket) {
            debug!(generation = ticket.generation(), "ignoring stale optimization response");
            return Transition::Stale;
        }

        match outcome {
            Ok(batch) => {
                let rows = batch.len();
                self.store.accept(ticket, batch);
                self.phase = Phase::Results;
                self.refresh_views();
                info!(generation = ticket.generation(), rows, "optimization results loaded");
                Transition::Results { rows }
            }
            Err(err) => {
                let message = err.to_string();
                warn!(generation = ticket.generation(), %message, "optimization request failed");
                self.phase = Phase::Idle;
                self.notice = Some(message.clone());
                Transition::Failed(message)
            }
        }
    }

    /// Form input was rejected before any request was issued.
    pub fn reject_input(&mut self, err: &InputError) {
        self.notice = Some(err.to_string());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Switch chart kind and rebuild only the chart from the stored batch.
    pub fn select_chart(&mut self, kind: ChartKind) {
        self.chart_kind = kind;
        if self.store.has_loaded() {
            self.rebuild_chart();
        }
    }

    fn refresh_views(&mut self) {
        let batch = self.store.batch();
        self.table = ResultsTable::from_batch(batch);
        self.recomputations.table += 1;
        if self.metrics.apply(batch) {
            self.recomputations.metrics += 1;
        }
        self.rebuild_chart();
    }

    fn rebuild_chart(&mut self) {
        self.chart = Some(build_chart(self.chart_kind, self.store.batch()));
        self.recomputations.chart += 1;
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn loading_message(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Loading { message_index, .. } => Some(LOADING_MESSAGES[message_index]),
            _ => None,
        }
    }

    /// Results stay visible until replaced, including while a later request is
    /// loading or after it failed.
    pub fn has_results(&self) -> bool {
        self.store.has_loaded()
    }

    pub fn batch(&self) -> &ResultBatch {
        self.store.batch()
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    pub fn chart(&self) -> Option<&ChartSpec> {
        self.chart.as_ref()
    }

    pub fn table(&self) -> &ResultsTable {
        &self.table
    }

    pub fn metrics(&self) -> &MetricCards {
        &self.metrics
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn recomputations(&self) -> Recomputations {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Impact, OptimizationResult};
    use futures::executor::block_on;
    use futures::future::{pending, Abortable, Aborted};

    fn batch() -> ResultBatch {
        vec![
            OptimizationResult {
                traffic_light_id: "A".into(),
                impact: Some(Impact::new(10.0, 2.0)),
                ..OptimizationResult::default()
            },
            OptimizationResult {
                traffic_light_id: "B".into(),
                impact: Some(Impact::new(5.0, 5.0)),
                ..OptimizationResult::default()
            },
        ]
    }

    #[test]
    fn idle_to_loading_to_results() {
        let mut state = DashboardState::new(ChartKind::Bar);
        assert!(matches!(state.phase(), Phase::Idle));

        let ticket = state.begin_request();
        assert!(state.is_loading());
        assert_eq!(state.loading_message(), Some(LOADING_MESSAGES[0]));

        assert_eq!(state.complete(ticket, Ok(batch())), Transition::Results { rows: 2 });
        assert!(matches!(state.phase(), Phase::Results));
        assert_eq!(state.loading_message(), None);
        assert_eq!(state.table().rows.len(), 2);
        assert_eq!(state.chart().map(|c| c.chart_type), Some("bar"));
        assert_eq!(
            state.recomputations(),
            Recomputations {
                table: 1,
                metrics: 1,
                chart: 1
            }
        );
    }

    #[test]
    fn loading_message_rotates_and_wraps() {
        let mut state = DashboardState::default();
        let ticket = state.begin_request();
        let mut seen = Vec::new();
        for _ in 0..4 {
            state.advance_message(ticket);
            seen.push(state.loading_message().unwrap());
        }
        assert_eq!(
            seen,
            vec![LOADING_MESSAGES[1], LOADING_MESSAGES[2], LOADING_MESSAGES[0], LOADING_MESSAGES[1]]
        );
    }

    #[test]
    fn loading_ticks_and_notices_leave_the_chart_untouched() {
        let mut state = DashboardState::default();
        let first = state.begin_request();
        state.complete(first, Ok(batch()));
        let before = state.chart().cloned();
        let address = state.chart().map(|c| c as *const ChartSpec);

        let second = state.begin_request();
        for _ in 0..5 {
            state.advance_message(second);
        }
        state.reject_input(&InputError::SensorCount("abc".into()));
        state.dismiss_notice();

        assert_eq!(state.chart().cloned(), before);
        assert_eq!(state.chart().map(|c| c as *const ChartSpec), address);
        assert_eq!(state.recomputations().chart, 1);
    }

    #[test]
    fn chart_selection_reruns_only_the_chart() {
        let mut state = DashboardState::default();
        let ticket = state.begin_request();
        state.complete(ticket, Ok(batch()));
        let table_before = state.table().clone();

        state.select_chart(ChartKind::Pie);
        state.select_chart(ChartKind::Scatter);

        assert_eq!(state.chart_kind(), ChartKind::Scatter);
        assert_eq!(state.chart().map(|c| c.chart_type), Some("scatter"));
        assert_eq!(state.table(), &table_before);
        let counts = state.recomputations();
        assert_eq!((counts.table, counts.metrics, counts.chart), (1, 1, 3));
    }

    #[test]
    fn chart_selection_before_any_results_builds_nothing() {
        let mut state = DashboardState::default();
        state.select_chart(ChartKind::Line);
        assert!(state.chart().is_none());
        assert_eq!(state.recomputations().chart, 0);
    }

    #[test]
    fn failure_returns_to_idle_and_keeps_previous_results() {
        let mut state = DashboardState::default();
        let first = state.begin_request();
        state.complete(first, Ok(batch()));

        let second = state.begin_request();
        let transition = state.complete(second, Err(FetchError::Status { status: 502 }));

        assert!(matches!(transition, Transition::Failed(ref m) if m.contains("502")));
        assert!(matches!(state.phase(), Phase::Idle));
        assert!(state.notice().unwrap().contains("502"));
        assert!(state.has_results());
        assert_eq!(state.table().rows.len(), 2);
        assert!(state.chart().is_some());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = DashboardState::default();
        let older = state.begin_request();
        let newer = state.begin_request();

        assert_eq!(state.complete(older, Ok(batch())), Transition::Stale);
        assert!(state.is_loading());
        assert!(!state.has_results());

        assert_eq!(state.complete(newer, Ok(Vec::new())), Transition::Results { rows: 0 });
        assert_eq!(state.complete(older, Err(FetchError::Network("late".into()))), Transition::Stale);
        assert!(state.notice().is_none());
    }

    #[test]
    fn empty_batch_leaves_metric_cards_stale() {
        let mut state = DashboardState::default();
        let ticket = state.begin_request();
        state.complete(ticket, Ok(batch()));
        let cards = state.metrics().clone();

        let ticket = state.begin_request();
        state.complete(ticket, Ok(Vec::new()));

        assert_eq!(state.metrics(), &cards);
        assert!(state.table().is_empty());
        assert_eq!(state.recomputations().metrics, 1);
    }

    #[test]
    fn leaving_loading_stops_the_rotation() {
        let mut state = DashboardState::default();
        let ticket = state.begin_request();
        let (handle, registration) = RotationHandle::pair();
        let rotation = Abortable::new(pending::<()>(), registration);
        state.attach_rotation(ticket, handle);

        state.complete(ticket, Err(FetchError::Network("offline".into())));
        assert_eq!(block_on(rotation), Err(Aborted));
    }

    #[test]
    fn a_new_request_stops_the_previous_rotation() {
        let mut state = DashboardState::default();
        let first = state.begin_request();
        let (handle, registration) = RotationHandle::pair();
        let rotation = Abortable::new(pending::<()>(), registration);
        state.attach_rotation(first, handle);

        let _second = state.begin_request();
        assert_eq!(block_on(rotation), Err(Aborted));
    }

    #[test]
    fn rotation_for_a_finished_request_is_stopped_immediately() {
        let mut state = DashboardState::default();
        let ticket = state.begin_request();
        state.complete(ticket, Ok(batch()));

        let (handle, registration) = RotationHandle::pair();
        let rotation = Abortable::new(pending::<()>(), registration);
        state.attach_rotation(ticket, handle);
        assert_eq!(block_on(rotation), Err(Aborted));
    }

    #[test]
    fn rejected_input_sets_notice_without_requesting() {
        let mut state = DashboardState::default();
        state.reject_input(&InputError::SensorCount("zero".into()));
        assert!(matches!(state.phase(), Phase::Idle));
        assert!(state.notice().unwrap().contains("zero"));
        state.dismiss_notice();
        assert!(state.notice().is_none());
    }
}
