use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::{
    config::use_reports_config,
    debounce::Debouncer,
    platform::{self, ResizeListener},
};

use super::{
    initialize_charts, load_report_data, show_loading_state, LegendPlacement, ReportsState,
};

/// Shared wiring for pages that show the breakdown charts.
#[derive(Clone, Copy)]
pub struct ReportPage {
    pub state: Signal<ReportsState>,
    pub placement: Signal<LegendPlacement>,
    /// Reload report data; `true` shows the loading placeholder meanwhile.
    pub refresh: Callback<bool>,
    reload: Signal<ReloadGuard>,
}

impl ReportPage {
    /// A reload is in flight; further refreshes are ignored until it settles.
    pub fn is_reloading(&self) -> bool {
        self.reload.read().in_flight()
    }
}

/// Remembers what the page showed before a reload started, so a failed
/// reload can put it back. Only one reload runs at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct ReloadGuard {
    settled: Option<ReportsState>,
}

impl ReloadGuard {
    /// Start a reload from `current`. `false` while another is in flight.
    pub(crate) fn begin(&mut self, current: &ReportsState) -> bool {
        if self.settled.is_some() {
            return false;
        }
        self.settled = Some(current.clone());
        true
    }

    pub(crate) fn in_flight(&self) -> bool {
        self.settled.is_some()
    }

    pub(crate) fn succeed(&mut self) {
        self.settled = None;
    }

    /// The state to restore after a failed reload.
    pub(crate) fn fail(&mut self) -> ReportsState {
        self.settled.take().unwrap_or_default()
    }
}

pub fn use_report_page() -> ReportPage {
    let config = use_reports_config();
    let mut state = use_signal(ReportsState::default);
    let mut placement = use_signal(|| {
        LegendPlacement::for_width(platform::viewport_width(), config.wide_layout_min_px)
    });

    let mut reload = use_signal(ReloadGuard::default);

    let load_config = config.clone();
    let refresh = use_callback(move |show_loading: bool| {
        if !reload.write().begin(&state.peek()) {
            debug!("reload already in flight");
            return;
        }
        if show_loading {
            show_loading_state(state);
        }
        let config = load_config.clone();
        spawn(async move {
            match load_report_data(&config).await {
                Ok(data) => {
                    initialize_charts(state, &data.expense, &data.income);
                    state.with_mut(|s| {
                        s.summary = data.summary.clone();
                        s.period = data.start_date.clone().zip(data.end_date.clone());
                    });
                    reload.write().succeed();
                }
                Err(err) => {
                    warn!("Could not load chart data: {err}");
                    let previous = reload.write().fail();
                    state.set(previous);
                }
            }
        });
    });

    use_hook(move || refresh.call(false));

    let _resize: Rc<Option<ResizeListener>> = use_hook(|| {
        let debouncer = Debouncer::new(config.resize_debounce_ms);
        let wide_min = config.wide_layout_min_px;
        Rc::new(platform::on_resize(move || {
            debouncer.call(move || {
                placement.set(LegendPlacement::for_width(platform::viewport_width(), wide_min));
            });
        }))
    });

    ReportPage {
        state,
        placement,
        refresh,
        reload,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::series::RawSeries;
    use crate::reports::ChartState;

    fn ready_state() -> ReportsState {
        let mut state = ReportsState::default();
        state.initialize(&RawSeries::new(["Rent"], [1200]), &RawSeries::default());
        state
    }

    #[test]
    fn overlapping_refresh_is_ignored() {
        let mut guard = ReloadGuard::default();
        let mut shown = ready_state();
        assert!(guard.begin(&shown));
        shown.show_loading();
        assert!(!guard.begin(&shown));
        assert!(guard.in_flight());
    }

    #[test]
    fn failed_reload_restores_settled_state_not_spinner() {
        let mut guard = ReloadGuard::default();
        let before = ready_state();
        let mut shown = before.clone();
        guard.begin(&shown);
        shown.show_loading();
        guard.begin(&shown);

        let restored = guard.fail();
        assert_eq!(restored, before);
        assert!(matches!(restored.expense, ChartState::Ready { .. }));
        assert!(!guard.in_flight());
    }

    #[test]
    fn successful_reload_allows_the_next_one() {
        let mut guard = ReloadGuard::default();
        assert!(guard.begin(&ReportsState::default()));
        guard.succeed();
        assert!(guard.begin(&ReportsState::default()));
    }
}
