//! Stores the state of the dashboard shell.
//!
//! The shell has three screens. A saved [`Session`] is injected at
//! start-up; if there is one the user lands on the dashboard directly.
//! Inside the dashboard one [`DashboardTab`] is active at a time.

use std::{convert::Infallible, fmt, str::FromStr};

use crate::session::{Session, User};

/// The analytics views of the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum DashboardTab {
    /// Welcome page, also reachable as `welcome`.
    #[default]
    Overview,
    /// Transportation metrics.
    Metrics,
    /// Profit and loss.
    ProfitLoss,
    FinancialDrill,
    /// Maintenance reports.
    Maintenance,
    /// Equipment map.
    Map,
    Forecasting,
}

impl DashboardTab {
    /// All tabs in navigation order.
    pub const ALL: [DashboardTab; 7] = [
        DashboardTab::Overview,
        DashboardTab::Metrics,
        DashboardTab::ProfitLoss,
        DashboardTab::FinancialDrill,
        DashboardTab::Maintenance,
        DashboardTab::Map,
        DashboardTab::Forecasting,
    ];

    /// The id used in navigation links.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Metrics => "metrics",
            DashboardTab::ProfitLoss => "pl",
            DashboardTab::FinancialDrill => "financial-drill",
            DashboardTab::Maintenance => "maintenance",
            DashboardTab::Map => "map",
            DashboardTab::Forecasting => "forecasting",
        }
    }

    /// Resolves a navigation id. `welcome` and unknown ids go to
    /// [`DashboardTab::Overview`].
    pub fn from_label(label: &str) -> DashboardTab {
        DashboardTab::ALL
            .into_iter()
            .find(|tab| tab.label() == label)
            .unwrap_or_else(|| {
                if label != "welcome" {
                    debug!("unknown tab {}, showing overview", label);
                }
                DashboardTab::Overview
            })
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DashboardTab {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DashboardTab::from_label(s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Marketing page, nobody signed in.
    Landing,
    /// The sign-in form.
    SignIn,
    Dashboard { session: Session, tab: DashboardTab },
}

impl AppState {
    /// Initial state for an optional restored session.
    pub fn start(session: Option<Session>) -> AppState {
        match session {
            Some(session) => {
                debug!("resuming session for {}", session.user().username);
                AppState::Dashboard {
                    session,
                    tab: DashboardTab::Overview,
                }
            }
            None => AppState::Landing,
        }
    }

    /// Landing -> SignIn. Other states are left as they are.
    pub fn open_sign_in(self) -> AppState {
        match self {
            AppState::Landing => AppState::SignIn,
            other => other,
        }
    }

    /// SignIn -> Landing. Other states are left as they are.
    pub fn back_to_landing(self) -> AppState {
        match self {
            AppState::SignIn => AppState::Landing,
            other => other,
        }
    }

    /// Enters the dashboard with a fresh session, on the overview tab.
    pub fn signed_in(self, session: Session) -> AppState {
        AppState::Dashboard {
            session,
            tab: DashboardTab::Overview,
        }
    }

    /// Switches the active tab. Outside the dashboard this does nothing.
    pub fn select_tab(self, tab: DashboardTab) -> AppState {
        match self {
            AppState::Dashboard { session, .. } => AppState::Dashboard { session, tab },
            other => other,
        }
    }

    /// Tears down the session, if any, and returns to the landing page
    /// along with the user who signed out.
    pub fn sign_out(self) -> (AppState, Option<User>) {
        match self {
            AppState::Dashboard { session, .. } => (AppState::Landing, Some(session.sign_out())),
            _ => (AppState::Landing, None),
        }
    }

    /// The open session, if the dashboard is showing.
    pub fn session(&self) -> Option<&Session> {
        match self {
            AppState::Dashboard { session, .. } => Some(session),
            _ => None,
        }
    }

    /// The active tab, if the dashboard is showing.
    pub fn tab(&self) -> Option<DashboardTab> {
        match self {
            AppState::Dashboard { tab, .. } => Some(*tab),
            _ => None,
        }
    }
}

#[cfg(test)]
mod app_state_tests {
    use super::*;
    use crate::session::{UserDirectory, DEMO_PASSWORD};

    fn session(username: &str) -> Session {
        Session::sign_in(UserDirectory::demo(), username, DEMO_PASSWORD).unwrap()
    }

    #[test]
    fn test_start_without_session() {
        let state = AppState::start(None);
        assert_eq!(state, AppState::Landing);
        assert!(state.session().is_none());
        assert!(state.tab().is_none());
    }

    #[test]
    fn test_start_with_session() {
        let state = AppState::start(Some(session("admin")));
        assert_eq!(state.session().unwrap().user().username, "admin");
        assert_eq!(state.tab(), Some(DashboardTab::Overview));
    }

    #[test]
    fn test_sign_in_flow() {
        let state = AppState::start(None).open_sign_in();
        assert_eq!(state, AppState::SignIn);
        assert_eq!(state.clone().back_to_landing(), AppState::Landing);

        let state = state.signed_in(session("driver"));
        assert!(matches!(state, AppState::Dashboard { .. }));
        // navigation does not leave the dashboard
        let state = state.open_sign_in().back_to_landing();
        assert!(state.session().is_some());

        let (state, user) = state.sign_out();
        assert_eq!(state, AppState::Landing);
        assert_eq!(user.unwrap().name, "Tom Wilson");
    }

    #[test]
    fn test_sign_out_when_signed_out() {
        let (state, user) = AppState::SignIn.sign_out();
        assert_eq!(state, AppState::Landing);
        assert!(user.is_none());
    }

    #[test]
    fn test_select_tab() {
        let state = AppState::start(Some(session("manager"))).select_tab(DashboardTab::Map);
        assert_eq!(state.tab(), Some(DashboardTab::Map));
        assert_eq!(state.session().unwrap().user().username, "manager");

        let state = AppState::Landing.select_tab(DashboardTab::Map);
        assert_eq!(state, AppState::Landing);
    }

    #[test]
    fn test_sign_in_resets_tab() {
        let state = AppState::start(Some(session("admin"))).select_tab(DashboardTab::Forecasting);
        let (state, _) = state.sign_out();
        let state = state.open_sign_in().signed_in(session("admin"));
        assert_eq!(state.tab(), Some(DashboardTab::Overview));
    }

    #[test]
    fn test_tab_labels_round_trip() {
        for tab in DashboardTab::ALL {
            assert_eq!(tab.label().parse::<DashboardTab>(), Ok(tab));
        }
        assert_eq!(DashboardTab::ProfitLoss.to_string(), "pl");
    }

    #[test]
    fn test_welcome_is_overview() {
        assert_eq!(DashboardTab::from_label("welcome"), DashboardTab::Overview);
    }

    #[test]
    fn test_unknown_tab_falls_back_to_overview() {
        assert_eq!(DashboardTab::from_label("fleet"), DashboardTab::Overview);
        assert_eq!(DashboardTab::from_label(""), DashboardTab::Overview);
        assert_eq!("Metrics".parse::<DashboardTab>(), Ok(DashboardTab::Overview));
    }
}
