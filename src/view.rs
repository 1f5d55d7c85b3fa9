use crate::format::{format_fcfa, format_time};
use crate::models::{CourseEntry, DriverProfile, ExpenseEntry, SessionState, Tab};

/// Everything the page needs, as plain strings and class flags. Built
/// fresh from the state on every render; aggregates are recomputed from
/// the full lists each time rather than accumulated.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub driver: DriverView,
    pub status: StatusView,
    pub tabs: TabsView,
    pub courses: CoursesPanel,
    pub depenses: DepensesPanel,
    pub gps: BadgeView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverView {
    pub name: String,
    pub car: String,
    pub icon: String,
    pub phone: String,
    pub plate: String,
    pub zone: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub label: &'static str,
    pub pill_class: &'static str,
    pub badge_class: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabsView {
    pub courses: bool,
    pub depenses: bool,
    pub profil: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseRow {
    pub amount_label: String,
    pub mode_label: &'static str,
    pub time: String,
    /// Raw user text; escaped where it is interpolated into markup.
    pub note: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRow {
    /// Raw user text; escaped where it is interpolated into markup.
    pub label: String,
    pub time: String,
    pub amount_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoursesPanel {
    pub rows: Vec<CourseRow>,
    pub total_label: String,
    pub count_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepensesPanel {
    pub rows: Vec<ExpenseRow>,
    pub total_label: String,
    pub count_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BadgeView {
    pub label: &'static str,
    pub class: &'static str,
}

impl DashboardView {
    pub fn build(driver: &DriverProfile, session: &SessionState) -> Self {
        Self {
            driver: DriverView {
                name: driver.name.clone(),
                car: driver.vehicle.clone(),
                icon: driver.icon.clone(),
                phone: driver.phone.clone(),
                plate: driver.plate.clone(),
                zone: driver.zone.clone(),
            },
            status: status_view(session.is_online),
            tabs: tabs_view(session.current_tab),
            courses: courses_panel(&session.courses),
            depenses: depenses_panel(&session.depenses),
            gps: gps_badge(session.gps.enabled),
        }
    }
}

pub fn status_view(online: bool) -> StatusView {
    if online {
        StatusView {
            label: "En ligne",
            pill_class: "online",
            badge_class: "badge-online",
        }
    } else {
        StatusView {
            label: "Hors ligne",
            pill_class: "offline",
            badge_class: "badge-offline",
        }
    }
}

pub fn online_label(online: bool) -> &'static str {
    status_view(online).label
}

pub fn tabs_view(current: Tab) -> TabsView {
    TabsView {
        courses: current == Tab::Courses,
        depenses: current == Tab::Depenses,
        profil: current == Tab::Profil,
    }
}

pub fn courses_total(courses: &[CourseEntry]) -> u64 {
    courses.iter().map(|course| course.amount).sum()
}

pub fn depenses_total(depenses: &[ExpenseEntry]) -> u64 {
    depenses.iter().map(|depense| depense.amount).sum()
}

pub fn courses_panel(courses: &[CourseEntry]) -> CoursesPanel {
    CoursesPanel {
        rows: courses.iter().map(course_row).collect(),
        total_label: format_fcfa(courses_total(courses)),
        count_label: courses.len().to_string(),
    }
}

pub fn depenses_panel(depenses: &[ExpenseEntry]) -> DepensesPanel {
    DepensesPanel {
        rows: depenses.iter().map(expense_row).collect(),
        total_label: format_fcfa(depenses_total(depenses)),
        count_label: depenses.len().to_string(),
    }
}

fn course_row(entry: &CourseEntry) -> CourseRow {
    CourseRow {
        amount_label: format_fcfa(entry.amount),
        mode_label: entry.mode.label(),
        time: format_time(entry.created_at),
        note: entry.note.clone(),
    }
}

fn expense_row(entry: &ExpenseEntry) -> ExpenseRow {
    ExpenseRow {
        label: entry.label.clone(),
        time: format_time(entry.created_at),
        amount_label: format_fcfa(entry.amount),
    }
}

pub fn gps_badge(enabled: bool) -> BadgeView {
    if enabled {
        BadgeView {
            label: "Actif",
            class: "badge-online",
        }
    } else {
        BadgeView {
            label: "Inactif",
            class: "badge-disabled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseSubmission, ExpenseSubmission, PaymentMode};
    use chrono::{Local, TimeZone};

    fn session_with_courses(amounts: &[u64]) -> SessionState {
        let mut session = SessionState::default();
        let at = Local.with_ymd_and_hms(2026, 3, 14, 14, 5, 0).unwrap();
        for &amount in amounts {
            let submission =
                CourseSubmission::new(amount, PaymentMode::Wave, "").expect("valid course");
            session.record_course_at(at, submission);
        }
        session
    }

    #[test]
    fn empty_panels_show_zero_aggregates() {
        let panel = courses_panel(&[]);
        assert!(panel.rows.is_empty());
        assert_eq!(panel.total_label, "0 FCFA");
        assert_eq!(panel.count_label, "0");

        let panel = depenses_panel(&[]);
        assert!(panel.rows.is_empty());
        assert_eq!(panel.total_label, "0 FCFA");
        assert_eq!(panel.count_label, "0");
    }

    #[test]
    fn totals_are_recomputed_over_the_whole_list() {
        let session = session_with_courses(&[1500, 2000, 300]);
        let panel = courses_panel(&session.courses);
        assert_eq!(panel.total_label, "3\u{202f}800 FCFA");
        assert_eq!(panel.count_label, "3");
    }

    #[test]
    fn rows_keep_insertion_reversed_order() {
        let session = session_with_courses(&[1500, 2000]);
        let panel = courses_panel(&session.courses);
        assert_eq!(panel.rows[0].amount_label, "2\u{202f}000 FCFA");
        assert_eq!(panel.rows[1].amount_label, "1\u{202f}500 FCFA");
    }

    #[test]
    fn course_rows_carry_mode_label_and_time() {
        let mut session = SessionState::default();
        let at = Local.with_ymd_and_hms(2026, 3, 14, 14, 5, 0).unwrap();
        let submission =
            CourseSubmission::new(1500, PaymentMode::Wave, "aéroport").expect("valid course");
        session.record_course_at(at, submission);

        let panel = courses_panel(&session.courses);
        assert_eq!(panel.rows[0].mode_label, "Wave");
        assert_eq!(panel.rows[0].time, "14:05");
        assert_eq!(panel.rows[0].note, "aéroport");
    }

    #[test]
    fn expense_rows_carry_label_time_and_amount() {
        let mut session = SessionState::default();
        let at = Local.with_ymd_and_hms(2026, 3, 14, 8, 45, 0).unwrap();
        let submission = ExpenseSubmission::new("Carburant", 5000).expect("valid expense");
        session.record_depense_at(at, submission);

        let panel = depenses_panel(&session.depenses);
        assert_eq!(panel.rows[0].label, "Carburant");
        assert_eq!(panel.rows[0].time, "08:45");
        assert_eq!(panel.rows[0].amount_label, "5\u{202f}000 FCFA");
    }

    #[test]
    fn status_view_pairs_label_and_classes() {
        let online = status_view(true);
        assert_eq!(online.label, "En ligne");
        assert_eq!(online.pill_class, "online");
        assert_eq!(online.badge_class, "badge-online");

        let offline = status_view(false);
        assert_eq!(offline.label, "Hors ligne");
        assert_eq!(offline.pill_class, "offline");
        assert_eq!(offline.badge_class, "badge-offline");
    }

    #[test]
    fn gps_badge_defaults_to_inactive() {
        let session = SessionState::default();
        let badge = gps_badge(session.gps.enabled);
        assert_eq!(badge.label, "Inactif");
        assert_eq!(badge.class, "badge-disabled");

        let active = gps_badge(true);
        assert_eq!(active.label, "Actif");
        assert_eq!(active.class, "badge-online");
    }

    #[test]
    fn only_the_current_tab_is_active() {
        let tabs = tabs_view(Tab::Depenses);
        assert!(!tabs.courses);
        assert!(tabs.depenses);
        assert!(!tabs.profil);
    }
}
