use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct DriverProfile {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub vehicle: String,
    pub plate: String,
    pub zone: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Courses,
    Depenses,
    Profil,
}

impl Tab {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "courses" => Some(Self::Courses),
            "depenses" => Some(Self::Depenses),
            "profil" => Some(Self::Profil),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Courses => "courses",
            Self::Depenses => "depenses",
            Self::Profil => "profil",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMode {
    Cash,
    Wave,
    OrangeMoney,
    Other,
}

impl PaymentMode {
    /// Missing or empty selection falls back to cash; any unrecognized
    /// key is kept as "autre" rather than rejected.
    pub fn from_form(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("cash") => Self::Cash,
            Some("wave") => Self::Wave,
            Some("om") => Self::OrangeMoney,
            Some(_) => Self::Other,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Wave => "wave",
            Self::OrangeMoney => "om",
            Self::Other => "autre",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Wave => "Wave",
            Self::OrangeMoney => "Orange Money",
            Self::Other => "Autre",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CourseEntry {
    pub id: String,
    pub amount: u64,
    pub mode: PaymentMode,
    pub note: String,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Clone)]
pub struct ExpenseEntry {
    pub id: String,
    pub label: String,
    pub amount: u64,
    pub created_at: DateTime<Local>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GpsStatus {
    pub enabled: bool,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

/// A course submission that already passed validation: the amount is a
/// positive integer number of francs, the note is trimmed.
#[derive(Debug, Clone)]
pub struct CourseSubmission {
    pub amount: u64,
    pub mode: PaymentMode,
    pub note: String,
}

impl CourseSubmission {
    pub fn new(amount: u64, mode: PaymentMode, note: &str) -> Option<Self> {
        if amount == 0 {
            return None;
        }
        Some(Self {
            amount,
            mode,
            note: note.trim().to_string(),
        })
    }

    pub fn parse_form(amount: &str, mode: Option<&str>, note: Option<&str>) -> Option<Self> {
        let amount = amount.trim().parse::<u64>().ok()?;
        Self::new(amount, PaymentMode::from_form(mode), note.unwrap_or_default())
    }
}

/// An expense submission that already passed validation: non-empty label
/// after trimming, positive integer amount.
#[derive(Debug, Clone)]
pub struct ExpenseSubmission {
    pub label: String,
    pub amount: u64,
}

impl ExpenseSubmission {
    pub fn new(label: &str, amount: u64) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() || amount == 0 {
            return None;
        }
        Some(Self {
            label: label.to_string(),
            amount,
        })
    }

    pub fn parse_form(label: &str, amount: &str) -> Option<Self> {
        let amount = amount.trim().parse::<u64>().ok()?;
        Self::new(label, amount)
    }
}

/// The single mutable owner of everything the dashboard shows. Lives for
/// the process lifetime; nothing is persisted.
#[derive(Debug, Default)]
pub struct SessionState {
    pub is_online: bool,
    pub current_tab: Tab,
    pub courses: Vec<CourseEntry>,
    pub depenses: Vec<ExpenseEntry>,
    pub gps: GpsStatus,
    seq: u64,
}

impl SessionState {
    pub fn toggle_online(&mut self) -> bool {
        self.is_online = !self.is_online;
        self.is_online
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.current_tab = tab;
    }

    pub fn record_course(&mut self, submission: CourseSubmission) -> &CourseEntry {
        self.record_course_at(Local::now(), submission)
    }

    pub fn record_course_at(
        &mut self,
        at: DateTime<Local>,
        submission: CourseSubmission,
    ) -> &CourseEntry {
        let id = self.next_id("course");
        // newest first
        self.courses.insert(
            0,
            CourseEntry {
                id,
                amount: submission.amount,
                mode: submission.mode,
                note: submission.note,
                created_at: at,
            },
        );
        &self.courses[0]
    }

    pub fn record_depense(&mut self, submission: ExpenseSubmission) -> &ExpenseEntry {
        self.record_depense_at(Local::now(), submission)
    }

    pub fn record_depense_at(
        &mut self,
        at: DateTime<Local>,
        submission: ExpenseSubmission,
    ) -> &ExpenseEntry {
        let id = self.next_id("dep");
        self.depenses.insert(
            0,
            ExpenseEntry {
                id,
                label: submission.label,
                amount: submission.amount,
                created_at: at,
            },
        );
        &self.depenses[0]
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.seq += 1;
        format!("{prefix}-{}", self.seq)
    }
}

#[derive(Debug, Deserialize)]
pub struct CourseForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub amount: String,
}

#[derive(Debug, Deserialize)]
pub struct CourseRequest {
    pub amount: u64,
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseRequest {
    pub label: String,
    pub amount: u64,
}

#[derive(Debug, Serialize)]
pub struct OnlineResponse {
    pub online: bool,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct LedgerTotalsResponse {
    pub count: usize,
    pub total: u64,
    pub total_label: String,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub amount: u64,
    pub mode: String,
    pub note: String,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    pub id: String,
    pub label: String,
    pub amount: u64,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub count: usize,
    pub total: u64,
    pub total_label: String,
    pub entries: Vec<CourseResponse>,
}

#[derive(Debug, Serialize)]
pub struct ExpenseListResponse {
    pub count: usize,
    pub total: u64,
    pub total_label: String,
    pub entries: Vec<ExpenseResponse>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub online: bool,
    pub tab: String,
    pub gps: GpsStatus,
    pub courses: CourseListResponse,
    pub depenses: ExpenseListResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn course(amount: u64) -> CourseSubmission {
        CourseSubmission::new(amount, PaymentMode::Cash, "").expect("valid course")
    }

    #[test]
    fn course_submission_rejects_non_positive_amounts() {
        assert!(CourseSubmission::parse_form("0", None, None).is_none());
        assert!(CourseSubmission::parse_form("-500", None, None).is_none());
        assert!(CourseSubmission::parse_form("abc", None, None).is_none());
        assert!(CourseSubmission::parse_form("", None, None).is_none());
        assert!(CourseSubmission::parse_form("12.5", None, None).is_none());
    }

    #[test]
    fn course_submission_defaults_mode_and_trims_note() {
        let parsed = CourseSubmission::parse_form("1500", None, Some("  aéroport  ")).unwrap();
        assert_eq!(parsed.amount, 1500);
        assert_eq!(parsed.mode, PaymentMode::Cash);
        assert_eq!(parsed.note, "aéroport");

        let parsed = CourseSubmission::parse_form("1500", Some(""), None).unwrap();
        assert_eq!(parsed.mode, PaymentMode::Cash);
        assert_eq!(parsed.note, "");
    }

    #[test]
    fn payment_mode_maps_known_keys_and_catches_the_rest() {
        assert_eq!(PaymentMode::from_form(Some("wave")), PaymentMode::Wave);
        assert_eq!(PaymentMode::from_form(Some("om")), PaymentMode::OrangeMoney);
        assert_eq!(PaymentMode::from_form(Some("bitcoin")), PaymentMode::Other);
        assert_eq!(PaymentMode::from_form(Some("bitcoin")).label(), "Autre");
        assert_eq!(PaymentMode::OrangeMoney.label(), "Orange Money");
    }

    #[test]
    fn expense_submission_requires_a_real_label() {
        assert!(ExpenseSubmission::new("   ", 500).is_none());
        assert!(ExpenseSubmission::new("Carburant", 0).is_none());
        let parsed = ExpenseSubmission::new(" Carburant ", 500).unwrap();
        assert_eq!(parsed.label, "Carburant");
        assert_eq!(parsed.amount, 500);
    }

    #[test]
    fn tab_parse_is_total_over_the_known_keys() {
        assert_eq!(Tab::parse("courses"), Some(Tab::Courses));
        assert_eq!(Tab::parse("depenses"), Some(Tab::Depenses));
        assert_eq!(Tab::parse("profil"), Some(Tab::Profil));
        assert_eq!(Tab::parse("stats"), None);
        assert_eq!(Tab::parse(""), None);
    }

    #[test]
    fn record_course_prepends_newest_first() {
        let mut session = SessionState::default();
        session.record_course(course(1500));
        session.record_course(course(2000));

        assert_eq!(session.courses.len(), 2);
        assert_eq!(session.courses[0].amount, 2000);
        assert_eq!(session.courses[1].amount, 1500);
    }

    #[test]
    fn ids_stay_unique_for_rapid_submissions() {
        let mut session = SessionState::default();
        let at = Local.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap();
        let first = session.record_course_at(at, course(1000)).id.clone();
        let second = session.record_course_at(at, course(1000)).id.clone();
        let third = session
            .record_depense_at(at, ExpenseSubmission::new("Essence", 500).unwrap())
            .id
            .clone();

        assert_ne!(first, second);
        assert!(first.starts_with("course-"));
        assert!(third.starts_with("dep-"));
    }

    #[test]
    fn toggle_online_flips_the_flag() {
        let mut session = SessionState::default();
        assert!(!session.is_online);
        assert!(session.toggle_online());
        assert!(!session.toggle_online());
    }

    #[test]
    fn set_tab_stores_the_selection() {
        let mut session = SessionState::default();
        assert_eq!(session.current_tab, Tab::Courses);
        session.set_tab(Tab::Depenses);
        assert_eq!(session.current_tab, Tab::Depenses);
    }
}
