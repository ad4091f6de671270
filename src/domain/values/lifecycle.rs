//! Asset lifecycle value objects.

/// Dates through an asset's life. The schema does not require these to be
/// ordered and neither do we.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifecycleDates {
    /// All fields are seconds since the Unix epoch.
    pub manufactured_date: Option<i64>,
    pub purchase_date: Option<i64>,
    pub received_date: Option<i64>,
    pub installation_date: Option<i64>,
    pub removal_date: Option<i64>,
    pub retired_date: Option<i64>,
}

/// Result of an acceptance test run against installed equipment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptanceTest {
    /// When the test was carried out, seconds since the Unix epoch.
    pub date_time: Option<i64>,
    pub success: bool,
    /// Test procedure identifier.
    pub kind: Option<String>,
}
