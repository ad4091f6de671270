//! Contact-detail value objects embedded by Organisation and account
//! records.

/// Postal or street address fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreetAddress {
    pub street_detail: Option<String>,
    pub town_detail: Option<String>,
    pub state_or_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Telephone number fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelephoneNumber {
    pub country_code: Option<String>,
    pub area_code: Option<String>,
    pub city_code: Option<String>,
    pub local_number: Option<String>,
    pub extension: Option<String>,
}

/// Electronic address fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectronicAddress {
    pub email1: Option<String>,
    pub email2: Option<String>,
    pub web: Option<String>,
    pub radio: Option<String>,
}

/// Current status with the time it took effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Status {
    pub value: Option<String>,
    /// Seconds since the Unix epoch.
    pub date_time: Option<i64>,
    pub reason: Option<String>,
    pub remark: Option<String>,
}
