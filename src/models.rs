use serde::{Deserialize, Deserializer, Serialize};

/// One appointment row as the backend returns it. Read-only on this side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppointmentRecord {
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub date: String,
    pub slot: Option<Slot>,
}

/// Scheduled time block attached to an appointment.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slot {
    #[serde(rename = "startTime")]
    pub start_time: String,
    /// Minutes. Some backend versions send this as a string, so accept both.
    #[serde(deserialize_with = "duration_from_wire")]
    pub duration: u32,
    #[serde(rename = "therapistName")]
    pub therapist_name: String,
}

fn duration_from_wire<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Wire {
        Number(u32),
        Text(String),
    }

    match Wire::deserialize(deserializer)? {
        Wire::Number(n) => Ok(n),
        Wire::Text(s) => s.trim().parse::<u32>().map_err(serde::de::Error::custom),
    }
}

/// Appointment channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Medium {
    Online,
    Offline,
}

/// Filter choice for the appointments table. `All` sends no medium at all.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MediumFilter {
    #[default]
    All,
    Online,
    Offline,
}

impl MediumFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediumFilter::All => "all",
            MediumFilter::Online => "online",
            MediumFilter::Offline => "offline",
        }
    }

    pub fn as_medium(&self) -> Option<Medium> {
        match self {
            MediumFilter::All => None,
            MediumFilter::Online => Some(Medium::Online),
            MediumFilter::Offline => Some(Medium::Offline),
        }
    }
}

impl std::str::FromStr for MediumFilter {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "all" => Ok(MediumFilter::All),
            "online" => Ok(MediumFilter::Online),
            "offline" => Ok(MediumFilter::Offline),
            other => Err(format!("unknown filter '{}'", other)),
        }
    }
}

/// Sort direction for the appointments table.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

impl std::str::FromStr for SortDir {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "asc" => Ok(SortDir::Asc),
            "desc" => Ok(SortDir::Desc),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterRequest {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Medium>,
    pub sort: SortDir,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterResponse {
    pub total: u32,
    pub data: Vec<AppointmentRecord>,
}

/// Payload of the phone registration form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub password: String,
    pub remember: bool,
}

/// Error body shape shared by the backend endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub errors: Option<Vec<ApiErrorDetail>>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: Option<String>,
}

/// Authenticated session handed down to pages through a Yew context. The
/// token itself is issued by the login flow, outside this app.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuthSession {
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_duration_accepts_number_and_string() {
        let from_number: Slot = serde_json::from_str(
            r#"{"startTime":"09:00 AM","duration":45,"therapistName":"Maya"}"#,
        )
        .unwrap();
        let from_string: Slot = serde_json::from_str(
            r#"{"startTime":"09:00 AM","duration":"45","therapistName":"Maya"}"#,
        )
        .unwrap();

        assert_eq!(from_number.duration, 45);
        assert_eq!(from_string.duration, 45);
    }

    #[test]
    fn slot_duration_rejects_garbage() {
        let result = serde_json::from_str::<Slot>(
            r#"{"startTime":"09:00 AM","duration":"soon","therapistName":"Maya"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn filter_request_omits_medium_for_all() {
        let request = FilterRequest {
            page: 1,
            limit: 10,
            medium: MediumFilter::All.as_medium(),
            sort: SortDir::Asc,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("medium").is_none());
        assert_eq!(json["sort"], "asc");
    }

    #[test]
    fn filter_request_uppercases_medium() {
        let request = FilterRequest {
            page: 2,
            limit: 10,
            medium: MediumFilter::Online.as_medium(),
            sort: SortDir::Desc,
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["medium"], "ONLINE");
        assert_eq!(json["sort"], "desc");
    }

    #[test]
    fn filter_and_sort_round_trip_through_storage_strings() {
        for filter in [MediumFilter::All, MediumFilter::Online, MediumFilter::Offline] {
            assert_eq!(filter.as_str().parse::<MediumFilter>().unwrap(), filter);
        }
        for sort in [SortDir::Asc, SortDir::Desc] {
            assert_eq!(sort.as_str().parse::<SortDir>().unwrap(), sort);
        }
    }

    #[test]
    fn record_without_slot_deserializes() {
        let record: AppointmentRecord = serde_json::from_str(
            r#"{"id":"a1","fullname":"Lina K","email":"lina@example.com","date":"2025-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert!(record.slot.is_none());
    }
}
