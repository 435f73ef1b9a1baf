use super::options::{DurationMode, MeetingType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_duration() -> u32 {
    1
}

/// Body of `POST /create_meeting`, forwarded to the platform as-is
///
/// Only `meeting_type` is required. Everything else falls back to the
/// platform's defaults, and no cross-field checks are made here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MeetingCreateRequest {
    /// List of moderator identifiers as string
    #[serde(default)]
    pub moderators: Vec<String>,

    /// List of participant identifiers as string
    #[serde(default)]
    pub participants: Vec<String>,

    /// Date in mm/dd/yyyy format. eg. 09/28/2020 for Sep 28, 2020
    #[serde(default)]
    pub date: String,

    /// Time in HH:MM p format. eg. 10:30 AM
    #[serde(default)]
    pub time: String,

    /// Timezone for date/time. eg. Asia/Kolkata
    #[serde(default)]
    pub timezone: String,

    /// Meeting length as a multiplier of `duration_mode`
    #[serde(default = "default_duration")]
    pub duration: u32,

    /// Block of time that `duration` multiplies. eg. 2 hr
    #[serde(default)]
    pub duration_mode: DurationMode,

    /// Watermark image url shown in the meeting window
    #[serde(default)]
    pub watermark: String,

    /// Standard rrule string describing recurrence
    #[serde(default)]
    pub rrule: String,

    #[serde(default)]
    pub is_recurring: bool,

    /// Start recording automatically. Overrides the organization setting.
    #[serde(default)]
    pub auto_record: bool,

    /// Milliseconds since epoch beyond which recurrences are not scheduled (0 = unset)
    #[serde(default)]
    pub end_recurring: i64,

    /// One of the organization or user room names. Empty for a random room.
    #[serde(default)]
    pub room_name: String,

    /// Meeting name that appears in communication
    #[serde(default)]
    pub meeting_name: String,

    /// Meeting description that appears in communication
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub meeting_password: String,

    /// Plan type to use for creating this meeting
    pub meeting_type: MeetingType,

    /// Allow co-browsing in the meeting
    #[serde(default)]
    pub can_co_browse: bool,
}

impl MeetingCreateRequest {
    /// Request with every optional field at its default
    pub fn new(meeting_type: MeetingType) -> Self {
        Self {
            moderators: Vec::new(),
            participants: Vec::new(),
            date: String::new(),
            time: String::new(),
            timezone: String::new(),
            duration: default_duration(),
            duration_mode: DurationMode::default(),
            watermark: String::new(),
            rrule: String::new(),
            is_recurring: false,
            auto_record: false,
            end_recurring: 0,
            room_name: String::new(),
            meeting_name: String::new(),
            description: String::new(),
            meeting_password: String::new(),
            meeting_type,
            can_co_browse: false,
        }
    }
}
