use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use utoipa::ToSchema;

/// Returned when a wire string is not a member of a closed option set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a closed, string-valued option set.
///
/// Every variant serializes to exactly one wire string and may accept extra
/// spellings on input. Serde, `FromStr` and `Display` all go through that
/// mapping, so unknown values are rejected on the way in.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $(#[serde(alias = $alias)])*
                $variant,
            )+
        }

        impl $name {
            /// All members, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Wire strings of every member
            pub fn values() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire $(| $alias)* => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// Lifecycle state of a meeting on the platform
    MeetingStatus {
        Scheduled => "SCHEDULED",
        InProgress => "IN_PROGRESS",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED",
        Waiting => "WAITING",
    }
}

wire_enum! {
    /// Role a user holds inside a meeting
    MeetingUserType {
        Owner => "owner",
        Moderator => "moderator",
        Participant => "participant",
        Public => "public",
    }
}

wire_enum! {
    /// Plan type used when creating a meeting
    MeetingType {
        Conference => "conference",
        Webinar => "webinar",
        LiveClass => "live_class",
        LiveStreaming => "live_streaming",
        AudioCall => "audio_call",
        TalkToMe => "talk_to_me",
        LiveCall => "live_call",
        DirectCall => "direct_call",
    }
}

wire_enum! {
    /// One-to-one call flavours of [`MeetingType`]
    TransactionalType {
        AudioCall => "audio_call",
        TalkToMe => "talk_to_me",
        LiveCall => "live_call",
    }
}

wire_enum! {
    /// Who started or ended a meeting
    MeetingSourceType {
        User => "user",
        Email => "email",
        Api => "api",
        GarbageCollector => "garbage_collector",
    }
}

wire_enum! {
    /// Unit that `duration` is a multiplier of
    DurationMode {
        Hour => "hr" | "hour",
        Minute => "min" | "minute",
    }
}

impl Default for DurationMode {
    fn default() -> Self {
        DurationMode::Hour
    }
}

impl MeetingType {
    pub fn is_transactional(&self) -> bool {
        TransactionalType::try_from(*self).is_ok()
    }
}

impl TryFrom<MeetingType> for TransactionalType {
    type Error = UnknownVariant;

    fn try_from(value: MeetingType) -> Result<Self, Self::Error> {
        value.as_str().parse()
    }
}

impl From<TransactionalType> for MeetingType {
    fn from(value: TransactionalType) -> Self {
        match value {
            TransactionalType::AudioCall => MeetingType::AudioCall,
            TransactionalType::TalkToMe => MeetingType::TalkToMe,
            TransactionalType::LiveCall => MeetingType::LiveCall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_type_wire_strings() {
        assert_eq!(
            MeetingType::values(),
            vec![
                "conference",
                "webinar",
                "live_class",
                "live_streaming",
                "audio_call",
                "talk_to_me",
                "live_call",
                "direct_call"
            ]
        );

        for ty in MeetingType::ALL {
            let json = serde_json::to_string(ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_str()));
            assert_eq!(ty.as_str().parse::<MeetingType>().unwrap(), *ty);
        }
    }

    #[test]
    fn test_unknown_value_rejected() {
        let err = "board_meeting".parse::<MeetingType>().unwrap_err();
        assert_eq!(err.kind, "MeetingType");
        assert_eq!(err.to_string(), "'board_meeting' is not a valid MeetingType");

        assert!(serde_json::from_str::<MeetingStatus>("\"scheduled\"").is_err());
        assert!(serde_json::from_str::<DurationMode>("\"hours\"").is_err());
    }

    #[test]
    fn test_status_uses_upper_case() {
        let status: MeetingStatus = serde_json::from_str("\"IN_PROGRESS\"").unwrap();
        assert_eq!(status, MeetingStatus::InProgress);
        assert_eq!(MeetingStatus::Cancelled.to_string(), "CANCELLED");
    }

    #[test]
    fn test_duration_mode_defaults_to_hours() {
        assert_eq!(DurationMode::default(), DurationMode::Hour);
        assert_eq!(DurationMode::Minute.as_str(), "min");
    }

    #[test]
    fn test_duration_mode_accepts_long_spellings() {
        let mode: DurationMode = serde_json::from_str("\"hour\"").unwrap();
        assert_eq!(mode, DurationMode::Hour);
        let mode: DurationMode = serde_json::from_str("\"minute\"").unwrap();
        assert_eq!(mode, DurationMode::Minute);

        assert_eq!("minute".parse::<DurationMode>().unwrap(), DurationMode::Minute);
        assert_eq!(serde_json::to_string(&DurationMode::Minute).unwrap(), "\"min\"");
        assert_eq!(DurationMode::values(), vec!["hr", "min"]);
    }

    #[test]
    fn test_transactional_subset() {
        let transactional: Vec<MeetingType> = MeetingType::ALL
            .iter()
            .copied()
            .filter(MeetingType::is_transactional)
            .collect();

        assert_eq!(
            transactional,
            vec![MeetingType::AudioCall, MeetingType::TalkToMe, MeetingType::LiveCall]
        );

        for ty in TransactionalType::ALL {
            assert_eq!(MeetingType::from(*ty).as_str(), ty.as_str());
        }
        assert!(TransactionalType::try_from(MeetingType::Webinar).is_err());
    }

    #[test]
    fn test_roles_and_sources() {
        assert_eq!(
            MeetingUserType::values(),
            vec!["owner", "moderator", "participant", "public"]
        );
        assert_eq!(
            "garbage_collector".parse::<MeetingSourceType>().unwrap(),
            MeetingSourceType::GarbageCollector
        );
    }
}
