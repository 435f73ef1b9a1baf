//! Request shapes and option sets of the meeting platform

mod meeting;
mod options;

pub use meeting::MeetingCreateRequest;
pub use options::{
    DurationMode, MeetingSourceType, MeetingStatus, MeetingType, MeetingUserType,
    TransactionalType, UnknownVariant,
};
