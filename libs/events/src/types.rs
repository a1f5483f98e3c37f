//! Event type definitions for all producer messages.
//!
//! Payload field names follow the producer wire format (camelCase).

use serde::{Deserialize, Serialize};

/// All frame type tags as constants.
pub mod message_types {
    /// A participant's new score for the leaderboard.
    pub const UPDATE_LEADERBOARD: &str = "updateLeaderboard";
    /// Live workout progress from the exercise detector.
    pub const EXERCISE_DATA: &str = "exerciseData";
}

/// Exercise kinds the detector reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseKind {
    #[serde(rename = "squat")]
    Squat,
    #[serde(rename = "pushup")]
    Pushup,
    #[serde(rename = "bicep")]
    BicepCurl,
}

impl std::fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ExerciseKind::Squat => "squat",
            ExerciseKind::Pushup => "pushup",
            ExerciseKind::BicepCurl => "bicep",
        };
        write!(f, "{}", s)
    }
}

/// Good/poor rep counts for form scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormQuality {
    pub good: u32,
    pub poor: u32,
}

/// Payload of an `updateLeaderboard` frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    /// Participant token, if the producer knows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name used for matching on the board.
    pub username: String,

    /// New experience point total.
    pub xp: u64,

    /// Level derived by the producer.
    pub level: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Payload of an `exerciseData` frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutProgress {
    pub exercise_type: ExerciseKind,

    /// Reps counted so far in this workout.
    pub reps: u32,

    /// The participant's running XP total.
    pub xp: u64,

    /// Level derived by the producer.
    pub level: u32,

    pub exercises_today: u32,

    pub form_quality: FormQuality,

    /// Free-text form feedback ("Keep your back straight", ...).
    #[serde(default)]
    pub form_feedback: String,
}

/// A validated inbound event.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundEvent {
    LeaderboardUpdate(ScoreUpdate),
    WorkoutProgress(WorkoutProgress),
}

impl InboundEvent {
    /// The frame type tag this event was decoded from.
    pub fn frame_type(&self) -> &'static str {
        match self {
            InboundEvent::LeaderboardUpdate(_) => message_types::UPDATE_LEADERBOARD,
            InboundEvent::WorkoutProgress(_) => message_types::EXERCISE_DATA,
        }
    }
}
