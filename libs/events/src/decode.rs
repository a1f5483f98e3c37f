//! Frame decoding at the trust boundary.
//!
//! Producers are external and untrusted. A frame either decodes into a
//! typed [`InboundEvent`] or is rejected; partially-valid data never
//! propagates into the scoreboard.

use serde_json::Value;

use crate::error::EventError;
use crate::types::{message_types, InboundEvent, ScoreUpdate, WorkoutProgress};

/// Decodes and validates a raw producer frame.
pub fn decode(frame: &Value) -> Result<InboundEvent, EventError> {
    let Some(frame_type) = frame.get("type").and_then(Value::as_str) else {
        return Err(EventError::MissingType);
    };

    let data = frame
        .get("data")
        .ok_or_else(|| EventError::InvalidPayload("frame missing data field".to_string()))?;

    match frame_type {
        message_types::UPDATE_LEADERBOARD => {
            let update: ScoreUpdate = serde_json::from_value(data.clone())
                .map_err(|e| EventError::InvalidPayload(e.to_string()))?;
            validate_score_update(&update)?;
            Ok(InboundEvent::LeaderboardUpdate(update))
        }
        message_types::EXERCISE_DATA => {
            let progress: WorkoutProgress = serde_json::from_value(data.clone())
                .map_err(|e| EventError::InvalidPayload(e.to_string()))?;
            validate_workout_progress(&progress)?;
            Ok(InboundEvent::WorkoutProgress(progress))
        }
        other => Err(EventError::UnknownEventType(other.to_string())),
    }
}

fn validate_score_update(update: &ScoreUpdate) -> Result<(), EventError> {
    if update.username.is_empty() {
        return Err(EventError::InvalidPayload(
            "username cannot be empty".to_string(),
        ));
    }
    if update.level == 0 {
        return Err(EventError::InvalidPayload(
            "level must be positive".to_string(),
        ));
    }
    Ok(())
}

fn validate_workout_progress(progress: &WorkoutProgress) -> Result<(), EventError> {
    if progress.level == 0 {
        return Err(EventError::InvalidPayload(
            "level must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExerciseKind;
    use serde_json::json;

    #[test]
    fn test_decode_leaderboard_update() {
        let frame = json!({
            "type": "updateLeaderboard",
            "data": {
                "id": "usr_01HV4Z2WQXKJNM8GPQY6VBKC3D",
                "username": "fitness_pro",
                "xp": 13000,
                "level": 26,
                "avatar": ""
            }
        });

        let event = decode(&frame).unwrap();
        let InboundEvent::LeaderboardUpdate(update) = event else {
            panic!("expected leaderboard update");
        };
        assert_eq!(update.username, "fitness_pro");
        assert_eq!(update.xp, 13_000);
    }

    #[test]
    fn test_decode_workout_progress() {
        let frame = json!({
            "type": "exerciseData",
            "data": {
                "exerciseType": "squat",
                "reps": 12,
                "xp": 340,
                "level": 3,
                "exercisesToday": 2,
                "formQuality": { "good": 10, "poor": 2 },
                "formFeedback": "Keep your back straight"
            }
        });

        let event = decode(&frame).unwrap();
        let InboundEvent::WorkoutProgress(progress) = event else {
            panic!("expected workout progress");
        };
        assert_eq!(progress.exercise_type, ExerciseKind::Squat);
        assert_eq!(progress.reps, 12);
        assert_eq!(progress.form_quality.good, 10);
    }

    #[test]
    fn test_missing_type_rejected() {
        let frame = json!({ "data": {} });
        assert!(matches!(decode(&frame), Err(EventError::MissingType)));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let frame = json!({ "type": "somethingElse", "data": {} });
        assert!(matches!(
            decode(&frame),
            Err(EventError::UnknownEventType(t)) if t == "somethingElse"
        ));
    }

    #[test]
    fn test_missing_xp_rejected() {
        // The producer omitting a required field drops the frame; it must
        // not propagate into the board as a default.
        let frame = json!({
            "type": "updateLeaderboard",
            "data": { "username": "fitness_pro", "level": 26 }
        });
        assert!(matches!(decode(&frame), Err(EventError::InvalidPayload(_))));
    }

    #[test]
    fn test_negative_xp_rejected() {
        let frame = json!({
            "type": "updateLeaderboard",
            "data": { "username": "fitness_pro", "xp": -5, "level": 26 }
        });
        assert!(matches!(decode(&frame), Err(EventError::InvalidPayload(_))));
    }

    #[test]
    fn test_empty_username_rejected() {
        let frame = json!({
            "type": "updateLeaderboard",
            "data": { "username": "", "xp": 100, "level": 1 }
        });
        assert!(matches!(decode(&frame), Err(EventError::InvalidPayload(_))));
    }

    #[test]
    fn test_zero_level_rejected() {
        let frame = json!({
            "type": "updateLeaderboard",
            "data": { "username": "fitness_pro", "xp": 100, "level": 0 }
        });
        assert!(matches!(decode(&frame), Err(EventError::InvalidPayload(_))));
    }

    #[test]
    fn test_unknown_exercise_kind_rejected() {
        let frame = json!({
            "type": "exerciseData",
            "data": {
                "exerciseType": "deadlift",
                "reps": 1,
                "xp": 10,
                "level": 1,
                "exercisesToday": 1,
                "formQuality": { "good": 1, "poor": 0 }
            }
        });
        assert!(matches!(decode(&frame), Err(EventError::InvalidPayload(_))));
    }
}
