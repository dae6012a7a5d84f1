pub mod activity_dto;
pub mod leaderboard_dto;
pub mod team_dto;
pub mod user_dto;
pub mod workout_dto;

#[cfg(test)]
mod tests {
    use crate::dto::activity_dto::ActivityCreateDto;
    use crate::model::leaderboard::Period;
    use crate::model::user::FitnessLevel;
    use chrono::Utc;
    use validator::Validate;

    #[test]
    fn period_names_are_closed() {
        for name in ["daily", "weekly", "monthly", "all_time"] {
            assert!(Period::from_name(name).is_some());
        }
        assert!(Period::from_name("yearly").is_none());
        assert!(Period::from_name("").is_none());
    }

    #[test]
    fn fitness_level_names_are_closed() {
        for name in ["beginner", "intermediate", "advanced"] {
            assert!(FitnessLevel::from_name(name).is_some());
        }
        assert!(FitnessLevel::from_name("expert").is_none());
    }

    #[test]
    fn negative_duration_is_rejected() {
        let dto = ActivityCreateDto {
            user_id: 1,
            activity_type: "running".to_string(),
            duration_minutes: -5,
            distance_km: None,
            calories: None,
            notes: None,
            date: Utc::now(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn negative_distance_is_rejected() {
        let dto = ActivityCreateDto {
            user_id: 1,
            activity_type: "running".to_string(),
            duration_minutes: 30,
            distance_km: Some(-1.0),
            calories: None,
            notes: None,
            date: Utc::now(),
        };
        assert!(dto.validate().is_err());
    }
}
