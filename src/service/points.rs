//! 积分计算，纯函数
//!
//! 积分在活动创建时算一次，之后不可变。用户总分永远是活动表的
//! 求和投影，不维护可变计数器，重复提交不会产生双重计数入口。

use crate::model::activity::ActivityType;

/// 每种活动类型的积分权重
pub fn multiplier(activity_type: ActivityType) -> f64 {
    match activity_type {
        ActivityType::Running => 1.5,
        ActivityType::Cycling => 1.3,
        ActivityType::Swimming => 1.6,
        ActivityType::StrengthTraining => 1.4,
        ActivityType::Walking => 1.0,
        ActivityType::Yoga => 1.2,
        ActivityType::Other => 1.0,
    }
}

/// points = floor(duration_minutes * multiplier)
/// 未识别的类型按 1.0 降级处理，不报错
pub fn score(activity_type: &str, duration_minutes: i32) -> i32 {
    let m = multiplier(ActivityType::from_name(activity_type));
    (duration_minutes as f64 * m).floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_is_floor_of_duration_times_multiplier() {
        // 60 分钟跑步 → floor(60 * 1.5) = 90
        assert_eq!(score("running", 60), 90);
        assert_eq!(score("cycling", 60), 78);
        assert_eq!(score("swimming", 60), 96);
        assert_eq!(score("strength_training", 60), 84);
        assert_eq!(score("walking", 60), 60);
        assert_eq!(score("yoga", 60), 72);
    }

    #[test]
    fn score_floors_fractional_points() {
        // floor(7 * 1.5) = 10, 不四舍五入
        assert_eq!(score("running", 7), 10);
        assert_eq!(score("cycling", 7), 9);
        assert_eq!(score("yoga", 5), 6);
    }

    #[test]
    fn unknown_type_degrades_to_identity() {
        assert_eq!(score("parkour", 45), 45);
        assert_eq!(score("", 45), 45);
        assert_eq!(score("RUNNING", 45), 45);
    }

    #[test]
    fn zero_duration_scores_zero() {
        assert_eq!(score("running", 0), 0);
        assert_eq!(score("unknown", 0), 0);
    }
}
