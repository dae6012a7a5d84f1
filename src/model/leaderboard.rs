use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// 排行榜条目 + 用户名联查结果，(user_id, period) 在库里唯一
#[derive(Clone, Deserialize, Serialize, sqlx::FromRow)]
pub struct LeaderboardEntryRow {
    pub user_id: i64,
    pub username: String,
    pub period: String,
    pub total_points: i32,
    pub total_activities: i32,
    pub total_duration: i32,
    pub total_distance: f64,
    pub rank: i32,
    pub updated_at: DateTime<Utc>,
}

/// 重算输出的一行，rank 已按总分降序分配好
#[derive(Clone, Debug, PartialEq)]
pub struct RankedEntry {
    pub user_id: i64,
    pub total_points: i32,
    pub total_activities: i32,
    pub total_duration: i32,
    pub total_distance: f64,
    pub rank: i32,
}

/// 排行榜统计周期
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
    AllTime,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
            Period::AllTime => "all_time",
        }
    }

    pub fn from_name(name: &str) -> Option<Period> {
        match name {
            "daily" => Some(Period::Daily),
            "weekly" => Some(Period::Weekly),
            "monthly" => Some(Period::Monthly),
            "all_time" => Some(Period::AllTime),
            _ => None,
        }
    }

    /// 统计窗口起点，all_time 为全量
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Period::Daily => Some(now - Duration::days(1)),
            Period::Weekly => Some(now - Duration::days(7)),
            Period::Monthly => Some(now - Duration::days(30)),
            Period::AllTime => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoff_windows() {
        let now = Utc::now();
        assert_eq!(Period::Daily.cutoff(now), Some(now - Duration::days(1)));
        assert_eq!(Period::Weekly.cutoff(now), Some(now - Duration::days(7)));
        assert_eq!(Period::Monthly.cutoff(now), Some(now - Duration::days(30)));
        assert_eq!(Period::AllTime.cutoff(now), None);
    }

    #[test]
    fn period_round_trips_names() {
        for p in [Period::Daily, Period::Weekly, Period::Monthly, Period::AllTime] {
            assert_eq!(Period::from_name(p.as_str()), Some(p));
        }
    }
}
