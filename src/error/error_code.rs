// 用户错误
// 11xxx
pub const USER_NOT_FOUND: u32 = 11001;
pub const USER_ALREADY_EXISTS: u32 = 11002;

// db错误
// 13xxx
pub const SOMETHING_WENT_WRONG: u32 = 13001;
pub const UNIQUE_CONSTRAINT_VIOLATION: u32 = 13002;

// 队伍错误
// 14xxx
pub const TEAM_NOT_FOUND: u32 = 14001;
pub const ALREADY_TEAM_MEMBER: u32 = 14002;
pub const NOT_TEAM_MEMBER: u32 = 14003;

// 活动错误
// 15xxx
pub const ACTIVITY_NOT_FOUND: u32 = 15001;

// 训练计划错误
// 16xxx
pub const WORKOUT_NOT_FOUND: u32 = 16001;

// request错误
// 20xxx
pub const VALIDATION_ERROR: u32 = 20001;
pub const JSON_REJECTION: u32 = 20002;
pub const COMMON_REQUEST_ERROR: u32 = 20004;
