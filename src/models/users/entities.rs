use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "PascalCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student,       // 学生
    Professor,     // 教授
    Administrator, // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "Student";
    pub const PROFESSOR: &'static str = "Professor";
    pub const ADMINISTRATOR: &'static str = "Administrator";

    pub fn administrator_roles() -> &'static [&'static UserRole] {
        &[&Self::Administrator]
    }
    pub fn professor_roles() -> &'static [&'static UserRole] {
        &[&Self::Professor]
    }
    pub fn student_roles() -> &'static [&'static UserRole] {
        &[&Self::Student]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Professor, &Self::Administrator]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: Student, Professor, Administrator"
            )))
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Professor => write!(f, "{}", UserRole::PROFESSOR),
            UserRole::Administrator => write!(f, "{}", UserRole::ADMINISTRATOR),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::PROFESSOR => Ok(UserRole::Professor),
            UserRole::ADMINISTRATOR => Ok(UserRole::Administrator),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// 已通过令牌校验的调用者身份
///
/// 由 RequireJWT 中间件写入请求扩展；操作层通过
/// `RequireJWT::extract_*` 读取。身份与角色由外部签发方裁定，
/// 本服务不做二次查库。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [
            UserRole::Student,
            UserRole::Professor,
            UserRole::Administrator,
        ] {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_invalid_role_rejected() {
        assert!("Janitor".parse::<UserRole>().is_err());
        // 角色名大小写敏感，与签发方保持一致
        assert!("student".parse::<UserRole>().is_err());
    }
}
