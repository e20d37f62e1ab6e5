use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use utoipa::ToSchema;
use uuid::Uuid;

/// 사용자 역할
/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Admin => "ADMIN",
        }
    }

    /// DB 문자열 -> 역할 (알 수 없는 값은 USER로 취급)
    /// Parse role from storage; unknown values fall back to USER
    pub fn parse(s: &str) -> Self {
        match s {
            "ADMIN" => UserRole::Admin,
            _ => UserRole::User,
        }
    }
}

/// 사용자 모델 (DB 저장용, 비밀번호 해시 포함)
/// User model (database row, includes password hash)
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 사용자 응답 모델 (비밀번호 해시 제외)
/// User response model (password hash never serialized)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = UserResponse)]
pub struct UserResponse {
    /// 사용자 ID
    #[schema(example = "7be2a2e3-13e8-4c6c-8f4f-1f54a3a7e6d2")]
    pub id: Uuid,

    /// 이메일 주소
    #[schema(example = "student@example.com")]
    pub email: String,

    /// 이름 (선택사항)
    #[schema(example = "Kim Jiwon")]
    pub name: Option<String>,

    /// 역할
    pub role: UserRole,

    /// 가입 시각
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
        }
    }
}
