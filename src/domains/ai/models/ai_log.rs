use uuid::Uuid;

/// AI 호출 종류
/// Kind of AI interaction being logged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    Search,
    Title,
    Outline,
}

impl PromptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptType::Search => "SEARCH",
            PromptType::Title => "TITLE",
            PromptType::Outline => "OUTLINE",
        }
    }
}

/// AI 로그 생성 모델
/// AI log creation model
///
/// 로그 실패가 원래 요청을 실패시키지는 않는다.
/// (user_id 컬럼은 사용자 삭제 시 SET NULL이라 Option)
#[derive(Debug, Clone)]
pub struct AiLogCreate {
    pub user_id: Option<Uuid>,
    pub prompt_type: PromptType,
    pub input: String,
    pub output: String,
}
