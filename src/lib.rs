// Thesis Finder API Server
// 논문 검색 / AI 생성 / 데이터셋 결제 API 서버
pub mod domains;
pub mod routes;
pub mod shared;
