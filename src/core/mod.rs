//! 한글 조합 엔진
//!
//! - `tables`: 자모 목록과 복합 자모 조합/분해 테이블
//! - `unicode`: 한글 판별, 인덱스 변환, 음절 조합/분해
//! - `jamo_mapper`: 두벌식 키 -> 자모 매핑
//! - `hangul_fsm`: 조합 오토마타
//! - `session`: 오토마타 결과를 편집 버퍼에 적용하는 입력 세션

pub mod converter;
pub mod hangul_fsm;
pub mod jamo_mapper;
pub mod session;
pub mod tables;
pub mod unicode;
