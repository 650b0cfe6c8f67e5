//! 영문 키 입력 문자열 -> 한글 문자열 일괄 변환

use crate::core::jamo_mapper::KeyState;
use crate::core::session::InputSession;

/// 영문 문자열을 한글 모드 세션에 한 글자씩 입력한 결과
/// 대문자는 쉬프트 입력으로 취급 (R -> ㄲ)
/// 숫자, 공백, 특수문자는 조합을 끊고 그대로 유지
pub fn convert(input: &str) -> String {
    let mut session = InputSession::with_defaults();

    for c in input.chars() {
        session.type_char(c, KeyState::from_char(c));
    }

    session.commit();
    session.committed_text().to_string()
}
