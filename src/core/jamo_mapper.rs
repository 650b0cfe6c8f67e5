//! 두벌식 자판 영문 키 -> 한글 자모 매핑

use bitflags::bitflags;

bitflags! {
    /// 키 입력 시점의 수정자 상태
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct KeyState: u8 {
        const SHIFT = 1 << 0;
        const CAPS_LOCK = 1 << 1;
    }
}

impl KeyState {
    /// 쉬프트 자판을 써야 하는지
    pub fn is_shifted(self) -> bool {
        self.intersects(KeyState::SHIFT | KeyState::CAPS_LOCK)
    }

    /// 문자 자체의 대소문자로 쉬프트 상태 추정 (하드웨어 키 이벤트 없이 문자열을 입력할 때)
    pub fn from_char(c: char) -> Self {
        if c.is_ascii_uppercase() {
            KeyState::SHIFT
        } else {
            KeyState::empty()
        }
    }
}

/// 쉬프트 없이 a..z 에 대응하는 자모
#[rustfmt::skip]
const NORMAL_KEY_MAP: [char; 26] = [
    'ㅁ', 'ㅠ', 'ㅊ', 'ㅇ', 'ㄷ', 'ㄹ', 'ㅎ', 'ㅗ', 'ㅑ', 'ㅓ', 'ㅏ', 'ㅣ', 'ㅡ',
    'ㅜ', 'ㅐ', 'ㅔ', 'ㅂ', 'ㄱ', 'ㄴ', 'ㅅ', 'ㅕ', 'ㅍ', 'ㅈ', 'ㅌ', 'ㅛ', 'ㅋ',
];

/// 쉬프트 상태에서 a..z 에 대응하는 자모 (쌍자음, ㅒ, ㅖ)
#[rustfmt::skip]
const SHIFTED_KEY_MAP: [char; 26] = [
    'ㅁ', 'ㅠ', 'ㅊ', 'ㅇ', 'ㄸ', 'ㄹ', 'ㅎ', 'ㅗ', 'ㅑ', 'ㅓ', 'ㅏ', 'ㅣ', 'ㅡ',
    'ㅜ', 'ㅒ', 'ㅖ', 'ㅃ', 'ㄲ', 'ㄴ', 'ㅆ', 'ㅕ', 'ㅍ', 'ㅉ', 'ㅌ', 'ㅛ', 'ㅋ',
];

/// 영문 알파벳 인덱스 (대소문자 무시, a = 0)
pub fn alphabet_index(c: char) -> Option<usize> {
    match c {
        'a'..='z' => Some(c as usize - 'a' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize),
        _ => None,
    }
}

/// 영문 키 하나를 자모로 변환
/// 대소문자가 아니라 key_state로 자판을 고름
/// 알파벳이 아닌 문자(숫자, 특수문자 등)는 None 반환
pub fn map_key(c: char, key_state: KeyState) -> Option<char> {
    let index = alphabet_index(c)?;
    if key_state.is_shifted() {
        Some(SHIFTED_KEY_MAP[index])
    } else {
        Some(NORMAL_KEY_MAP[index])
    }
}
