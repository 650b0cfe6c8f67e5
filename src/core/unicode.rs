//! 유니코드 한글 판별 및 조합/분해 유틸리티
//!
//! 완성형 음절(U+AC00 ~ U+D7A3)과 호환용 자모(U+3131 ~ U+3163)를 다룹니다.
//! 인덱스가 정의되지 않는 경우는 모두 None을 반환합니다.

use lazy_static::lazy_static;

use crate::core::tables::{
    CHOSEONG, CHOSEONG_COUNT, JONGSEONG, JONGSEONG_COUNT, JUNGSEONG, JUNGSEONG_COUNT,
};

/// 한글 음절 시작 코드포인트 (가)
pub const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 끝 코드포인트 (힣)
pub const HANGUL_SYLLABLE_END: u32 = 0xD7A3;
/// 호환용 자모 시작 (ㄱ)
pub const HANGUL_JAMO_START: u32 = 0x3131;
/// 호환용 모음 시작 (ㅏ), 자음/모음 경계
pub const HANGUL_VOWEL_START: u32 = 0x314F;
/// 호환용 자모 끝 (ㅣ)
pub const HANGUL_JAMO_END: u32 = 0x3163;

const JAMO_SPAN: usize = (HANGUL_JAMO_END - HANGUL_JAMO_START + 1) as usize;

/// 호환용 자음 하나의 (초성 인덱스, 종성 인덱스)
#[derive(Debug, Clone, Copy, Default)]
struct ConsonantSlots {
    cho: Option<u32>,
    jong: Option<u32>,
}

lazy_static! {
    /// 호환용 자모 코드포인트 -> 초성/종성 인덱스 역참조 테이블
    static ref CONSONANT_SLOTS: [ConsonantSlots; JAMO_SPAN] = {
        let mut slots = [ConsonantSlots::default(); JAMO_SPAN];
        for (i, c) in CHOSEONG.iter().enumerate() {
            slots[jamo_offset(*c)].cho = Some(i as u32);
        }
        for (i, c) in JONGSEONG.iter().enumerate() {
            if let Some(c) = c {
                slots[jamo_offset(*c)].jong = Some(i as u32);
            }
        }
        slots
    };
}

fn jamo_offset(c: char) -> usize {
    (c as u32 - HANGUL_JAMO_START) as usize
}

/// 완성형 음절 또는 호환용 자모인지 확인
pub fn is_hangul(c: char) -> bool {
    is_syllable(c) || is_jamo(c)
}

/// 완성형 음절인지 확인
pub fn is_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_END).contains(&(c as u32))
}

/// 호환용 자모(낱자)인지 확인
pub fn is_jamo(c: char) -> bool {
    (HANGUL_JAMO_START..=HANGUL_JAMO_END).contains(&(c as u32))
}

/// 자음 자모인지 확인 (ㄱ ~ ㅎ, 겹자음 포함)
pub fn is_consonant_jamo(c: char) -> bool {
    (HANGUL_JAMO_START..HANGUL_VOWEL_START).contains(&(c as u32))
}

/// 모음 자모인지 확인 (ㅏ ~ ㅣ)
pub fn is_vowel_jamo(c: char) -> bool {
    (HANGUL_VOWEL_START..=HANGUL_JAMO_END).contains(&(c as u32))
}

/// 초성 인덱스
/// - 완성형 음절: 오프셋에서 계산
/// - 자음 자모: 초성 테이블 위치 (ㄳ 등 초성이 될 수 없는 자음은 None)
pub fn choseong_index(c: char) -> Option<u32> {
    if is_syllable(c) {
        return decompose_syllable(c).map(|(cho, _, _)| cho);
    }
    if is_consonant_jamo(c) {
        return CONSONANT_SLOTS[jamo_offset(c)].cho;
    }
    None
}

/// 중성 인덱스
/// - 완성형 음절: 오프셋에서 계산
/// - 모음 자모: 코드포인트 차이 (중성 순서와 호환용 모음 순서가 같음)
pub fn jungseong_index(c: char) -> Option<u32> {
    if is_syllable(c) {
        return decompose_syllable(c).map(|(_, jung, _)| jung);
    }
    if is_vowel_jamo(c) {
        return Some(c as u32 - HANGUL_VOWEL_START);
    }
    None
}

/// 종성 인덱스
/// - 완성형 음절: 오프셋에서 계산 (0 = 종성 없음)
/// - 자음 자모: 종성 테이블 위치 (ㄸ, ㅃ, ㅉ은 종성 불가 -> None)
pub fn jongseong_index(c: char) -> Option<u32> {
    if is_syllable(c) {
        return decompose_syllable(c).map(|(_, _, jong)| jong);
    }
    if is_consonant_jamo(c) {
        return CONSONANT_SLOTS[jamo_offset(c)].jong;
    }
    None
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 초성 인덱스의 호환용 자모
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG.get(cho as usize).copied()
}

/// 중성 인덱스의 호환용 모음 자모
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG.get(jung as usize).copied()
}

/// 종성 인덱스의 호환용 자모 (0 = 종성 없음 -> None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    JONGSEONG.get(jong as usize).copied().flatten()
}
