//! 자모 목록과 복합 자모 조합/분해 테이블
//!
//! 모든 테이블은 문자 대신 인덱스를 키로 사용합니다.
//!
//! 초성 인덱스 (19개):
//! ㄱ(0) ㄲ(1) ㄴ(2) ㄷ(3) ㄸ(4) ㄹ(5) ㅁ(6) ㅂ(7) ㅃ(8) ㅅ(9)
//! ㅆ(10) ㅇ(11) ㅈ(12) ㅉ(13) ㅊ(14) ㅋ(15) ㅌ(16) ㅍ(17) ㅎ(18)
//!
//! 중성 인덱스 (21개):
//! ㅏ(0) ㅐ(1) ㅑ(2) ㅒ(3) ㅓ(4) ㅔ(5) ㅕ(6) ㅖ(7) ㅗ(8) ㅘ(9)
//! ㅙ(10) ㅚ(11) ㅛ(12) ㅜ(13) ㅝ(14) ㅞ(15) ㅟ(16) ㅠ(17) ㅡ(18) ㅢ(19) ㅣ(20)
//!
//! 종성 인덱스 (28개, 0 = 없음):
//! 없음(0) ㄱ(1) ㄲ(2) ㄳ(3) ㄴ(4) ㄵ(5) ㄶ(6) ㄷ(7) ㄹ(8) ㄺ(9)
//! ㄻ(10) ㄼ(11) ㄽ(12) ㄾ(13) ㄿ(14) ㅀ(15) ㅁ(16) ㅂ(17) ㅄ(18) ㅅ(19)
//! ㅆ(20) ㅇ(21) ㅈ(22) ㅊ(23) ㅋ(24) ㅌ(25) ㅍ(26) ㅎ(27)

/// 초성 개수
pub const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
pub const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
pub const JONGSEONG_COUNT: u32 = 28;

/// 초성 순서의 호환용 자모
#[rustfmt::skip]
pub const CHOSEONG: [char; CHOSEONG_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 순서의 호환용 모음 자모 (U+314F ~ U+3163 연속)
#[rustfmt::skip]
pub const JUNGSEONG: [char; JUNGSEONG_COUNT as usize] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 순서의 호환용 자음 자모 (0번 = 종성 없음)
#[rustfmt::skip]
pub const JONGSEONG: [Option<char>; JONGSEONG_COUNT as usize] = [
    None,
    Some('ㄱ'), Some('ㄲ'), Some('ㄳ'), Some('ㄴ'), Some('ㄵ'), Some('ㄶ'), Some('ㄷ'),
    Some('ㄹ'), Some('ㄺ'), Some('ㄻ'), Some('ㄼ'), Some('ㄽ'), Some('ㄾ'), Some('ㄿ'),
    Some('ㅀ'), Some('ㅁ'), Some('ㅂ'), Some('ㅄ'), Some('ㅅ'), Some('ㅆ'), Some('ㅇ'),
    Some('ㅈ'), Some('ㅊ'), Some('ㅋ'), Some('ㅌ'), Some('ㅍ'), Some('ㅎ'),
];

/// 두 중성을 복합 모음으로 조합
/// 반환: 복합 모음 인덱스 (실패 시 None)
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (8, 0) => Some(9),    // ㅗ + ㅏ = ㅘ
        (8, 1) => Some(10),   // ㅗ + ㅐ = ㅙ
        (8, 20) => Some(11),  // ㅗ + ㅣ = ㅚ
        (13, 4) => Some(14),  // ㅜ + ㅓ = ㅝ
        (13, 5) => Some(15),  // ㅜ + ㅔ = ㅞ
        (13, 20) => Some(16), // ㅜ + ㅣ = ㅟ
        (18, 20) => Some(19), // ㅡ + ㅣ = ㅢ
        _ => None,
    }
}

/// 복합 모음을 두 중성으로 분리 (combine_jungseong의 역)
pub fn split_jungseong(jung: u32) -> Option<(u32, u32)> {
    match jung {
        9 => Some((8, 0)),    // ㅘ -> ㅗ + ㅏ
        10 => Some((8, 1)),   // ㅙ -> ㅗ + ㅐ
        11 => Some((8, 20)),  // ㅚ -> ㅗ + ㅣ
        14 => Some((13, 4)),  // ㅝ -> ㅜ + ㅓ
        15 => Some((13, 5)),  // ㅞ -> ㅜ + ㅔ
        16 => Some((13, 20)), // ㅟ -> ㅜ + ㅣ
        19 => Some((18, 20)), // ㅢ -> ㅡ + ㅣ
        _ => None,
    }
}

/// 두 종성을 복합 종성으로 조합
/// 반환: 복합 종성 인덱스 (실패 시 None)
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    match (first, second) {
        (1, 19) => Some(3),   // ㄱ + ㅅ = ㄳ
        (4, 22) => Some(5),   // ㄴ + ㅈ = ㄵ
        (4, 27) => Some(6),   // ㄴ + ㅎ = ㄶ
        (8, 1) => Some(9),    // ㄹ + ㄱ = ㄺ
        (8, 16) => Some(10),  // ㄹ + ㅁ = ㄻ
        (8, 17) => Some(11),  // ㄹ + ㅂ = ㄼ
        (8, 19) => Some(12),  // ㄹ + ㅅ = ㄽ
        (8, 25) => Some(13),  // ㄹ + ㅌ = ㄾ
        (8, 26) => Some(14),  // ㄹ + ㅍ = ㄿ
        (8, 27) => Some(15),  // ㄹ + ㅎ = ㅀ
        (17, 19) => Some(18), // ㅂ + ㅅ = ㅄ
        _ => None,
    }
}

/// 복합 종성을 분리
/// 반환: (첫 번째 종성 인덱스, 두 번째 자음의 초성 인덱스)
/// 두 번째 값은 다음 글자의 초성으로 사용됨
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    match jong {
        3 => Some((1, 9)),   // ㄳ -> ㄱ(종성1) + ㅅ(초성9)
        5 => Some((4, 12)),  // ㄵ -> ㄴ(종성4) + ㅈ(초성12)
        6 => Some((4, 18)),  // ㄶ -> ㄴ(종성4) + ㅎ(초성18)
        9 => Some((8, 0)),   // ㄺ -> ㄹ(종성8) + ㄱ(초성0)
        10 => Some((8, 6)),  // ㄻ -> ㄹ(종성8) + ㅁ(초성6)
        11 => Some((8, 7)),  // ㄼ -> ㄹ(종성8) + ㅂ(초성7)
        12 => Some((8, 9)),  // ㄽ -> ㄹ(종성8) + ㅅ(초성9)
        13 => Some((8, 16)), // ㄾ -> ㄹ(종성8) + ㅌ(초성16)
        14 => Some((8, 17)), // ㄿ -> ㄹ(종성8) + ㅍ(초성17)
        15 => Some((8, 18)), // ㅀ -> ㄹ(종성8) + ㅎ(초성18)
        18 => Some((17, 9)), // ㅄ -> ㅂ(종성17) + ㅅ(초성9)
        _ => None,
    }
}

/// 단일 종성을 초성 인덱스로 변환
/// 종성이 다음 글자의 초성으로 이동할 때 사용
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    match jong {
        1 => Some(0),   // ㄱ
        2 => Some(1),   // ㄲ
        4 => Some(2),   // ㄴ
        7 => Some(3),   // ㄷ
        8 => Some(5),   // ㄹ
        16 => Some(6),  // ㅁ
        17 => Some(7),  // ㅂ
        19 => Some(9),  // ㅅ
        20 => Some(10), // ㅆ
        21 => Some(11), // ㅇ
        22 => Some(12), // ㅈ
        23 => Some(14), // ㅊ
        24 => Some(15), // ㅋ
        25 => Some(16), // ㅌ
        26 => Some(17), // ㅍ
        27 => Some(18), // ㅎ
        _ => None,
    }
}

/// 뒤에 모음이 올 때 종성을 떼어냄
/// 반환: (남는 종성 인덱스, 다음 글자의 초성 인덱스)
/// 복합 종성은 두 번째 자음만, 단일 종성은 전체가 다음 초성이 됨
pub fn detach_jongseong(jong: u32) -> Option<(u32, u32)> {
    split_jongseong(jong).or_else(|| jongseong_to_choseong(jong).map(|cho| (0, cho)))
}

/// 종성을 한 단계 줄임 (백스페이스)
/// 복합 종성은 첫 번째 자음으로, 단일 종성은 없음(0)으로
pub fn reduce_jongseong(jong: u32) -> Option<u32> {
    detach_jongseong(jong).map(|(remaining, _)| remaining)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(CHOSEONG.len(), 19);
        assert_eq!(JUNGSEONG.len(), 21);
        assert_eq!(JONGSEONG.len(), 28);
        assert_eq!(JONGSEONG[0], None);
    }

    #[test]
    fn test_jungseong_contiguous() {
        for (i, c) in JUNGSEONG.iter().enumerate() {
            assert_eq!(*c as u32, 0x314F + i as u32);
        }
    }

    #[test]
    fn test_combine_jungseong() {
        assert_eq!(combine_jungseong(8, 0), Some(9)); // ㅗ + ㅏ = ㅘ
        assert_eq!(combine_jungseong(13, 5), Some(15)); // ㅜ + ㅔ = ㅞ
        assert_eq!(combine_jungseong(18, 20), Some(19)); // ㅡ + ㅣ = ㅢ

        assert_eq!(combine_jungseong(0, 0), None);
        assert_eq!(combine_jungseong(9, 20), None); // ㅘ + ㅣ
    }

    #[test]
    fn test_split_inverts_combine_jungseong() {
        for a in 0..JUNGSEONG_COUNT {
            for b in 0..JUNGSEONG_COUNT {
                if let Some(c) = combine_jungseong(a, b) {
                    assert_eq!(split_jungseong(c), Some((a, b)));
                }
            }
        }
        // 단일 모음은 분리 불가
        assert_eq!(split_jungseong(0), None);
        assert_eq!(split_jungseong(20), None);
    }

    #[test]
    fn test_combine_jongseong() {
        assert_eq!(combine_jongseong(1, 19), Some(3)); // ㄱ + ㅅ = ㄳ
        assert_eq!(combine_jongseong(8, 27), Some(15)); // ㄹ + ㅎ = ㅀ
        assert_eq!(combine_jongseong(17, 19), Some(18)); // ㅂ + ㅅ = ㅄ

        assert_eq!(combine_jongseong(1, 1), None);
        assert_eq!(combine_jongseong(3, 19), None); // ㄳ + ㅅ
    }

    #[test]
    fn test_split_inverts_combine_jongseong() {
        let mut count = 0;
        for a in 0..JONGSEONG_COUNT {
            for b in 0..JONGSEONG_COUNT {
                if let Some(c) = combine_jongseong(a, b) {
                    let (first, next_cho) = split_jongseong(c).unwrap();
                    assert_eq!(first, a);
                    // 두 번째 자음의 초성 문자와 종성 문자가 같아야 함
                    assert_eq!(Some(CHOSEONG[next_cho as usize]), JONGSEONG[b as usize]);
                    count += 1;
                }
            }
        }
        assert_eq!(count, 11);
    }

    #[test]
    fn test_jongseong_to_choseong_same_letter() {
        for jong in 1..JONGSEONG_COUNT {
            if let Some(cho) = jongseong_to_choseong(jong) {
                assert_eq!(Some(CHOSEONG[cho as usize]), JONGSEONG[jong as usize]);
            }
        }
        // 복합 종성은 변환 불가 (split_jongseong 사용해야 함)
        assert_eq!(jongseong_to_choseong(3), None);
        assert_eq!(jongseong_to_choseong(0), None);
    }

    #[test]
    fn test_detach_jongseong() {
        assert_eq!(detach_jongseong(1), Some((0, 0))); // ㄱ -> 다음 초성 ㄱ
        assert_eq!(detach_jongseong(9), Some((8, 0))); // ㄺ -> ㄹ + ㄱ
        assert_eq!(detach_jongseong(0), None);
    }

    #[test]
    fn test_reduce_jongseong() {
        assert_eq!(reduce_jongseong(3), Some(1)); // ㄳ -> ㄱ
        assert_eq!(reduce_jongseong(4), Some(0)); // ㄴ -> 없음
        assert_eq!(reduce_jongseong(0), None);
    }
}
