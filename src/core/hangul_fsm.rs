//! 한글 조합 오토마타
//!
//! 두벌식 키 입력을 한 글자씩 받아 조합 중인 글자(composite)와
//! 방금 확정된 글자(complete)를 갱신합니다. 백스페이스는 마지막 전이를 한 단계 되돌립니다.
//!
//! ```
//! use hangul_ime::core::hangul_fsm::{Action, HangulAutomata, State};
//! use hangul_ime::core::jamo_mapper::KeyState;
//!
//! let mut automata = HangulAutomata::with_korean_mode(true);
//! automata.advance('r', KeyState::empty()).unwrap();
//! let action = automata.advance('k', KeyState::empty()).unwrap();
//! assert_eq!(action, Action::UPDATE_COMPOSITE);
//! assert_eq!(automata.composite(), Some('가'));
//! assert_eq!(automata.state(), State::ConsonantVowel);
//! ```

use bitflags::bitflags;

use crate::core::jamo_mapper::{map_key, KeyState};
use crate::core::tables::{
    combine_jongseong, combine_jungseong, detach_jongseong, reduce_jongseong, split_jongseong,
    split_jungseong,
};
use crate::core::unicode::{
    choseong_index, choseong_to_jamo_char, compose_syllable, decompose_syllable, is_consonant_jamo,
    is_jamo, jongseong_index, jongseong_to_jamo_char, jungseong_index, jungseong_to_jamo_char,
};

/// 오토마타 상태 (조합 진행 정도)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    /// 조합 중인 글자 없음
    #[default]
    Initial,
    /// 자음 하나 (ㄱ)
    Consonant,
    /// 겹자음 (ㄳ)
    CompoundConsonant,
    /// 모음 하나 (ㅏ)
    Vowel,
    /// 복합 모음 (ㅘ)
    CompoundVowel,
    /// 가
    ConsonantVowel,
    /// 각
    ConsonantVowelConsonant,
    /// 갃
    ConsonantVowelCompoundConsonant,
    /// 과
    ConsonantCompoundVowel,
    /// 곽
    ConsonantCompoundVowelConsonant,
    /// 곿
    ConsonantCompoundVowelCompoundConsonant,
}

bitflags! {
    /// 호스트가 편집 버퍼에 적용할 동작
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Action: u8 {
        /// 마지막 글자를 composite로 교체 (APPEND와 함께면 덧붙임)
        const UPDATE_COMPOSITE = 1 << 0;
        /// 마지막 글자를 complete로 교체
        const UPDATE_COMPLETE = 1 << 1;
        /// 입력 문자를 그대로 사용
        const USE_INPUT_AS_RESULT = 1 << 2;
        /// composite를 새 글자로 덧붙임
        const APPEND = 1 << 3;
    }
}

/// 조합 실패. 실패한 호출은 오토마타 상태를 바꾸지 않습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CompositionError {
    #[error("not a hangul jamo: {0:?}")]
    NotJamo(char),
    #[error("no composite character in state {0:?}")]
    EmptyComposite(State),
    #[error("invalid jamo index for {composite:?} in state {state:?}")]
    InvalidIndex { state: State, composite: char },
}

/// 적용 전의 전이 결과
#[derive(Debug)]
struct Transition {
    state: State,
    composite: Option<char>,
    complete: Option<char>,
    action: Action,
}

impl Transition {
    /// composite만 바뀜
    fn update(state: State, composite: char) -> Self {
        Self {
            state,
            composite: Some(composite),
            complete: None,
            action: Action::UPDATE_COMPOSITE,
        }
    }

    /// complete 확정 + 새 composite
    fn settle(state: State, complete: Option<char>, composite: char) -> Self {
        Self {
            state,
            composite: Some(composite),
            complete,
            action: Action::UPDATE_COMPLETE | Action::UPDATE_COMPOSITE,
        }
    }
}

/// 한글 조합 오토마타 (입력 세션당 하나)
#[derive(Debug, Clone, Default)]
pub struct HangulAutomata {
    state: State,
    /// 조합 중인 글자 (자모 또는 음절)
    composite: Option<char>,
    /// 이번 입력으로 확정된 글자
    complete: Option<char>,
    korean_mode: bool,
}

impl HangulAutomata {
    /// 영문 모드로 시작하는 오토마타
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_korean_mode(korean_mode: bool) -> Self {
        Self {
            korean_mode,
            ..Self::default()
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn composite(&self) -> Option<char> {
        self.composite
    }

    pub fn complete(&self) -> Option<char> {
        self.complete
    }

    pub fn is_korean_mode(&self) -> bool {
        self.korean_mode
    }

    /// 한/영 전환. 버퍼는 건드리지 않으므로 호스트가 먼저 확정해야 함
    pub fn toggle_mode(&mut self) {
        self.korean_mode = !self.korean_mode;
    }

    /// 조합 초기화
    pub fn reset(&mut self) {
        self.state = State::Initial;
        self.composite = None;
        self.complete = None;
    }

    /// 영문 키 하나를 입력
    pub fn advance(&mut self, key: char, key_state: KeyState) -> Result<Action, CompositionError> {
        log::trace!(
            "advance: key={:?}, key_state={:?}, state={:?}",
            key,
            key_state,
            self.state
        );

        let Some(jamo) = map_key(key, key_state) else {
            return Ok(self.interrupt(key_state));
        };

        if !self.korean_mode {
            return Ok(Action::USE_INPUT_AS_RESULT);
        }

        self.feed(jamo)
    }

    /// 알파벳이 아닌 입력: 한글 모드면 조합 중인 글자를 확정
    fn interrupt(&mut self, key_state: KeyState) -> Action {
        let mut action = Action::empty();
        if self.korean_mode {
            self.complete = self.composite.take();
            self.state = State::Initial;
            action |= Action::UPDATE_COMPLETE | Action::UPDATE_COMPOSITE;
        }
        if key_state.is_empty() {
            action |= Action::USE_INPUT_AS_RESULT;
        }
        action
    }

    /// 분류된 자모 하나를 입력 (한/영 모드와 무관)
    pub fn feed(&mut self, jamo: char) -> Result<Action, CompositionError> {
        if !is_jamo(jamo) {
            return Err(CompositionError::NotJamo(jamo));
        }

        let transition = match (self.state, self.composite) {
            (State::Initial, _) => Ok(Self::on_initial(jamo)),
            (state, None) => Err(CompositionError::EmptyComposite(state)),
            (State::Consonant, Some(c)) => self.on_consonant(c, jamo),
            (State::CompoundConsonant, Some(c)) => self.on_compound_consonant(c, jamo),
            (State::Vowel | State::CompoundVowel, Some(c)) => Ok(self.on_vowel(c, jamo)),
            (State::ConsonantVowel, Some(c)) => self.on_consonant_vowel(c, jamo),
            (State::ConsonantVowelConsonant, Some(c)) => {
                self.on_final(c, jamo, State::ConsonantVowelCompoundConsonant)
            }
            (State::ConsonantVowelCompoundConsonant, Some(c)) => {
                self.on_final(c, jamo, State::ConsonantVowelCompoundConsonant)
            }
            (State::ConsonantCompoundVowel, Some(c)) => {
                self.on_consonant_compound_vowel(c, jamo)
            }
            (State::ConsonantCompoundVowelConsonant, Some(c)) => {
                self.on_final(c, jamo, State::ConsonantCompoundVowelCompoundConsonant)
            }
            (State::ConsonantCompoundVowelCompoundConsonant, Some(c)) => {
                self.on_final(c, jamo, State::ConsonantCompoundVowelCompoundConsonant)
            }
        }?;

        Ok(self.apply(transition))
    }

    /// 마지막 전이를 되돌림
    /// - 조합 중인 글자가 없거나 낱자 하나만 지운 경우 USE_INPUT_AS_RESULT (호스트가 직접 삭제)
    /// - 그 외에는 UPDATE_COMPOSITE
    pub fn backspace(&mut self) -> Result<Action, CompositionError> {
        log::trace!("backspace: state={:?}", self.state);

        let transition = match (self.state, self.composite) {
            (State::Initial, _) => return Ok(Action::USE_INPUT_AS_RESULT),
            (state, None) => Err(CompositionError::EmptyComposite(state)),
            (State::Consonant | State::Vowel, Some(_)) => Ok(Transition {
                state: State::Initial,
                composite: None,
                complete: None,
                action: Action::USE_INPUT_AS_RESULT,
            }),
            (State::CompoundConsonant, Some(c)) => self.undo_compound_consonant(c),
            (State::CompoundVowel, Some(c)) => self.undo_compound_vowel(c),
            (State::ConsonantVowel, Some(c)) => self.undo_vowel(c),
            (State::ConsonantVowelConsonant, Some(c)) => {
                self.undo_final(c, State::ConsonantVowel)
            }
            (State::ConsonantVowelCompoundConsonant, Some(c)) => {
                self.undo_final(c, State::ConsonantVowelConsonant)
            }
            (State::ConsonantCompoundVowel, Some(c)) => self.undo_syllable_compound_vowel(c),
            (State::ConsonantCompoundVowelConsonant, Some(c)) => {
                self.undo_final(c, State::ConsonantCompoundVowel)
            }
            // 겹받침은 한 단계만 줄임 (곿 -> 곽)
            (State::ConsonantCompoundVowelCompoundConsonant, Some(c)) => {
                self.undo_final(c, State::ConsonantCompoundVowelConsonant)
            }
        }?;

        Ok(self.apply(transition))
    }

    fn apply(&mut self, transition: Transition) -> Action {
        log::debug!(
            "{:?} -> {:?}: composite={:?}, complete={:?}, action={:?}",
            self.state,
            transition.state,
            transition.composite,
            transition.complete,
            transition.action
        );
        self.state = transition.state;
        self.composite = transition.composite;
        self.complete = transition.complete;
        transition.action
    }

    fn invalid(&self, composite: char) -> CompositionError {
        CompositionError::InvalidIndex {
            state: self.state,
            composite,
        }
    }

    /// 현재 composite를 확정하고 입력 자모로 새로 시작
    fn restart(&self, state: State, jamo: char) -> Transition {
        Transition::settle(state, self.composite, jamo)
    }

    // ---- 전진 전이 ----

    fn on_initial(jamo: char) -> Transition {
        let state = if is_consonant_jamo(jamo) {
            State::Consonant
        } else {
            State::Vowel
        };
        Transition {
            state,
            composite: Some(jamo),
            complete: None,
            action: Action::UPDATE_COMPOSITE | Action::APPEND,
        }
    }

    /// 조합: 자음 하나 (ㄱ)
    fn on_consonant(&self, c: char, jamo: char) -> Result<Transition, CompositionError> {
        if is_consonant_jamo(jamo) {
            let compound = jongseong_index(c)
                .zip(jongseong_index(jamo))
                .and_then(|(first, second)| combine_jongseong(first, second))
                .and_then(jongseong_to_jamo_char);
            return Ok(match compound {
                Some(compound) => Transition::update(State::CompoundConsonant, compound),
                None => self.restart(State::Consonant, jamo),
            });
        }

        let err = || self.invalid(c);
        let cho = choseong_index(c).ok_or_else(err)?;
        let jung = jungseong_index(jamo).ok_or_else(err)?;
        let syllable = compose_syllable(cho, jung, 0).ok_or_else(err)?;
        Ok(Transition::update(State::ConsonantVowel, syllable))
    }

    /// 조합: 겹자음 (ㄳ)
    /// 모음이 오면 두 번째 자음이 초성으로 넘어감 (ㄳ + ㅏ -> ㄱ 사)
    fn on_compound_consonant(&self, c: char, jamo: char) -> Result<Transition, CompositionError> {
        if is_consonant_jamo(jamo) {
            return Ok(self.restart(State::Consonant, jamo));
        }

        let err = || self.invalid(c);
        let jong = jongseong_index(c).ok_or_else(err)?;
        let (remaining, next_cho) = split_jongseong(jong).ok_or_else(err)?;
        let jung = jungseong_index(jamo).ok_or_else(err)?;
        let syllable = compose_syllable(next_cho, jung, 0).ok_or_else(err)?;
        Ok(Transition::settle(
            State::ConsonantVowel,
            jongseong_to_jamo_char(remaining),
            syllable,
        ))
    }

    /// 조합: 모음 하나 (ㅏ) 또는 복합 모음 (ㅘ)
    fn on_vowel(&self, c: char, jamo: char) -> Transition {
        if is_consonant_jamo(jamo) {
            return self.restart(State::Consonant, jamo);
        }

        let compound = jungseong_index(c)
            .zip(jungseong_index(jamo))
            .and_then(|(first, second)| combine_jungseong(first, second))
            .and_then(jungseong_to_jamo_char);
        match compound {
            Some(compound) => Transition::update(State::CompoundVowel, compound),
            None => self.restart(State::Vowel, jamo),
        }
    }

    /// 조합: 자음 + 모음 (가)
    fn on_consonant_vowel(&self, c: char, jamo: char) -> Result<Transition, CompositionError> {
        if is_consonant_jamo(jamo) {
            return self.attach_final(c, jamo, State::ConsonantVowelConsonant);
        }

        let err = || self.invalid(c);
        let (cho, jung, _) = decompose_syllable(c).ok_or_else(err)?;
        let next = jungseong_index(jamo).ok_or_else(err)?;
        match combine_jungseong(jung, next) {
            Some(compound) => {
                let syllable = compose_syllable(cho, compound, 0).ok_or_else(err)?;
                Ok(Transition::update(State::ConsonantCompoundVowel, syllable))
            }
            None => Ok(self.restart(State::Vowel, jamo)),
        }
    }

    /// 조합: 자음 + 복합 모음 (과)
    fn on_consonant_compound_vowel(
        &self,
        c: char,
        jamo: char,
    ) -> Result<Transition, CompositionError> {
        if is_consonant_jamo(jamo) {
            return self.attach_final(c, jamo, State::ConsonantCompoundVowelConsonant);
        }
        Ok(self.restart(State::Vowel, jamo))
    }

    /// 받침 없는 음절에 종성 추가. 종성이 될 수 없는 자음(ㄸ, ㅃ, ㅉ)이면 새 글자 시작
    fn attach_final(&self, c: char, jamo: char, next: State) -> Result<Transition, CompositionError> {
        let Some(jong) = jongseong_index(jamo) else {
            return Ok(self.restart(State::Consonant, jamo));
        };
        let err = || self.invalid(c);
        let (cho, jung, _) = decompose_syllable(c).ok_or_else(err)?;
        let syllable = compose_syllable(cho, jung, jong).ok_or_else(err)?;
        Ok(Transition::update(next, syllable))
    }

    /// 조합: 받침 있는 음절 (각, 갃, 곽, 곿)
    /// - 자음: 겹받침 조합 시도, 실패하면 새 글자
    /// - 모음: 받침(겹받침이면 두 번째 자음)이 다음 글자의 초성으로 이동
    fn on_final(
        &self,
        c: char,
        jamo: char,
        compound_state: State,
    ) -> Result<Transition, CompositionError> {
        let err = || self.invalid(c);
        let (cho, jung, jong) = decompose_syllable(c).ok_or_else(err)?;

        if is_consonant_jamo(jamo) {
            let compound = jongseong_index(jamo).and_then(|next| combine_jongseong(jong, next));
            return match compound {
                Some(compound) => {
                    let syllable = compose_syllable(cho, jung, compound).ok_or_else(err)?;
                    Ok(Transition::update(compound_state, syllable))
                }
                None => Ok(self.restart(State::Consonant, jamo)),
            };
        }

        let (remaining, next_cho) = detach_jongseong(jong).ok_or_else(err)?;
        let next_jung = jungseong_index(jamo).ok_or_else(err)?;
        let settled = compose_syllable(cho, jung, remaining).ok_or_else(err)?;
        let syllable = compose_syllable(next_cho, next_jung, 0).ok_or_else(err)?;
        Ok(Transition::settle(State::ConsonantVowel, Some(settled), syllable))
    }

    // ---- 역전이 (백스페이스) ----

    /// ㄳ -> ㄱ
    fn undo_compound_consonant(&self, c: char) -> Result<Transition, CompositionError> {
        let err = || self.invalid(c);
        let jong = jongseong_index(c).ok_or_else(err)?;
        let (first, _) = split_jongseong(jong).ok_or_else(err)?;
        let jamo = jongseong_to_jamo_char(first).ok_or_else(err)?;
        Ok(Transition::update(State::Consonant, jamo))
    }

    /// ㅘ -> ㅗ
    fn undo_compound_vowel(&self, c: char) -> Result<Transition, CompositionError> {
        let err = || self.invalid(c);
        let jung = jungseong_index(c).ok_or_else(err)?;
        let (first, _) = split_jungseong(jung).ok_or_else(err)?;
        let jamo = jungseong_to_jamo_char(first).ok_or_else(err)?;
        Ok(Transition::update(State::Vowel, jamo))
    }

    /// 가 -> ㄱ
    fn undo_vowel(&self, c: char) -> Result<Transition, CompositionError> {
        let err = || self.invalid(c);
        let cho = choseong_index(c).ok_or_else(err)?;
        let jamo = choseong_to_jamo_char(cho).ok_or_else(err)?;
        Ok(Transition::update(State::Consonant, jamo))
    }

    /// 과 -> 고
    fn undo_syllable_compound_vowel(&self, c: char) -> Result<Transition, CompositionError> {
        let err = || self.invalid(c);
        let (cho, jung, _) = decompose_syllable(c).ok_or_else(err)?;
        let (first, _) = split_jungseong(jung).ok_or_else(err)?;
        let syllable = compose_syllable(cho, first, 0).ok_or_else(err)?;
        Ok(Transition::update(State::ConsonantVowel, syllable))
    }

    /// 받침을 한 단계 줄임: 각 -> 가, 갃 -> 각
    fn undo_final(&self, c: char, next: State) -> Result<Transition, CompositionError> {
        let err = || self.invalid(c);
        let (cho, jung, jong) = decompose_syllable(c).ok_or_else(err)?;
        let reduced = reduce_jongseong(jong).ok_or_else(err)?;
        let syllable = compose_syllable(cho, jung, reduced).ok_or_else(err)?;
        Ok(Transition::update(next, syllable))
    }
}
