//! 입력 세션: 오토마타의 동작 플래그를 편집 버퍼에 적용하는 호스트
//!
//! 조합 중인 텍스트(composing)와 편집기에 확정된 텍스트(committed)를 따로 관리합니다.
//! 텍스트 입력 필드 하나에 세션 하나를 사용합니다.

use crate::config::SessionConfig;
use crate::core::hangul_fsm::{Action, CompositionError, HangulAutomata};
use crate::core::jamo_mapper::KeyState;

/// 텍스트 입력 세션
#[derive(Debug, Clone)]
pub struct InputSession {
    automata: HangulAutomata,
    /// 조합 중 표시되는 텍스트
    composing: String,
    /// 편집기에 확정된 텍스트
    committed: String,
    /// 조합 실패 시 영문 모드로 전환 후 재입력할지
    recover_on_error: bool,
}

impl InputSession {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            automata: HangulAutomata::with_korean_mode(config.korean_mode_on_start),
            composing: String::new(),
            committed: String::new(),
            recover_on_error: config.recover_on_error,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(&SessionConfig::default())
    }

    pub fn automata(&self) -> &HangulAutomata {
        &self.automata
    }

    pub fn is_korean_mode(&self) -> bool {
        self.automata.is_korean_mode()
    }

    pub fn composing_text(&self) -> &str {
        &self.composing
    }

    pub fn committed_text(&self) -> &str {
        &self.committed
    }

    /// 편집기에 보이는 전체 텍스트
    pub fn text(&self) -> String {
        format!("{}{}", self.committed, self.composing)
    }

    /// 문자 하나 입력
    pub fn type_char(&mut self, c: char, key_state: KeyState) {
        // 구분자, 숫자 등은 조합을 끊고 그대로 확정
        if !c.is_alphabetic() {
            self.commit();
            self.committed.push(c);
            return;
        }

        match self.automata.advance(c, key_state) {
            Ok(action) => self.apply(action, c),
            Err(e) => {
                if self.recover(&e) {
                    self.type_char(c, key_state);
                }
            }
        }
    }

    /// 자모 하나를 키 매핑 없이 입력 (자모 단위 소프트 키보드)
    /// 영문 모드에서는 그대로 입력
    pub fn type_jamo(&mut self, jamo: char) {
        let result = if self.automata.is_korean_mode() {
            self.automata.feed(jamo)
        } else {
            Ok(Action::USE_INPUT_AS_RESULT)
        };

        match result {
            Ok(action) => self.apply(action, jamo),
            Err(e) => {
                if self.recover(&e) {
                    self.type_jamo(jamo);
                }
            }
        }
    }

    /// 조합 실패: 설정에 따라 조합 중인 텍스트를 확정하고 영문 모드로 전환
    /// 전환했으면 true (호출자가 같은 입력을 다시 처리)
    fn recover(&mut self, err: &CompositionError) -> bool {
        log::warn!("조합 실패: {}", err);
        if !self.recover_on_error || !self.automata.is_korean_mode() {
            return false;
        }
        self.commit();
        self.automata.toggle_mode();
        log::debug!("조합 실패로 영문 모드 전환");
        true
    }

    /// 오토마타 결과를 조합 버퍼에 반영
    fn apply(&mut self, action: Action, input: char) {
        let updated_complete = action.contains(Action::UPDATE_COMPLETE);

        // 확정할 글자가 없으면 (INITIAL에서 확정) 이미 조합된 텍스트는 그대로 둠
        if let Some(complete) = self.automata.complete().filter(|_| updated_complete) {
            if self.composing.is_empty() {
                self.composing.push(complete);
            } else {
                replace_last(&mut self.composing, Some(complete));
            }
        }

        if action.contains(Action::UPDATE_COMPOSITE) {
            let composite = self.automata.composite();
            if !self.composing.is_empty()
                && !updated_complete
                && !action.contains(Action::APPEND)
            {
                replace_last(&mut self.composing, composite);
            } else {
                self.composing.extend(composite);
            }
        }

        if action.contains(Action::USE_INPUT_AS_RESULT) {
            self.composing.push(input);
        }
    }

    /// 백스페이스
    pub fn backspace(&mut self) {
        if self.automata.is_korean_mode() {
            match self.automata.backspace() {
                Ok(action) if action.contains(Action::UPDATE_COMPOSITE) => {
                    if let Some(composite) = self.automata.composite() {
                        if !self.composing.is_empty() {
                            replace_last(&mut self.composing, Some(composite));
                            return;
                        }
                    }
                }
                Ok(_) => {}
                // feed로 만들어진 상태에서는 발생하지 않음. 낱자 삭제로 대체
                Err(e) => log::warn!("백스페이스 되돌리기 실패: {}", e),
            }
        }

        // 낱자 하나 삭제
        if self.composing.pop().is_none() {
            self.committed.pop();
        }
    }

    /// 한/영 전환 (조합 중인 텍스트는 먼저 확정)
    pub fn toggle_mode(&mut self) {
        self.commit();
        self.automata.toggle_mode();
        log::debug!("한글 모드: {}", self.automata.is_korean_mode());
    }

    /// 조합 중인 텍스트를 확정
    pub fn commit(&mut self) {
        self.committed.push_str(&self.composing);
        self.composing.clear();
        self.automata.reset();
    }

    /// 커서/선택 영역이 바뀜: 편집기가 조합 텍스트를 그대로 확정
    pub fn selection_changed(&mut self) {
        self.commit();
    }

    /// 입력 필드를 떠남: 조합 텍스트 폐기
    pub fn finish_input(&mut self) {
        self.composing.clear();
        self.automata.reset();
    }
}

impl Default for InputSession {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// 마지막 문자를 교체 (None이면 삭제)
fn replace_last(text: &mut String, c: Option<char>) {
    text.pop();
    text.extend(c);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hangul_fsm::State;

    fn type_str(session: &mut InputSession, input: &str) {
        for c in input.chars() {
            session.type_char(c, KeyState::from_char(c));
        }
    }

    #[test]
    fn test_composing_updates() {
        let mut session = InputSession::with_defaults();
        type_str(&mut session, "r");
        assert_eq!(session.composing_text(), "ㄱ");
        type_str(&mut session, "k");
        assert_eq!(session.composing_text(), "가");
        type_str(&mut session, "s");
        assert_eq!(session.composing_text(), "간");
        type_str(&mut session, "k");
        assert_eq!(session.composing_text(), "가나");
        assert_eq!(session.committed_text(), "");
    }

    #[test]
    fn test_compound_consonant_split() {
        let mut session = InputSession::with_defaults();
        type_str(&mut session, "rtk");
        assert_eq!(session.composing_text(), "ㄱ사");
    }

    #[test]
    fn test_separator_commits() {
        let mut session = InputSession::with_defaults();
        type_str(&mut session, "gks rmf");
        assert_eq!(session.committed_text(), "한 ");
        assert_eq!(session.composing_text(), "글");
        assert_eq!(session.text(), "한 글");
    }

    #[test]
    fn test_backspace_steps() {
        let mut session = InputSession::with_defaults();
        type_str(&mut session, "rkrt");
        assert_eq!(session.composing_text(), "갃");

        session.backspace();
        assert_eq!(session.composing_text(), "각");
        session.backspace();
        assert_eq!(session.composing_text(), "가");
        session.backspace();
        assert_eq!(session.composing_text(), "ㄱ");
        session.backspace();
        assert_eq!(session.composing_text(), "");
    }

    #[test]
    fn test_backspace_after_settle() {
        let mut session = InputSession::with_defaults();
        type_str(&mut session, "rksk");
        assert_eq!(session.composing_text(), "가나");
        session.backspace();
        assert_eq!(session.composing_text(), "가ㄴ");
        session.backspace();
        assert_eq!(session.composing_text(), "가");
        // 확정된 음절은 통째로 삭제
        session.backspace();
        assert_eq!(session.composing_text(), "");
    }

    #[test]
    fn test_backspace_into_committed() {
        let mut session = InputSession::with_defaults();
        type_str(&mut session, "rk ");
        assert_eq!(session.committed_text(), "가 ");
        session.backspace();
        assert_eq!(session.committed_text(), "가");
        session.backspace();
        assert_eq!(session.committed_text(), "");
        session.backspace();
        assert_eq!(session.text(), "");
    }

    #[test]
    fn test_toggle_mode_commits() {
        let mut session = InputSession::with_defaults();
        type_str(&mut session, "rk");
        session.toggle_mode();
        assert!(!session.is_korean_mode());
        assert_eq!(session.committed_text(), "가");
        assert_eq!(session.composing_text(), "");

        type_str(&mut session, "rk");
        assert_eq!(session.composing_text(), "rk");
        session.backspace();
        assert_eq!(session.composing_text(), "r");
    }

    #[test]
    fn test_latin_start() {
        let config = SessionConfig {
            korean_mode_on_start: false,
            ..SessionConfig::default()
        };
        let mut session = InputSession::new(&config);
        type_str(&mut session, "Hi");
        assert_eq!(session.text(), "Hi");
    }

    #[test]
    fn test_finish_input_discards() {
        let mut session = InputSession::with_defaults();
        type_str(&mut session, "rk");
        session.finish_input();
        assert_eq!(session.text(), "");
        type_str(&mut session, "sk");
        assert_eq!(session.text(), "나");
    }

    #[test]
    fn test_selection_changed_commits() {
        let mut session = InputSession::with_defaults();
        type_str(&mut session, "rks");
        session.selection_changed();
        assert_eq!(session.committed_text(), "간");
        type_str(&mut session, "k");
        assert_eq!(session.composing_text(), "ㅏ");
    }

    #[test]
    fn test_non_ascii_letter_flushes_composite() {
        // 알파벳이지만 두벌식 키가 아닌 문자는 오토마타가 조합을 확정하고 그대로 사용
        let mut session = InputSession::with_defaults();
        type_str(&mut session, "rk");
        session.type_char('é', KeyState::empty());
        assert_eq!(session.composing_text(), "가é");
        assert_eq!(session.automata().composite(), None);
    }

    #[test]
    fn test_non_ascii_letter_keeps_settled_text() {
        let mut session = InputSession::with_defaults();
        type_str(&mut session, "rksk");
        session.backspace();
        session.backspace();
        assert_eq!(session.composing_text(), "가");
        assert_eq!(session.automata().state(), State::Initial);

        session.type_char('é', KeyState::empty());
        assert_eq!(session.composing_text(), "가é");
    }

    #[test]
    fn test_type_jamo() {
        let mut session = InputSession::with_defaults();
        for jamo in ['ㅎ', 'ㅏ', 'ㄴ', 'ㄱ', 'ㅡ', 'ㄹ'] {
            session.type_jamo(jamo);
        }
        assert_eq!(session.composing_text(), "한글");

        session.toggle_mode();
        session.type_jamo('ㄱ');
        assert_eq!(session.text(), "한글ㄱ");
    }

    #[test]
    fn test_error_recovery_switches_to_latin() {
        let mut session = InputSession::with_defaults();
        // 겹자음은 초성이 될 수 없어 모음 입력이 실패
        session.type_jamo('ㄳ');
        session.type_jamo('ㅏ');
        assert!(!session.is_korean_mode());
        assert_eq!(session.committed_text(), "ㄳ");
        assert_eq!(session.composing_text(), "ㅏ");
    }

    #[test]
    fn test_error_without_recovery_keeps_buffers() {
        let config = SessionConfig {
            recover_on_error: false,
            ..SessionConfig::default()
        };
        let mut session = InputSession::new(&config);
        session.type_jamo('ㄳ');
        session.type_jamo('ㅏ');
        assert!(session.is_korean_mode());
        assert_eq!(session.committed_text(), "");
        assert_eq!(session.composing_text(), "ㄳ");
        assert_eq!(session.automata().state(), State::Consonant);

        // 자모가 아닌 입력도 실패하지만 버퍼는 그대로
        session.type_jamo('a');
        assert_eq!(session.composing_text(), "ㄳ");
    }
}
