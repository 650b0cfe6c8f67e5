//! hangul-ime - 표준 입력의 두벌식 키 입력을 한글로 조합하는 명령행 호스트
//!
//! 한 줄이 하나의 입력 세션입니다.
//! - 탭: 한/영 전환
//! - BS(0x08), DEL(0x7F): 백스페이스
//! - 호환 자모(ㄱ, ㅏ 등)는 키 매핑 없이 바로 조합

use hangul_ime::config::{load_config, load_config_from};
use hangul_ime::core::unicode::is_jamo;
use hangul_ime::{InputSession, KeyState};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn print_usage() {
    eprintln!("사용법: hangul-ime [--config <path>]");
    eprintln!("  표준 입력의 각 줄을 두벌식 키 입력으로 보고 조합 결과를 출력합니다.");
    eprintln!("  탭은 한/영 전환, BS/DEL은 백스페이스로 처리합니다.");
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut config_path: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => {
                    print_usage();
                    std::process::exit(2);
                }
            },
            "-h" | "--help" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("알 수 없는 인자: {}", other);
                print_usage();
                std::process::exit(2);
            }
        }
    }

    // 설정 로드
    let config = match &config_path {
        Some(path) => load_config_from(path),
        None => load_config(),
    };
    log::debug!("설정: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };

        let mut session = InputSession::new(&config);
        for c in line.chars() {
            match c {
                '\t' => session.toggle_mode(),
                '\u{8}' | '\u{7f}' => session.backspace(),
                c if is_jamo(c) => session.type_jamo(c),
                _ => session.type_char(c, KeyState::from_char(c)),
            }
        }
        session.commit();

        if let Err(e) = writeln!(out, "{}", session.committed_text()) {
            log::error!("출력 실패: {}", e);
            break;
        }
    }
}
