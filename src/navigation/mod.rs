//! # Navigation Module
//!
//! 화면 전환과 사용자 안내를 추상화한 경계입니다.
//! 라우팅은 "경로로 이동" 기능 하나로만 취급하며, 렌더링은 다루지 않습니다.
//!
//! - [`Navigator`] - 경로 이동
//! - [`Notifier`] - 일회성 안내 문구 표시
//! - [`PageScope`] - 페이지 방문 단위의 생존 여부 (이동 후 도착한 응답을 무시하기 위함)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use crate::utils::display_terminal::print_notice;

/// 경로 이동 기능
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// 사용자 안내 기능
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// 이동 요청을 로그로 남기고 마지막 경로를 기억하는 Navigator
///
/// CLI에서는 실제 화면 전환이 없으므로 다음 명령 안내에 사용합니다.
#[derive(Debug, Default)]
pub struct LogNavigator {
    current: Mutex<Option<String>>,
}

impl LogNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 마지막으로 이동한 경로
    pub fn current_path(&self) -> Option<String> {
        self.current.lock().ok().and_then(|current| current.clone())
    }
}

impl Navigator for LogNavigator {
    fn navigate(&self, path: &str) {
        log::info!("➡️  이동: {}", path);
        if let Ok(mut current) = self.current.lock() {
            *current = Some(path.to_string());
        }
    }
}

/// 안내 문구를 터미널에 출력하는 Notifier
#[derive(Debug, Default, Clone)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        log::debug!("안내 표시: {}", message);
        print_notice(message);
    }
}

/// 이동 경로를 모두 기록하는 Navigator
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        if let Ok(mut paths) = self.paths.lock() {
            paths.push(path.to_string());
        }
    }
}

/// 안내 문구를 모두 기록하는 Notifier
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }
}

/// 페이지 방문 하나의 생존 여부
///
/// 복제본끼리 같은 플래그를 공유합니다. 페이지를 떠날 때 [`PageScope::leave`]를 호출하면
/// 그 이후 도착한 응답은 상태를 반영하지도, 리다이렉트하지도 않습니다.
#[derive(Debug, Clone)]
pub struct PageScope {
    alive: Arc<AtomicBool>,
}

impl Default for PageScope {
    fn default() -> Self {
        Self::new()
    }
}

impl PageScope {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    pub fn leave(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }
}
