//! プラットフォームサービス
//!
//! クリップボード・印刷・通知をトレイト越しに使う。
//! ブラウザ実装は web-wasm 側、テストでは偽実装を使う。

use crate::error::Result;

pub const MSG_COPIED: &str = "클립보드에 복사되었습니다.";
pub const MSG_COPY_FAILED: &str = "클립보드 복사에 실패했습니다.";

#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<()>;
}

pub trait Printer {
    fn print(&self) -> Result<()>;
}

pub trait Notifier {
    fn notify(&self, message: &str);
}

/// コピーして結果を通知する
pub async fn copy_with_notice<C, N>(clipboard: &C, notifier: &N, text: &str) -> bool
where
    C: Clipboard,
    N: Notifier,
{
    match clipboard.write_text(text).await {
        Ok(()) => {
            notifier.notify(MSG_COPIED);
            true
        }
        Err(_) => {
            notifier.notify(MSG_COPY_FAILED);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        pub messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Default)]
    struct MemoryClipboard {
        content: RefCell<Option<String>>,
        denied: bool,
    }

    impl Clipboard for MemoryClipboard {
        async fn write_text(&self, text: &str) -> Result<()> {
            if self.denied {
                return Err(Error::Platform("permission denied".into()));
            }
            *self.content.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_success_notifies() {
        let clipboard = MemoryClipboard::default();
        let notifier = RecordingNotifier::default();

        assert!(block_on(copy_with_notice(&clipboard, &notifier, "종합 분석")));
        assert_eq!(clipboard.content.borrow().as_deref(), Some("종합 분석"));
        assert_eq!(*notifier.messages.borrow(), vec![MSG_COPIED.to_string()]);
    }

    #[test]
    fn test_copy_failure_notifies() {
        let clipboard = MemoryClipboard { denied: true, ..Default::default() };
        let notifier = RecordingNotifier::default();

        assert!(!block_on(copy_with_notice(&clipboard, &notifier, "x")));
        assert!(clipboard.content.borrow().is_none());
        assert_eq!(*notifier.messages.borrow(), vec![MSG_COPY_FAILED.to_string()]);
    }
}
