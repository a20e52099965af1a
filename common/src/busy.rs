//! 処理中フラグのガード
//!
//! 生成時に `true`、破棄時に `false` を書き込む。
//! 成功・失敗・早期returnのどの経路でも必ず解除される。

pub struct BusyGuard<F: Fn(bool)> {
    set_busy: F,
}

impl<F: Fn(bool)> BusyGuard<F> {
    pub fn engage(set_busy: F) -> Self {
        set_busy(true);
        Self { set_busy }
    }
}

impl<F: Fn(bool)> Drop for BusyGuard<F> {
    fn drop(&mut self) {
        (self.set_busy)(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_guard_sets_and_clears() {
        let flag = Cell::new(false);
        {
            let _guard = BusyGuard::engage(|v| flag.set(v));
            assert!(flag.get());
        }
        assert!(!flag.get());
    }

    #[test]
    fn test_guard_clears_on_early_return() {
        fn run(flag: &Cell<bool>, fail: bool) -> Result<(), &'static str> {
            let _guard = BusyGuard::engage(|v| flag.set(v));
            if fail {
                return Err("failed");
            }
            Ok(())
        }

        let flag = Cell::new(false);
        assert!(run(&flag, true).is_err());
        assert!(!flag.get());
        assert!(run(&flag, false).is_ok());
        assert!(!flag.get());
    }
}
