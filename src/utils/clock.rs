//! 現在時刻の取得

#[cfg(test)]
use std::cell::Cell;
#[cfg(test)]
use std::rc::Rc;

pub trait Clock {
    /// UNIXエポックからのミリ秒
    fn now_millis(&self) -> i64;
}

/// `Date.now()`
#[derive(Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

/// 手動で進める時計（テスト用、クローンは同じ時刻を共有する）
#[cfg(test)]
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn at(millis: i64) -> Self {
        ManualClock { now: Rc::new(Cell::new(millis)) }
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get() + millis);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

/// テスト結果に付ける表示用の現在日時（ブラウザのロケール）
pub fn local_timestamp() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_default()
}
