//! 保存トークンの管理
//!
//! 一覧全体を1つのJSON配列として保存し、変更のたびに丸ごと書き換える。
//! 複数タブから同時に書き込んだ場合は後勝ち。

use crate::error::AppError;
use crate::models::TokenRecord;
use crate::utils::clock::Clock;
use crate::utils::log_trace::{log_info_with_data, log_warn};
use crate::utils::storage::KeyValueStore;

pub struct TokenStore<S, C> {
    storage: S,
    clock: C,
    key: String,
}

impl<S: KeyValueStore, C: Clock> TokenStore<S, C> {
    pub fn new(storage: S, clock: C, key: impl Into<String>) -> Self {
        TokenStore {
            storage,
            clock,
            key: key.into(),
        }
    }

    /// 保存順の一覧。未保存・壊れたデータは空扱い
    pub fn list(&self) -> Vec<TokenRecord> {
        self.read_records().unwrap_or_else(|e| {
            log_warn("token-store", &format!("空として扱います: {}", e));
            Vec::new()
        })
    }

    /// 保存データの読み込み。壊れたデータは上書きしないよう Err を返す
    fn read_records(&self) -> Result<Vec<TokenRecord>, AppError> {
        let Some(json) = self.storage.get(&self.key) else {
            return Ok(Vec::new());
        };
        serde_json::from_str::<Vec<TokenRecord>>(&json)
            .map_err(|e| AppError::Storage(format!("saved tokens are unreadable: {}", e)))
    }

    /// トークンを追加して保存する
    pub fn add(&self, token_value: &str, registry_value: &str) -> Result<TokenRecord, AppError> {
        let token = token_value.trim();
        if token.is_empty() {
            return Err(AppError::invalid_input("Please enter a token"));
        }

        let record = TokenRecord::new(
            self.clock.now_millis(),
            token.to_string(),
            registry_value.to_string(),
        );

        let mut records = self.read_records()?;
        records.push(record.clone());
        self.persist(&records)?;

        log_info_with_data(
            "token-store",
            "トークンを保存しました",
            serde_json::json!({ "id": record.id, "registry": record.registry, "count": records.len() }),
        );
        Ok(record)
    }

    /// 該当IDを削除。存在しなければ何もしない
    pub fn remove(&self, id: i64) -> Result<(), AppError> {
        let records = self.read_records()?;
        let before = records.len();
        let remaining: Vec<TokenRecord> = records.into_iter().filter(|r| r.id != id).collect();
        if remaining.len() == before {
            return Ok(());
        }
        self.persist(&remaining)?;

        log_info_with_data(
            "token-store",
            "トークンを削除しました",
            serde_json::json!({ "id": id, "count": remaining.len() }),
        );
        Ok(())
    }

    /// 編集欄に読み込むためのレコード取得（ストアは変更しない）
    pub fn load(&self, id: i64) -> Option<TokenRecord> {
        self.list().into_iter().find(|r| r.id == id)
    }

    fn persist(&self, records: &[TokenRecord]) -> Result<(), AppError> {
        let json = serde_json::to_string(records).map_err(|e| AppError::Storage(e.to_string()))?;
        self.storage.set(&self.key, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::ManualClock;
    use crate::utils::storage::MemoryStore;

    const KEY: &str = "savedTokens";

    fn store() -> (TokenStore<MemoryStore, ManualClock>, MemoryStore, ManualClock) {
        let storage = MemoryStore::new();
        let clock = ManualClock::at(1_700_000_000_000);
        (TokenStore::new(storage.clone(), clock.clone(), KEY), storage, clock)
    }

    #[test]
    fn test_list_empty_when_absent() {
        let (store, _, _) = store();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_list_empty_when_unparsable() {
        let (store, storage, _) = store();
        storage.set(KEY, "{not json").unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_unparsable_data_is_not_overwritten() {
        let (store, storage, _) = store();
        storage.set(KEY, "{not json").unwrap();

        let err = store.add("tok", "https://r/").unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert!(store.remove(1).is_err());
        assert_eq!(storage.get(KEY).as_deref(), Some("{not json"));
    }

    #[test]
    fn test_add_empty_token_is_rejected() {
        let (store, storage, _) = store();
        for input in ["", "   ", "\n\t"] {
            let err = store.add(input, "https://r/").unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)));
        }
        assert_eq!(storage.get(KEY), None);
    }

    #[test]
    fn test_add_then_list() {
        let (store, _, _) = store();
        let created = store.add("tok1", "https://r/").unwrap();

        let records = store.list();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record, &created);
        assert_eq!(record.token, "tok1");
        assert_eq!(record.registry, "https://r/");
        assert_eq!(record.id, 1_700_000_000_000);
        assert_eq!(record.name, format!("Token-{}", record.id));
        assert_eq!(record.created, "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn test_add_trims_token() {
        let (store, _, _) = store();
        let record = store.add("  npm_abc \n", "https://r/").unwrap();
        assert_eq!(record.token, "npm_abc");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (store, _, clock) = store();
        let first = store.add("a", "https://r/").unwrap();
        clock.advance(5);
        let second = store.add("b", "https://other/").unwrap();

        let ids: Vec<i64> = store.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (store, storage, _) = store();
        store.add("tok", "https://r/").unwrap();
        let before = storage.get(KEY);

        store.remove(42).unwrap();
        assert_eq!(storage.get(KEY), before);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_add_then_remove_leaves_empty() {
        let (store, storage, _) = store();
        let record = store.add("tok", "https://r/").unwrap();
        store.remove(record.id).unwrap();
        assert!(store.list().is_empty());
        assert_eq!(storage.get(KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_remove_keeps_other_records() {
        let (store, _, clock) = store();
        let a = store.add("a", "https://r/").unwrap();
        clock.advance(1);
        let b = store.add("b", "https://r/").unwrap();
        clock.advance(1);
        let c = store.add("c", "https://r/").unwrap();

        store.remove(b.id).unwrap();
        let tokens: Vec<String> = store.list().into_iter().map(|r| r.token).collect();
        assert_eq!(tokens, vec!["a", "c"]);
        assert!(store.load(a.id).is_some());
        assert!(store.load(c.id).is_some());
    }

    #[test]
    fn test_load_does_not_mutate() {
        let (store, storage, _) = store();
        let record = store.add("tok", "https://r/").unwrap();
        let before = storage.get(KEY);

        assert_eq!(store.load(record.id), Some(record));
        assert_eq!(store.load(7), None);
        assert_eq!(storage.get(KEY), before);
    }

    #[test]
    fn test_reads_data_written_by_previous_version() {
        let (store, storage, _) = store();
        storage
            .set(
                KEY,
                r#"[{"id":1735689600000,"token":"npm_x","registry":"https://registry.npmjs.org/","created":"2025-01-01T00:00:00.000Z","name":"Token-1735689600000"}]"#,
            )
            .unwrap();
        let records = store.list();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Token-1735689600000");
    }
}
