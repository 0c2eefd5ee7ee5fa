//! 플랫 파일 도큐먼트 스토어
//!
//! 하나의 JSON 스냅샷 파일을 유일한 원본으로 사용하는 저장소입니다.
//! 메모리 캐시를 두지 않고 매 호출마다 파일을 다시 읽으며,
//! 스토어 인스턴스당 하나의 뮤텍스가 모든 읽기/쓰기를 직렬화합니다.
//!
//! ## 원자성
//!
//! - **파일 수준**: 임시 파일에 기록 → `fsync` → `rename`으로 교체하므로
//!   중간에 프로세스가 죽어도 잘린 파일이 남지 않습니다.
//! - **연산 수준**: 읽기-수정-쓰기 연산은 [`DocumentStore::transact`] 하나로
//!   수행되어 락이 전체 구간 동안 유지됩니다. 중복 검사 후 삽입과 같은
//!   복합 불변식이 다른 요청과 섞이지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::db::DocumentStore;
//!
//! let store = DocumentStore::initialize("./database.json")?;
//!
//! let chirp = store.transact(|snapshot| {
//!     let id = snapshot.allocate_chirp_id();
//!     let chirp = Chirp::new(id, "hello".to_string(), 1);
//!     snapshot.chirps.insert(id, chirp.clone());
//!     Ok::<_, StoreError>(chirp)
//! })?;
//! ```

pub mod error;
pub mod snapshot;

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};

pub use error::{StoreError, StoreResult};
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};

/// 스냅샷 파일에 대한 단일 직렬화 접근 지점
///
/// 읽기와 쓰기 모두 배타적 락을 사용합니다. 대기 중인 호출자는 타임아웃 없이
/// 락을 기다리며, 한 번에 하나의 디스크 왕복만 수행됩니다.
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl DocumentStore {
    /// 스토어를 초기화합니다.
    ///
    /// 파일이 없거나 비어 있으면 빈 스냅샷을 기록합니다. 내용이 있는 파일은
    /// 덮어쓰지 않고 읽어서 검증만 하므로, 손상된 파일은 시작 시점에
    /// `CorruptSnapshot`으로 드러납니다.
    ///
    /// # Errors
    ///
    /// * `StoreError::StorageUnavailable` - 파일 생성/읽기 실패
    /// * `StoreError::CorruptSnapshot` - 기존 파일이 스냅샷 형식이 아님
    /// * `StoreError::UnsupportedVersion` - 더 새로운 형식의 파일
    pub fn initialize(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };

        {
            let _guard = store.guard();
            match fs::metadata(&store.path) {
                Ok(meta) if meta.len() > 0 => {
                    let snapshot = store.read_snapshot()?;
                    info!(
                        "기존 스냅샷 로드: {} (chirps {}, users {}, revoked {})",
                        store.path.display(),
                        snapshot.chirps.len(),
                        snapshot.users.len(),
                        snapshot.revoked_tokens.len()
                    );
                }
                Ok(_) => {
                    warn!("빈 스냅샷 파일 발견, 초기화합니다: {}", store.path.display());
                    store.write_snapshot(&Snapshot::default())?;
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    if let Some(parent) = store.path.parent() {
                        if !parent.as_os_str().is_empty() {
                            fs::create_dir_all(parent).map_err(|source| {
                                StoreError::StorageUnavailable {
                                    path: parent.to_path_buf(),
                                    source,
                                }
                            })?;
                        }
                    }
                    store.write_snapshot(&Snapshot::default())?;
                    info!("새 스냅샷 파일 생성: {}", store.path.display());
                }
                Err(source) => {
                    return Err(StoreError::StorageUnavailable {
                        path: store.path.clone(),
                        source,
                    });
                }
            }
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 스냅샷 전체를 읽습니다.
    pub fn load(&self) -> StoreResult<Snapshot> {
        let _guard = self.guard();
        self.read_snapshot()
    }

    /// 스냅샷 전체를 교체합니다.
    pub fn store(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let _guard = self.guard();
        self.write_snapshot(snapshot)
    }

    /// 락을 잡은 상태에서 스냅샷을 읽고 `f`를 적용합니다. 쓰기는 하지 않습니다.
    pub fn view<T, F>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&Snapshot) -> T,
    {
        let _guard = self.guard();
        let snapshot = self.read_snapshot()?;
        Ok(f(&snapshot))
    }

    /// 단일 임계 구역 안에서 읽기-수정-쓰기를 수행합니다.
    ///
    /// 락은 읽기부터 쓰기까지 한 번만 획득됩니다. `f`가 에러를 반환하면
    /// 변경 사항은 버려지고 파일은 그대로 유지됩니다.
    ///
    /// # Errors
    ///
    /// `f`의 에러, 또는 `E`로 변환된 `StoreError`
    pub fn transact<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Snapshot) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _guard = self.guard();
        let mut snapshot = self.read_snapshot()?;
        let output = f(&mut snapshot)?;
        self.write_snapshot(&snapshot)?;
        Ok(output)
    }

    // 보호 대상 데이터가 없으므로 poison 상태는 무시해도 안전합니다.
    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_snapshot(&self) -> StoreResult<Snapshot> {
        let bytes = fs::read(&self.path).map_err(|source| StoreError::StorageUnavailable {
            path: self.path.clone(),
            source,
        })?;

        let snapshot: Snapshot =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::CorruptSnapshot {
                path: self.path.clone(),
                source,
            })?;

        if snapshot.version > SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        Ok(snapshot)
    }

    fn write_snapshot(&self, snapshot: &Snapshot) -> StoreResult<()> {
        let data = serde_json::to_vec(snapshot).map_err(StoreError::Encode)?;
        let temp_path = self.temp_path();

        let result = write_synced(&temp_path, &data).and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(source) = result {
            let _ = fs::remove_file(&temp_path);
            return Err(StoreError::StorageUnavailable {
                path: self.path.clone(),
                source,
            });
        }

        // rename 자체가 디렉터리 항목에 기록되어야 교체가 확정됨
        sync_parent_dir(&self.path).map_err(|source| StoreError::StorageUnavailable {
            path: self.path.clone(),
            source,
        })?;

        debug!("스냅샷 기록 완료: {} ({} bytes)", self.path.display(), data.len());
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "database.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.sync_all()
}

#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    File::open(dir)?.sync_all()
}

// Windows에서는 디렉터리를 파일로 열 수 없고 rename이 메타데이터까지 기록합니다.
#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Chirp, User};
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, DocumentStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = DocumentStore::initialize(dir.path().join("database.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_initialize_creates_empty_snapshot() {
        let (_dir, store) = temp_store();
        let snapshot = store.load().unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn test_initialize_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data").join("database.json");
        let store = DocumentStore::initialize(&path).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_initialize_keeps_existing_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");

        let store = DocumentStore::initialize(&path).unwrap();
        store
            .transact(|s| {
                let id = s.allocate_chirp_id();
                s.chirps.insert(id, Chirp::new(id, "keep me".to_string(), 1));
                Ok::<_, StoreError>(())
            })
            .unwrap();
        drop(store);

        let reopened = DocumentStore::initialize(&path).unwrap();
        let snapshot = reopened.load().unwrap();
        assert_eq!(snapshot.chirps[&1].body, "keep me");
        assert_eq!(snapshot.next_chirp_id, 2);
    }

    #[test]
    fn test_initialize_resets_zero_length_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        File::create(&path).unwrap();

        let store = DocumentStore::initialize(&path).unwrap();
        assert_eq!(store.load().unwrap(), Snapshot::default());
    }

    #[test]
    fn test_corrupt_file_is_surfaced_not_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.json");
        fs::write(&path, b"{ not json").unwrap();

        let err = DocumentStore::initialize(&path).unwrap_err();
        assert!(matches!(err, StoreError::CorruptSnapshot { .. }));
        assert_eq!(fs::read(&path).unwrap(), b"{ not json");
    }

    #[test]
    fn test_load_reports_corruption_after_startup() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), b"[]").unwrap();
        assert!(matches!(store.load(), Err(StoreError::CorruptSnapshot { .. })));
    }

    #[test]
    fn test_missing_file_is_storage_unavailable() {
        let (_dir, store) = temp_store();
        fs::remove_file(store.path()).unwrap();
        assert!(matches!(store.load(), Err(StoreError::StorageUnavailable { .. })));
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), br#"{"version": 99}"#).unwrap();
        assert!(matches!(
            store.load(),
            Err(StoreError::UnsupportedVersion { found: 99, supported: SNAPSHOT_VERSION })
        ));
    }

    #[test]
    fn test_store_replaces_whole_snapshot() {
        let (_dir, store) = temp_store();
        let mut snapshot = Snapshot::default();
        let id = snapshot.allocate_user_id();
        snapshot
            .users
            .insert(id, User::new(id, "a@x.com".to_string(), "hash".to_string()));
        store.store(&snapshot).unwrap();

        assert_eq!(store.load().unwrap(), snapshot);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_parent_directory_sync_accepts_nested_and_bare_paths() {
        let (dir, _store) = temp_store();
        assert!(sync_parent_dir(&dir.path().join("database.json")).is_ok());
        assert!(sync_parent_dir(Path::new("database.json")).is_ok());
    }

    #[test]
    fn test_failed_transaction_leaves_file_untouched() {
        let (_dir, store) = temp_store();
        let before = fs::read(store.path()).unwrap();

        let result: Result<(), StoreError> = store.transact(|s| {
            s.allocate_chirp_id();
            Err(StoreError::UnsupportedVersion { found: 0, supported: 0 })
        });

        assert!(result.is_err());
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_concurrent_transactions_are_serialized() {
        let (_dir, store) = temp_store();
        let store = Arc::new(store);

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for n in 0..10 {
                        store
                            .transact(|s| {
                                let id = s.allocate_chirp_id();
                                let body = format!("worker {} chirp {}", worker, n);
                                s.chirps.insert(id, Chirp::new(id, body, worker));
                                Ok::<_, StoreError>(())
                            })
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = store.load().unwrap();
        assert_eq!(snapshot.chirps.len(), 80);
        assert_eq!(snapshot.next_chirp_id, 81);
    }
}
