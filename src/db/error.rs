//! 도큐먼트 스토어 에러

use std::path::PathBuf;

use thiserror::Error;

/// 스냅샷 파일 접근 중 발생하는 에러
///
/// 스토어는 재시도하지 않으며, 에러를 기록만 하고 삼키지도 않습니다.
/// 모든 실패는 호출자에게 그대로 반환됩니다.
#[derive(Error, Debug)]
pub enum StoreError {
    /// 파일 읽기/쓰기 실패
    #[error("cannot access snapshot file {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 파일 내용이 스냅샷으로 해석되지 않음
    #[error("snapshot file {path} is corrupt: {source}")]
    CorruptSnapshot {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// 이 빌드보다 새로운 형식으로 기록된 파일
    #[error("snapshot version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// 스냅샷 직렬화 실패
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
