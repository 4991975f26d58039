use tracing::info;

use crate::code::{generate_code, normalize_code};
use crate::db::Database;
use crate::error::{ApiError, ApiResult};
use crate::models::Paste;

mod memory;
pub use memory::MemoryBackend;

/// How many candidate codes to try before giving up on an insert. Collisions
/// are rare given the code space, but concurrent writers make them possible.
pub const MAX_CODE_ATTEMPTS: u32 = 10;

/// Outcome of an insert attempt. A uniqueness conflict is an expected result,
/// not an error; the store retries it with a fresh code.
#[derive(Debug)]
pub enum InsertOutcome {
    Inserted(Paste),
    Conflict,
}

/// Capability interface of the backing store. The unique constraint on `code`
/// must be enforced atomically at insert time by the backend itself; a
/// check-then-insert sequence would race under concurrent writers.
pub trait Backend {
    /// Insert a paste keyed by `code`, reporting a conflict distinguishably.
    async fn insert_unique(&mut self, code: &str, content: &str) -> ApiResult<InsertOutcome>;

    /// Point lookup by exact code.
    async fn find_by_key(&mut self, code: &str) -> ApiResult<Option<Paste>>;

    /// Delete by exact code, reporting whether a record was removed.
    async fn delete_by_key(&mut self, code: &str) -> ApiResult<bool>;
}

#[derive(Clone)]
pub enum AnyBackend {
    Database(Database),
    Memory(MemoryBackend),
}

impl Backend for AnyBackend {
    async fn insert_unique(&mut self, code: &str, content: &str) -> ApiResult<InsertOutcome> {
        match self {
            AnyBackend::Database(db) => db.insert_unique(code, content).await,
            AnyBackend::Memory(memory) => memory.insert_unique(code, content).await,
        }
    }

    async fn find_by_key(&mut self, code: &str) -> ApiResult<Option<Paste>> {
        match self {
            AnyBackend::Database(db) => db.find_by_key(code).await,
            AnyBackend::Memory(memory) => memory.find_by_key(code).await,
        }
    }

    async fn delete_by_key(&mut self, code: &str) -> ApiResult<bool> {
        match self {
            AnyBackend::Database(db) => db.delete_by_key(code).await,
            AnyBackend::Memory(memory) => memory.delete_by_key(code).await,
        }
    }
}

impl From<Database> for AnyBackend {
    fn from(value: Database) -> Self {
        AnyBackend::Database(value)
    }
}

impl From<MemoryBackend> for AnyBackend {
    fn from(value: MemoryBackend) -> Self {
        AnyBackend::Memory(value)
    }
}

/// The store used by the HTTP handlers.
pub type AppStore = PasteStore<AnyBackend>;

/// Maps between short public codes and stored text. Holds no state of its own
/// beyond the injected backend handle.
#[derive(Clone)]
pub struct PasteStore<B> {
    backend: B,
}

impl<B: Backend> PasteStore<B> {
    pub fn new(backend: B) -> Self {
        PasteStore { backend }
    }

    /// Store `content` under a freshly allocated code. Content must be
    /// non-empty after trimming; it is stored verbatim.
    pub async fn create_paste(&mut self, content: &str) -> ApiResult<Paste> {
        if content.trim().is_empty() {
            return Err(ApiError::EmptyContent);
        }

        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code();
            match self.backend.insert_unique(&code, content).await? {
                InsertOutcome::Inserted(paste) => {
                    info!("new paste: code='{code}', size={size}", size = content.len());
                    return Ok(paste);
                }
                InsertOutcome::Conflict => continue,
            }
        }

        Err(ApiError::CodeSpaceExhausted)
    }

    /// Case-insensitive lookup. `None` means the code was never created (or
    /// was deleted); it is an expected outcome, not an error.
    pub async fn get_paste(&mut self, code: &str) -> ApiResult<Option<Paste>> {
        self.backend.find_by_key(&normalize_code(code)).await
    }

    pub async fn paste_exists(&mut self, code: &str) -> ApiResult<bool> {
        Ok(self.get_paste(code).await?.is_some())
    }

    /// Remove a paste. Idempotent: deleting an absent code returns `false`.
    pub async fn delete_paste(&mut self, code: &str) -> ApiResult<bool> {
        let code = normalize_code(code);
        let deleted = self.backend.delete_by_key(&code).await?;
        if deleted {
            info!("deleted paste: code='{code}'");
        }
        Ok(deleted)
    }
}

/// Shareable link for a paste. Pure string formatting, no store interaction.
pub fn paste_url(base_url: &str, code: &str) -> String {
    format!("{}/paste/{code}", base_url.trim_end_matches('/'))
}
