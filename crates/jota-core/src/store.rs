//! Persistence for auto-evolved templates.
//!
//! The whole collection is serialized under a single key and rewritten on
//! every mutation. Evolved templates are few (dozens, not thousands) and a
//! lost race between two concurrent saves costs at most one usage-count
//! increment, which is acceptable bookkeeping noise.

use std::path::Path;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::normalize::normalize;

const COLLECTION_KEY: &str = "evolved_templates";

/// A template synthesized at runtime and persisted for reuse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolvedTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub keywords: Vec<String>,
    pub expected_sections: Vec<String>,
    pub prompt_template: String,
    pub origin_prompt: String,
    pub created_at_ms: i64,
    pub usage_count: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("falha no backend de armazenamento: {0}")]
    Backend(String),
    #[error("registro corrompido no armazenamento: {0}")]
    Corrupt(#[from] serde_json::Error),
}

impl From<sled::Error> for StorageError {
    fn from(e: sled::Error) -> Self {
        StorageError::Backend(e.to_string())
    }
}

/// Storage backend seam: the store only needs load-all and save-all.
pub trait TemplateStorage: Send + Sync {
    /// `Ok(None)` means the backend has never been written.
    fn load(&self) -> Result<Option<Vec<EvolvedTemplate>>, StorageError>;
    fn save(&self, templates: &[EvolvedTemplate]) -> Result<(), StorageError>;
}

/// sled-backed storage, one JSON blob under [`COLLECTION_KEY`].
pub struct SledTemplateStorage {
    db: sled::Db,
}

impl SledTemplateStorage {
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Ok(SledTemplateStorage { db })
    }
}

impl TemplateStorage for SledTemplateStorage {
    fn load(&self) -> Result<Option<Vec<EvolvedTemplate>>, StorageError> {
        match self.db.get(COLLECTION_KEY)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&self, templates: &[EvolvedTemplate]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(templates)?;
        self.db.insert(COLLECTION_KEY, bytes)?;
        self.db.flush()?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral deployments.
#[derive(Default)]
pub struct MemoryTemplateStorage {
    inner: Mutex<Option<Vec<EvolvedTemplate>>>,
}

impl TemplateStorage for MemoryTemplateStorage {
    fn load(&self) -> Result<Option<Vec<EvolvedTemplate>>, StorageError> {
        Ok(self.inner.lock().unwrap().clone())
    }

    fn save(&self, templates: &[EvolvedTemplate]) -> Result<(), StorageError> {
        *self.inner.lock().unwrap() = Some(templates.to_vec());
        Ok(())
    }
}

/// The evolved-template collection: lazy-loaded, cached in memory, rewritten
/// whole on mutation.
pub struct EvolvedTemplateStore {
    storage: Box<dyn TemplateStorage>,
    state: Mutex<Option<Vec<EvolvedTemplate>>>,
}

impl EvolvedTemplateStore {
    pub fn new(storage: Box<dyn TemplateStorage>) -> Self {
        EvolvedTemplateStore {
            storage,
            state: Mutex::new(None),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryTemplateStorage::default()))
    }

    /// Load the collection into the cache if not already there. A backend
    /// read failure degrades to an empty collection with a warning; routing
    /// must keep working without the evolved tier.
    fn with_loaded<R>(&self, f: impl FnOnce(&mut Vec<EvolvedTemplate>) -> R) -> R {
        let mut state = self.state.lock().unwrap();
        if state.is_none() {
            let loaded = match self.storage.load() {
                Ok(Some(templates)) => {
                    debug!(count = templates.len(), "templates evoluídos carregados");
                    templates
                }
                Ok(None) => Vec::new(),
                Err(e) => {
                    warn!(error = %e, "falha ao carregar templates evoluídos, começando vazio");
                    Vec::new()
                }
            };
            *state = Some(loaded);
        }
        f(state.as_mut().unwrap())
    }

    /// Insert or replace by id, then persist the whole collection.
    pub fn register(&self, template: EvolvedTemplate) -> Result<(), StorageError> {
        self.with_loaded(|templates| {
            match templates.iter_mut().find(|t| t.id == template.id) {
                Some(existing) => *existing = template.clone(),
                None => templates.push(template.clone()),
            }
            info!(id = %template.id, name = %template.name, "template evoluído registrado");
            self.storage.save(templates)
        })
    }

    /// First evolved template (insertion order) with a keyword contained in
    /// the needle. A hit bumps `usage_count` and persists best-effort: a
    /// failed save only logs, the match is still returned.
    pub fn get_by_keyword(&self, needle: &str) -> Option<EvolvedTemplate> {
        let needle = normalize(needle);
        if needle.is_empty() {
            return None;
        }
        self.with_loaded(|templates| {
            let hit = templates.iter_mut().find(|t| {
                t.keywords
                    .iter()
                    .map(|k| normalize(k))
                    .any(|k| !k.is_empty() && (k == needle || needle.contains(k.as_str())))
            })?;
            hit.usage_count = hit.usage_count.saturating_add(1);
            let snapshot = hit.clone();
            if let Err(e) = self.storage.save(templates) {
                warn!(error = %e, id = %snapshot.id, "falha ao persistir contagem de uso");
            }
            Some(snapshot)
        })
    }

    pub fn get_by_id(&self, id: &str) -> Option<EvolvedTemplate> {
        self.with_loaded(|templates| templates.iter().find(|t| t.id == id).cloned())
    }

    pub fn list_all(&self) -> Vec<EvolvedTemplate> {
        self.with_loaded(|templates| templates.clone())
    }

    pub fn count(&self) -> usize {
        self.with_loaded(|templates| templates.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, keywords: &[&str]) -> EvolvedTemplate {
        EvolvedTemplate {
            id: id.to_string(),
            name: "Roteiro de Campo".to_string(),
            description: "gerado em teste".to_string(),
            icon: "📄".to_string(),
            color: "#0369A1".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            expected_sections: vec!["Introdução".to_string()],
            prompt_template: "{solicitacao} {contexto}".to_string(),
            origin_prompt: "crie um roteiro de campo".to_string(),
            created_at_ms: 1_700_000_000_000,
            usage_count: 1,
        }
    }

    #[test]
    fn register_then_lookup_bumps_usage() {
        let store = EvolvedTemplateStore::in_memory();
        store.register(sample("evoluido_roteiro_abc", &["roteiro de campo"])).unwrap();

        let hit = store.get_by_keyword("quero um roteiro de campo novo").unwrap();
        assert_eq!(hit.id, "evoluido_roteiro_abc");
        assert_eq!(hit.usage_count, 2);

        let again = store.get_by_keyword("roteiro de campo").unwrap();
        assert_eq!(again.usage_count, 3);
    }

    #[test]
    fn register_same_id_replaces() {
        let store = EvolvedTemplateStore::in_memory();
        store.register(sample("evoluido_x", &["alfa"])).unwrap();
        let mut updated = sample("evoluido_x", &["beta"]);
        updated.name = "Atualizado".to_string();
        store.register(updated).unwrap();

        assert_eq!(store.count(), 1);
        assert_eq!(store.get_by_id("evoluido_x").unwrap().name, "Atualizado");
        assert!(store.get_by_keyword("quero beta agora").is_some());
    }

    #[test]
    fn empty_needle_never_matches() {
        let store = EvolvedTemplateStore::in_memory();
        store.register(sample("evoluido_x", &["roteiro"])).unwrap();
        assert!(store.get_by_keyword("").is_none());
        assert!(store.get_by_keyword("   ").is_none());
    }

    #[test]
    fn keyword_match_is_diacritic_insensitive() {
        let store = EvolvedTemplateStore::in_memory();
        store.register(sample("evoluido_x", &["avaliação diagnóstica"])).unwrap();
        assert!(store.get_by_keyword("quero uma AVALIACAO DIAGNOSTICA").is_some());
    }

    #[test]
    fn sled_roundtrip_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage = SledTemplateStorage::open_path(dir.path()).unwrap();
            let store = EvolvedTemplateStore::new(Box::new(storage));
            store.register(sample("evoluido_persistente", &["roteiro"])).unwrap();
        }
        let storage = SledTemplateStorage::open_path(dir.path()).unwrap();
        let store = EvolvedTemplateStore::new(Box::new(storage));
        assert_eq!(store.count(), 1);
        assert_eq!(store.get_by_id("evoluido_persistente").unwrap().usage_count, 1);
    }
}
