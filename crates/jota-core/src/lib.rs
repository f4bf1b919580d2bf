//! jota-core: o pipeline de roteamento de atividades do Jota.
//!
//! A teacher types a free-form request ("Crie um caça-palavras sobre o
//! sistema solar") and this crate decides what to do with it, in order:
//!
//! 1. interactive-activity keywords (built in the school UI, not generated),
//! 2. the static template catalog (scored keyword search),
//! 3. previously auto-evolved templates (persisted, usage-counted),
//! 4. creation-intent heuristic that triggers synthesis of a new template,
//! 5. free-document fallback, which always succeeds.
//!
//! The catalog is const data compiled into the binary; evolved templates
//! live in a sled-backed store. Routing itself never returns an error:
//! storage failures degrade to the free-document tier with a warning.

pub mod catalog;
pub mod detector;
pub mod evolution;
pub mod registry;
pub mod router;
pub mod store;

pub use catalog::{all_categories, Category, CategoryId, TemplateDefinition};
pub use detector::{ActivityDetector, Confidence, DetectionKind, DetectionResult, MatchedTemplate};
pub use evolution::AutoEvolutionEngine;
pub use registry::TemplateRegistry;
pub use router::{ActivityRouter, RouteMetadata, RouteOrigin, RouterResult};
pub use store::{
    EvolvedTemplate, EvolvedTemplateStore, MemoryTemplateStorage, SledTemplateStorage,
    StorageError, TemplateStorage,
};

pub use jota_evolution::normalize;
