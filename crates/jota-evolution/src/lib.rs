//! jota-evolution: auto-evolução de templates de atividade.
//!
//! When a teacher's free-text request matches nothing in the catalog, this
//! crate synthesizes a brand-new template draft from the request alone:
//! a readable name, a keyword set, an expected-section skeleton, cosmetic
//! icon/color, a namespaced id, and a ready-to-fill prompt skeleton.
//!
//! Every heuristic has a default, so synthesis never fails. The heuristics
//! are deliberately isolated here (no dependency on the core crate) so they
//! can be pinned by unit tests against literal inputs; refining a regex or
//! a stop-word list without breaking a test is not possible by accident.

mod draft;
pub mod heuristics;
pub mod normalize;

pub use draft::{synthesize, TemplateDraft, EVOLVED_ID_PREFIX};
