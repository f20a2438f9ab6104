//! VidP Worker Library
//!
//! Processing orchestration abstraction. The `Orchestrator` trait is the
//! seam a future cluster-backed job runner (e.g. Kubernetes Jobs) slots
//! into; the default implementation is a no-op that only names the job.

pub mod orchestrator;

pub use orchestrator::{JobRef, NoopOrchestrator, Orchestrator, OrchestratorError};
