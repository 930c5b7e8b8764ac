//! Request-scoped unit of work over todo storage.
//!
//! # Responsibility
//! - Track the single observed instance per todo id for one logical
//!   transaction.
//! - Reconcile full-replacement updates against tracked and stored state.
//!
//! # Invariants
//! - At most one tracked instance exists per id.
//! - Pending changes flush atomically in one SQLite transaction.

pub mod todo_uow;

pub use todo_uow::TodoUnitOfWork;
