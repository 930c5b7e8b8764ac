//! Todo unit of work with identity-map change tracking.
//!
//! # Responsibility
//! - Keep one tracked instance per todo id for the lifetime of a request
//!   or logical transaction.
//! - Decide the update path: merge into the tracked instance, attach a
//!   stored-but-untracked row for replacement, or fail for a missing id.
//! - Flush all pending changes in one atomic SQLite transaction.
//!
//! # Invariants
//! - The identity map never holds two entries for the same id.
//! - An update targeting an id absent from both the map and the store is
//!   always a reported failure, never a silent no-op.
//! - Identifiers are never rewritten by a merge; only payload fields move.
//! - The map is discarded when the unit of work commits or is dropped.

use crate::model::todo::{TodoId, TodoItem};
use crate::repo::todo_repo::{SqliteTodoRepository, TodoRepository};
use crate::repo::{bool_to_int, RepoError, RepoResult};
use log::info;
use rusqlite::{params, Connection};
use std::collections::BTreeMap;
use std::time::Instant;

/// Where an update target currently lives.
///
/// Drives the three-way update branch explicitly instead of through nested
/// conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrackState {
    /// An instance with this id is already held in the identity map.
    Tracked,
    /// The store has the row, but this unit of work has not observed it.
    StoredOnly,
    /// Neither the identity map nor the store knows the id.
    Missing,
}

/// Pending mutation recorded for a tracked instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChangeState {
    /// Observed via a read; nothing to flush.
    Clean,
    /// Payload fields were merged onto the tracked instance in place.
    Modified,
    /// A supplied instance was attached as a whole-row replacement.
    Replaced,
}

#[derive(Debug)]
struct TrackedTodo {
    item: TodoItem,
    state: ChangeState,
}

impl TrackedTodo {
    /// Copies payload fields from `source` onto the tracked instance.
    ///
    /// The identifier stays untouched and the entry keeps its map slot, so
    /// no duplicate tracking entry can appear for the id.
    fn merge_from(&mut self, source: &TodoItem) {
        self.item.title.clone_from(&source.title);
        self.item.is_completed = source.is_completed;
        self.item.due_date = source.due_date;
        if self.state == ChangeState::Clean {
            self.state = ChangeState::Modified;
        }
    }
}

/// Identity-map-scoped unit of work for todo mutations.
///
/// Each request owns one instance exclusively; there is no cross-request
/// shared state. Two units of work committing against the same row are
/// serialized only by the store itself (last committer wins).
pub struct TodoUnitOfWork<'conn> {
    conn: &'conn Connection,
    repo: SqliteTodoRepository<'conn>,
    tracked: BTreeMap<TodoId, TrackedTodo>,
}

impl<'conn> TodoUnitOfWork<'conn> {
    /// Creates a unit of work over a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> RepoResult<Self> {
        Ok(Self {
            conn,
            repo: SqliteTodoRepository::try_new(conn)?,
            tracked: BTreeMap::new(),
        })
    }

    /// Reads one todo through the identity map.
    ///
    /// A map hit returns the tracked instance, including any not-yet-flushed
    /// changes. A miss loads from the store and registers the row as
    /// tracked-clean.
    pub fn get(&mut self, id: TodoId) -> RepoResult<Option<&TodoItem>> {
        if !self.tracked.contains_key(&id) {
            match self.repo.get_todo(id)? {
                Some(item) => {
                    self.tracked.insert(
                        id,
                        TrackedTodo {
                            item,
                            state: ChangeState::Clean,
                        },
                    );
                }
                None => return Ok(None),
            }
        }

        Ok(self.tracked.get(&id).map(|tracked| &tracked.item))
    }

    /// Applies a full replacement payload to the todo identified by
    /// `item.id`.
    ///
    /// # Contract
    /// - Tracked id: payload fields are copied onto the tracked instance in
    ///   place; the map keeps a single entry for the id.
    /// - Untracked id present in the store: `item` is attached as the tracked
    ///   instance and flushed as a whole-row replacement on commit.
    /// - Id absent everywhere: fails with `TodoNotFound`; no state changes.
    pub fn update(&mut self, item: &TodoItem) -> RepoResult<()> {
        item.validate()?;

        match self.locate(item.id)? {
            TrackState::Tracked => {
                if let Some(tracked) = self.tracked.get_mut(&item.id) {
                    tracked.merge_from(item);
                }
                Ok(())
            }
            TrackState::StoredOnly => {
                self.tracked.insert(
                    item.id,
                    TrackedTodo {
                        item: item.clone(),
                        state: ChangeState::Replaced,
                    },
                );
                Ok(())
            }
            TrackState::Missing => Err(RepoError::TodoNotFound(item.id)),
        }
    }

    /// Returns whether an instance with this id is currently tracked.
    pub fn is_tracked(&self, id: TodoId) -> bool {
        self.tracked.contains_key(&id)
    }

    /// Number of instances held by the identity map.
    pub fn tracked_count(&self) -> usize {
        self.tracked.len()
    }

    /// Flushes all pending changes in one transaction and discards the map.
    ///
    /// A flush that matches zero rows means the row vanished after it was
    /// observed; the whole commit aborts with `TodoNotFound` and the
    /// transaction rolls back. Store-level failures propagate unchanged.
    pub fn commit(self) -> RepoResult<()> {
        let started_at = Instant::now();
        let tx = self.conn.unchecked_transaction()?;
        let mut flushed = 0usize;

        for (id, tracked) in &self.tracked {
            match tracked.state {
                ChangeState::Clean => {}
                ChangeState::Modified | ChangeState::Replaced => {
                    let changed = tx.execute(
                        "UPDATE todos
                         SET
                            title = ?1,
                            is_completed = ?2,
                            due_date = ?3,
                            updated_at = (strftime('%s', 'now') * 1000)
                         WHERE id = ?4;",
                        params![
                            tracked.item.title.as_str(),
                            bool_to_int(tracked.item.is_completed),
                            tracked.item.due_date,
                            id,
                        ],
                    )?;

                    if changed == 0 {
                        return Err(RepoError::TodoNotFound(*id));
                    }
                    flushed += 1;
                }
            }
        }

        tx.commit()?;
        info!(
            "event=uow_commit module=uow status=ok flushed={} tracked={} duration_ms={}",
            flushed,
            self.tracked.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    /// Drops all tracked state without flushing anything.
    pub fn discard(self) {
        info!(
            "event=uow_discard module=uow status=ok tracked={}",
            self.tracked.len()
        );
    }

    /// Classifies where the update target for `id` currently lives.
    ///
    /// The store probe bypasses the identity map on purpose: a tracked hit
    /// has already been answered, and attach semantics need ground truth
    /// from the row itself.
    fn locate(&self, id: TodoId) -> RepoResult<TrackState> {
        if self.tracked.contains_key(&id) {
            return Ok(TrackState::Tracked);
        }
        if self.repo.exists_todo(id)? {
            return Ok(TrackState::StoredOnly);
        }
        Ok(TrackState::Missing)
    }
}
