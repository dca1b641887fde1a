/*!
 * # Editing Core
 *
 * The block store is the single source of truth for a page. Frontends never
 * touch blocks directly:
 *
 * - **Commands**: every edit is a [`Cmd`] applied through [`BlockStore::apply`],
 *   returning a [`Patch`] that names the affected block and the new version.
 * - **Snapshots**: renderers draw from an immutable [`Snapshot`] and compare
 *   versions to decide when to redraw.
 * - **Forms**: dialogs return structured results ([`LinkForm`]) that are turned
 *   into commands, so creation logic does not depend on any one input method.
 *
 * ```rust
 * use pagesmith_engine::editing::*;
 * use pagesmith_engine::{BlockKind, ToggleField};
 *
 * let mut store = BlockStore::new();
 * let patch = store.apply(Cmd::Add { kind: BlockKind::Text, content: None });
 * let id = patch.changed.unwrap();
 *
 * store.apply(Cmd::ToggleStyle { id, field: ToggleField::Bold });
 *
 * let snapshot = store.snapshot();
 * assert_eq!(snapshot.version, 2);
 * assert_eq!(snapshot.blocks.len(), 1);
 * ```
 */

pub mod commands;
pub mod link;
pub mod patch;
pub mod snapshot;
pub mod store;

pub use commands::Cmd;
pub use link::{LinkForm, LinkFormOutcome};
pub use patch::Patch;
pub use snapshot::Snapshot;
pub use store::BlockStore;
