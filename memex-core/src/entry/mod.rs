pub mod entries;
pub mod entry_type;
pub mod scope;

pub use entries::{
    EntryMeta, ExperienceEntry, GuidelineEntry, KnowledgeEntry, MemoryEntry, ToolEntry,
};
pub use entry_type::{EntryKey, EntryType};
pub use scope::{Scope, ScopeType};
