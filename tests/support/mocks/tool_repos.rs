// tests/support/mocks/tool_repos.rs
use async_trait::async_trait;
use fixly_core::domain::{
    content::{Content, SlugIndex, Summary, Title, Slug},
    errors::{DomainError, DomainResult},
    tool::{NewTool, Tool, ToolId, ToolReadRepository, ToolWriteRepository},
};
use std::sync::Mutex;

/* -------------------------------- InMemoryToolStore -------------------------------- */

/// ツールのインメモリストア。slug の一意制約を再現する。
///
/// `race_next_inserts(n)` を呼ぶと、次の n 回の insert の直前に別の書き手が
/// 同じ slug を確保した状況を再現し、`Conflict` を返す。
#[derive(Default)]
pub struct InMemoryToolStore {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    rows: Vec<Tool>,
    next_id: i64,
    pending_races: usize,
    insert_calls: usize,
}

impl InMemoryToolStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn race_next_inserts(&self, n: usize) {
        self.state.lock().unwrap().pending_races = n;
    }

    pub fn insert_calls(&self) -> usize {
        self.state.lock().unwrap().insert_calls
    }

    pub fn slugs(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .rows
            .iter()
            .map(|tool| tool.slug.as_str().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }
}

impl State {
    fn push(&mut self, new: NewTool) -> Tool {
        self.next_id += 1;
        let tool = new.into_tool(ToolId::new(self.next_id).unwrap());
        self.rows.push(tool.clone());
        tool
    }

    fn competitor(slug: Slug, created_at: chrono::DateTime<chrono::Utc>) -> NewTool {
        NewTool::new(
            Title::new("Competing tool").unwrap(),
            slug,
            Summary::new("Saved by another request.").unwrap(),
            Content::new("Saved by another request.").unwrap(),
            created_at,
        )
    }
}

#[async_trait]
impl ToolWriteRepository for InMemoryToolStore {
    async fn insert(&self, tool: NewTool) -> DomainResult<Tool> {
        let mut state = self.state.lock().unwrap();
        state.insert_calls += 1;

        if state.pending_races > 0 {
            state.pending_races -= 1;
            let competitor = State::competitor(tool.slug.clone(), tool.created_at);
            state.push(competitor);
            return Err(DomainError::Conflict("tool slug already exists".into()));
        }

        if state.rows.iter().any(|row| row.slug == tool.slug) {
            return Err(DomainError::Conflict("tool slug already exists".into()));
        }

        Ok(state.push(tool))
    }

    async fn toggle_published(&self, id: ToolId) -> DomainResult<Tool> {
        let mut state = self.state.lock().unwrap();
        let tool = state
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::NotFound("tool not found".into()))?;
        tool.toggle_published();
        Ok(tool.clone())
    }
}

#[async_trait]
impl SlugIndex for InMemoryToolStore {
    async fn slug_exists(&self, slug: &str) -> DomainResult<bool> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .iter()
            .any(|row| row.slug.as_str() == slug))
    }
}

#[async_trait]
impl ToolReadRepository for InMemoryToolStore {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Tool>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|row| &row.slug == slug)
            .cloned())
    }

    async fn list(&self, include_hidden: bool, limit: Option<u32>) -> DomainResult<Vec<Tool>> {
        let mut tools: Vec<Tool> = self
            .state
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|row| include_hidden || row.published)
            .cloned()
            .collect();
        tools.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        if let Some(limit) = limit {
            tools.truncate(limit as usize);
        }
        Ok(tools)
    }
}
