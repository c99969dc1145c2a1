// tests/support/mocks/post_repos.rs
use async_trait::async_trait;
use fixly_core::domain::{
    content::{Content, SlugIndex, Summary, Title, Slug},
    errors::{DomainError, DomainResult},
    post::{NewPost, Post, PostId, PostReadRepository, PostWriteRepository},
};
use std::sync::Mutex;

/* -------------------------------- InMemoryPostStore -------------------------------- */

/// 投稿のインメモリストア。slug の一意制約を再現する。
///
/// `race_next_inserts(n)` を呼ぶと、次の n 回の insert の直前に別の書き手が
/// 同じ slug を確保した状況を再現し、`Conflict` を返す。
#[derive(Default)]
pub struct InMemoryPostStore {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    rows: Vec<Post>,
    next_id: i64,
    pending_races: usize,
    insert_calls: usize,
}

impl InMemoryPostStore {
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
            .map(|post| post.slug.as_str().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }
}

impl State {
    fn push(&mut self, new: NewPost) -> Post {
        self.next_id += 1;
        let post = new.into_post(PostId::new(self.next_id).unwrap());
        self.rows.push(post.clone());
        post
    }

    fn competitor(slug: Slug, created_at: chrono::DateTime<chrono::Utc>) -> NewPost {
        NewPost::new(
            Title::new("Competing post").unwrap(),
            slug,
            Summary::new("Saved by another request.").unwrap(),
            Content::new("Saved by another request.").unwrap(),
            created_at,
        )
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        state.insert_calls += 1;

        if state.pending_races > 0 {
            state.pending_races -= 1;
            let competitor = State::competitor(post.slug.clone(), post.created_at);
            state.push(competitor);
            return Err(DomainError::Conflict("post slug already exists".into()));
        }

        if state.rows.iter().any(|row| row.slug == post.slug) {
            return Err(DomainError::Conflict("post slug already exists".into()));
        }

        Ok(state.push(post))
    }

    async fn toggle_published(&self, id: PostId) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        let post = state
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        post.toggle_published();
        Ok(post.clone())
    }
}

#[async_trait]
impl SlugIndex for InMemoryPostStore {
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
impl PostReadRepository for InMemoryPostStore {
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|row| &row.slug == slug)
            .cloned())
    }

    async fn list(&self, include_hidden: bool, limit: Option<u32>) -> DomainResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .state
            .lock()
            .unwrap()
            .rows
            .iter()
            .filter(|row| include_hidden || row.published)
            .cloned()
            .collect();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });
        if let Some(limit) = limit {
            posts.truncate(limit as usize);
        }
        Ok(posts)
    }
}
