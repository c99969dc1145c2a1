// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod post_repos;
pub mod time;
pub mod tool_repos;
pub mod util;

// 時刻関連
pub use time::fixed_now;

// ユーティリティ関連
pub use util::DummyClock;

// インメモリリポジトリ
pub use post_repos::InMemoryPostStore;
pub use tool_repos::InMemoryToolStore;
