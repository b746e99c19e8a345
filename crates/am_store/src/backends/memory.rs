use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::debug;

use am_core::{Article, ArticlePage, ArticleStore, Error, ListParams, NewArticle, Result};

use crate::Latency;

fn article(id: &str, title: &str, summary: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
    }
}

/// The five records every fresh store starts with.
fn seed_articles() -> Vec<Article> {
    vec![
        article(
            "1",
            "使用本地 Mock API 练习前端接口对接",
            "演示在没有真实后端接口时，如何用本地数据模拟异步请求。",
        ),
        article(
            "2",
            "Vue 路由：普通路由与动态路由",
            "通过 / 和 /user/:id 路由示例理解基础路由配置。",
        ),
        article(
            "3",
            "响应式布局实践",
            "利用 meta viewport、max-width 和媒体查询实现常见响应式需求。",
        ),
        article(
            "4",
            "前端分页与搜索实践",
            "使用 query + page + pageSize 组合模拟列表筛选与分页。",
        ),
        article(
            "5",
            "表单提交与校验",
            "通过本地新增一条记录练习创建接口与错误处理。",
        ),
    ]
}

/// Plain collection logic. `MemoryBackend` layers locking and simulated
/// latency on top of this.
pub struct MemoryStore {
    articles: Vec<Article>,
}

impl MemoryStore {
    pub fn seeded() -> Self {
        Self {
            articles: seed_articles(),
        }
    }

    pub fn list(&self, params: &ListParams) -> ArticlePage {
        // An absent or empty query applies no filter. A whitespace-only
        // query still takes the filter branch: the trimmed needle is empty
        // and matches every record.
        let filtered: Vec<&Article> = match params.query.as_deref() {
            Some(raw) if !raw.is_empty() => {
                let needle = raw.trim().to_lowercase();
                self.articles
                    .iter()
                    .filter(|a| {
                        a.title.to_lowercase().contains(&needle)
                            || a.summary.to_lowercase().contains(&needle)
                    })
                    .collect()
            }
            _ => self.articles.iter().collect(),
        };

        let total = filtered.len();
        let start = params
            .page
            .saturating_sub(1)
            .saturating_mul(params.page_size);
        let list: Vec<Article> = filtered
            .into_iter()
            .skip(start)
            .take(params.page_size)
            .cloned()
            .collect();

        ArticlePage {
            list,
            page: params.page,
            page_size: params.page_size,
            total,
        }
    }

    pub fn get_all(&self) -> Vec<Article> {
        self.articles.clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Article> {
        self.articles.iter().find(|a| a.id == id).cloned()
    }

    pub fn create(&mut self, payload: &NewArticle) -> Result<Article> {
        let title = payload.title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }
        let summary = payload.summary.trim();
        if summary.is_empty() {
            return Err(Error::EmptySummary);
        }

        let created = Article {
            id: (self.articles.len() + 1).to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
        };
        self.articles.insert(0, created.clone());
        Ok(created)
    }
}

/// In-memory mock backend. Cloning shares the underlying collection, so a
/// clone handed to another task sees the same articles.
#[derive(Clone)]
pub struct MemoryBackend {
    store: Arc<RwLock<MemoryStore>>,
    latency: Latency,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::with_latency(Latency::default())
    }

    pub fn with_latency(latency: Latency) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::seeded())),
            latency,
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleStore for MemoryBackend {
    async fn list(&self, params: &ListParams) -> Result<ArticlePage> {
        sleep(self.latency.list).await;
        let store = self.store.read().await;
        let page = store.list(params);
        debug!(
            "listed {} of {} articles (page {})",
            page.list.len(),
            page.total,
            page.page
        );
        Ok(page)
    }

    async fn get_all(&self) -> Result<Vec<Article>> {
        sleep(self.latency.get_all).await;
        let store = self.store.read().await;
        Ok(store.get_all())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Article>> {
        sleep(self.latency.get_by_id).await;
        let store = self.store.read().await;
        Ok(store.get_by_id(id))
    }

    async fn create(&self, payload: &NewArticle) -> Result<Article> {
        sleep(self.latency.create).await;
        // Id assignment and insertion happen under one write lock, so two
        // in-flight creates can never observe the same collection length.
        let mut store = self.store.write().await;
        let created = store.create(payload)?;
        debug!("created article {}", created.id);
        Ok(created)
    }
}
