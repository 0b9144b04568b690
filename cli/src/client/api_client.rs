use super::draft::ApiDraft;
use super::filter::DeleteTarget;
use super::http::{self, HttpResponse};
use super::models::{ApiDefinition, Collection, RequestOptions};
use super::unique::{resolve_unique, UniqueApi};
use crate::core::error::ApiError;
use crate::core::logger::Logger;
use crate::storage::{RecentUpdate, Store};

/// Outcome of replaying every definition in a category.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub total: usize,
    pub failed: usize,
}

/// Where `find` located a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Recent,
    Saved,
}

pub struct PostalClient {
    store: Store,
}

impl PostalClient {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Record the request in the recent list, then send it.
    pub async fn test(
        &self,
        method: &str,
        url: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, ApiError> {
        let api = ApiDraft::new(method, url, options)?.build(Store::generate_id())?;

        self.store
            .save_recent(RecentUpdate::Push(api.clone()))
            .await?;
        Logger::success(">> API saved in recents\n");

        Logger::response(&format!(
            "\nTesting API: {} {}\n",
            api.method.to_uppercase(),
            api.url
        ));
        http::execute(&api).await
    }

    /// Prepend the definition to the saved collection.
    pub async fn save(
        &self,
        method: &str,
        url: &str,
        options: RequestOptions,
    ) -> Result<ApiDefinition, ApiError> {
        let api = ApiDraft::new(method, url, options)?.build(Store::generate_id())?;

        let mut saved = self.store.load_saved().await?;
        saved.apis.insert(0, api.clone());
        self.store.save_saved(&saved).await?;
        tracing::debug!("saved API {} ({} total)", api.id, saved.apis.len());

        Logger::success(">> API saved successfully\n");
        Ok(api)
    }

    /// Both collections, recent first. Saved read failures are fatal; recent
    /// ones read as empty.
    pub async fn load_all(&self) -> Result<(Collection, Collection), ApiError> {
        let recent = self.store.load_recent().await;
        let saved = self.store.load_saved().await?;
        Ok((recent, saved))
    }

    /// Look an id up in recent, then saved.
    pub async fn find(&self, id: &str) -> Result<Option<(ApiDefinition, Origin)>, ApiError> {
        let (recent, saved) = self.load_all().await?;
        Ok(Self::locate(&recent, &saved, id))
    }

    /// `find` over collections the caller already loaded.
    pub fn locate(
        recent: &Collection,
        saved: &Collection,
        id: &str,
    ) -> Option<(ApiDefinition, Origin)> {
        if let Some(api) = recent.find(id) {
            return Some((api.clone(), Origin::Recent));
        }
        saved.find(id).cloned().map(|api| (api, Origin::Saved))
    }

    pub async fn unique_in_category(&self, category: &str) -> Result<Vec<UniqueApi>, ApiError> {
        let (recent, saved) = self.load_all().await?;
        Ok(resolve_unique(&recent.apis, &saved.apis, Some(category)))
    }

    /// Replay a stored definition through the `test` flow.
    pub async fn replay(&self, api: &ApiDefinition) -> Result<HttpResponse, ApiError> {
        Logger::info(&format!(
            "Testing single API: {} {}",
            api.method.to_uppercase(),
            api.url
        ));
        self.test(&api.method, &api.url, api.replay_options()).await
    }

    /// Send each definition in turn. A failure is reported and the batch
    /// carries on.
    pub async fn run_batch(&self, apis: &[UniqueApi]) -> BatchReport {
        let mut report = BatchReport {
            total: apis.len(),
            failed: 0,
        };

        for (i, api) in apis.iter().enumerate() {
            Logger::info(&format!(
                "{}/{} Testing API: {} {}",
                i + 1,
                report.total,
                api.method.to_uppercase(),
                api.url
            ));
            if let Err(e) = self
                .test(&api.method, &api.url, api.created_options.clone())
                .await
            {
                Logger::error(&format!("Error testing API {}: {e}", api.id));
                report.failed += 1;
            }
        }

        report
    }

    /// Remove the selected entries from the saved collection and return how
    /// many are left.
    pub async fn delete_saved(
        &self,
        mut saved: Collection,
        selected: &[usize],
    ) -> Result<usize, ApiError> {
        let mut index = 0;
        saved.apis.retain(|_| {
            let keep = !selected.contains(&index);
            index += 1;
            keep
        });
        self.store.save_saved(&saved).await?;
        Ok(saved.apis.len())
    }

    pub async fn clear_recent(&self) -> Result<(), ApiError> {
        self.store.save_recent(RecentUpdate::Clear).await
    }

    /// Saved entries a delete target selects, with their indices.
    pub fn select_for_delete(
        saved: &Collection,
        target: &DeleteTarget,
    ) -> Vec<(usize, ApiDefinition)> {
        target
            .select(&saved.apis)
            .into_iter()
            .map(|i| (i, saved.apis[i].clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::FieldInput;

    async fn client() -> (tempfile::TempDir, PostalClient) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path());
        store.initialize().await.unwrap();
        (dir, PostalClient::new(store))
    }

    fn options(category: &str) -> RequestOptions {
        RequestOptions {
            data: FieldInput::Text(r#"{"name":"John"}"#.into()),
            category: category.into(),
            ..RequestOptions::default()
        }
    }

    #[tokio::test]
    async fn test_save_prepends() {
        let (_dir, client) = client().await;
        let first = client
            .save("POST", "https://x.test/a", options("users"))
            .await
            .unwrap();
        let second = client
            .save("GET", "https://x.test/b", options(""))
            .await
            .unwrap();

        let saved = client.store().load_saved().await.unwrap();
        assert_eq!(saved.apis.len(), 2);
        assert_eq!(saved.apis[0].id, second.id);
        assert_eq!(saved.apis[1].id, first.id);
        assert!(client.store().load_recent().await.apis.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_save_writes_nothing() {
        let (_dir, client) = client().await;
        let bad = RequestOptions {
            encoded: true,
            multipart: true,
            ..RequestOptions::default()
        };
        assert!(client.save("POST", "https://x.test", bad).await.is_err());
        assert!(client.store().load_saved().await.unwrap().apis.is_empty());
    }

    #[tokio::test]
    async fn test_find_prefers_recent() {
        let (_dir, client) = client().await;
        let saved = client
            .save("GET", "https://x.test/saved", options(""))
            .await
            .unwrap();

        let mut copy = saved.clone();
        copy.url = "https://x.test/recent".into();
        client
            .store()
            .save_recent(RecentUpdate::Push(copy))
            .await
            .unwrap();

        let (found, origin) = client.find(&saved.id).await.unwrap().unwrap();
        assert_eq!(origin, Origin::Recent);
        assert_eq!(found.url, "https://x.test/recent");
        assert!(client.find("none").await.unwrap().is_none());

        let (recent, stored) = client.load_all().await.unwrap();
        let (_, origin) = PostalClient::locate(&Collection::new(), &stored, &saved.id).unwrap();
        assert_eq!(origin, Origin::Saved);
        assert!(PostalClient::locate(&recent, &stored, "none").is_none());
    }

    #[tokio::test]
    async fn test_delete_saved_by_index() {
        let (_dir, client) = client().await;
        for path in ["a", "b", "c"] {
            client
                .save("GET", &format!("https://x.test/{path}"), options("grp"))
                .await
                .unwrap();
        }

        let mut saved = client.store().load_saved().await.unwrap();
        for (api, id) in saved.apis.iter_mut().zip(["000c", "000b", "000a"]) {
            api.id = id.to_string();
        }
        let target = DeleteTarget::Id("000b".into());
        let selected: Vec<usize> = PostalClient::select_for_delete(&saved, &target)
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        let remaining = client.delete_saved(saved, &selected).await.unwrap();

        assert_eq!(remaining, 2);
        let urls: Vec<String> = client
            .store()
            .load_saved()
            .await
            .unwrap()
            .apis
            .into_iter()
            .map(|a| a.url)
            .collect();
        assert_eq!(urls, vec!["https://x.test/c", "https://x.test/a"]);
    }

    #[tokio::test]
    async fn test_unique_in_category() {
        let (_dir, client) = client().await;
        client
            .save("GET", "https://x.test/a", options("grp"))
            .await
            .unwrap();
        client
            .save("GET", "https://x.test/a", options("grp"))
            .await
            .unwrap();
        client
            .save("GET", "https://x.test/b", options("other"))
            .await
            .unwrap();

        let unique = client.unique_in_category("grp").await.unwrap();
        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].url, "https://x.test/a");
    }
}
