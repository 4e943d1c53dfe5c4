//! Supabase client for the PostgREST tasks table.

use reqwest::Client;

use crate::config::Config;
use crate::scoring::RawTask;

/// Supabase client for task store operations.
pub struct SupabaseClient {
    client: Client,
    url: String,
    anon_key: String,
}

impl SupabaseClient {
    /// Create a new Supabase client.
    pub fn new(url: &str, anon_key: &str) -> Self {
        Self {
            client: Client::new(),
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// Create a client from service configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.supabase_url, &config.supabase_anon_key)
    }

    /// Get the PostgREST URL.
    fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url)
    }

    /// Fetch all stored tasks, newest first.
    ///
    /// Row order is not load-bearing downstream - callers re-rank by score.
    pub async fn list_tasks(&self) -> anyhow::Result<Vec<RawTask>> {
        let resp = self
            .client
            .get(format!(
                "{}/tasks?select=*&order=created_at.desc",
                self.rest_url()
            ))
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            anyhow::bail!("Failed to list tasks: {} - {}", status, text);
        }

        Ok(serde_json::from_str(&text)?)
    }
}
