use crate::domain::model::Fighter;
use crate::domain::ports::FighterClient;
use crate::utils::error::{FightError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// HTTP client for one downstream fighter service. One instance per service;
/// hero and villain differ only in base URL and path.
#[derive(Debug, Clone)]
pub struct RandomFighterClient {
    client: Client,
    endpoint: String,
    service: &'static str,
}

impl RandomFighterClient {
    pub fn hero(base_url: &str) -> Self {
        Self::new(base_url, "/api/heroes/random", "hero")
    }

    pub fn villain(base_url: &str) -> Self {
        Self::new(base_url, "/api/villains/random", "villain")
    }

    fn new(base_url: &str, path: &str, service: &'static str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), path),
            service,
        }
    }

    fn unavailable(&self, reason: impl ToString) -> FightError {
        FightError::DownstreamUnavailable {
            service: self.service.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl FighterClient for RandomFighterClient {
    async fn fetch_random(&self) -> Result<Fighter> {
        tracing::debug!("Fetching random {} from: {}", self.service, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.unavailable(e))?;

        let status = response.status();
        tracing::debug!("{} service response status: {}", self.service, status);

        if !status.is_success() {
            return Err(self.unavailable(format!("unexpected status {}", status)));
        }

        let fighter: Fighter = response.json().await.map_err(|e| self.unavailable(e))?;
        Ok(fighter)
    }

    fn service_name(&self) -> &str {
        self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_random_hero() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/heroes/random");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": 1,
                    "name": "Chewbacca",
                    "otherName": "",
                    "level": 5,
                    "picture": "https://example.com/chewbacca.png",
                    "powers": "Agility, Longevity"
                }));
        });

        let client = RandomFighterClient::hero(&server.base_url());
        let fighter = client.fetch_random().await.unwrap();

        mock.assert();
        assert_eq!(fighter.name, "Chewbacca");
        assert_eq!(fighter.level, 5);
        assert_eq!(fighter.powers.as_deref(), Some("Agility, Longevity"));
    }

    #[tokio::test]
    async fn test_fetch_random_maps_server_error() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/villains/random");
            then.status(500);
        });

        let client = RandomFighterClient::villain(&server.base_url());
        let err = client.fetch_random().await.unwrap_err();

        mock.assert();
        match err {
            FightError::DownstreamUnavailable { service, .. } => assert_eq!(service, "villain"),
            other => panic!("expected DownstreamUnavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_random_maps_bad_payload() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/heroes/random");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json");
        });

        let client = RandomFighterClient::hero(&server.base_url());
        assert!(matches!(
            client.fetch_random().await,
            Err(FightError::DownstreamUnavailable { .. })
        ));
    }
}
