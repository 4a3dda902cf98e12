use crate::error::VisionError;
use crate::models::{ImageAnalysis, VisualFeature};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

const ANALYZE_PATH: &str = "/computervision/imageanalysis:analyze";
const KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

#[derive(Clone)]
pub struct VisionClient {
    http: Client,
    endpoint: Url,
    key: String,
    api_version: String,
}

impl VisionClient {
    #[must_use]
    pub fn new(endpoint: Url, key: &str, api_version: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            key: key.to_string(),
            api_version: api_version.to_string(),
        }
    }

    fn analyze_endpoint(&self, features: &[VisualFeature]) -> Url {
        let mut url = self.endpoint.clone();
        url.set_path(ANALYZE_PATH);
        let feature_list = features
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(",");
        url.query_pairs_mut()
            .append_pair("api-version", &self.api_version)
            .append_pair("features", &feature_list);
        url
    }

    /// Submits raw image bytes to the analysis service.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent, the service answers non-2xx, or
    /// the response body is not the expected JSON.
    pub async fn analyze(
        &self,
        image: Vec<u8>,
        features: &[VisualFeature],
    ) -> Result<ImageAnalysis, VisionError> {
        let url = self.analyze_endpoint(features);
        debug!("Analyzing {} bytes via {url}", image.len());

        let response = self
            .http
            .post(url)
            .header(KEY_HEADER, &self.key)
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(VisionError::Api {
                status: response.status(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let analysis: ImageAnalysis = response.json().await?;
        Ok(analysis)
    }

    /// Downloads an image so the same bytes can be analyzed and annotated.
    pub async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, VisionError> {
        debug!("Downloading image from {url}");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> VisionClient {
        let endpoint = Url::parse("https://example.cognitiveservices.azure.com").expect("valid");
        VisionClient::new(endpoint, "secret", "2024-02-01")
    }

    #[test]
    fn builds_analyze_url_with_features() {
        let url = client().analyze_endpoint(&[VisualFeature::Caption, VisualFeature::Objects]);
        assert_eq!(url.path(), "/computervision/imageanalysis:analyze");
        let query = url.query().expect("has query");
        assert!(query.contains("api-version=2024-02-01"));
        assert!(query.contains("features=caption%2Cobjects"));
    }

    #[test]
    fn all_features_join_in_request_order() {
        let url = client().analyze_endpoint(&VisualFeature::ALL);
        let query = url.query().expect("has query");
        assert!(query.contains("caption%2CdenseCaptions%2Ctags%2Cobjects%2Cpeople"));
    }
}
