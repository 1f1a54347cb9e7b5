use color_eyre::eyre::eyre;
use color_eyre::Result;
use url::Url;

#[derive(Debug)]
pub struct Urls {
    pub api_base: Url,
}

impl Urls {
    pub fn new(argocd_base_url: &str) -> Result<Self> {
        let base = argocd_base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(eyre!("The ArgoCD base URL must not be empty"));
        }
        let api_base = match Url::parse(&format!("{base}/api/v1")) {
            Ok(t) => t,
            Err(e) => return Err(eyre!("Invalid ArgoCD base URL \"{argocd_base_url}\": {e}")),
        };
        Ok(Self { api_base })
    }

    /// The application resource, which carries the deployment history under `status.history`.
    pub fn application_url(&self, app_name: &str) -> Result<Url> {
        let encoded_app_name = Self::percent_encode(app_name);
        Ok(Url::parse(
            &(self.api_base.to_string() + &format!("/applications/{encoded_app_name}")),
        )?)
    }

    /// Percent-encodes string, so an application name is always a single path segment.
    pub fn percent_encode(n: &str) -> String {
        urlencoding::encode(n).to_string()
    }
}
