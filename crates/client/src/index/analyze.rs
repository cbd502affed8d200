//! Text analysis.

use super::IndexAdmin;
use crate::error::Result;
use crate::models::{AnalyzeOptions, AnalyzedTokens};
use crate::transport::{Method, Transport};

impl<T: Transport> IndexAdmin<T> {
    /// Run `text` through an analyzer and return the emitted tokens.
    ///
    /// Bound requests go to `/{index}/_analyze` and can use analyzers
    /// defined on the index. Unbound requests go to `/_analyze` and work
    /// whether or not the index exists.
    pub async fn analyze(&self, text: &str, options: &AnalyzeOptions) -> Result<AnalyzedTokens> {
        let path = if options.bind_to_index {
            self.path("/_analyze")
        } else {
            "/_analyze".to_string()
        };
        let params = options.to_params(text);
        let response = self.send(Method::Get, &path, None, &params).await?;
        if !response.is_success() {
            return Err(self.classify(crate::failure::ServerFailure::from_response(
                &path, &response,
            )));
        }
        AnalyzedTokens::from_response(response.into_body(&path)?)
    }
}
