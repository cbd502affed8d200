use super::IndexAdmin;
use crate::error::Result;
use crate::models::AliasSet;
use crate::transport::{Method, Transport};

impl<T: Transport> IndexAdmin<T> {
    /// Aliases of this index, as `{index: {"aliases": {...}}}`.
    ///
    /// Aliases are added and removed through
    /// [`crate::ClusterAdmin::update_aliases`].
    pub async fn get_aliases(&self) -> Result<AliasSet> {
        let path = self.path("/_aliases");
        let body = self.request(Method::Get, &path, None).await?;
        AliasSet::from_response(body)
    }
}
