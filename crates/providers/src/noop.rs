use crate::{
    AdditiveIdentity, DescriptionProvider, IdentityProvider, ImageryProvider, ProviderError,
    VerificationProvider,
};

#[derive(Debug, Default)]
pub struct NoopProvider;

#[async_trait::async_trait]
impl IdentityProvider for NoopProvider {
    async fn resolve_identity(
        &self,
        _code: Option<&str>,
        _name: &str,
    ) -> Result<AdditiveIdentity, ProviderError> {
        Err(ProviderError::NotFound)
    }
}

#[async_trait::async_trait]
impl DescriptionProvider for NoopProvider {
    async fn fetch_description(&self, _name: &str) -> Result<String, ProviderError> {
        Err(ProviderError::NotFound)
    }
}

#[async_trait::async_trait]
impl VerificationProvider for NoopProvider {
    async fn fetch_verification(&self, _name: &str) -> Result<bool, ProviderError> {
        Err(ProviderError::NotFound)
    }
}

#[async_trait::async_trait]
impl ImageryProvider for NoopProvider {
    async fn fetch_imagery(&self, _name: &str) -> Result<String, ProviderError> {
        Err(ProviderError::NotFound)
    }
}
