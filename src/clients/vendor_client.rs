//! # Vendor Client
//!
//! High-level API for the `Vendor` actor. Wraps a `ResourceClient<Vendor>`.

use crate::model::{Vendor, VendorCreate, VendorId, VendorMetrics, VendorUpdate};
use crate::vendor_actor::{VendorAction, VendorError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Vendor actor.
#[derive(Clone)]
pub struct VendorClient {
    inner: ResourceClient<Vendor>,
}

impl VendorClient {
    pub fn new(inner: ResourceClient<Vendor>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Vendor> for VendorClient {
    type Error = VendorError;

    fn inner(&self) -> &ResourceClient<Vendor> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<VendorError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => VendorError::NotFound(id),
            Err(other) => VendorError::Unavailable(other.to_string()),
        }
    }
}

impl VendorClient {
    #[instrument(skip(self))]
    pub async fn create_vendor(&self, params: VendorCreate) -> Result<VendorId, VendorError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Returns the vendor at `id`, or creates one from `defaults`.
    ///
    /// The flag is true when a vendor was created.
    #[instrument(skip(self))]
    pub async fn get_or_create_vendor(
        &self,
        id: Option<VendorId>,
        defaults: VendorCreate,
    ) -> Result<(VendorId, bool), VendorError> {
        debug!("Sending request");
        self.inner
            .get_or_create(id, defaults)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_vendor(&self, id: VendorId, update: VendorUpdate) -> Result<Vendor, VendorError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Overwrites the vendor's four metrics. Returns the updated vendor.
    #[instrument(skip(self))]
    pub async fn apply_metrics(&self, id: VendorId, metrics: VendorMetrics) -> Result<Vendor, VendorError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, VendorAction::ApplyMetrics(metrics))
            .await
            .map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_apply_metrics_sends_action() {
        let (client, mut receiver) = create_mock_client::<Vendor>(10);
        let vendor_client = VendorClient::new(client);
        let metrics = VendorMetrics {
            on_time_delivery_rate: 1.0,
            ..VendorMetrics::default()
        };

        let task = tokio::spawn(async move { vendor_client.apply_metrics(VendorId(3), metrics).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, VendorId(3));
        let VendorAction::ApplyMetrics(sent) = action;
        assert_eq!(sent, metrics);

        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();

        let result = task.await.unwrap();
        assert_eq!(result, Err(VendorError::NotFound("vendor_3".into())));
    }

    #[tokio::test]
    async fn test_entity_errors_are_recovered() {
        let mut mock = MockClient::<Vendor>::new();
        mock.expect_update(VendorId(1))
            .return_err(FrameworkError::EntityError(Box::new(VendorError::Validation(
                "name must not be blank".into(),
            ))));
        mock.expect_get(VendorId(1)).return_err(FrameworkError::ActorClosed);

        let client = VendorClient::new(mock.client());
        let err = client
            .update_vendor(VendorId(1), VendorUpdate::default())
            .await
            .unwrap_err();
        assert_eq!(err, VendorError::Validation("name must not be blank".into()));

        let err = client.get(VendorId(1)).await.unwrap_err();
        assert!(matches!(err, VendorError::Unavailable(_)));
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_or_create_reports_creation() {
        let mut mock = MockClient::<Vendor>::new();
        mock.expect_get_or_create(Some(VendorId(4))).return_ok((VendorId(4), false));
        mock.expect_get_or_create(None).return_ok((VendorId(5), true));

        let client = VendorClient::new(mock.client());
        let reused = client
            .get_or_create_vendor(Some(VendorId(4)), VendorCreate::new("Acme", "ACM"))
            .await
            .unwrap();
        assert_eq!(reused, (VendorId(4), false));

        let created = client
            .get_or_create_vendor(None, VendorCreate::new("Globex", "GLX"))
            .await
            .unwrap();
        assert_eq!(created, (VendorId(5), true));
        mock.verify();
    }
}
