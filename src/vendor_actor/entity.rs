//! [`ActorEntity`] implementation for [`Vendor`].
//!
//! Profile fields change through `on_update`; the four metrics change only
//! through [`VendorAction::ApplyMetrics`].

use super::actions::VendorAction;
use super::error::VendorError;
use crate::model::{Vendor, VendorCreate, VendorId, VendorMetrics, VendorUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn require_non_blank(field: &str, value: &str) -> Result<(), VendorError> {
    if value.trim().is_empty() {
        return Err(VendorError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

fn require_finite(metrics: &VendorMetrics) -> Result<(), VendorError> {
    if !metrics.is_finite() {
        return Err(VendorError::Validation(format!(
            "metrics must be finite numbers, got {metrics:?}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Vendor {
    type Id = VendorId;
    type Create = VendorCreate;
    type Update = VendorUpdate;
    type Query = ();
    type Action = VendorAction;
    type ActionResult = Vendor;
    type Context = ();
    type Error = VendorError;

    fn from_create_params(id: VendorId, params: VendorCreate) -> Result<Self, Self::Error> {
        require_non_blank("name", &params.name)?;
        require_non_blank("vendor_code", &params.vendor_code)?;
        let metrics = params.initial_metrics.unwrap_or_default();
        require_finite(&metrics)?;

        Ok(Self {
            id,
            name: params.name,
            contact_details: params.contact_details,
            address: params.address,
            vendor_code: params.vendor_code,
            metrics,
        })
    }

    /// Applies the profile edits present in `update`.
    ///
    /// Runs on a working copy, so a blank value rejects the whole update.
    async fn on_update(&mut self, update: VendorUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            require_non_blank("name", &name)?;
            self.name = name;
        }
        if let Some(contact_details) = update.contact_details {
            self.contact_details = contact_details;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(vendor_code) = update.vendor_code {
            require_non_blank("vendor_code", &vendor_code)?;
            self.vendor_code = vendor_code;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: VendorAction, _ctx: &()) -> Result<Vendor, Self::Error> {
        match action {
            VendorAction::ApplyMetrics(metrics) => {
                require_finite(&metrics)?;
                self.metrics = metrics;
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_metrics_to_zero() {
        let vendor = Vendor::from_create_params(VendorId(1), VendorCreate::new("Acme", "ACM")).unwrap();
        assert_eq!(vendor.metrics, VendorMetrics::default());
        assert_eq!(vendor.id, VendorId(1));
    }

    #[test]
    fn test_create_rejects_blank_name_and_code() {
        let err = Vendor::from_create_params(VendorId(1), VendorCreate::new("  ", "ACM")).unwrap_err();
        assert!(matches!(err, VendorError::Validation(msg) if msg.contains("name")));

        let err = Vendor::from_create_params(VendorId(1), VendorCreate::new("Acme", "")).unwrap_err();
        assert!(matches!(err, VendorError::Validation(msg) if msg.contains("vendor_code")));
    }

    #[test]
    fn test_create_rejects_non_finite_initial_metrics() {
        let mut params = VendorCreate::new("Acme", "ACM");
        params.initial_metrics = Some(VendorMetrics {
            quality_rating_avg: f64::NAN,
            ..VendorMetrics::default()
        });
        assert!(Vendor::from_create_params(VendorId(1), params).is_err());
    }

    #[tokio::test]
    async fn test_apply_metrics_overwrites_all_four() {
        let mut vendor = Vendor::from_create_params(VendorId(1), VendorCreate::new("Acme", "ACM")).unwrap();
        let metrics = VendorMetrics {
            on_time_delivery_rate: 0.5,
            quality_rating_avg: 4.0,
            average_response_time: 3600.0,
            fulfilment_rate: 1.0,
        };
        let updated = vendor
            .handle_action(VendorAction::ApplyMetrics(metrics), &())
            .await
            .unwrap();
        assert_eq!(updated.metrics, metrics);
        assert_eq!(vendor.metrics, metrics);
    }
}
