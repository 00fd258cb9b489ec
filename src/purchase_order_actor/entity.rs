//! [`ActorEntity`] implementation for [`PurchaseOrder`].
//!
//! The actor runs with a [`VendorClient`] context: creating an order, or moving
//! it to another vendor, first checks that the vendor exists.

use super::actions::{PurchaseOrderAction, PurchaseOrderActionResult};
use super::error::PurchaseOrderError;
use crate::clients::VendorClient;
use crate::model::{
    PurchaseOrder, PurchaseOrderCreate, PurchaseOrderFields, PurchaseOrderId, PurchaseOrderQuery,
    PurchaseOrderUpdate, VendorId,
};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use tracing::debug;

fn require_non_blank(field: &str, value: &str) -> Result<(), PurchaseOrderError> {
    if value.trim().is_empty() {
        return Err(PurchaseOrderError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}

fn require_finite_rating(rating: Option<f64>) -> Result<(), PurchaseOrderError> {
    match rating {
        Some(r) if !r.is_finite() => Err(PurchaseOrderError::Validation(format!(
            "quality_rating must be a finite number, got {r}"
        ))),
        _ => Ok(()),
    }
}

/// Field-level checks applied to every new order.
pub fn validate_fields(fields: &PurchaseOrderFields) -> Result<(), PurchaseOrderError> {
    require_non_blank("po_number", &fields.po_number)?;
    require_non_blank("status", &fields.status)?;
    require_finite_rating(fields.quality_rating)
}

async fn require_vendor(vendors: &VendorClient, id: VendorId) -> Result<(), PurchaseOrderError> {
    match vendors.get(id).await? {
        Some(_) => Ok(()),
        None => Err(PurchaseOrderError::VendorNotFound(id)),
    }
}

#[async_trait]
impl ActorEntity for PurchaseOrder {
    type Id = PurchaseOrderId;
    type Create = PurchaseOrderCreate;
    type Update = PurchaseOrderUpdate;
    type Query = PurchaseOrderQuery;
    type Action = PurchaseOrderAction;
    type ActionResult = PurchaseOrderActionResult;
    type Context = VendorClient;
    type Error = PurchaseOrderError;

    fn from_create_params(id: PurchaseOrderId, params: PurchaseOrderCreate) -> Result<Self, Self::Error> {
        validate_fields(&params.fields)?;
        let fields = params.fields;

        Ok(Self {
            id,
            po_number: fields.po_number,
            vendor: params.vendor,
            order_date: fields.order_date,
            delivery_date: fields.delivery_date,
            items: fields.items,
            quantity: fields.quantity,
            status: fields.status,
            quality_rating: fields.quality_rating,
            issue_date: fields.issue_date,
            acknowledgment_date: fields.acknowledgment_date,
        })
    }

    fn matches(&self, query: &PurchaseOrderQuery) -> bool {
        query.matches(self)
    }

    async fn on_create(&mut self, vendors: &VendorClient) -> Result<(), Self::Error> {
        require_vendor(vendors, self.vendor).await
    }

    /// Merges the fields present in `update`.
    ///
    /// Runs on a working copy: any validation failure (including an unknown
    /// target vendor) leaves the stored order untouched.
    async fn on_update(
        &mut self,
        update: PurchaseOrderUpdate,
        vendors: &VendorClient,
    ) -> Result<(), Self::Error> {
        if let Some(po_number) = update.po_number {
            require_non_blank("po_number", &po_number)?;
            self.po_number = po_number;
        }
        if let Some(vendor) = update.vendor {
            if vendor != self.vendor {
                require_vendor(vendors, vendor).await?;
                debug!(order = %self.id, from = %self.vendor, to = %vendor, "Reassigning order");
                self.vendor = vendor;
            }
        }
        if let Some(order_date) = update.order_date {
            self.order_date = order_date;
        }
        if let Some(delivery_date) = update.delivery_date {
            self.delivery_date = delivery_date;
        }
        if let Some(items) = update.items {
            self.items = items;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(status) = update.status {
            require_non_blank("status", &status)?;
            self.status = status;
        }
        if let Some(quality_rating) = update.quality_rating {
            require_finite_rating(quality_rating)?;
            self.quality_rating = quality_rating;
        }
        if let Some(issue_date) = update.issue_date {
            self.issue_date = issue_date;
        }
        if let Some(acknowledgment_date) = update.acknowledgment_date {
            self.acknowledgment_date = acknowledgment_date;
        }
        Ok(())
    }

    /// # Actions
    /// - `Acknowledge`: sets `acknowledgment_date` only if it is unset. Never
    ///   overwrites an existing date.
    async fn handle_action(
        &mut self,
        action: PurchaseOrderAction,
        _vendors: &VendorClient,
    ) -> Result<PurchaseOrderActionResult, Self::Error> {
        match action {
            PurchaseOrderAction::Acknowledge { at } => match self.acknowledgment_date {
                Some(existing) => Ok(PurchaseOrderActionResult::AlreadyAcknowledged(existing)),
                None => {
                    self.acknowledgment_date = Some(at);
                    Ok(PurchaseOrderActionResult::Acknowledged(at))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::Map;

    fn fields(status: &str, rating: Option<f64>) -> PurchaseOrderFields {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        PurchaseOrderFields {
            po_number: "PO-1".into(),
            order_date: t,
            delivery_date: t,
            items: Map::new(),
            quantity: 1,
            status: status.into(),
            quality_rating: rating,
            issue_date: t,
            acknowledgment_date: None,
        }
    }

    fn create(status: &str, rating: Option<f64>) -> PurchaseOrderCreate {
        PurchaseOrderCreate {
            vendor: VendorId(1),
            fields: fields(status, rating),
        }
    }

    #[test]
    fn test_create_validates_fields() {
        assert!(PurchaseOrder::from_create_params(PurchaseOrderId(1), create("pending", Some(7.5))).is_ok());
        // ratings are not range-checked
        assert!(PurchaseOrder::from_create_params(PurchaseOrderId(1), create("completed", Some(-2.0))).is_ok());

        let err = PurchaseOrder::from_create_params(PurchaseOrderId(1), create(" ", None)).unwrap_err();
        assert!(matches!(err, PurchaseOrderError::Validation(msg) if msg.contains("status")));

        let err = PurchaseOrder::from_create_params(PurchaseOrderId(1), create("completed", Some(f64::INFINITY)))
            .unwrap_err();
        assert!(matches!(err, PurchaseOrderError::Validation(msg) if msg.contains("quality_rating")));
    }

    #[test]
    fn test_query_matching() {
        let order = PurchaseOrder::from_create_params(PurchaseOrderId(1), create("completed", None)).unwrap();
        assert!(order.matches(&PurchaseOrderQuery::default()));
        assert!(order.matches(&PurchaseOrderQuery::for_vendor(VendorId(1))));
        assert!(order.matches(&PurchaseOrderQuery::completed_for(VendorId(1))));
        assert!(!order.matches(&PurchaseOrderQuery::for_vendor(VendorId(2))));

        let pending = PurchaseOrderQuery {
            vendor: None,
            status: Some("pending".into()),
        };
        assert!(!order.matches(&pending));
    }

    #[test]
    fn test_status_match_is_exact() {
        let order = PurchaseOrder::from_create_params(PurchaseOrderId(1), create("Completed", None)).unwrap();
        assert!(!order.is_completed());
        assert!(!order.matches(&PurchaseOrderQuery::completed_for(VendorId(1))));
    }
}
