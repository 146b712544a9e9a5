//! Diesel row models for order persistence.

use super::schema::pedidos_tb;
use crate::order_import::domain::NewOrder;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Insert model for imported orders.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pedidos_tb)]
pub struct NewOrderRow<'a> {
    /// Order code.
    #[diesel(column_name = codigo_pedido)]
    pub order_code: Option<&'a str>,
    /// Equipment description.
    #[diesel(column_name = equipamento)]
    pub equipment: Option<&'a str>,
    /// Purchase order reference.
    #[diesel(column_name = pv)]
    pub purchase_order: Option<&'a str>,
    /// Service description.
    #[diesel(column_name = descricao_servico)]
    pub service_description: Option<&'a str>,
    /// Workflow status.
    pub status_id: i32,
    /// Creation timestamp.
    #[diesel(column_name = data_criacao)]
    pub created_at: DateTime<Utc>,
    /// Number of machines.
    #[diesel(column_name = quantidade)]
    pub quantity: Option<i32>,
    /// Display rank.
    #[diesel(column_name = prioridade)]
    pub priority: i32,
    /// Import marker.
    #[diesel(column_name = perfil_alteracao)]
    pub origin_tag: Option<&'a str>,
    /// Urgency flag.
    #[diesel(column_name = urgente)]
    pub urgent: bool,
}

impl<'a> From<&'a NewOrder> for NewOrderRow<'a> {
    fn from(order: &'a NewOrder) -> Self {
        Self {
            order_code: order.order_code.as_deref(),
            equipment: order.equipment.as_deref(),
            purchase_order: order.purchase_order.as_deref(),
            service_description: order.service_description.as_deref(),
            status_id: order.status_id.into_inner(),
            created_at: order.created_at,
            quantity: order.quantity,
            priority: order.priority.value(),
            origin_tag: Some(&order.origin_tag),
            urgent: order.urgent,
        }
    }
}
