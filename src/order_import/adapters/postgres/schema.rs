//! Diesel schema for the production panel tables touched by the import.

diesel::table! {
    /// Orders shown on the production panel.
    pedidos_tb (id) {
        /// Surrogate key.
        id -> Int4,
        /// Order code; may repeat or be null.
        codigo_pedido -> Nullable<Varchar>,
        /// Equipment description.
        equipamento -> Nullable<Varchar>,
        /// Purchase order reference.
        pv -> Nullable<Varchar>,
        /// Service description.
        descricao_servico -> Nullable<Text>,
        /// Workflow status.
        status_id -> Int4,
        /// Creation timestamp.
        data_criacao -> Timestamptz,
        /// Number of machines.
        quantidade -> Nullable<Int4>,
        /// Display rank.
        prioridade -> Int4,
        /// Channel that last changed the row.
        perfil_alteracao -> Nullable<Varchar>,
        /// Urgency flag.
        urgente -> Bool,
    }
}

diesel::table! {
    /// Workflow status reference data.
    status_td (id) {
        /// Surrogate key.
        id -> Int4,
        /// Status display name.
        nome_status -> Varchar,
    }
}

diesel::joinable!(pedidos_tb -> status_td (status_id));
diesel::allow_tables_to_appear_in_same_query!(pedidos_tb, status_td);
