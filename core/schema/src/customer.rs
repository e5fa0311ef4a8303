//! The feature record accepted by the scoring endpoint.
//!
//! Field names follow the column names produced by the feature pipeline's
//! column transformer, so the wire names keep their `group__Column` form while
//! the Rust fields use snake case.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::normalize_fields;
use crate::errors::ValidationError;
use crate::fields::{FieldKind, FieldSpec};

trait FeatureValue: Copy {
    const KIND: FieldKind;

    fn as_feature(self) -> f64;
}

impl FeatureValue for f64 {
    const KIND: FieldKind = FieldKind::Float;

    fn as_feature(self) -> f64 {
        self
    }
}

impl FeatureValue for i64 {
    const KIND: FieldKind = FieldKind::Integer;

    #[allow(clippy::cast_precision_loss)]
    fn as_feature(self) -> f64 {
        self as f64
    }
}

/// Declares the record, its field metadata and its feature-vector projection
/// from a single table.
macro_rules! customer_record {
    ($($field:ident: $ty:ty => $wire:literal,)*) => {
        /// One customer's transaction features, ready for scoring.
        ///
        /// All fields are required. Construct from untrusted input with
        /// [`CustomerData::from_json_value`] to get lax coercion and a full
        /// list of offending fields.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct CustomerData {
            $(
                #[serde(rename = $wire)]
                pub $field: $ty,
            )*
        }

        /// Feature record fields in declared order.
        pub const CUSTOMER_FIELDS: &[FieldSpec] = &[
            $(FieldSpec::new($wire, <$ty as FeatureValue>::KIND),)*
        ];

        impl CustomerData {
            /// Dense model input in [`CUSTOMER_FIELDS`] order.
            #[must_use]
            pub fn to_feature_vector(&self) -> Vec<f64> {
                vec![$(FeatureValue::as_feature(self.$field),)*]
            }
        }
    };
}

customer_record! {
    num_amount: f64 => "num__Amount",
    num_value: f64 => "num__Value",
    num_country_code: f64 => "num__CountryCode",
    num_pricing_strategy: f64 => "num__PricingStrategy",
    num_fraud_result: f64 => "num__FraudResult",
    cat_product_category_data_bundles: f64 => "cat__ProductCategory_data_bundles",
    cat_product_category_financial_services: f64 => "cat__ProductCategory_financial_services",
    cat_product_category_movies: f64 => "cat__ProductCategory_movies",
    cat_product_category_other: f64 => "cat__ProductCategory_other",
    cat_product_category_ticket: f64 => "cat__ProductCategory_ticket",
    cat_product_category_transport: f64 => "cat__ProductCategory_transport",
    cat_product_category_tv: f64 => "cat__ProductCategory_tv",
    cat_product_category_utility_bill: f64 => "cat__ProductCategory_utility_bill",
    cat_channel_id_2: f64 => "cat__ChannelId_ChannelId_2",
    cat_channel_id_3: f64 => "cat__ChannelId_ChannelId_3",
    cat_channel_id_5: f64 => "cat__ChannelId_ChannelId_5",
    cat_provider_id_2: f64 => "cat__ProviderId_ProviderId_2",
    cat_provider_id_3: f64 => "cat__ProviderId_ProviderId_3",
    cat_provider_id_4: f64 => "cat__ProviderId_ProviderId_4",
    cat_provider_id_5: f64 => "cat__ProviderId_ProviderId_5",
    cat_provider_id_6: f64 => "cat__ProviderId_ProviderId_6",
    cat_product_id_10: f64 => "cat__ProductId_ProductId_10",
    cat_product_id_11: f64 => "cat__ProductId_ProductId_11",
    cat_product_id_12: f64 => "cat__ProductId_ProductId_12",
    cat_product_id_13: f64 => "cat__ProductId_ProductId_13",
    cat_product_id_14: f64 => "cat__ProductId_ProductId_14",
    cat_product_id_15: f64 => "cat__ProductId_ProductId_15",
    cat_product_id_16: f64 => "cat__ProductId_ProductId_16",
    cat_product_id_19: f64 => "cat__ProductId_ProductId_19",
    cat_product_id_2: f64 => "cat__ProductId_ProductId_2",
    cat_product_id_20: f64 => "cat__ProductId_ProductId_20",
    cat_product_id_21: f64 => "cat__ProductId_ProductId_21",
    cat_product_id_22: f64 => "cat__ProductId_ProductId_22",
    cat_product_id_23: f64 => "cat__ProductId_ProductId_23",
    cat_product_id_24: f64 => "cat__ProductId_ProductId_24",
    cat_product_id_27: f64 => "cat__ProductId_ProductId_27",
    cat_product_id_3: f64 => "cat__ProductId_ProductId_3",
    cat_product_id_4: f64 => "cat__ProductId_ProductId_4",
    cat_product_id_5: f64 => "cat__ProductId_ProductId_5",
    cat_product_id_6: f64 => "cat__ProductId_ProductId_6",
    cat_product_id_7: f64 => "cat__ProductId_ProductId_7",
    cat_product_id_8: f64 => "cat__ProductId_ProductId_8",
    cat_product_id_9: f64 => "cat__ProductId_ProductId_9",
    time_transaction_hour: i64 => "time__TransactionHour",
    time_transaction_day: i64 => "time__TransactionDay",
    time_transaction_month: i64 => "time__TransactionMonth",
    time_transaction_year: i64 => "time__TransactionYear",
    agg_total_transaction_amount: f64 => "agg__TotalTransactionAmount",
    agg_average_transaction_amount: f64 => "agg__AverageTransactionAmount",
    agg_transaction_count: f64 => "agg__TransactionCount",
    agg_std_transaction_amount: f64 => "agg__StdTransactionAmount",
}

impl CustomerData {
    /// Validates an inbound payload and builds the record.
    ///
    /// Undeclared keys are ignored. Values are coerced leniently: numeric
    /// strings are accepted for every field and whole floats for the
    /// integer-valued `time__` fields.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAnObject`] if `value` is not an object,
    /// or [`ValidationError::InvalidFields`] listing every missing or
    /// mistyped field.
    pub fn from_json_value(value: &Value) -> Result<Self, ValidationError> {
        let normalized = match normalize_fields(value, CUSTOMER_FIELDS) {
            Ok(normalized) => normalized,
            Err(err) => {
                tracing::debug!(
                    errors = err.field_errors().len(),
                    "customer record rejected"
                );
                return Err(err);
            }
        };
        Ok(serde_json::from_value(Value::Object(normalized))?)
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Json`] for malformed JSON, otherwise the
    /// same errors as [`CustomerData::from_json_value`].
    pub fn from_json_str(input: &str) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(&value)
    }
}
