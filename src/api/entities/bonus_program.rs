//! Bonus (loyalty) program entity.

use serde::{Deserialize, Serialize};

use crate::api::entity::Entity;
use crate::api::field::Field;
use crate::api::models::Meta;
use crate::api::request::WriteRequest;
use crate::clients::HttpMethod;

/// A loyalty program that earns and spends bonus points.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BonusProgram {
    /// Program meta.
    pub meta: Option<Meta>,
    /// Program id.
    pub id: Option<String>,
    /// Account id.
    pub account_id: Option<String>,
    /// Program name.
    pub name: Option<String>,
    /// Whether the program is active.
    pub active: Option<bool>,
    /// Whether every product earns points.
    pub all_products: Option<bool>,
    /// Whether every counterparty takes part.
    pub all_agents: Option<bool>,
    /// Counterparty tags that take part when `all_agents` is false.
    pub agent_tags: Option<Vec<String>>,
    /// Points earned per rouble.
    pub earn_rate_roubles_to_point: Option<f64>,
    /// Roubles per spent point.
    pub spend_rate_points_to_rouble: Option<f64>,
    /// Maximum share of a sale payable with points, percent.
    pub max_paid_rate_percents: Option<i32>,
    /// Days before earned points become spendable.
    pub postpone_bonuses_for_days: Option<i32>,
    /// Whether new members get welcome points.
    pub welcome_bonuses_enabled: Option<bool>,
    /// Welcome points amount.
    pub welcome_bonuses_value: Option<i64>,
    /// When welcome points are granted, e.g. "REGISTRATION".
    pub welcome_bonuses_mode: Option<String>,
}

impl Entity for BonusProgram {
    const NAME: &'static str = "BonusProgram";
    const TYPE: &'static str = "bonusprogram";
    const PATH: &'static str = "entity/bonusprogram";

    fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }
}

/// Body of `POST entity/bonusprogram`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBonusProgram {
    pub name: String,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub active: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub all_products: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub all_agents: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub agent_tags: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub earn_rate_roubles_to_point: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub spend_rate_points_to_rouble: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub max_paid_rate_percents: Field<i32>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub postpone_bonuses_for_days: Field<i32>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub welcome_bonuses_enabled: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub welcome_bonuses_value: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub welcome_bonuses_mode: Field<String>,
}

impl CreateBonusProgram {
    /// Creates a body with only the name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: Field::Unset,
            all_products: Field::Unset,
            all_agents: Field::Unset,
            agent_tags: Field::Unset,
            earn_rate_roubles_to_point: Field::Unset,
            spend_rate_points_to_rouble: Field::Unset,
            max_paid_rate_percents: Field::Unset,
            postpone_bonuses_for_days: Field::Unset,
            welcome_bonuses_enabled: Field::Unset,
            welcome_bonuses_value: Field::Unset,
            welcome_bonuses_mode: Field::Unset,
        }
    }
}

impl WriteRequest for CreateBonusProgram {
    type Entity = BonusProgram;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        BonusProgram::PATH.to_string()
    }
}

/// Body of `PUT entity/bonusprogram/{id}`.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBonusProgram {
    #[serde(skip)]
    pub id: String,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub active: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub all_products: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub all_agents: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub agent_tags: Field<Vec<String>>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub earn_rate_roubles_to_point: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub spend_rate_points_to_rouble: Field<f64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub max_paid_rate_percents: Field<i32>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub postpone_bonuses_for_days: Field<i32>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub welcome_bonuses_enabled: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub welcome_bonuses_value: Field<i64>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub welcome_bonuses_mode: Field<String>,
}

impl UpdateBonusProgram {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl WriteRequest for UpdateBonusProgram {
    type Entity = BonusProgram;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        BonusProgram::item_path(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::ApiRequest;
    use serde_json::json;

    #[test]
    fn test_bonus_program_rates() {
        let program: BonusProgram = serde_json::from_value(json!({
            "name": "Клуб",
            "active": true,
            "earnRateRoublesToPoint": 10.0,
            "spendRatePointsToRouble": 1.0,
            "maxPaidRatePercents": 50,
            "agentTags": ["vip"]
        }))
        .unwrap();

        assert_eq!(program.earn_rate_roubles_to_point, Some(10.0));
        assert_eq!(program.max_paid_rate_percents, Some(50));
        assert_eq!(program.agent_tags.unwrap(), vec!["vip".to_string()]);
    }

    #[test]
    fn test_deactivate_program() {
        let mut request = UpdateBonusProgram::new("bp-1");
        request.active = false.into();
        let pending = request.to_request().unwrap();
        assert_eq!(pending.path, "entity/bonusprogram/bp-1");
        assert_eq!(pending.body.unwrap(), json!({"active": false}));
    }
}
